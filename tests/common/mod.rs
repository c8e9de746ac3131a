//! Shared fixtures and recording collaborators.

#![allow(dead_code, unused_imports)]

use greenhouse::catalog::{
    pair_plantings, GardenPlanting, InMemoryCatalog, InMemoryGallery, InMemoryGarden, Photo, Plant,
};
use greenhouse::config::Config;
use greenhouse::platform::PlatformActions;
use greenhouse::share::SharePayload;
use greenhouse::ui::app::{App, Collaborators};
use greenhouse::ui::pager::{PageChangeCallback, PageDescriptor};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::SystemTime;

pub fn plant(id: &str, name: &str, zone: u32) -> Plant {
    Plant {
        plant_id: id.to_string(),
        name: name.to_string(),
        description: format!("{name} description"),
        grow_zone_number: zone,
        watering_interval_days: 7,
        image_url: format!("https://example.com/{id}.jpg"),
    }
}

pub fn photo(id: &str, owner: &str) -> Photo {
    Photo {
        id: id.to_string(),
        owner_name: owner.to_string(),
        attribution_url: format!("https://photos.example.com/@{owner}"),
        thumbnail_url: format!("https://photos.example.com/{id}/thumb.jpg"),
    }
}

pub fn planting(planting_id: u64, plant_id: &str) -> GardenPlanting {
    GardenPlanting {
        planting_id,
        plant_id: plant_id.to_string(),
        plant_date: SystemTime::UNIX_EPOCH,
        last_watering_date: SystemTime::UNIX_EPOCH,
    }
}

pub fn sample_plants() -> Vec<Plant> {
    vec![
        plant("malus-pumila", "Apple", 3),
        plant("beta-vulgaris", "Beet", 2),
        plant("aloe-vera", "Aloe", 9),
        plant("ficus-carica", "Fig", 9),
    ]
}

/// Records every platform action instead of performing it.
#[derive(Default)]
pub struct RecordingPlatform {
    pub viewed: Mutex<Vec<String>>,
    pub shared: Mutex<Vec<SharePayload>>,
}

impl PlatformActions for RecordingPlatform {
    fn launch_external_view(&self, uri: &str) {
        self.viewed.lock().push(uri.to_string());
    }

    fn launch_share(&self, payload: &SharePayload) {
        self.shared.lock().push(payload.clone());
    }
}

pub type PageLog = Arc<Mutex<Vec<usize>>>;

/// Page-change callback appending announced indices to a shared log.
pub fn page_recorder() -> (PageLog, PageChangeCallback) {
    let log: PageLog = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&log);
    let callback: PageChangeCallback = Box::new(move |page: &PageDescriptor| {
        sink.lock().push(page.index);
    });
    (log, callback)
}

pub struct TestApp {
    pub app: App,
    pub catalog: Arc<InMemoryCatalog>,
    pub garden: Arc<InMemoryGarden>,
    pub platform: Arc<RecordingPlatform>,
}

/// App over the sample catalog with `planted` ids in the garden.
pub fn test_app(planted: &[&str]) -> TestApp {
    test_app_with_config(planted, Config::default())
}

pub fn test_app_with_config(planted: &[&str], config: Config) -> TestApp {
    let plants = sample_plants();
    let plantings: Vec<GardenPlanting> = planted
        .iter()
        .enumerate()
        .map(|(i, id)| planting(i as u64 + 1, id))
        .collect();

    let catalog = Arc::new(InMemoryCatalog::new(plants.clone()));
    let garden = Arc::new(InMemoryGarden::new(pair_plantings(&plants, &plantings)));
    let gallery = Arc::new(InMemoryGallery::new(HashMap::from([(
        "Apple".to_string(),
        vec![photo("p1", "ana"), photo("p2", "ben")],
    )])));
    let platform = Arc::new(RecordingPlatform::default());

    let app = App::new(
        config,
        Collaborators {
            catalog: catalog.clone(),
            garden: garden.clone(),
            gallery,
            platform: platform.clone(),
        },
    )
    .expect("app should build");

    TestApp {
        app,
        catalog,
        garden,
        platform,
    }
}
