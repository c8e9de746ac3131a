//! Collaborator interfaces supplying catalog, garden and gallery data,
//! plus in-memory implementations.
//!
//! Catalog and garden data arrive as `watch` snapshots: consumers re-read
//! the latest value on each render and never write back.

use std::collections::HashMap;

use tokio::sync::watch;

use super::model::{Photo, Plant, PlantAndGardenPlantings};

/// Source of the plant catalog.
pub trait CatalogSource: Send + Sync {
    fn plants(&self) -> watch::Receiver<Vec<Plant>>;
}

/// Source of the user's garden.
pub trait GardenSource: Send + Sync {
    fn plantings(&self) -> watch::Receiver<Vec<PlantAndGardenPlantings>>;
}

/// Photo search keyed by free text (a plant's display name).
pub trait GallerySource: Send + Sync {
    fn search(&self, query: &str) -> Vec<Photo>;
}

/// Catalog held in memory; `publish` replaces the snapshot.
pub struct InMemoryCatalog {
    tx: watch::Sender<Vec<Plant>>,
}

impl InMemoryCatalog {
    pub fn new(plants: Vec<Plant>) -> Self {
        let (tx, _) = watch::channel(plants);
        Self { tx }
    }

    pub fn publish(&self, plants: Vec<Plant>) {
        self.tx.send_replace(plants);
    }
}

impl CatalogSource for InMemoryCatalog {
    fn plants(&self) -> watch::Receiver<Vec<Plant>> {
        self.tx.subscribe()
    }
}

/// Garden held in memory; `publish` replaces the snapshot.
pub struct InMemoryGarden {
    tx: watch::Sender<Vec<PlantAndGardenPlantings>>,
}

impl InMemoryGarden {
    pub fn new(plantings: Vec<PlantAndGardenPlantings>) -> Self {
        let (tx, _) = watch::channel(plantings);
        Self { tx }
    }

    pub fn publish(&self, plantings: Vec<PlantAndGardenPlantings>) {
        self.tx.send_replace(plantings);
    }
}

impl GardenSource for InMemoryGarden {
    fn plantings(&self) -> watch::Receiver<Vec<PlantAndGardenPlantings>> {
        self.tx.subscribe()
    }
}

/// Gallery answering from a fixed `query → photos` table.
#[derive(Debug, Default, Clone)]
pub struct InMemoryGallery {
    photos: HashMap<String, Vec<Photo>>,
}

impl InMemoryGallery {
    pub fn new(photos: HashMap<String, Vec<Photo>>) -> Self {
        Self { photos }
    }
}

impl GallerySource for InMemoryGallery {
    fn search(&self, query: &str) -> Vec<Photo> {
        self.photos.get(query).cloned().unwrap_or_default()
    }
}
