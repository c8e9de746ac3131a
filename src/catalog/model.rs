//! Records owned by the catalog, garden and gallery collaborators.
//!
//! The core reads these; it never mutates or validates their contents.

use std::time::SystemTime;

use serde::{Deserialize, Serialize};

/// A plant in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plant {
    pub plant_id: String,
    pub name: String,
    pub description: String,
    pub grow_zone_number: u32,
    /// How often the plant should be watered, in days (default: 7).
    #[serde(default = "default_watering_interval")]
    pub watering_interval_days: u32,
    #[serde(default)]
    pub image_url: String,
}

fn default_watering_interval() -> u32 {
    7
}

/// A plant the user has put in their garden.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GardenPlanting {
    pub planting_id: u64,
    pub plant_id: String,
    pub plant_date: SystemTime,
    pub last_watering_date: SystemTime,
}

/// A catalog plant with its plantings; one row of the "my garden" page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlantAndGardenPlantings {
    pub plant: Plant,
    pub plantings: Vec<GardenPlanting>,
}

/// A photo returned by a gallery search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    pub id: String,
    pub owner_name: String,
    /// Page crediting the photographer; opened when the photo is clicked.
    pub attribution_url: String,
    pub thumbnail_url: String,
}

/// Pair every plant that has at least one planting with its plantings,
/// keeping catalog order.
pub fn pair_plantings(plants: &[Plant], plantings: &[GardenPlanting]) -> Vec<PlantAndGardenPlantings> {
    plants
        .iter()
        .filter_map(|plant| {
            let own: Vec<GardenPlanting> = plantings
                .iter()
                .filter(|p| p.plant_id == plant.plant_id)
                .cloned()
                .collect();
            (!own.is_empty()).then(|| PlantAndGardenPlantings {
                plant: plant.clone(),
                plantings: own,
            })
        })
        .collect()
}

/// Plants growing in `zone`, or all plants when `zone` is `None`.
pub fn filter_by_grow_zone(plants: &[Plant], zone: Option<u32>) -> Vec<Plant> {
    plants
        .iter()
        .filter(|plant| zone.map_or(true, |z| plant.grow_zone_number == z))
        .cloned()
        .collect()
}
