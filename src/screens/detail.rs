//! Plant detail screen.

use serde::Serialize;

use crate::catalog::{CatalogSource, GardenSource, Plant};
use crate::share::{build_share_payload, SharePayload};
use crate::ui::nav::{params, RouteParams};

use super::PLANT_NAME_PARAM;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlantDetailScreen {
    plant: Plant,
    planted: bool,
}

impl PlantDetailScreen {
    /// Look the plant up in the current catalog snapshot. `None` when the
    /// catalog does not (or no longer) have it.
    pub fn load(plant_id: &str, catalog: &dyn CatalogSource, garden: &dyn GardenSource) -> Option<Self> {
        let plant = catalog
            .plants()
            .borrow()
            .iter()
            .find(|plant| plant.plant_id == plant_id)
            .cloned()?;
        let planted = garden
            .plantings()
            .borrow()
            .iter()
            .any(|entry| entry.plant.plant_id == plant_id);
        Some(Self { plant, planted })
    }

    pub fn plant(&self) -> &Plant {
        &self.plant
    }

    /// Whether the plant is already in the garden; hides the "add" action.
    pub fn is_planted(&self) -> bool {
        self.planted
    }

    pub fn share_payload(&self, template: &str) -> SharePayload {
        build_share_payload(template, &self.plant.name)
    }

    /// Parameters for the gallery route: photos are searched by display name.
    pub fn gallery_params(&self) -> RouteParams {
        params([(PLANT_NAME_PARAM, self.plant.name.as_str())])
    }
}
