//! Photo gallery for one plant.

use crate::catalog::{render_photos, GallerySource, ListRenderItem, Photo};
use crate::platform::PlatformActions;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryScreen {
    plant_name: String,
    photos: Vec<Photo>,
}

impl GalleryScreen {
    pub fn load(plant_name: &str, gallery: &dyn GallerySource) -> Self {
        let photos = gallery.search(plant_name);
        tracing::debug!(plant_name, count = photos.len(), "gallery loaded");
        Self {
            plant_name: plant_name.to_string(),
            photos,
        }
    }

    pub fn plant_name(&self) -> &str {
        &self.plant_name
    }

    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    pub fn items(&self) -> Vec<ListRenderItem> {
        render_photos(&self.photos)
    }

    /// Open the photographer's page. Returns `false` for an unknown photo.
    pub fn on_photo_click(&self, photo_id: &str, platform: &dyn PlatformActions) -> bool {
        match self.photos.iter().find(|photo| photo.id == photo_id) {
            Some(photo) => {
                platform.launch_external_view(&photo.attribution_url);
                true
            }
            None => {
                tracing::warn!(photo_id, "click on unknown photo");
                false
            }
        }
    }
}
