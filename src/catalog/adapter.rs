//! Normalizes catalog plants and gallery photos into one list item.

use serde::Serialize;

use super::model::{Photo, Plant};

/// What a list cell renders: an image with a caption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListRenderItem {
    pub id: String,
    pub title: String,
    pub image_url: String,
}

/// A record from one of the two list sources.
///
/// A rendered list only ever holds one variant, so ids need only be unique
/// within a variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderSource {
    Catalog(Plant),
    Gallery(Photo),
}

pub fn from_catalog_item(plant: &Plant) -> ListRenderItem {
    ListRenderItem {
        id: plant.plant_id.clone(),
        title: plant.name.clone(),
        image_url: plant.image_url.clone(),
    }
}

/// Photos are captioned with the photographer's name.
pub fn from_photo(photo: &Photo) -> ListRenderItem {
    ListRenderItem {
        id: photo.id.clone(),
        title: photo.owner_name.clone(),
        image_url: photo.thumbnail_url.clone(),
    }
}

impl From<&RenderSource> for ListRenderItem {
    fn from(source: &RenderSource) -> Self {
        match source {
            RenderSource::Catalog(plant) => from_catalog_item(plant),
            RenderSource::Gallery(photo) => from_photo(photo),
        }
    }
}

/// Render a list of plants.
pub fn render_plants<'a>(plants: impl IntoIterator<Item = &'a Plant>) -> Vec<ListRenderItem> {
    plants.into_iter().map(from_catalog_item).collect()
}

/// Render a list of photos.
pub fn render_photos<'a>(photos: impl IntoIterator<Item = &'a Photo>) -> Vec<ListRenderItem> {
    photos.into_iter().map(from_photo).collect()
}
