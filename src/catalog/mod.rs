//! Catalog data: records, collaborator sources and list normalization.

pub mod adapter;
pub mod model;
pub mod source;

pub use adapter::{from_catalog_item, from_photo, render_photos, render_plants, ListRenderItem, RenderSource};
pub use model::{filter_by_grow_zone, pair_plantings, GardenPlanting, Photo, Plant, PlantAndGardenPlantings};
pub use source::{
    CatalogSource, GallerySource, GardenSource, InMemoryCatalog, InMemoryGallery, InMemoryGarden,
};
