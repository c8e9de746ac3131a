//! Screens reachable through the router and the routes that reach them.

pub mod detail;
pub mod gallery;
pub mod home;

use serde::Serialize;

use crate::error::Result;
use crate::ui::nav::RouteRegistry;

pub use detail::PlantDetailScreen;
pub use gallery::GalleryScreen;
pub use home::{HomeChrome, HomeScreen};

/// Start destination: the home pager.
pub const HOME: &str = "home";
/// One plant, by catalog id.
pub const PLANT_DETAIL: &str = "detail/{id}";
/// Photos for a plant, searched by its display name.
pub const GALLERY: &str = "gallery/{name}";

pub const PLANT_ID_PARAM: &str = "id";
pub const PLANT_NAME_PARAM: &str = "name";

/// Descriptor of the screen bound to a route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum AppScreen {
    Home,
    PlantDetail { plant_id: String },
    Gallery { plant_name: String },
}

/// Registry of every screen in the app.
///
/// Builders only ever see routes bound by the registry, so every named
/// parameter of their pattern is present and non-empty.
pub fn registry() -> Result<RouteRegistry<AppScreen>> {
    RouteRegistry::new()
        .with(HOME, |_| AppScreen::Home)?
        .with(PLANT_DETAIL, |route| AppScreen::PlantDetail {
            plant_id: route.param(PLANT_ID_PARAM).unwrap_or_default().to_string(),
        })?
        .with(GALLERY, |route| AppScreen::Gallery {
            plant_name: route.param(PLANT_NAME_PARAM).unwrap_or_default().to_string(),
        })
}
