/// User and host events the app shell reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// A plant row was tapped on either home page.
    PlantSelected { plant_id: String },
    /// A tab in the home strip was tapped.
    TabClicked(usize),
    /// The empty garden's "add plant" button.
    AddPlantClicked,
    /// The grow-zone filter action on the plant list.
    FilterClicked,
    /// Share action on the plant detail screen.
    ShareClicked,
    /// Gallery action on the plant detail screen.
    GalleryClicked,
    PhotoClicked { photo_id: String },
    /// System back or the app bar's up arrow.
    BackPressed,
    /// Swipe on the home pager toward `target`.
    Swipe { target: usize, progress: f32 },
    SwipeReleased,
    /// Open a concrete path such as `detail/malus-pumila`.
    DeepLink(String),
}

impl AppEvent {
    /// Events only meaningful while the home pager is showing.
    pub fn targets_home(&self) -> bool {
        matches!(
            self,
            AppEvent::TabClicked(_)
                | AppEvent::AddPlantClicked
                | AppEvent::FilterClicked
                | AppEvent::Swipe { .. }
                | AppEvent::SwipeReleased
        )
    }
}
