//! App shell: routes events to the router, the home pager and the platform.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::catalog::{CatalogSource, GallerySource, GardenSource};
use crate::config::Config;
use crate::error::Result;
use crate::platform::PlatformActions;
use crate::screens::{
    self, AppScreen, GalleryScreen, HomeScreen, PlantDetailScreen, PLANT_ID_PARAM,
};
use crate::ui::events::AppEvent;
use crate::ui::nav::{params, Router};
use crate::ui::pager::{PageChangeCallback, PageDescriptor};

/// Collaborators the app reads from and acts through.
#[derive(Clone)]
pub struct Collaborators {
    pub catalog: Arc<dyn CatalogSource>,
    pub garden: Arc<dyn GardenSource>,
    pub gallery: Arc<dyn GallerySource>,
    pub platform: Arc<dyn PlatformActions>,
}

/// Host side of the page-change notification. Replaceable while the app
/// runs; the latest page is replayed to a newly installed hook.
#[derive(Default)]
struct PageHook {
    hook: Option<PageChangeCallback>,
    last: Option<PageDescriptor>,
}

pub struct App {
    config: Config,
    router: Router<AppScreen>,
    collaborators: Collaborators,
    home: HomeScreen,
    page_hook: Arc<Mutex<PageHook>>,
}

impl App {
    pub fn new(config: Config, collaborators: Collaborators) -> Result<Self> {
        let router = Router::new(screens::registry()?, screens::HOME)?;

        let page_hook = Arc::new(Mutex::new(PageHook::default()));
        let forward = Arc::clone(&page_hook);
        let home = HomeScreen::new(
            collaborators.catalog.as_ref(),
            collaborators.garden.as_ref(),
            &config,
            Box::new(move |page: &PageDescriptor| {
                let mut slot = forward.lock();
                slot.last = Some(page.clone());
                if let Some(hook) = slot.hook.as_mut() {
                    hook(page);
                }
            }),
        )?;

        Ok(Self {
            config,
            router,
            collaborators,
            home,
            page_hook,
        })
    }

    /// Install the host's page-change hook. It is called at once with the
    /// current page if one was already announced.
    pub fn set_page_changed_hook(&self, mut hook: PageChangeCallback) {
        let mut slot = self.page_hook.lock();
        if let Some(page) = slot.last.as_ref() {
            hook(page);
        }
        slot.hook = Some(hook);
    }

    pub fn handle(&mut self, event: AppEvent) -> Result<()> {
        tracing::debug!(?event, "app event");
        if event.targets_home() && self.current_screen()? != AppScreen::Home {
            tracing::debug!(?event, "home event ignored off the home screen");
            return Ok(());
        }
        match event {
            AppEvent::PlantSelected { plant_id } => {
                self.router
                    .navigate(screens::PLANT_DETAIL, &params([(PLANT_ID_PARAM, plant_id)]))?;
            }
            AppEvent::TabClicked(index) => self.home.on_tab_click(index)?,
            AppEvent::AddPlantClicked => self.home.on_add_plant_click()?,
            AppEvent::FilterClicked => {
                self.home.toggle_filter();
            }
            AppEvent::ShareClicked => {
                if let Some(detail) = self.plant_detail() {
                    let payload = detail.share_payload(&self.config.share.template);
                    self.collaborators.platform.launch_share(&payload);
                }
            }
            AppEvent::GalleryClicked => {
                if let Some(detail) = self.plant_detail() {
                    self.router.navigate(screens::GALLERY, &detail.gallery_params())?;
                }
            }
            AppEvent::PhotoClicked { photo_id } => {
                if let Some(gallery) = self.gallery() {
                    gallery.on_photo_click(&photo_id, self.collaborators.platform.as_ref());
                }
            }
            AppEvent::BackPressed => {
                self.router.navigate_up();
            }
            AppEvent::Swipe { target, progress } => self.home.pager_mut().drag(target, progress)?,
            AppEvent::SwipeReleased => self.home.pager_mut().release(),
            AppEvent::DeepLink(path) => {
                self.router.navigate_to_path(&path)?;
            }
        }
        Ok(())
    }

    /// Let a tab animation in flight run to its settle.
    pub async fn settle(&mut self) {
        self.home.pager_mut().settle().await;
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn router(&self) -> &Router<AppScreen> {
        &self.router
    }

    pub fn home(&self) -> &HomeScreen {
        &self.home
    }

    pub fn current_screen(&self) -> Result<AppScreen> {
        self.router.current_screen()
    }

    /// The detail screen, when it is on top and its plant exists.
    pub fn plant_detail(&self) -> Option<PlantDetailScreen> {
        match self.current_screen().ok()? {
            AppScreen::PlantDetail { plant_id } => PlantDetailScreen::load(
                &plant_id,
                self.collaborators.catalog.as_ref(),
                self.collaborators.garden.as_ref(),
            ),
            _ => None,
        }
    }

    /// The gallery screen, when it is on top.
    pub fn gallery(&self) -> Option<GalleryScreen> {
        match self.current_screen().ok()? {
            AppScreen::Gallery { plant_name } => Some(GalleryScreen::load(
                &plant_name,
                self.collaborators.gallery.as_ref(),
            )),
            _ => None,
        }
    }
}
