//! Home screen: the two-page pager over the user's garden and the catalog.

use serde::Serialize;
use tokio::sync::watch;

use crate::catalog::{
    filter_by_grow_zone, render_plants, CatalogSource, GardenSource, ListRenderItem,
    PlantAndGardenPlantings, Plant,
};
use crate::config::Config;
use crate::error::Result;
use crate::ui::pager::{HomePage, PageChangeCallback, PagerTabSync};

/// App bar state derived from the settled page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HomeChrome {
    pub title_key: String,
    /// The grow-zone filter is only offered on the plant list.
    pub show_filter_action: bool,
    pub filtering: bool,
}

pub struct HomeScreen {
    pager: PagerTabSync,
    plants: watch::Receiver<Vec<Plant>>,
    garden: watch::Receiver<Vec<PlantAndGardenPlantings>>,
    filter_zone: u32,
    filtering: bool,
}

impl HomeScreen {
    /// Open on the "my garden" page, announcing it to `on_page_changed`.
    pub fn new(
        catalog: &dyn CatalogSource,
        garden: &dyn GardenSource,
        config: &Config,
        on_page_changed: PageChangeCallback,
    ) -> Result<Self> {
        let pager = PagerTabSync::new(
            HomePage::descriptors(),
            Some(HomePage::MyGarden.index()),
            &config.pager,
            on_page_changed,
        )?;
        Ok(Self {
            pager,
            plants: catalog.plants(),
            garden: garden.plantings(),
            filter_zone: config.catalog.filter_grow_zone,
            filtering: false,
        })
    }

    pub fn pager(&self) -> &PagerTabSync {
        &self.pager
    }

    pub fn pager_mut(&mut self) -> &mut PagerTabSync {
        &mut self.pager
    }

    pub fn current_page(&self) -> Option<HomePage> {
        HomePage::from_index(self.pager.settled_page())
    }

    pub fn on_tab_click(&mut self, index: usize) -> Result<()> {
        self.pager.select_tab(index)
    }

    /// The empty garden's "add plant" button goes straight to the catalog.
    pub fn on_add_plant_click(&mut self) -> Result<()> {
        self.pager.jump_to_page(HomePage::PlantList.index())
    }

    /// Toggle the grow-zone filter. Ignored unless the plant list is showing.
    pub fn toggle_filter(&mut self) -> bool {
        if self.current_page() != Some(HomePage::PlantList) {
            tracing::debug!("filter toggle ignored off the plant list");
            return false;
        }
        self.filtering = !self.filtering;
        tracing::info!(filtering = self.filtering, zone = self.filter_zone, "plant list filter");
        true
    }

    pub fn is_filtering(&self) -> bool {
        self.filtering
    }

    pub fn chrome(&self) -> HomeChrome {
        let page = self.current_page().unwrap_or(HomePage::MyGarden);
        HomeChrome {
            title_key: page.title_key().to_string(),
            show_filter_action: page == HomePage::PlantList,
            filtering: self.filtering,
        }
    }

    /// Catalog plants, filtered by grow zone while the filter is on.
    pub fn plants(&self) -> Vec<Plant> {
        let zone = self.filtering.then_some(self.filter_zone);
        filter_by_grow_zone(&self.plants.borrow(), zone)
    }

    pub fn plant_list(&self) -> Vec<ListRenderItem> {
        render_plants(&self.plants())
    }

    pub fn garden(&self) -> Vec<PlantAndGardenPlantings> {
        self.garden.borrow().clone()
    }

    pub fn garden_list(&self) -> Vec<ListRenderItem> {
        render_plants(self.garden.borrow().iter().map(|entry| &entry.plant))
    }

    /// The garden page shows an "add plant" prompt instead of a list.
    pub fn garden_is_empty(&self) -> bool {
        self.garden.borrow().is_empty()
    }
}
