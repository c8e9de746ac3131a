//! Page descriptors for the home pager.

use serde::Serialize;

/// One page of the pager, as shown in the tab strip.
///
/// Keys are resolved to strings and icons by the host; the core treats them
/// as opaque.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageDescriptor {
    pub index: usize,
    pub title_key: String,
    pub icon_key: String,
}

/// The two pages of the home screen, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HomePage {
    MyGarden,
    PlantList,
}

impl HomePage {
    pub const ALL: [HomePage; 2] = [HomePage::MyGarden, HomePage::PlantList];

    pub fn index(self) -> usize {
        match self {
            HomePage::MyGarden => 0,
            HomePage::PlantList => 1,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn title_key(self) -> &'static str {
        match self {
            HomePage::MyGarden => "my_garden_title",
            HomePage::PlantList => "plant_list_title",
        }
    }

    pub fn icon_key(self) -> &'static str {
        match self {
            HomePage::MyGarden => "ic_my_garden_active",
            HomePage::PlantList => "ic_plant_list_active",
        }
    }

    pub fn descriptor(self) -> PageDescriptor {
        PageDescriptor {
            index: self.index(),
            title_key: self.title_key().to_string(),
            icon_key: self.icon_key().to_string(),
        }
    }

    /// Descriptors for every home page, in tab order.
    pub fn descriptors() -> Vec<PageDescriptor> {
        Self::ALL.iter().map(|page| page.descriptor()).collect()
    }
}
