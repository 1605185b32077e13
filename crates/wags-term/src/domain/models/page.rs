use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// Logical pages of the main region.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum PageId {
    #[default]
    Dashboard,
    Messages,
    Broadcasts,
}

impl PageId {
    /// Every page except `self`, in declaration order.
    pub fn others(self) -> Vec<PageId> {
        PageId::iter().filter(|page| *page != self).collect()
    }
}

/// Top-level region of the screen. The main region is only shown while a
/// session is authenticated.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum Region {
    #[default]
    Login,
    Main,
}

/// Targets of a data loader, used for loading indicators and inline errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum View {
    Dashboard,
    Messages,
    Broadcasts,
    BroadcastDetails,
}

impl From<PageId> for View {
    fn from(page: PageId) -> Self {
        match page {
            PageId::Dashboard => View::Dashboard,
            PageId::Messages => View::Messages,
            PageId::Broadcasts => View::Broadcasts,
        }
    }
}
