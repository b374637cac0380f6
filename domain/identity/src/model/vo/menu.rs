use super::Route;

/// Dashboard tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub title: &'static str,
    pub route: Route,
}
