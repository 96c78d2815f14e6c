use ratatui::layout::Rect;

/// Clickable areas of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    SearchInput,
    Dropdown,
    Favourites,
    TopSites,
}

/// Screen areas from the most recent render
///
/// A `None` entry means the component was not drawn in that frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutRegions {
    pub search_input: Option<Rect>,
    pub dropdown: Option<Rect>,
    pub favourites: Option<Rect>,
    pub top_sites: Option<Rect>,
}

impl LayoutRegions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget every region before a new frame is laid out
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn get(&self, region: Region) -> Option<Rect> {
        match region {
            Region::SearchInput => self.search_input,
            Region::Dropdown => self.dropdown,
            Region::Favourites => self.favourites,
            Region::TopSites => self.top_sites,
        }
    }
}
