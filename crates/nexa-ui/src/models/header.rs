//! Header view-model: scroll style flag and mobile menu

/// Local state of the fixed page header
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HeaderState {
    scrolled: bool,
    menu_open: bool,
}

impl HeaderState {
    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Recomputes the style flag from the current scroll offset.
    ///
    /// The header turns solid strictly past `threshold`; non-finite offsets
    /// are treated as the top of the page.
    pub fn on_scroll(&mut self, scroll_y: f64, threshold: f64) {
        self.scrolled = scroll_y.is_finite() && scroll_y > threshold;
    }

    /// Menu button pressed
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// A navigation entry was chosen; the menu always closes
    pub fn on_navigate(&mut self) {
        self.menu_open = false;
    }
}
