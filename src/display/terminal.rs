use console;

/// Terminal control and ANSI color handling
pub struct Terminal {
    pub supports_color: bool,
}

impl Terminal {
    pub fn new() -> Self {
        Self {
            supports_color: console::colors_enabled(),
        }
    }

    /// Get color style for a cleanup outcome
    pub fn get_outcome_style(&self, removed: bool) -> console::Style {
        let mut style = console::Style::new();
        if !self.supports_color {
            return style;
        }

        if removed {
            style = style.green(); // File was present and is gone now
        } else {
            style = style.dim(); // Nothing to do
        }
        style
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}
