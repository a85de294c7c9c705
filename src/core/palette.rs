use crate::core::color::Color;

pub const MAX_RECENT_COLORS: usize = 10;

/// Receives colors picked from the canvas.
pub trait ColorSink {
    fn set_primary(&mut self, color: Color);
    fn set_secondary(&mut self, color: Color);
}

/// The primary/secondary color slots plus a most-recent-first history.
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteColors {
    pub primary: Color,
    pub secondary: Color,
    pub recent: Vec<Color>,
}

impl Default for PaletteColors {
    fn default() -> Self {
        Self::new()
    }
}

impl PaletteColors {
    pub fn new() -> Self {
        Self {
            primary: Color::new(0, 0, 0, 255),
            secondary: Color::new(255, 255, 255, 255),
            recent: Vec::new(),
        }
    }

    fn push_recent(&mut self, color: Color) {
        if self.recent.first() == Some(&color) {
            return;
        }
        self.recent.retain(|c| *c != color);
        self.recent.insert(0, color);
        self.recent.truncate(MAX_RECENT_COLORS);
    }
}

impl ColorSink for PaletteColors {
    fn set_primary(&mut self, color: Color) {
        self.primary = color;
        self.push_recent(color);
    }

    fn set_secondary(&mut self, color: Color) {
        self.secondary = color;
        self.push_recent(color);
    }
}
