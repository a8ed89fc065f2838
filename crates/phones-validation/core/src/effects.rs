//! Hover colour swap and footer year

use chrono::{Datelike, Local};

/// Inline colours an element can be read from and written to
pub trait StyleTarget {
    fn background(&self) -> String;
    fn color(&self) -> String;
    fn set_background(&mut self, value: &str);
    fn set_color(&mut self, value: &str);
}

/// Colours applied while the pointer is over an element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoverPalette {
    pub background: String,
    pub color: String,
}

impl Default for HoverPalette {
    fn default() -> Self {
        Self {
            background: "#0a55c8".to_string(),
            color: "#ffffff".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct SavedStyle {
    background: String,
    color: String,
}

/// Per-element hover state
///
/// `enter` remembers the inline colours it overwrites and `leave` puts them
/// back. A `leave` with nothing remembered clears both.
#[derive(Debug, Clone, Default)]
pub struct HoverEffect {
    palette: HoverPalette,
    saved: Option<SavedStyle>,
}

impl HoverEffect {
    pub fn new(palette: HoverPalette) -> Self {
        Self {
            palette,
            saved: None,
        }
    }

    pub fn enter<T: StyleTarget + ?Sized>(&mut self, target: &mut T) {
        self.saved = Some(SavedStyle {
            background: target.background(),
            color: target.color(),
        });
        target.set_background(&self.palette.background);
        target.set_color(&self.palette.color);
    }

    pub fn leave<T: StyleTarget + ?Sized>(&mut self, target: &mut T) {
        let saved = self.saved.clone().unwrap_or_default();
        target.set_background(&saved.background);
        target.set_color(&saved.color);
    }
}

/// Four-digit calendar year for the footer
pub fn footer_year_text<D: Datelike>(date: &D) -> String {
    format!("{:04}", date.year())
}

/// Current local year, as shown in the footer
pub fn current_year_text() -> String {
    footer_year_text(&Local::now())
}
