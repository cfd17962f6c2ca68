//! Log categories, their display colors and category filters.

use strum::IntoEnumIterator;

/// Category of a log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum Category {
    /// General information.
    Info,
    /// Something unexpected that did not stop the game.
    Warning,
    /// A failed operation.
    Error,
    /// Moves and outcomes.
    GameEvent,
    /// Text typed into the console.
    User,
}

impl Category {
    /// Label written to the log file and the panel.
    pub fn label(self) -> &'static str {
        match self {
            Category::Info => "info",
            Category::Warning => "warning",
            Category::Error => "error",
            Category::GameEvent => "game event",
            Category::User => "user",
        }
    }

    /// Display color for entries of this category.
    pub fn color(self) -> DisplayColor {
        match self {
            Category::Info => DisplayColor::new(255, 255, 255),
            Category::Warning => DisplayColor::new(255, 255, 0),
            Category::Error => DisplayColor::new(255, 0, 0),
            Category::GameEvent => DisplayColor::new(0, 128, 255),
            Category::User => DisplayColor::new(0, 255, 0),
        }
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// An opaque RGB color, independent of any UI toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_new::new)]
pub struct DisplayColor {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

/// A set of enabled categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CategoryFilter {
    bits: u8,
}

impl CategoryFilter {
    /// Filter with every category enabled.
    pub fn all() -> Self {
        Category::iter().collect()
    }

    /// Filter with nothing enabled.
    pub fn none() -> Self {
        Self { bits: 0 }
    }

    /// Returns true if `category` is enabled.
    pub fn contains(&self, category: Category) -> bool {
        self.bits & category.bit() != 0
    }

    /// Enables `category`.
    pub fn enable(&mut self, category: Category) {
        self.bits |= category.bit();
    }

    /// Disables `category`.
    pub fn disable(&mut self, category: Category) {
        self.bits &= !category.bit();
    }

    /// Flips `category`, returning its new state.
    pub fn toggle(&mut self, category: Category) -> bool {
        self.bits ^= category.bit();
        self.contains(category)
    }
}

impl Default for CategoryFilter {
    fn default() -> Self {
        Self::all()
    }
}

impl FromIterator<Category> for CategoryFilter {
    fn from_iter<I: IntoIterator<Item = Category>>(iter: I) -> Self {
        let mut filter = Self::none();
        for category in iter {
            filter.enable(category);
        }
        filter
    }
}
