#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Seed categories installed when a store is created.
const DEFAULT_CATEGORIES: &[(&str, &str)] = &[
    ("Work", "briefcase"),
    ("Personal", "user"),
    ("Shopping", "cart"),
    ("Health", "heart"),
];

/// Icon given to categories registered on the fly by `add_task`.
pub(crate) const FALLBACK_ICON: &str = "tag";

/// A named, icon-tagged grouping label that tasks may reference.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Category {
    name: String,
    icon: String,
}

impl Category {
    pub(crate) fn new(name: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            icon: icon.into(),
        }
    }

    /// Returns the category name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the token identifying the category's display glyph.
    pub fn icon(&self) -> &str {
        &self.icon
    }

    /// The fixed default set present before any user-created categories are
    /// added.
    pub(crate) fn defaults() -> Vec<Category> {
        DEFAULT_CATEGORIES
            .iter()
            .map(|(name, icon)| Category::new(*name, *icon))
            .collect()
    }
}
