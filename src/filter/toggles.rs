//! Per-category visibility toggles

use crate::graph::Category;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Category on/off switches. Every category, including the unknown
/// bucket, starts visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeToggles {
    visible: [bool; Category::COUNT],
}

impl TypeToggles {
    /// All categories visible
    pub fn new() -> Self {
        TypeToggles {
            visible: [true; Category::COUNT],
        }
    }

    /// Only the given categories visible
    pub fn only(categories: &[Category]) -> Self {
        let mut toggles = TypeToggles {
            visible: [false; Category::COUNT],
        };
        for &category in categories {
            toggles.set(category, true);
        }
        toggles
    }

    pub fn is_visible(&self, category: Category) -> bool {
        self.visible[category.index()]
    }

    /// Flip exactly one category and return its new state
    pub fn toggle(&mut self, category: Category) -> bool {
        let slot = &mut self.visible[category.index()];
        *slot = !*slot;
        *slot
    }

    pub fn set(&mut self, category: Category, visible: bool) {
        self.visible[category.index()] = visible;
    }

    /// Categories currently hidden, in legend order
    pub fn hidden(&self) -> Vec<Category> {
        Category::ALL
            .iter()
            .copied()
            .filter(|&c| !self.is_visible(c))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, bool)> + '_ {
        Category::ALL.iter().map(move |&c| (c, self.is_visible(c)))
    }
}

impl Default for TypeToggles {
    fn default() -> Self {
        Self::new()
    }
}

impl Serialize for TypeToggles {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let map: BTreeMap<&'static str, bool> =
            self.iter().map(|(c, visible)| (c.as_str(), visible)).collect();
        map.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for TypeToggles {
    /// Categories absent from the map keep their default (visible).
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = BTreeMap::<String, bool>::deserialize(deserializer)?;
        let mut toggles = TypeToggles::new();
        for (name, visible) in map {
            toggles.set(Category::parse(&name), visible);
        }
        Ok(toggles)
    }
}
