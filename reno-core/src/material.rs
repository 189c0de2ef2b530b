//! Material catalog and pure filtering.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MaterialId(Uuid);

impl MaterialId {
    /// Create a new unique material ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create from an existing UUID.
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for MaterialId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for MaterialId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A catalog entry describing one finish, fixture, or surface product.
///
/// Catalog entries are immutable once created; spaces reference them by value
/// so a later library edit never rewrites a saved proposal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Material {
    /// Unique identifier.
    pub id: MaterialId,
    /// Display name, e.g. "Calacatta Gold".
    pub name: String,
    /// Top-level grouping, e.g. "Countertops".
    pub category: String,
    /// Second-level grouping, e.g. "Quartz".
    pub sub_category: String,
    /// Short customer-facing description.
    pub description: String,
    /// Swatch image location.
    pub image_url: String,
}

impl Material {
    /// Create a material with a fresh ID.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        sub_category: impl Into<String>,
        description: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            id: MaterialId::new(),
            name: name.into(),
            category: category.into(),
            sub_category: sub_category.into(),
            description: description.into(),
            image_url: image_url.into(),
        }
    }
}

/// Insertion-ordered material library with pure filter derivations.
///
/// All derived views (categories, sub-categories, filtered subsets) are
/// recomputed from the items plus the caller's selections; the catalog keeps
/// no filter state of its own.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MaterialCatalog {
    items: Vec<Material>,
}

impl MaterialCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog from existing entries, preserving their order.
    #[must_use]
    pub fn from_items(items: Vec<Material>) -> Self {
        Self { items }
    }

    /// Add a material to the end of the catalog.
    pub fn add(&mut self, material: Material) -> MaterialId {
        let id = material.id;
        self.items.push(material);
        id
    }

    /// Remove a material by ID. Returns the removed entry if present.
    pub fn remove(&mut self, id: MaterialId) -> Option<Material> {
        let index = self.items.iter().position(|m| m.id == id)?;
        Some(self.items.remove(index))
    }

    /// Replace an existing entry (matched by ID) in place.
    ///
    /// Returns `false` when no entry with that ID exists.
    pub fn replace(&mut self, material: Material) -> bool {
        match self.items.iter_mut().find(|m| m.id == material.id) {
            Some(slot) => {
                *slot = material;
                true
            }
            None => false,
        }
    }

    /// Get a material by ID.
    #[must_use]
    pub fn get(&self, id: MaterialId) -> Option<&Material> {
        self.items.iter().find(|m| m.id == id)
    }

    /// All materials in insertion order.
    pub fn items(&self) -> impl Iterator<Item = &Material> {
        self.items.iter()
    }

    /// Number of catalog entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The sorted, de-duplicated set of categories present in the catalog.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        self.items
            .iter()
            .map(|m| m.category.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// The sorted, de-duplicated set of sub-categories within one category.
    #[must_use]
    pub fn sub_categories(&self, category: &str) -> Vec<String> {
        self.items
            .iter()
            .filter(|m| m.category == category)
            .map(|m| m.sub_category.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Materials matching both constraints when present, in catalog order.
    #[must_use]
    pub fn filter(&self, category: Option<&str>, sub_category: Option<&str>) -> Vec<&Material> {
        self.items
            .iter()
            .filter(|m| category.is_none_or(|c| m.category == c))
            .filter(|m| sub_category.is_none_or(|s| m.sub_category == s))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> MaterialCatalog {
        MaterialCatalog::from_items(vec![
            Material::new(
                "Natural Oak Wide Plank",
                "Flooring",
                "Hardwood",
                "6-inch wide natural oak planks with a matte finish.",
                "https://example.com/oak.jpg",
            ),
            Material::new(
                "Repose Gray",
                "Paint",
                "Sherwin-Williams",
                "A warm gray neutral paint color.",
                "https://example.com/repose.jpg",
            ),
            Material::new(
                "Hale Navy",
                "Paint",
                "Benjamin Moore",
                "A deeply saturated classic navy blue.",
                "https://example.com/hale.jpg",
            ),
            Material::new(
                "Classic White Subway",
                "Tile",
                "Ceramic",
                "3x6 inch glossy white ceramic subway tile.",
                "https://example.com/subway.jpg",
            ),
        ])
    }

    #[test]
    fn test_categories_sorted_deduped() {
        let catalog = sample_catalog();
        assert_eq!(catalog.categories(), vec!["Flooring", "Paint", "Tile"]);
    }

    #[test]
    fn test_sub_categories_scoped_to_category() {
        let catalog = sample_catalog();
        assert_eq!(
            catalog.sub_categories("Paint"),
            vec!["Benjamin Moore", "Sherwin-Williams"]
        );
        assert!(catalog.sub_categories("Lighting").is_empty());
    }

    #[test]
    fn test_filter_by_category() {
        let catalog = sample_catalog();
        let paints = catalog.filter(Some("Paint"), None);
        assert_eq!(paints.len(), 2);
        assert!(paints.iter().all(|m| m.category == "Paint"));
    }

    #[test]
    fn test_filter_by_category_and_sub_category() {
        let catalog = sample_catalog();
        let hits = catalog.filter(Some("Paint"), Some("Benjamin Moore"));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Hale Navy");
    }

    #[test]
    fn test_filter_unconstrained_returns_all_in_order() {
        let catalog = sample_catalog();
        let all = catalog.filter(None, None);
        assert_eq!(all.len(), 4);
        assert_eq!(all[0].name, "Natural Oak Wide Plank");
        assert_eq!(all[3].name, "Classic White Subway");
    }

    #[test]
    fn test_add_remove_replace() {
        let mut catalog = MaterialCatalog::new();
        assert!(catalog.is_empty());

        let id = catalog.add(Material::new(
            "Matte Black Kitchen Faucet",
            "Fixtures",
            "Kitchen",
            "High-arc pull-down kitchen faucet in matte black.",
            "https://example.com/faucet.jpg",
        ));
        assert_eq!(catalog.len(), 1);

        let mut updated = catalog.get(id).expect("entry exists").clone();
        updated.description = "Updated description.".to_string();
        assert!(catalog.replace(updated));
        assert_eq!(
            catalog.get(id).expect("entry exists").description,
            "Updated description."
        );

        assert!(catalog.remove(id).is_some());
        assert!(catalog.is_empty());
        assert!(catalog.remove(id).is_none());
    }
}
