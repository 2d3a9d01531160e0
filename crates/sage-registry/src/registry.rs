/// The component registry: a static, in-memory catalogue of component
/// metadata, built once at startup and never mutated afterwards.
///
/// The canonical data ships compiled into the binary as JSON; a file
/// override exists for local experimentation. The loader validates names
/// and rejects duplicates under the normalized lookup key, so the rest of
/// the crate can assume uniqueness. Counts are always derived from the
/// data itself.
use std::collections::HashMap;

use regex::Regex;
use tracing::warn;

use crate::error::RegistryError;
use crate::model::{name_key, Category, CategoryInfo, ComponentMetadata};

static EMBEDDED_REGISTRY: &str = include_str!("../data/registry.json");

#[derive(Debug)]
pub struct Registry {
    components: Vec<ComponentMetadata>,
    by_key: HashMap<String, usize>,
}

impl Registry {
    /// Build the registry from the compiled-in data.
    pub fn from_embedded() -> Result<Self, RegistryError> {
        Self::from_json(EMBEDDED_REGISTRY)
    }

    /// Build the registry from a JSON file on disk.
    pub fn from_file(path: &str) -> Result<Self, RegistryError> {
        let json = std::fs::read_to_string(path).map_err(|source| RegistryError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Parse and validate a registry document.
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let components: Vec<ComponentMetadata> = serde_json::from_str(json)?;
        Self::build(components)
    }

    fn build(components: Vec<ComponentMetadata>) -> Result<Self, RegistryError> {
        let name_re = Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 -]*$").expect("valid regex");

        let mut by_key: HashMap<String, usize> = HashMap::with_capacity(components.len());
        for (idx, component) in components.iter().enumerate() {
            if !name_re.is_match(&component.name) {
                return Err(RegistryError::InvalidName(component.name.clone()));
            }
            if component.description.trim().is_empty() {
                warn!(name = %component.name, "component has an empty description");
            }
            let key = name_key(&component.name);
            if let Some(&existing) = by_key.get(&key) {
                return Err(RegistryError::DuplicateName {
                    duplicate: component.name.clone(),
                    existing: components[existing].name.clone(),
                });
            }
            by_key.insert(key, idx);
        }

        Ok(Self { components, by_key })
    }

    /// Look up a component by name. Case- and delimiter-insensitive:
    /// "Date Picker", "date-picker" and "DatePicker" all resolve.
    pub fn get(&self, name: &str) -> Option<&ComponentMetadata> {
        self.by_key
            .get(&name_key(name))
            .map(|&idx| &self.components[idx])
    }

    /// All components of a category, in registry declaration order. A
    /// category with no entries yields an empty vec, not an error.
    pub fn by_category(&self, category: Category) -> Vec<&ComponentMetadata> {
        self.components
            .iter()
            .filter(|c| c.category == category)
            .collect()
    }

    /// Every component name in declaration order.
    pub fn component_names(&self) -> Vec<&str> {
        self.components.iter().map(|c| c.name.as_str()).collect()
    }

    /// Total number of components. Derived from the data, never stored.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn components(&self) -> &[ComponentMetadata] {
        &self.components
    }

    /// The seven categories in enum order, with derived counts.
    pub fn categories(&self) -> Vec<CategoryInfo> {
        Category::ALL
            .into_iter()
            .map(|category| {
                let component_count = self
                    .components
                    .iter()
                    .filter(|c| c.category == category)
                    .count();
                CategoryInfo {
                    key: category.as_str().to_string(),
                    display_name: category.display_name().to_string(),
                    description: category.description().to_string(),
                    component_count,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_registry_loads() {
        let registry = Registry::from_embedded().expect("embedded registry is valid");
        assert!(!registry.is_empty());
    }

    #[test]
    fn every_component_resolves_by_its_own_name() {
        let registry = Registry::from_embedded().unwrap();
        for component in registry.components() {
            let found = registry
                .get(&component.name)
                .unwrap_or_else(|| panic!("lookup failed for {}", component.name));
            assert_eq!(found.name, component.name);
        }
    }

    #[test]
    fn lookup_is_case_and_delimiter_insensitive() {
        let registry = Registry::from_embedded().unwrap();
        let spaced = registry.get("Date Picker").expect("spaced lookup");
        let hyphenated = registry.get("date-picker").expect("hyphenated lookup");
        let compact = registry.get("DatePicker").expect("compact lookup");
        assert_eq!(spaced.name, hyphenated.name);
        assert_eq!(spaced.name, compact.name);
    }

    #[test]
    fn len_matches_name_enumeration() {
        let registry = Registry::from_embedded().unwrap();
        assert_eq!(registry.len(), registry.component_names().len());
    }

    #[test]
    fn categories_partition_the_registry() {
        let registry = Registry::from_embedded().unwrap();
        let total: usize = Category::ALL
            .into_iter()
            .map(|c| registry.by_category(c).len())
            .sum();
        assert_eq!(total, registry.len());

        let derived: usize = registry
            .categories()
            .iter()
            .map(|info| info.component_count)
            .sum();
        assert_eq!(derived, registry.len());
    }

    #[test]
    fn every_category_has_at_least_one_component() {
        let registry = Registry::from_embedded().unwrap();
        for category in Category::ALL {
            assert!(
                !registry.by_category(category).is_empty(),
                "category {category} is empty"
            );
        }
    }

    #[test]
    fn button_is_an_action_with_a_description() {
        let registry = Registry::from_embedded().unwrap();
        let button = registry.get("button").expect("button exists");
        assert_eq!(button.category, Category::Actions);
        assert!(!button.description.trim().is_empty());
    }

    #[test]
    fn unknown_name_is_absent_not_an_error() {
        let registry = Registry::from_embedded().unwrap();
        assert!(registry.get("nonexistent-component").is_none());
    }

    #[test]
    fn duplicate_normalized_names_are_rejected() {
        let json = r#"[
            {"name": "Date Picker", "category": "forms", "description": "a"},
            {"name": "date-picker", "category": "forms", "description": "b"}
        ]"#;
        let err = Registry::from_json(json).unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateName { .. }));
    }

    #[test]
    fn malformed_names_are_rejected() {
        let json = r#"[{"name": " leading space", "category": "forms", "description": "a"}]"#;
        let err = Registry::from_json(json).unwrap_err();
        assert!(matches!(err, RegistryError::InvalidName(_)));
    }
}
