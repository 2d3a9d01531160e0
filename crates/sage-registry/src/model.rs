use serde::{Deserialize, Serialize};

/// Metadata for a single UI component (e.g. "Button", "Date Picker").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentMetadata {
    /// Display name, unique across the registry. Lookups are case- and
    /// delimiter-insensitive, see [`name_key`].
    pub name: String,
    /// Functional grouping the component belongs to.
    pub category: Category,
    /// One-paragraph description of what the component does.
    pub description: String,
    /// Free-text match terms for search.
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Situations the component is intended for.
    #[serde(default)]
    pub use_cases: Vec<String>,
    /// External packages required to use the component, in install order.
    #[serde(default)]
    pub dependencies: Vec<String>,
    /// Configurable inputs, possibly empty.
    #[serde(default)]
    pub props: Vec<PropSpec>,
    /// Sample usage snippet. Opaque text, never executed or validated.
    #[serde(default)]
    pub example: Option<String>,
}

/// A configurable input of a component.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub default: Option<String>,
    pub description: String,
}

/// The fixed set of functional groupings. Kebab-case on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Actions,
    Forms,
    Navigation,
    Overlays,
    Feedback,
    DataDisplay,
    Layout,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Actions,
        Category::Forms,
        Category::Navigation,
        Category::Overlays,
        Category::Feedback,
        Category::DataDisplay,
        Category::Layout,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Actions => "actions",
            Category::Forms => "forms",
            Category::Navigation => "navigation",
            Category::Overlays => "overlays",
            Category::Feedback => "feedback",
            Category::DataDisplay => "data-display",
            Category::Layout => "layout",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Category::Actions => "Actions",
            Category::Forms => "Forms",
            Category::Navigation => "Navigation",
            Category::Overlays => "Overlays",
            Category::Feedback => "Feedback",
            Category::DataDisplay => "Data Display",
            Category::Layout => "Layout",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Category::Actions => "Buttons and other controls that trigger an action",
            Category::Forms => "Inputs and controls for collecting user data",
            Category::Navigation => "Components for moving between views and pages",
            Category::Overlays => "Content layered above the page: dialogs, popovers, tooltips",
            Category::Feedback => "Status communication: alerts, toasts, progress",
            Category::DataDisplay => "Read-only presentation of structured data",
            Category::Layout => "Structural primitives for arranging content",
        }
    }

    /// Parse a category key. Accepts any casing and treats spaces,
    /// hyphens and underscores as interchangeable ("Data Display",
    /// "data-display", "data_display").
    pub fn parse(input: &str) -> Option<Category> {
        let key = name_key(input);
        Category::ALL
            .into_iter()
            .find(|c| name_key(c.as_str()) == key)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derived per-category metadata. Counts are computed from the registry
/// contents, never stored alongside them.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryInfo {
    pub key: String,
    pub display_name: String,
    pub description: String,
    pub component_count: usize,
}

/// Normalized lookup key for component and category names: lowercased
/// with spaces, hyphens and underscores removed, so "Date Picker",
/// "date-picker" and "DatePicker" collapse to "datepicker".
pub fn name_key(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(|c| c.to_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_key_collapses_delimiters_and_case() {
        assert_eq!(name_key("Date Picker"), "datepicker");
        assert_eq!(name_key("date-picker"), "datepicker");
        assert_eq!(name_key("DatePicker"), "datepicker");
        assert_eq!(name_key("radio_group"), "radiogroup");
    }

    #[test]
    fn category_parse_is_delimiter_insensitive() {
        assert_eq!(Category::parse("data-display"), Some(Category::DataDisplay));
        assert_eq!(Category::parse("Data Display"), Some(Category::DataDisplay));
        assert_eq!(Category::parse("ACTIONS"), Some(Category::Actions));
        assert_eq!(Category::parse("widgets"), None);
    }

    #[test]
    fn category_wire_format_is_kebab_case() {
        let json = serde_json::to_string(&Category::DataDisplay).unwrap();
        assert_eq!(json, "\"data-display\"");
        let parsed: Category = serde_json::from_str("\"data-display\"").unwrap();
        assert_eq!(parsed, Category::DataDisplay);
    }
}
