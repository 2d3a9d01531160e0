use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListComponentsParams {
    /// Category to list ("actions", "forms", "navigation", "overlays",
    /// "feedback", "data-display", "layout"). Omit to list every category.
    pub category: Option<String>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchComponentsParams {
    /// Free-text query matched against component names, categories,
    /// keywords and descriptions.
    pub query: String,
    /// Maximum number of results. Omit to return every match.
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetComponentParams {
    /// Component name. Case-insensitive; "Date Picker", "date-picker" and
    /// "DatePicker" resolve to the same component.
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct InstallComponentParams {
    /// Component name, matched like `get_component`.
    pub name: String,
    /// Package manager for the install command: "npm" (default), "pnpm",
    /// "yarn" or "bun".
    pub package_manager: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ComponentSummary {
    pub name: String,
    pub category: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ComponentSearchResult {
    pub name: String,
    pub category: String,
    pub score: u32,
    pub summary: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SearchComponentsResponse {
    pub results: Vec<ComponentSearchResult>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PropInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    pub required: bool,
    pub default: Option<String>,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ComponentDetailResponse {
    pub name: String,
    pub category: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub use_cases: Vec<String>,
    pub dependencies: Vec<String>,
    pub props: Vec<PropInfo>,
    pub example: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CategoryInfo {
    pub key: String,
    pub display_name: String,
    pub description: String,
    pub component_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CategoryGroup {
    pub category: CategoryInfo,
    pub components: Vec<ComponentSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ListComponentsResponse {
    pub categories: Vec<CategoryGroup>,
    pub total_components: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct InstallComponentResponse {
    pub name: String,
    pub install_command: String,
    pub import_statement: String,
    pub example: Option<String>,
}
