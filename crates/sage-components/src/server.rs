/// MCP server implementation for the Sage design-system registry.
///
/// Exposes four read-only tools:
/// - `list_components`: List components, grouped by category
/// - `search_components`: Ranked keyword search over the registry
/// - `get_component`: Full metadata for one component
/// - `install_component`: Install command, import statement and example
use std::sync::Arc;

use rmcp::{
    Json, ServerHandler,
    handler::server::router::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::*,
    tool, tool_handler, tool_router,
};

use sage_common::api::{
    CategoryGroup, CategoryInfo, ComponentDetailResponse, ComponentSearchResult, ComponentSummary,
    GetComponentParams, InstallComponentParams, InstallComponentResponse, ListComponentsParams,
    ListComponentsResponse, PropInfo, SearchComponentsParams, SearchComponentsResponse,
};
use sage_registry::install::{install_plan, PackageManager};
use sage_registry::model::{name_key, Category, ComponentMetadata};
use sage_registry::registry::Registry;
use sage_registry::search::search_components;

const MAX_SUMMARY_LEN: usize = 200;

#[derive(Clone)]
pub struct SageComponentsServer {
    registry: Arc<Registry>,
    tool_router: ToolRouter<SageComponentsServer>,
}

impl SageComponentsServer {
    pub fn new(registry: Arc<Registry>) -> Self {
        Self {
            registry,
            tool_router: Self::tool_router(),
        }
    }

    fn lookup(&self, raw_name: &str) -> Result<&ComponentMetadata, String> {
        let name = raw_name.trim();
        if name.is_empty() {
            return Err("name must not be empty".to_string());
        }
        self.registry.get(name).ok_or_else(|| {
            let wanted = name_key(name);
            let near: Vec<&str> = self
                .registry
                .component_names()
                .into_iter()
                .filter(|candidate| {
                    let key = name_key(candidate);
                    key.contains(&wanted) || wanted.contains(&key)
                })
                .take(3)
                .collect();
            if near.is_empty() {
                format!("component not found: {name}")
            } else {
                format!("component not found: {name}. Closest matches: {}", near.join(", "))
            }
        })
    }

    fn category_group(&self, category: Category) -> CategoryGroup {
        let components: Vec<ComponentSummary> = self
            .registry
            .by_category(category)
            .into_iter()
            .map(to_summary)
            .collect();
        CategoryGroup {
            category: CategoryInfo {
                key: category.as_str().to_string(),
                display_name: category.display_name().to_string(),
                description: category.description().to_string(),
                component_count: components.len(),
            },
            components,
        }
    }
}

#[tool_router]
impl SageComponentsServer {
    #[tool(description = "List design-system components grouped by category. Pass a category (actions, forms, navigation, overlays, feedback, data-display, layout) to list just that group; omit it to list everything.")]
    async fn list_components(
        &self,
        Parameters(params): Parameters<ListComponentsParams>,
    ) -> Result<Json<ListComponentsResponse>, String> {
        let categories: Vec<Category> = match params.category.as_deref().map(str::trim) {
            None | Some("") => Category::ALL.to_vec(),
            // An unknown category is a normal empty listing, not an error.
            Some(raw) => Category::parse(raw).into_iter().collect(),
        };

        let groups: Vec<CategoryGroup> = categories
            .into_iter()
            .map(|category| self.category_group(category))
            .collect();
        let total_components = groups.iter().map(|g| g.components.len()).sum();

        Ok(Json(ListComponentsResponse {
            categories: groups,
            total_components,
        }))
    }

    #[tool(description = "Search components by free-text query over names, categories, keywords and descriptions. Returns ranked results, best first; an empty query or no matches returns an empty list.")]
    async fn search_components(
        &self,
        Parameters(params): Parameters<SearchComponentsParams>,
    ) -> Result<Json<SearchComponentsResponse>, String> {
        let limit = params.limit.map(|n| n as usize);
        let results: Vec<ComponentSearchResult> =
            search_components(&self.registry, &params.query, limit)
                .into_iter()
                .map(|hit| ComponentSearchResult {
                    name: hit.component.name.clone(),
                    category: hit.component.category.as_str().to_string(),
                    score: hit.score,
                    summary: summarize(&hit.component.description),
                })
                .collect();

        Ok(Json(SearchComponentsResponse { results }))
    }

    #[tool(description = "Get full metadata for one component: description, keywords, use cases, props, dependencies and usage example. Name matching is case-insensitive and accepts 'Date Picker', 'date-picker' or 'DatePicker'.")]
    async fn get_component(
        &self,
        Parameters(params): Parameters<GetComponentParams>,
    ) -> Result<Json<ComponentDetailResponse>, String> {
        let component = self.lookup(&params.name)?;
        Ok(Json(to_detail(component)))
    }

    #[tool(description = "Get install instructions for one component: the package-manager install command covering its dependencies, the import statement, and a usage example. Supports npm (default), pnpm, yarn and bun.")]
    async fn install_component(
        &self,
        Parameters(params): Parameters<InstallComponentParams>,
    ) -> Result<Json<InstallComponentResponse>, String> {
        let component = self.lookup(&params.name)?;
        let manager = PackageManager::parse(params.package_manager.as_deref());
        let plan = install_plan(component, manager);

        Ok(Json(InstallComponentResponse {
            name: component.name.clone(),
            install_command: plan.install_command,
            import_statement: plan.import_statement,
            example: plan.example,
        }))
    }
}

fn to_summary(component: &ComponentMetadata) -> ComponentSummary {
    ComponentSummary {
        name: component.name.clone(),
        category: component.category.as_str().to_string(),
        description: component.description.clone(),
    }
}

fn to_detail(component: &ComponentMetadata) -> ComponentDetailResponse {
    ComponentDetailResponse {
        name: component.name.clone(),
        category: component.category.as_str().to_string(),
        description: component.description.clone(),
        keywords: component.keywords.clone(),
        use_cases: component.use_cases.clone(),
        dependencies: component.dependencies.clone(),
        props: component
            .props
            .iter()
            .map(|prop| PropInfo {
                name: prop.name.clone(),
                ty: prop.ty.clone(),
                required: prop.required,
                default: prop.default.clone(),
                description: prop.description.clone(),
            })
            .collect(),
        example: component.example.clone(),
    }
}

fn summarize(text: &str) -> String {
    if text.chars().count() > MAX_SUMMARY_LEN {
        format!("{}...", text.chars().take(MAX_SUMMARY_LEN).collect::<String>())
    } else {
        text.to_string()
    }
}

#[tool_handler]
impl ServerHandler for SageComponentsServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2025_06_18,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "sage-components".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Sage design-system component registry MCP server. Use list_components to \
                 browse by category, search_components for free-text lookup, get_component \
                 for full metadata on one component, and install_component for its install \
                 command and import statement."
                    .to_string(),
            ),
        }
    }
}
