/// HTTP surface for the documentation site.
///
/// Read-only except for the OG configuration write-through:
/// - `GET /api/registry` — the full component registry plus derived
///   category metadata, for public consumption.
/// - `GET /api/search` — documentation search box backend.
/// - `GET /api/og-config` — social-preview configuration, falling back to
///   built-in defaults when the upstream is unreachable.
/// - `PUT /api/og-config` — write-through to the upstream.
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::warn;

use sage_common::edge_config::EdgeConfigClient;
use sage_registry::model::{CategoryInfo, ComponentMetadata};
use sage_registry::Registry;

use crate::docs_index::{search_docs, DocSearchResult};
use crate::og::{OgConfig, OG_CONFIG_KEY};

#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<Registry>,
    pub edge: Option<Arc<EdgeConfigClient>>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/registry", get(get_registry))
        .route("/api/search", get(get_docs_search))
        .route("/api/og-config", get(get_og_config).put(put_og_config))
        .with_state(state)
}

#[derive(Serialize)]
struct RegistryDump {
    components: Vec<ComponentMetadata>,
    categories: Vec<CategoryInfo>,
    total: usize,
}

async fn get_registry(State(state): State<AppState>) -> Json<RegistryDump> {
    Json(RegistryDump {
        components: state.registry.components().to_vec(),
        categories: state.registry.categories(),
        total: state.registry.len(),
    })
}

#[derive(Deserialize)]
struct DocsSearchParams {
    q: Option<String>,
    limit: Option<usize>,
}

#[derive(Serialize)]
struct DocsSearchResponse {
    results: Vec<DocSearchResult>,
}

async fn get_docs_search(Query(params): Query<DocsSearchParams>) -> Json<DocsSearchResponse> {
    let results = search_docs(params.q.as_deref().unwrap_or(""), params.limit);
    Json(DocsSearchResponse { results })
}

async fn get_og_config(State(state): State<AppState>) -> Json<OgConfig> {
    let Some(edge) = &state.edge else {
        return Json(OgConfig::default());
    };

    match edge.get_item(OG_CONFIG_KEY).await {
        Ok(Some(value)) => match serde_json::from_value::<OgConfig>(value) {
            Ok(config) => Json(config),
            Err(e) => {
                warn!(error = %e, "stored og-config is malformed, serving defaults");
                Json(OgConfig::default())
            }
        },
        Ok(None) => Json(OgConfig::default()),
        Err(e) => {
            // Upstream failure degrades to the built-in card, never a 5xx.
            warn!(error = %e, "edge-config read failed, serving defaults");
            Json(OgConfig::default())
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

async fn put_og_config(
    State(state): State<AppState>,
    Json(config): Json<OgConfig>,
) -> Result<StatusCode, (StatusCode, Json<ErrorBody>)> {
    if let Err(message) = config.validate() {
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorBody { error: message }),
        ));
    }

    let Some(edge) = &state.edge else {
        return Err((
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ErrorBody {
                error: "og-config storage is not configured".to_string(),
            }),
        ));
    };

    let value = serde_json::to_value(&config).map_err(|e| {
        warn!(error = %e, "failed to serialize og-config");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody {
                error: "failed to serialize configuration".to_string(),
            }),
        )
    })?;

    match edge.put_item(OG_CONFIG_KEY, &value).await {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(e) => {
            warn!(error = %e, "edge-config write failed");
            Err((
                StatusCode::BAD_GATEWAY,
                Json(ErrorBody {
                    error: "configuration store is unavailable".to_string(),
                }),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState {
            registry: Arc::new(Registry::from_embedded().unwrap()),
            edge: None,
        }
    }

    #[tokio::test]
    async fn registry_dump_matches_the_loaded_registry() {
        let state = state();
        let expected = state.registry.len();
        let Json(dump) = get_registry(State(state)).await;
        assert_eq!(dump.total, expected);
        assert_eq!(dump.components.len(), expected);
        assert_eq!(dump.categories.len(), 7);
        let counted: usize = dump.categories.iter().map(|c| c.component_count).sum();
        assert_eq!(counted, expected);
    }

    #[tokio::test]
    async fn docs_search_without_query_is_empty() {
        let Json(response) = get_docs_search(Query(DocsSearchParams {
            q: None,
            limit: None,
        }))
        .await;
        assert!(response.results.is_empty());
    }

    #[tokio::test]
    async fn og_config_without_upstream_serves_defaults() {
        let Json(config) = get_og_config(State(state())).await;
        assert_eq!(config, OgConfig::default());
    }

    #[tokio::test]
    async fn og_config_write_without_upstream_is_rejected() {
        let result = put_og_config(State(state()), Json(OgConfig::default())).await;
        let (status, _) = result.unwrap_err();
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn invalid_og_config_is_a_client_error() {
        let mut config = OgConfig::default();
        config.theme = "sepia".to_string();
        let result = put_og_config(State(state()), Json(config)).await;
        let (status, Json(body)) = result.unwrap_err();
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body.error.contains("theme"));
    }
}
