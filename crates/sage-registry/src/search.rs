/// Ranked keyword search over the component registry.
///
/// The scoring itself lives in `sage_common::scoring` and is shared with
/// the documentation search index; this module only adapts registry
/// entries to it.
use sage_common::scoring::{rank, SearchRecord};

use crate::model::ComponentMetadata;
use crate::registry::Registry;

impl SearchRecord for ComponentMetadata {
    fn title(&self) -> &str {
        &self.name
    }

    fn category(&self) -> &str {
        self.category.as_str()
    }

    fn keywords(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(String::as_str)
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn use_cases(&self) -> impl Iterator<Item = &str> {
        self.use_cases.iter().map(String::as_str)
    }
}

/// One search hit: a registry entry plus its transient per-query score.
#[derive(Debug, Clone, Copy)]
pub struct ComponentHit<'a> {
    pub component: &'a ComponentMetadata,
    pub score: u32,
}

/// Search the registry. `limit: None` returns every match; callers that
/// page pass their own cap. Empty queries yield an empty result.
pub fn search_components<'a>(
    registry: &'a Registry,
    query: &str,
    limit: Option<usize>,
) -> Vec<ComponentHit<'a>> {
    rank(registry.components(), query, limit)
        .into_iter()
        .map(|scored| ComponentHit {
            component: scored.record,
            score: scored.score,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> Registry {
        Registry::from_embedded().unwrap()
    }

    #[test]
    fn empty_and_whitespace_queries_return_nothing() {
        let registry = registry();
        assert!(search_components(&registry, "", None).is_empty());
        assert!(search_components(&registry, "   ", None).is_empty());
    }

    #[test]
    fn unmatched_query_returns_empty() {
        let registry = registry();
        assert!(search_components(&registry, "zzzznonexistent", None).is_empty());
    }

    #[test]
    fn exact_name_ranks_first() {
        let registry = registry();
        let hits = search_components(&registry, "button", None);
        assert_eq!(hits[0].component.name, "Button");
        // Other button variants still show up, below the exact match.
        assert!(hits.len() > 1);
        assert!(hits[1..]
            .iter()
            .all(|hit| hit.score < hits[0].score));
    }

    #[test]
    fn date_query_finds_picker_and_calendar() {
        let registry = registry();
        let hits = search_components(&registry, "date", None);
        let names: Vec<&str> = hits.iter().map(|h| h.component.name.as_str()).collect();

        let picker = names.iter().position(|n| *n == "Date Picker");
        let calendar = names.iter().position(|n| *n == "Calendar");
        assert!(picker.is_some(), "Date Picker missing from {names:?}");
        assert!(calendar.is_some(), "Calendar missing from {names:?}");
        // Title prefix beats keyword/description matches.
        assert!(picker.unwrap() < calendar.unwrap());
    }

    #[test]
    fn limit_is_honored() {
        let registry = registry();
        let all = search_components(&registry, "input", None);
        assert!(all.len() > 2);
        let capped = search_components(&registry, "input", Some(2));
        assert_eq!(capped.len(), 2);
        assert_eq!(capped[0].component.name, all[0].component.name);
    }
}
