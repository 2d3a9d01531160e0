/// Shared relevance scoring for design-system search surfaces.
///
/// Both the component registry search (MCP server) and the documentation
/// index (site API) rank through this module, so the two surfaces agree on
/// ordering and one test suite covers both.
///
/// Tier weights are tuning values; the contract is the relative order:
/// exact title > title prefix > title substring > category > keyword >
/// description. Title tiers are mutually exclusive (the best one counts),
/// which keeps an exact title match ahead of any combination of the
/// lower tiers. Ties preserve the order records were declared in.
pub const SCORE_TITLE_EXACT: u32 = 100;
pub const SCORE_TITLE_PREFIX: u32 = 50;
pub const SCORE_TITLE_SUBSTRING: u32 = 30;
pub const SCORE_CATEGORY: u32 = 20;
pub const SCORE_KEYWORD: u32 = 15;
pub const SCORE_DESCRIPTION: u32 = 10;

/// A searchable record. Implemented by the component registry entries and
/// the documentation index entries.
pub trait SearchRecord {
    fn title(&self) -> &str;
    fn category(&self) -> &str;
    fn keywords(&self) -> impl Iterator<Item = &str>;
    fn description(&self) -> &str;
    fn use_cases(&self) -> impl Iterator<Item = &str>;
}

/// A record paired with its relevance score for one query.
#[derive(Debug, Clone, Copy)]
pub struct Scored<'a, T> {
    pub record: &'a T,
    pub score: u32,
}

/// Rank `records` against a free-text query, highest score first.
///
/// An empty or whitespace-only query yields an empty result, never "all
/// records". Records that do not match at all are dropped. `limit: None`
/// returns every match.
pub fn rank<'a, T: SearchRecord>(
    records: impl IntoIterator<Item = &'a T>,
    query: &str,
    limit: Option<usize>,
) -> Vec<Scored<'a, T>> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let mut hits: Vec<Scored<'a, T>> = records
        .into_iter()
        .filter_map(|record| {
            let score = score_record(record, &needle);
            (score > 0).then_some(Scored { record, score })
        })
        .collect();

    // Stable sort: equal scores keep declaration order.
    hits.sort_by(|a, b| b.score.cmp(&a.score));

    if let Some(limit) = limit {
        hits.truncate(limit);
    }
    hits
}

fn score_record<T: SearchRecord>(record: &T, needle: &str) -> u32 {
    let title = record.title().to_lowercase();

    let mut score = if title == needle {
        SCORE_TITLE_EXACT
    } else if title.starts_with(needle) {
        SCORE_TITLE_PREFIX
    } else if title.contains(needle) {
        SCORE_TITLE_SUBSTRING
    } else {
        0
    };

    if record.category().to_lowercase().contains(needle) {
        score += SCORE_CATEGORY;
    }

    if record
        .keywords()
        .any(|keyword| keyword.to_lowercase().contains(needle))
    {
        score += SCORE_KEYWORD;
    }

    if record.description().to_lowercase().contains(needle)
        || record
            .use_cases()
            .any(|use_case| use_case.to_lowercase().contains(needle))
    {
        score += SCORE_DESCRIPTION;
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Record {
        title: &'static str,
        category: &'static str,
        keywords: &'static [&'static str],
        description: &'static str,
    }

    impl SearchRecord for Record {
        fn title(&self) -> &str {
            self.title
        }
        fn category(&self) -> &str {
            self.category
        }
        fn keywords(&self) -> impl Iterator<Item = &str> {
            self.keywords.iter().copied()
        }
        fn description(&self) -> &str {
            self.description
        }
        fn use_cases(&self) -> impl Iterator<Item = &str> {
            std::iter::empty()
        }
    }

    const RECORDS: &[Record] = &[
        Record {
            title: "Button",
            category: "actions",
            keywords: &["click", "submit"],
            description: "Triggers an action when pressed",
        },
        Record {
            title: "Icon Button",
            category: "actions",
            keywords: &["icon", "click"],
            description: "Button that renders a single icon",
        },
        Record {
            title: "Calendar",
            category: "data-display",
            keywords: &["date", "month"],
            description: "Month grid for browsing dates",
        },
        Record {
            title: "Date Picker",
            category: "forms",
            keywords: &["date", "input"],
            description: "Input for choosing a date",
        },
    ];

    #[test]
    fn empty_query_returns_nothing() {
        assert!(rank(RECORDS, "", None).is_empty());
        assert!(rank(RECORDS, "   ", None).is_empty());
    }

    #[test]
    fn no_match_returns_empty_not_error() {
        assert!(rank(RECORDS, "zzzznonexistent", None).is_empty());
    }

    #[test]
    fn exact_title_ranks_first() {
        let hits = rank(RECORDS, "button", None);
        assert_eq!(hits[0].record.title, "Button");
        assert_eq!(hits[0].score, SCORE_TITLE_EXACT);
        // "Icon Button" still matches, but below the exact hit.
        assert!(hits.iter().any(|h| h.record.title == "Icon Button"));
    }

    #[test]
    fn title_prefix_beats_keyword_match() {
        let hits = rank(RECORDS, "date", None);
        let titles: Vec<&str> = hits.iter().map(|h| h.record.title).collect();
        assert_eq!(titles[0], "Date Picker");
        assert!(titles.contains(&"Calendar"));
    }

    #[test]
    fn exact_outranks_every_lower_tier_combination() {
        assert!(
            SCORE_TITLE_EXACT
                > SCORE_TITLE_PREFIX + SCORE_CATEGORY + SCORE_KEYWORD + SCORE_DESCRIPTION
        );
    }

    #[test]
    fn single_character_query_still_scores() {
        let hits = rank(RECORDS, "b", None);
        assert!(!hits.is_empty());
        assert_eq!(hits[0].record.title, "Button");
    }

    #[test]
    fn limit_caps_results() {
        let hits = rank(RECORDS, "date", Some(1));
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn ties_keep_declaration_order() {
        // Both button records match "click" through keywords only.
        let hits = rank(RECORDS, "click", None);
        assert_eq!(hits[0].record.title, "Button");
        assert_eq!(hits[1].record.title, "Icon Button");
        assert_eq!(hits[0].score, hits[1].score);
    }
}
