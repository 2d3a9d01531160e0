/// Documentation search index for the docs site search box.
///
/// A hand-maintained static array, independent of the component registry
/// (pages, hooks and tokens have no registry entry), ranked with the same
/// shared scoring module so both surfaces order results identically.
/// Results are capped at a fixed page size.
use sage_common::scoring::{rank, SearchRecord};
use serde::Serialize;

pub const DOCS_SEARCH_LIMIT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocType {
    Component,
    Hook,
    Utility,
    Token,
    Page,
}

#[derive(Debug)]
pub struct DocEntry {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub doc_type: DocType,
    pub category: &'static str,
    pub path: &'static str,
    pub keywords: &'static [&'static str],
}

impl SearchRecord for DocEntry {
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

/// One docs search hit. `score` is transient, computed per query.
#[derive(Debug, Clone, Serialize)]
pub struct DocSearchResult {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub doc_type: DocType,
    pub category: String,
    pub path: String,
    pub score: u32,
}

/// Search the docs index. Capped at [`DOCS_SEARCH_LIMIT`]; a smaller
/// caller limit is honored. Empty query means an empty result, which the
/// search box renders as its distinct "no results" state.
pub fn search_docs(query: &str, limit: Option<usize>) -> Vec<DocSearchResult> {
    let cap = limit
        .unwrap_or(DOCS_SEARCH_LIMIT)
        .min(DOCS_SEARCH_LIMIT);
    rank(DOCS_INDEX, query, Some(cap))
        .into_iter()
        .map(|scored| DocSearchResult {
            id: scored.record.id.to_string(),
            title: scored.record.title.to_string(),
            description: scored.record.description.to_string(),
            doc_type: scored.record.doc_type,
            category: scored.record.category.to_string(),
            path: scored.record.path.to_string(),
            score: scored.score,
        })
        .collect()
}

pub static DOCS_INDEX: &[DocEntry] = &[
    DocEntry {
        id: "getting-started",
        title: "Getting Started",
        description: "Install the library, set up the provider and render your first component.",
        doc_type: DocType::Page,
        category: "guides",
        path: "/docs/getting-started",
        keywords: &["setup", "install", "start", "introduction"],
    },
    DocEntry {
        id: "installation",
        title: "Installation",
        description: "Package installation with npm, pnpm, yarn or bun, and peer dependency notes.",
        doc_type: DocType::Page,
        category: "guides",
        path: "/docs/installation",
        keywords: &["install", "npm", "pnpm", "setup"],
    },
    DocEntry {
        id: "accessibility",
        title: "Accessibility",
        description: "Keyboard interaction, focus management and screen-reader behavior across components.",
        doc_type: DocType::Page,
        category: "guides",
        path: "/docs/accessibility",
        keywords: &["a11y", "aria", "keyboard", "focus"],
    },
    DocEntry {
        id: "changelog",
        title: "Changelog",
        description: "Release notes for every published version.",
        doc_type: DocType::Page,
        category: "guides",
        path: "/docs/changelog",
        keywords: &["releases", "versions", "breaking"],
    },
    DocEntry {
        id: "component-button",
        title: "Button",
        description: "Usage, variants and props of the Button component.",
        doc_type: DocType::Component,
        category: "actions",
        path: "/docs/components/button",
        keywords: &["button", "click", "action"],
    },
    DocEntry {
        id: "component-input",
        title: "Input",
        description: "Usage, validation states and props of the Input component.",
        doc_type: DocType::Component,
        category: "forms",
        path: "/docs/components/input",
        keywords: &["input", "text", "field"],
    },
    DocEntry {
        id: "component-date-picker",
        title: "Date Picker",
        description: "Usage, range mode and props of the Date Picker component.",
        doc_type: DocType::Component,
        category: "forms",
        path: "/docs/components/date-picker",
        keywords: &["date", "picker", "calendar"],
    },
    DocEntry {
        id: "component-dialog",
        title: "Dialog",
        description: "Usage, focus trapping and props of the Dialog component.",
        doc_type: DocType::Component,
        category: "overlays",
        path: "/docs/components/dialog",
        keywords: &["dialog", "modal", "overlay"],
    },
    DocEntry {
        id: "component-table",
        title: "Table",
        description: "Usage, sorting and props of the Table component.",
        doc_type: DocType::Component,
        category: "data-display",
        path: "/docs/components/table",
        keywords: &["table", "grid", "rows"],
    },
    DocEntry {
        id: "component-toast",
        title: "Toast",
        description: "Usage, positioning and props of the Toast component.",
        doc_type: DocType::Component,
        category: "feedback",
        path: "/docs/components/toast",
        keywords: &["toast", "notification"],
    },
    DocEntry {
        id: "component-tabs",
        title: "Tabs",
        description: "Usage, orientation and props of the Tabs component.",
        doc_type: DocType::Component,
        category: "navigation",
        path: "/docs/components/tabs",
        keywords: &["tabs", "panels"],
    },
    DocEntry {
        id: "component-tooltip",
        title: "Tooltip",
        description: "Usage, delay tuning and props of the Tooltip component.",
        doc_type: DocType::Component,
        category: "overlays",
        path: "/docs/components/tooltip",
        keywords: &["tooltip", "hint", "hover"],
    },
    DocEntry {
        id: "hook-use-theme",
        title: "useTheme",
        description: "Read and switch the active color scheme from any component.",
        doc_type: DocType::Hook,
        category: "hooks",
        path: "/docs/hooks/use-theme",
        keywords: &["theme", "dark", "light", "scheme"],
    },
    DocEntry {
        id: "hook-use-toast",
        title: "useToast",
        description: "Imperatively enqueue toast notifications.",
        doc_type: DocType::Hook,
        category: "hooks",
        path: "/docs/hooks/use-toast",
        keywords: &["toast", "notify", "queue"],
    },
    DocEntry {
        id: "hook-use-media-query",
        title: "useMediaQuery",
        description: "Subscribe to a CSS media query from component code.",
        doc_type: DocType::Hook,
        category: "hooks",
        path: "/docs/hooks/use-media-query",
        keywords: &["media", "breakpoint", "responsive"],
    },
    DocEntry {
        id: "hook-use-disclosure",
        title: "useDisclosure",
        description: "Open/close state helper for dialogs, drawers and popovers.",
        doc_type: DocType::Hook,
        category: "hooks",
        path: "/docs/hooks/use-disclosure",
        keywords: &["open", "close", "toggle", "state"],
    },
    DocEntry {
        id: "utility-cn",
        title: "cn",
        description: "Class-name combiner that merges conditional and conflicting classes.",
        doc_type: DocType::Utility,
        category: "utilities",
        path: "/docs/utilities/cn",
        keywords: &["classnames", "merge", "css"],
    },
    DocEntry {
        id: "utility-focus-ring",
        title: "focusRing",
        description: "Shared focus-visible outline styles for interactive elements.",
        doc_type: DocType::Utility,
        category: "utilities",
        path: "/docs/utilities/focus-ring",
        keywords: &["focus", "outline", "keyboard"],
    },
    DocEntry {
        id: "tokens-color",
        title: "Color Tokens",
        description: "Semantic color scale for surfaces, text, borders and states.",
        doc_type: DocType::Token,
        category: "tokens",
        path: "/docs/tokens/color",
        keywords: &["color", "palette", "semantic"],
    },
    DocEntry {
        id: "tokens-spacing",
        title: "Spacing Tokens",
        description: "Spacing scale used by layout components and paddings.",
        doc_type: DocType::Token,
        category: "tokens",
        path: "/docs/tokens/spacing",
        keywords: &["spacing", "gap", "scale"],
    },
    DocEntry {
        id: "tokens-typography",
        title: "Typography Tokens",
        description: "Font families, sizes and line heights.",
        doc_type: DocType::Token,
        category: "tokens",
        path: "/docs/tokens/typography",
        keywords: &["font", "text", "type"],
    },
    DocEntry {
        id: "tokens-radius",
        title: "Radius Tokens",
        description: "Corner radius scale shared across surfaces and controls.",
        doc_type: DocType::Token,
        category: "tokens",
        path: "/docs/tokens/radius",
        keywords: &["radius", "corners", "rounded"],
    },
];
