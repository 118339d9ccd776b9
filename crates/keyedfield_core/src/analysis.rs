//! Search-time analysis of free text.
//!
//! Analysis runs before encoding: it only decides which value strings a
//! free-text query is made of. The resulting strings are encoded like any
//! other text value.

/// Analyzer applied to free-text queries on a keyed field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SearchAnalyzer {
    /// The whole text is one value.
    #[default]
    Keyword,
    /// The text is split on Unicode whitespace; empty pieces are dropped.
    Whitespace,
}

impl SearchAnalyzer {
    /// Selects the analyzer for the `split_queries_on_whitespace` setting.
    pub const fn for_split(split_queries_on_whitespace: bool) -> Self {
        if split_queries_on_whitespace {
            SearchAnalyzer::Whitespace
        } else {
            SearchAnalyzer::Keyword
        }
    }

    /// Returns the analyzer's name.
    pub const fn name(self) -> &'static str {
        match self {
            SearchAnalyzer::Keyword => "keyword",
            SearchAnalyzer::Whitespace => "whitespace",
        }
    }

    /// Breaks `text` into the value strings to search for.
    pub fn analyze(self, text: &str) -> Vec<String> {
        match self {
            SearchAnalyzer::Keyword => vec![text.to_string()],
            SearchAnalyzer::Whitespace => text.split_whitespace().map(str::to_string).collect(),
        }
    }
}
