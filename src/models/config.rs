use crate::models::OverlapMatchMode;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct AnalyzerConfig {
    /// Number of entries reported per frequency table.
    pub top_k: usize,
    /// How top words are matched against top bigrams in the comparison report.
    pub overlap_match_mode: OverlapMatchMode,
    /// Join words split across lines by a trailing hyphen before tokenizing.
    pub merge_hyphenated_line_breaks: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        crate::DEFAULT_ANALYZER_CONFIG
    }
}
