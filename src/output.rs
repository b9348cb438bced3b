//! Output types returned by the conversion entry points.

use serde::{Deserialize, Serialize};

/// The artefacts of one conversion: a Markdown document and the stylesheet
/// that prints it, plus counters describing what the flattener saw.
///
/// For pass-through Markdown input, `markdown` is the input untouched and
/// `stats` is all zeros.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionOutput {
    /// The assembled Markdown document (UTF-8, flattened collection or
    /// pass-through input).
    pub markdown: String,
    /// The page stylesheet with the escaped header text embedded.
    pub stylesheet: String,
    /// Flattening counters.
    pub stats: FlattenStats,
}

/// Counters accumulated during one tree traversal.
///
/// Useful for logging and for sanity-checking a conversion: a collection
/// with 40 requests that yields `requests: 3` almost certainly has malformed
/// entries worth looking at (`skipped_items` will say how many).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FlattenStats {
    /// Folders rendered as section headings.
    pub folders: usize,
    /// Requests rendered as endpoint sections.
    pub requests: usize,
    /// Parameter tables emitted across all four categories.
    pub parameter_tables: usize,
    /// Bodies/responses that parsed as JSON and were pretty-printed.
    pub json_blocks: usize,
    /// Bodies/responses rendered verbatim after a failed JSON parse.
    pub raw_blocks: usize,
    /// Items that were neither folders nor requests and were skipped.
    pub skipped_items: usize,
    /// Deepest heading level reached (2 = flat collection, 0 = empty).
    pub max_depth_seen: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_default_is_zeroed() {
        let stats = FlattenStats::default();
        assert_eq!(stats.folders, 0);
        assert_eq!(stats.requests, 0);
        assert_eq!(stats.max_depth_seen, 0);
    }

    #[test]
    fn output_serialises_to_json() {
        let out = ConversionOutput {
            markdown: "# Doc\n".into(),
            stylesheet: "@page {}".into(),
            stats: FlattenStats::default(),
        };
        let json = serde_json::to_string(&out).unwrap();
        assert!(json.contains("\"markdown\""));
        assert!(json.contains("\"skipped_items\":0"));
    }
}
