//! Result envelope for a conversion.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Markdown produced by a conversion together with its source.
///
/// Serializes with camelCase keys and the timestamp as Unix milliseconds:
///
/// ```json
/// { "markdown": "# Title", "sourceHtml": "<h1>Title</h1>", "timestamp": 1760486400000 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkifyResult {
    /// The resulting Markdown.
    pub markdown: String,

    /// The HTML the Markdown was generated from (fetched or supplied).
    pub source_html: String,

    /// When the conversion completed.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
}

impl MarkifyResult {
    /// Wrap a finished conversion, stamping it with the current time.
    #[must_use]
    pub fn new(markdown: String, source_html: String) -> Self {
        Self {
            markdown,
            source_html,
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_json_shape() {
        let result = MarkifyResult {
            markdown: "# Hi".to_string(),
            source_html: "<h1>Hi</h1>".to_string(),
            timestamp: Utc.timestamp_millis_opt(1_700_000_000_123).unwrap(),
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["markdown"], "# Hi");
        assert_eq!(json["sourceHtml"], "<h1>Hi</h1>");
        assert_eq!(json["timestamp"], 1_700_000_000_123_i64);

        let back: MarkifyResult = serde_json::from_value(json).unwrap();
        assert_eq!(back, result);
    }

    #[test]
    fn test_new_stamps_current_time() {
        let before = Utc::now();
        let result = MarkifyResult::new("md".to_string(), "<p>md</p>".to_string());
        assert!(result.timestamp >= before);
        assert_eq!(result.markdown, "md");
    }
}
