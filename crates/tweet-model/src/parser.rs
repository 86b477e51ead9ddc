//! Decoding of stream messages.
//!
//! Streaming endpoints deliver one JSON document per line and send bare
//! newlines as keep-alives. [`decode_lines`] walks such a stream lazily and
//! hands back each decoded [`Tweet`] together with its raw line, so a
//! consumer can forward the original bytes untouched.

use crate::error::{DecodeError, Result};
use crate::types::Tweet;
use std::io::BufRead;

/// A decoded stream line
#[derive(Debug, Clone)]
pub struct DecodedLine {
    /// 1-based line number within the stream
    pub line_no: usize,
    /// The line exactly as read, without the trailing newline
    pub raw: String,
    pub tweet: Tweet,
}

/// Decode a single JSON message
pub fn decode_record(json: &str) -> Result<Tweet> {
    serde_json::from_str(json).map_err(|source| DecodeError::Json { line: 0, source })
}

/// Decode a newline-delimited stream of messages.
///
/// Blank lines are skipped. A malformed line yields an `Err` for that line
/// only; iteration continues with the next one.
pub fn decode_lines<R: BufRead>(reader: R) -> impl Iterator<Item = Result<DecodedLine>> {
    reader
        .lines()
        .enumerate()
        .filter_map(|(idx, line)| {
            let line_no = idx + 1;
            let raw = match line {
                Ok(raw) => raw,
                Err(e) => return Some(Err(DecodeError::Io(e))),
            };
            if raw.trim().is_empty() {
                return None;
            }
            let decoded = serde_json::from_str::<Tweet>(&raw)
                .map(|tweet| DecodedLine { line_no, raw, tweet })
                .map_err(|source| {
                    tracing::debug!(line_no, "Skipping undecodable stream line");
                    DecodeError::Json { line: line_no, source }
                });
            Some(decoded)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_decode_record() {
        let tweet = decode_record(r#"{"id": 7, "lang": "en"}"#).unwrap();
        assert_eq!(tweet.id, Some(7));
        assert_eq!(tweet.lang(), Some("en"));
    }

    #[test]
    fn test_decode_record_invalid() {
        let err = decode_record("{not json").unwrap_err();
        assert!(matches!(err, DecodeError::Json { line: 0, .. }));
    }

    #[test]
    fn test_decode_lines_skips_keep_alives() {
        let input = "{\"id\": 1}\n\n  \n{\"limit\": {\"track\": 5}}\n";
        let lines: Vec<_> = decode_lines(Cursor::new(input))
            .collect::<Result<Vec<_>>>()
            .unwrap();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].line_no, 1);
        assert_eq!(lines[0].raw, "{\"id\": 1}");
        assert_eq!(lines[1].line_no, 4);
        assert!(lines[1].tweet.limit.is_some());
    }

    #[test]
    fn test_decode_lines_reports_bad_line_and_continues() {
        let input = "{\"id\": 1}\ngarbage\n{\"id\": 3}\n";
        let results: Vec<_> = decode_lines(Cursor::new(input)).collect();

        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        assert!(matches!(results[1], Err(DecodeError::Json { line: 2, .. })));
        assert_eq!(results[2].as_ref().unwrap().tweet.id, Some(3));
    }
}
