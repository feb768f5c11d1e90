//! Vagrant machine-readable output format
//!
//! With `--machine-readable`, vagrant emits one record per stdout line:
//!
//! ```text
//! timestamp,target,type,data...
//! ```
//!
//! - `timestamp` is unix epoch seconds; it is kept verbatim and never
//!   interpreted.
//! - `target` is the machine the record applies to; an empty field means the
//!   record is global.
//! - `type` names the record kind (`ui`, `state`, `error-exit`, ...).
//! - `data...` is zero or more payload fields.
//!
//! Commas inside payload fields arrive escaped as `%!(VAGRANT_COMMA)`, and
//! newlines/carriage returns as the two-character sequences `\n` and `\r`.
//! Parsing reverses those escapes.

/// Escape sequence vagrant substitutes for a literal comma in a field.
const COMMA_ESCAPE: &str = "%!(VAGRANT_COMMA)";

/// A single parsed machine-readable record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Unix epoch seconds, verbatim from the wire.
    pub timestamp: String,
    /// Machine this record applies to; `None` for global records.
    pub target: Option<String>,
    /// Record kind, e.g. `state`, `metadata`, `error-exit`.
    pub kind: String,
    /// Payload fields with wire escapes reversed, order preserved.
    pub data: Vec<String>,
}

impl Record {
    /// Parse one stdout line into a record.
    ///
    /// Returns `None` for lines that are not machine-readable records
    /// (fewer than three comma-separated fields). Vagrant plugins may write
    /// free-form text to stdout, so such lines are expected and skipped by
    /// callers rather than treated as errors.
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        let mut fields = line.split(',');
        let timestamp = fields.next()?.to_string();
        let target = fields.next()?;
        let kind = fields.next()?;
        if kind.is_empty() {
            return None;
        }

        let target = if target.is_empty() {
            None
        } else {
            Some(unescape(target))
        };

        Some(Self {
            timestamp,
            target,
            kind: kind.to_string(),
            data: fields.map(unescape).collect(),
        })
    }

    /// First payload field, if any.
    #[must_use]
    pub fn first(&self) -> Option<&str> {
        self.data.first().map(String::as_str)
    }
}

/// Parse a whole captured stdout stream into records.
///
/// Non-record lines (plugin chatter, blank lines) are skipped silently.
#[must_use]
pub fn parse_stream(text: &str) -> Vec<Record> {
    text.lines().filter_map(Record::parse).collect()
}

/// Reverse the wire escapes vagrant applies to a field.
fn unescape(field: &str) -> String {
    // Fast path: nothing escaped, which is the common case for state and
    // metadata records.
    if !field.contains('%') && !field.contains('\\') {
        return field.to_string();
    }

    field
        .replace(COMMA_ESCAPE, ",")
        .replace("\\n", "\n")
        .replace("\\r", "\r")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_parse_state_record() {
        let rec = Record::parse("1645487495,default,state,running").unwrap();
        assert_eq!(rec.timestamp, "1645487495");
        assert_eq!(rec.target.as_deref(), Some("default"));
        assert_eq!(rec.kind, "state");
        assert_eq!(rec.data, vec!["running"]);
    }

    #[test]
    fn test_parse_global_record_has_no_target() {
        let rec = Record::parse("1645487495,,version-installed,2.2.19").unwrap();
        assert!(rec.target.is_none());
        assert_eq!(rec.kind, "version-installed");
        assert_eq!(rec.first(), Some("2.2.19"));
    }

    #[test]
    fn test_parse_unescapes_commas() {
        let rec = Record::parse(
            "1645487495,default,error-exit,Vagrant::Errors::Example,first%!(VAGRANT_COMMA) second",
        )
        .unwrap();
        assert_eq!(rec.data[1], "first, second");
    }

    #[test]
    fn test_parse_unescapes_newlines() {
        let rec = Record::parse("1,default,ui,output,line one\\nline two").unwrap();
        assert_eq!(rec.data[1], "line one\nline two");
    }

    #[test]
    fn test_parse_preserves_field_order_and_duplicates() {
        let rec = Record::parse("1,default,ui,a,b,a").unwrap();
        assert_eq!(rec.data, vec!["a", "b", "a"]);
    }

    #[test]
    fn test_parse_rejects_short_lines() {
        assert!(Record::parse("").is_none());
        assert!(Record::parse("Bringing machine 'default' up...").is_none());
        assert!(Record::parse("1645487495,default").is_none());
    }

    #[test]
    fn test_parse_allows_empty_data() {
        let rec = Record::parse("1645487495,default,action,up,start").unwrap();
        assert_eq!(rec.data.len(), 2);

        let rec = Record::parse("1645487495,,ui").unwrap();
        assert!(rec.data.is_empty());
        assert!(rec.first().is_none());
    }

    #[test]
    fn test_parse_stream_skips_chatter() {
        let out = "\
1645487495,default,metadata,provider,virtualbox
==> default: Machine booted and ready!
1645487496,default,state,running

";
        let records = parse_stream(out);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].kind, "metadata");
        assert_eq!(records[1].kind, "state");
    }

    #[test]
    fn test_unescape_fast_path_is_identity() {
        assert_eq!(unescape("running"), "running");
        assert_eq!(unescape(""), "");
    }
}
