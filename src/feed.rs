//! Reading raw entries the way the group times endpoint returns them.

use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

use crate::models::{EntriesPayload, Result, TimeEntry};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawFeed {
    Payload(EntriesPayload),
    Entries(Vec<TimeEntry>),
}

/// Entries carried by `payload`; none if it reports an error.
pub fn entries_from_payload(payload: EntriesPayload) -> Result<Vec<TimeEntry>> {
    if payload.has_error() {
        warn!(
            error = payload.error_message.as_deref().unwrap_or_default(),
            "Entries payload reported an error, treating as empty"
        );
        return Ok(Vec::new());
    }

    for entry in &payload.entries {
        entry.validate()?;
    }

    Ok(payload.entries)
}

/// Parse either a `{ entries, errorMessage }` payload or a bare entry array.
pub fn parse_entries(json: &str) -> Result<Vec<TimeEntry>> {
    let payload = match serde_json::from_str::<RawFeed>(json)? {
        RawFeed::Payload(payload) => payload,
        RawFeed::Entries(entries) => EntriesPayload {
            entries,
            error_message: None,
        },
    };

    let entries = entries_from_payload(payload)?;
    debug!(count = entries.len(), "Parsed entries");
    Ok(entries)
}

/// Load entries from a JSON file, or stdin when `path` is `-`.
pub fn load_entries<P: AsRef<Path>>(path: P) -> Result<Vec<TimeEntry>> {
    let path = path.as_ref();
    let json = if path == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        std::fs::read_to_string(path)?
    };

    parse_entries(&json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LeaderboardError;
    use std::io::Write;

    #[test]
    fn test_parses_payload_object() {
        let entries = parse_entries(
            r#"{"entries":[{"username":"alice","date":"2024-03-04","time":41}],"errorMessage":""}"#,
        )
        .unwrap();
        assert_eq!(entries, vec![TimeEntry::new("alice", "2024-03-04", 41.0)]);
    }

    #[test]
    fn test_parses_bare_array() {
        let entries = parse_entries(
            r#"[{"username":"bob","date":"2024-03-04","time":12.5},{"username":"alice","date":"2024-03-04","time":41}]"#,
        )
        .unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].time, 12.5);
    }

    #[test]
    fn test_error_message_means_no_entries() {
        let entries = parse_entries(
            r#"{"entries":[{"username":"alice","date":"2024-03-04","time":41}],"errorMessage":"db down"}"#,
        )
        .unwrap();
        assert!(entries.is_empty());

        assert!(parse_entries(r#"{"errorMessage":"db down"}"#).unwrap().is_empty());
    }

    #[test]
    fn test_rejects_negative_time() {
        assert!(matches!(
            parse_entries(r#"[{"username":"bob","date":"2024-03-04","time":-3}]"#),
            Err(LeaderboardError::InvalidTime { .. })
        ));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            parse_entries("not json"),
            Err(LeaderboardError::SerializationError(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"username":"bob","date":"2024-03-04","time":12}}]"#).unwrap();
        let entries = load_entries(file.path()).unwrap();
        assert_eq!(entries.len(), 1);
        assert!(load_entries("/definitely/not/here.json").is_err());
    }
}
