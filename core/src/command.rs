//! Recognition of dataset commands inside a `--cmd` value.
//!
//! Grammar:
//! ```text
//! value   = ws* keyword ws+ json ws*
//! keyword = "datasets-get-entry" | "datasets-set-entry"
//! json    = any non-empty text without a line feed
//! ```
//!
//! When only whitespace follows the separator, that whitespace is the
//! payload. It never decodes, so the command fails instead of passing
//! through.

pub const GET_ENTRY: &str = "datasets-get-entry";
pub const SET_ENTRY: &str = "datasets-set-entry";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetCommand<'a> {
    NotDataset,
    GetEntry(&'a str),
    SetEntry(&'a str),
}

impl<'a> DatasetCommand<'a> {
    pub fn parse(value: &'a str) -> Self {
        let rest = value.trim_start_matches(is_space);

        let (rest, get) = if let Some(rest) = rest.strip_prefix(GET_ENTRY) {
            (rest, true)
        } else if let Some(rest) = rest.strip_prefix(SET_ENTRY) {
            (rest, false)
        } else {
            return DatasetCommand::NotDataset;
        };

        let Some(separator) = rest.chars().next().filter(|c| is_space(*c)) else {
            return DatasetCommand::NotDataset;
        };
        let tail = &rest[separator.len_utf8()..];

        let trimmed = tail.trim_matches(is_space);
        let json = if trimmed.is_empty() {
            if !tail.contains(|c: char| c != '\n') {
                return DatasetCommand::NotDataset;
            }
            tail
        } else if trimmed.contains('\n') {
            return DatasetCommand::NotDataset;
        } else {
            trimmed
        };

        if get {
            DatasetCommand::GetEntry(json)
        } else {
            DatasetCommand::SetEntry(json)
        }
    }
}

fn is_space(c: char) -> bool {
    c.is_ascii_whitespace()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_get() {
        assert_eq!(
            DatasetCommand::parse(r#"datasets-get-entry {"keys":["a"]}"#),
            DatasetCommand::GetEntry(r#"{"keys":["a"]}"#)
        );
    }

    #[test]
    fn test_parse_set_with_surrounding_whitespace() {
        assert_eq!(
            DatasetCommand::parse(" \t datasets-set-entry \t {\"entries\":[]} \r\n"),
            DatasetCommand::SetEntry("{\"entries\":[]}")
        );
    }

    #[test]
    fn test_parse_keeps_inner_whitespace() {
        assert_eq!(
            DatasetCommand::parse("datasets-get-entry { \"keys\" : [ ] }"),
            DatasetCommand::GetEntry("{ \"keys\" : [ ] }")
        );
    }

    #[test]
    fn test_parse_requires_separator() {
        assert_eq!(
            DatasetCommand::parse("datasets-get-entry{}"),
            DatasetCommand::NotDataset
        );
    }

    #[test]
    fn test_parse_requires_payload() {
        assert_eq!(
            DatasetCommand::parse("datasets-get-entry"),
            DatasetCommand::NotDataset
        );
        assert_eq!(
            DatasetCommand::parse("datasets-set-entry "),
            DatasetCommand::NotDataset
        );
        assert_eq!(
            DatasetCommand::parse("datasets-get-entry \n"),
            DatasetCommand::NotDataset
        );
    }

    #[test]
    fn test_parse_whitespace_payload_is_kept() {
        assert_eq!(
            DatasetCommand::parse("datasets-set-entry   "),
            DatasetCommand::SetEntry("  ")
        );
        assert_eq!(
            DatasetCommand::parse("datasets-get-entry  \n"),
            DatasetCommand::GetEntry(" \n")
        );
    }

    #[test]
    fn test_parse_rejects_multiline_payload() {
        assert_eq!(
            DatasetCommand::parse("datasets-get-entry {\n\"keys\":[]}"),
            DatasetCommand::NotDataset
        );
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(
            DatasetCommand::parse("Datasets-Get-Entry {}"),
            DatasetCommand::NotDataset
        );
    }

    #[test]
    fn test_parse_other_commands() {
        assert_eq!(
            DatasetCommand::parse("info-get guestinfo.x"),
            DatasetCommand::NotDataset
        );
        assert_eq!(DatasetCommand::parse(""), DatasetCommand::NotDataset);
    }
}
