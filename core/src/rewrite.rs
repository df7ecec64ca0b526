use crate::command::DatasetCommand;
use crate::error::DecodeError;
use crate::payload::{decode_get, decode_set};
use std::ffi::{OsStr, OsString};

pub const CMD_FLAG: &str = "--cmd";

/// Arguments split into the ones forwarded as-is and the guestinfo
/// commands generated from a translated dataset command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RewrittenArguments {
    /// Every original argument except the translated `--cmd` pair.
    /// Index 0 is the program name. Kept as OS strings so arguments that
    /// are not valid UTF-8 still reach the daemon byte for byte.
    pub common: Vec<OsString>,
    pub generated: Vec<String>,
}

/// Translate the first `--cmd <dataset command>` pair found in `args`.
///
/// Index 0 is never inspected. Arguments after the translated pair are
/// copied through untouched, including further dataset commands. A `--cmd`
/// value that is not valid UTF-8 is never a dataset command.
pub fn rewrite<S: AsRef<OsStr>>(args: &[S]) -> Result<RewrittenArguments, DecodeError> {
    let mut rewritten = RewrittenArguments {
        common: Vec::with_capacity(args.len()),
        generated: Vec::new(),
    };
    let mut translated = false;

    let mut i = 0;
    while i < args.len() {
        let arg = args[i].as_ref();

        if !translated && i > 0 && arg == CMD_FLAG && i + 1 < args.len() {
            let value = args[i + 1].as_ref().to_str().unwrap_or_default();
            let generated = match DatasetCommand::parse(value) {
                DatasetCommand::GetEntry(json) => Some(decode_get(json)?),
                DatasetCommand::SetEntry(json) => Some(decode_set(json)?),
                DatasetCommand::NotDataset => None,
            };

            if let Some(generated) = generated {
                rewritten.generated.extend(generated);
                translated = true;
                i += 2;
                continue;
            }
        }

        rewritten.common.push(arg.to_os_string());
        i += 1;
    }

    Ok(rewritten)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    fn os(args: &[&str]) -> Vec<OsString> {
        args.iter().map(OsString::from).collect()
    }

    #[test]
    fn test_rewrite_without_dataset_command() {
        let args = ["prog", "--cmd", "info-get guestinfo.a", "-v"];
        let r = rewrite(&args).unwrap();
        assert_eq!(r.common, os(&args));
        assert!(r.generated.is_empty());
    }

    #[test]
    fn test_rewrite_get_entry() {
        let args = [
            "prog",
            "--cmd",
            r#"datasets-get-entry {"dataset":"x","keys":["k1"]}"#,
        ];
        let r = rewrite(&args).unwrap();
        assert_eq!(r.common, os(&["prog"]));
        assert_eq!(r.generated, strings(&["info-get guestinfo.x.k1"]));
    }

    #[test]
    fn test_rewrite_keeps_surrounding_arguments() {
        let args = [
            "prog",
            "--debug",
            "--cmd",
            r#"datasets-set-entry {"dataset":"x","entries":[{"key":"a","value":1},{"key":"b","value":"v"}]}"#,
            "--tail",
        ];
        let r = rewrite(&args).unwrap();
        assert_eq!(r.common, os(&["prog", "--debug", "--tail"]));
        assert_eq!(
            r.generated,
            strings(&["info-set guestinfo.x.a 1", r#"info-set guestinfo.x.b "v""#])
        );
    }

    #[test]
    fn test_rewrite_ignores_program_name() {
        let args = ["--cmd", r#"datasets-get-entry {"keys":["k"]}"#];
        let r = rewrite(&args).unwrap();
        assert_eq!(r.common, os(&args));
        assert!(r.generated.is_empty());
    }

    #[test]
    fn test_rewrite_trailing_flag_passes_through() {
        let args = ["prog", "--cmd"];
        let r = rewrite(&args).unwrap();
        assert_eq!(r.common, os(&args));
    }

    #[test]
    fn test_rewrite_rescans_after_unmatched_flag() {
        let args = [
            "prog",
            "--cmd",
            "--cmd",
            r#"datasets-get-entry {"dataset":"x","keys":["k"]}"#,
        ];
        let r = rewrite(&args).unwrap();
        assert_eq!(r.common, os(&["prog", "--cmd"]));
        assert_eq!(r.generated, strings(&["info-get guestinfo.x.k"]));
    }

    #[test]
    fn test_rewrite_translates_only_first_command() {
        let second = r#"datasets-get-entry {"dataset":"y","keys":["k"]}"#;
        let args = [
            "prog",
            "--cmd",
            r#"datasets-get-entry {"dataset":"x","keys":["k"]}"#,
            "--cmd",
            second,
        ];
        let r = rewrite(&args).unwrap();
        assert_eq!(r.common, os(&["prog", "--cmd", second]));
        assert_eq!(r.generated, strings(&["info-get guestinfo.x.k"]));
    }

    #[test]
    fn test_rewrite_empty_payload_generates_nothing() {
        let args = ["prog", "--cmd", r#"datasets-get-entry {"keys":[]}"#];
        let r = rewrite(&args).unwrap();
        assert_eq!(r.common, os(&["prog"]));
        assert!(r.generated.is_empty());
    }

    #[test]
    fn test_rewrite_malformed_json_is_fatal() {
        let args = ["prog", "--cmd", "datasets-set-entry {not json}"];
        assert!(matches!(rewrite(&args), Err(DecodeError::Set(_))));
    }

    #[test]
    fn test_rewrite_whitespace_payload_is_fatal() {
        let args = ["prog", "--cmd", "datasets-set-entry   "];
        assert!(matches!(rewrite(&args), Err(DecodeError::Set(_))));
    }

    #[cfg(unix)]
    #[test]
    fn test_rewrite_passes_non_utf8_arguments() {
        use std::os::unix::ffi::OsStrExt;

        let raw = OsStr::from_bytes(b"--label=\xff\xfe");
        let args = [OsStr::new("prog"), raw, OsStr::new("--cmd"), raw];
        let r = rewrite(&args).unwrap();
        assert_eq!(
            r.common,
            vec![
                OsString::from("prog"),
                raw.to_os_string(),
                OsString::from("--cmd"),
                raw.to_os_string(),
            ]
        );
        assert!(r.generated.is_empty());
    }

    #[test]
    fn test_rewrite_empty_args() {
        let args: [&str; 0] = [];
        assert_eq!(rewrite(&args).unwrap(), RewrittenArguments::default());
    }
}
