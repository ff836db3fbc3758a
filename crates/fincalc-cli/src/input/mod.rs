pub mod file;
pub mod stdin;

use serde::de::DeserializeOwned;

/// Resolve a command's input: `--input <file>` first, then JSON piped on
/// stdin, then the command's own flags.
pub fn resolve<T, F>(path: Option<&str>, from_flags: F) -> Result<T, Box<dyn std::error::Error>>
where
    T: DeserializeOwned,
    F: FnOnce() -> Result<T, Box<dyn std::error::Error>>,
{
    if let Some(path) = path {
        let (full, contents) = file::read_file(path)?;
        tracing::debug!(path = %full.display(), "reading input file");
        return parse(&contents, &format!("'{}'", full.display()));
    }
    if let Some(contents) = stdin::read_stdin()? {
        tracing::debug!(bytes = contents.len(), "reading input from stdin");
        return parse(&contents, "stdin");
    }
    tracing::debug!("building input from flags");
    from_flags()
}

fn parse<T: DeserializeOwned>(contents: &str, source: &str) -> Result<T, Box<dyn std::error::Error>> {
    serde_json::from_str(contents).map_err(|e| format!("Failed to parse {}: {}", source, e).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fincalc_core::lending::emi::EmiInput;
    use rust_decimal::Decimal;

    #[test]
    fn test_parse_reports_source() {
        let err = parse::<EmiInput>("{", "stdin").unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse stdin"));
    }

    #[test]
    fn test_parse_decimal_strings() {
        let input: EmiInput =
            parse(r#"{"principal":"500000","annual_rate_pct":"8.5","months":60}"#, "stdin").unwrap();
        assert_eq!(input.months, 60);
        assert_eq!(input.principal, Decimal::from(500_000));
    }

    #[test]
    fn test_missing_file() {
        let err = resolve::<EmiInput, _>(Some("no/such/input.json"), || unreachable!()).unwrap_err();
        assert!(err.to_string().starts_with("File not found"));
    }
}
