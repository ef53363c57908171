//! Sample loading functionality.
//!
//! This module reads the values to classify from a file or stdin. Two
//! formats are accepted: a JSON array of numbers, or plain numbers separated
//! by whitespace or commas.

use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

use crate::error::{ensure_finite, Result, SymbologyError};

/// Load a sample from `path`, or from stdin when the path is `-`
pub fn load_sample(path: &Path) -> Result<Vec<f64>> {
    let content = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        // Check if the file exists
        if !path.exists() {
            return Err(SymbologyError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("File not found: {}", path.display()),
            )));
        }
        std::fs::read_to_string(path)?
    };

    let sample = parse_sample(&content)?;
    info!(
        source = %path.display(),
        values = sample.len(),
        "Sample loaded"
    );
    Ok(sample)
}

/// Parse a sample from text
pub fn parse_sample(content: &str) -> Result<Vec<f64>> {
    let trimmed = content.trim();

    let sample = if trimmed.starts_with('[') {
        debug!("Parsing sample as JSON");
        serde_json::from_str::<Vec<f64>>(trimmed)?
    } else {
        trimmed
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .map(|token| {
                token
                    .parse::<f64>()
                    .map_err(|e| SymbologyError::InvalidParameter {
                        param: "sample".to_string(),
                        message: format!("'{}' is not a number: {}", token, e),
                    })
            })
            .collect::<Result<Vec<f64>>>()?
    };

    validate_sample(&sample)?;
    Ok(sample)
}

/// Reject samples that can never be classified
fn validate_sample(sample: &[f64]) -> Result<()> {
    ensure_finite(sample, "sample")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_json() {
        assert_eq!(parse_sample("[1, 2.5, -3]").unwrap(), vec![1.0, 2.5, -3.0]);
        assert_eq!(parse_sample("  []  ").unwrap(), Vec::<f64>::new());
    }

    #[test]
    fn test_parse_plain() {
        assert_eq!(
            parse_sample("1 2\n3,4\t5.5").unwrap(),
            vec![1.0, 2.0, 3.0, 4.0, 5.5]
        );
        assert!(parse_sample("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            parse_sample("1 two 3"),
            Err(SymbologyError::InvalidParameter { .. })
        ));
        assert!(matches!(
            parse_sample("[1, \"a\"]"),
            Err(SymbologyError::Json(_))
        ));
        assert!(matches!(
            parse_sample("1 NaN"),
            Err(SymbologyError::NonFiniteValue { .. })
        ));
    }

    #[test]
    fn test_file_not_found() {
        let result = load_sample(Path::new("/nonexistent/sample.json"));
        assert!(matches!(result, Err(SymbologyError::Io(_))));
    }

    #[test]
    fn test_load_from_file() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        writeln!(file, "10 20 30")?;

        let sample = load_sample(file.path())?;
        assert_eq!(sample, vec![10.0, 20.0, 30.0]);
        Ok(())
    }
}
