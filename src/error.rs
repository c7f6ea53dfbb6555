/// Errors from the outer layers (config I/O and the enhancement endpoint).
/// The normalization pipeline itself is pure string work and cannot fail.
#[derive(Debug, thiserror::Error)]
pub enum PolishError {
    #[error("Configuration error: {details}")]
    Config { details: String },

    #[error("Enhancement request failed: {source}")]
    Transport {
        #[from]
        source: reqwest::Error,
    },

    #[error("Malformed enhancement response: {details}")]
    MalformedResponse { details: String },

    #[error("IO error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_error_display() {
        let error = PolishError::Config {
            details: "missing endpoint".to_string(),
        };
        assert!(error.to_string().contains("Configuration error"));
        assert!(error.to_string().contains("missing endpoint"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let error = PolishError::from(io_error);

        match error {
            PolishError::Io { .. } => {
                assert!(error.to_string().contains("IO error"));
            }
            _ => panic!("Expected Io variant"),
        }
    }

    #[test]
    fn test_malformed_response_message() {
        let error = PolishError::MalformedResponse {
            details: "missing 'response' field".to_string(),
        };
        assert!(error.to_string().contains("missing 'response' field"));
    }
}
