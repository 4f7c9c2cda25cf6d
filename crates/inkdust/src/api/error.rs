use thiserror::Error;

/// Errors surfaced at the engine's fallible edges: configuration and drawing surfaces.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration or phrase JSON failed to parse.
    #[error("Failed to parse configuration: {0}")]
    Config(#[from] serde_json::Error),
    /// Configuration parsed but describes an impossible setup.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    /// A drawing surface rejected an operation.
    #[error("Surface operation `{op}` failed: {reason}")]
    Surface {
        /// Name of the surface call that failed
        op: &'static str,
        /// Backend-provided description
        reason: String,
    },
}

impl Error {
    pub fn surface(op: &'static str, reason: impl Into<String>) -> Self {
        Error::Surface {
            op,
            reason: reason.into(),
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surface_error_names_the_call() {
        let err = Error::surface("fill_text", "context lost");
        assert_eq!(err.to_string(), "Surface operation `fill_text` failed: context lost");
    }

    #[test]
    fn json_errors_convert() {
        let parse: std::result::Result<u32, _> = serde_json::from_str("nope");
        let err: Error = parse.unwrap_err().into();
        assert!(matches!(err, Error::Config(_)));
    }
}
