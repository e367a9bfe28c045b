use thiserror::Error;

/// Application error types
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Why a single plans fetch did not produce data.
///
/// Never shown to visitors: the loader absorbs it and the page falls back to
/// the static plan set. It only exists so logs and metrics can tell the cases
/// apart.
#[derive(Debug, Error)]
pub enum PlanLoadError {
    /// Upstream answered with a non-success status
    #[error("plans API returned HTTP {0}")]
    Status(u16),
    /// Body was not the expected JSON shape
    #[error("failed to decode plans response: {0}")]
    Decode(String),
    /// Connection refused, DNS failure, timeout, ...
    #[error("plans API unreachable: {0}")]
    Network(#[from] reqwest::Error),
}

impl PlanLoadError {
    /// Short label used as the `reason` metric/log field
    pub fn reason(&self) -> &'static str {
        match self {
            Self::Status(_) => "status",
            Self::Decode(_) => "decode",
            Self::Network(err) if err.is_timeout() => "timeout",
            Self::Network(_) => "network",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = AppError::ConfigError("api.base_url is empty".to_string());
        assert_eq!(error.to_string(), "Configuration error: api.base_url is empty");
    }

    #[test]
    fn test_plan_load_error_reason() {
        assert_eq!(PlanLoadError::Status(503).reason(), "status");
        assert_eq!(PlanLoadError::Decode("eof".to_string()).reason(), "decode");
        assert_eq!(PlanLoadError::Status(404).to_string(), "plans API returned HTTP 404");
    }
}
