use std::fmt;

#[derive(Debug, Clone)]
pub enum PlannerError {
    ValidationError(String),
    ApiError(String),
    ParseError(String),
    ConfigError(String),
    NetworkError(String),
}

impl fmt::Display for PlannerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlannerError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            PlannerError::ApiError(msg) => write!(f, "API error: {}", msg),
            PlannerError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            PlannerError::ConfigError(msg) => write!(f, "Config error: {}", msg),
            PlannerError::NetworkError(msg) => write!(f, "Network error: {}", msg),
        }
    }
}

impl std::error::Error for PlannerError {}

impl From<String> for PlannerError {
    fn from(msg: String) -> Self {
        PlannerError::ValidationError(msg)
    }
}

impl From<&str> for PlannerError {
    fn from(msg: &str) -> Self {
        PlannerError::ValidationError(msg.to_string())
    }
}

impl From<reqwest::Error> for PlannerError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() || err.is_connect() {
            PlannerError::NetworkError(err.to_string())
        } else {
            PlannerError::ApiError(err.to_string())
        }
    }
}

impl From<reqwest::header::ToStrError> for PlannerError {
    fn from(err: reqwest::header::ToStrError) -> Self {
        PlannerError::ParseError(err.to_string())
    }
}

impl From<serde_json::Error> for PlannerError {
    fn from(err: serde_json::Error) -> Self {
        PlannerError::ParseError(err.to_string())
    }
}

impl From<std::io::Error> for PlannerError {
    fn from(err: std::io::Error) -> Self {
        PlannerError::ConfigError(err.to_string())
    }
}

impl From<actix_web::mime::FromStrError> for PlannerError {
    fn from(err: actix_web::mime::FromStrError) -> Self {
        PlannerError::ParseError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as StdError;

    #[test]
    fn test_error_display_validation_error() {
        let error = PlannerError::ValidationError("age out of range".to_string());
        assert_eq!(error.to_string(), "Validation error: age out of range");
    }

    #[test]
    fn test_error_display_api_error() {
        let error = PlannerError::ApiError("upstream failed".to_string());
        assert_eq!(error.to_string(), "API error: upstream failed");
    }

    #[test]
    fn test_error_display_parse_error() {
        let error = PlannerError::ParseError("invalid JSON".to_string());
        assert_eq!(error.to_string(), "Parse error: invalid JSON");
    }

    #[test]
    fn test_error_display_config_error() {
        let error = PlannerError::ConfigError("missing config".to_string());
        assert_eq!(error.to_string(), "Config error: missing config");
    }

    #[test]
    fn test_error_display_network_error() {
        let error = PlannerError::NetworkError("connection refused".to_string());
        assert_eq!(error.to_string(), "Network error: connection refused");
    }

    #[test]
    fn test_error_from_string() {
        let error: PlannerError = "bad field".to_string().into();
        match error {
            PlannerError::ValidationError(msg) => assert_eq!(msg, "bad field"),
            _ => panic!("Expected ValidationError"),
        }
    }

    #[test]
    fn test_error_from_serde_json() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{bad").unwrap_err();
        let error: PlannerError = parse_err.into();
        assert!(matches!(error, PlannerError::ParseError(_)));
    }

    #[test]
    fn test_error_source() {
        let error = PlannerError::ApiError("upstream".to_string());
        assert!(error.source().is_none());
    }

    #[test]
    fn test_error_clone() {
        let error = PlannerError::NetworkError("timeout".to_string());
        let cloned = error.clone();
        assert_eq!(error.to_string(), cloned.to_string());
    }
}
