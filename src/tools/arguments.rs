//! Typed access to tool call arguments.

use crate::error::ServerError;

/// Wrapper around tool call arguments providing typed extraction.
#[derive(Debug, Clone)]
pub struct ToolArguments {
    value: serde_json::Value,
}

impl ToolArguments {
    pub fn new(value: serde_json::Value) -> Self {
        Self { value }
    }

    /// Get a required string argument by key.
    pub fn get_str(&self, key: &str) -> Result<&str, ServerError> {
        self.value
            .get(key)
            .and_then(|v| v.as_str())
            .ok_or_else(|| ServerError::InvalidArgument(format!("Missing string argument: {key}")))
    }

    /// Get an optional string argument.
    pub fn get_str_opt(&self, key: &str) -> Option<&str> {
        self.value.get(key).and_then(|v| v.as_str())
    }

    /// Get an optional integer argument.
    pub fn get_i64_opt(&self, key: &str) -> Option<i64> {
        self.value.get(key).and_then(|v| v.as_i64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn get_str_requires_presence() {
        let args = ToolArguments::new(json!({"text": "hi"}));
        assert_eq!(args.get_str("text").unwrap(), "hi");
        assert!(matches!(
            args.get_str("voice_uuid"),
            Err(ServerError::InvalidArgument(_))
        ));
    }

    #[test]
    fn optional_getters_return_none_when_absent() {
        let args = ToolArguments::new(json!({"page": -3}));
        assert_eq!(args.get_i64_opt("page"), Some(-3));
        assert_eq!(args.get_i64_opt("page_size"), None);
        assert_eq!(args.get_str_opt("output_format"), None);
    }
}
