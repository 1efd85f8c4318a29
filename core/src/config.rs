use serde::{Deserialize, Serialize};

/// Name of the variable that carries the deployment environment.
pub const ENVIRONMENT_VAR: &str = "ENVIRONMENT";

/// Reported when [`ENVIRONMENT_VAR`] is not set.
pub const DEFAULT_ENVIRONMENT: &str = "unknown";

/// Deployment settings the handler reports back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct EnvironmentConfig {
    pub environment: String,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ENVIRONMENT)
    }
}

impl EnvironmentConfig {
    pub fn new(environment: impl Into<String>) -> Self {
        Self {
            environment: environment.into(),
        }
    }

    /// Reads the process environment. A set-but-empty value is kept as-is.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| {
            std::env::var_os(key).map(|value| value.to_string_lossy().into_owned())
        })
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(ENVIRONMENT_VAR) {
            Some(environment) => Self::new(environment),
            None => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_missing_variable_defaults_to_unknown() {
        let config = EnvironmentConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config.environment, "unknown");
        assert_eq!(config, EnvironmentConfig::default());
    }

    #[test]
    fn test_variable_value_is_used() {
        let config = EnvironmentConfig::from_lookup(lookup_from(&[("ENVIRONMENT", "production")]));
        assert_eq!(config.environment, "production");
    }

    #[test]
    fn test_empty_value_is_not_replaced() {
        let config = EnvironmentConfig::from_lookup(lookup_from(&[("ENVIRONMENT", "")]));
        assert_eq!(config.environment, "");
    }

    #[test]
    fn test_unrelated_variables_are_ignored() {
        let config = EnvironmentConfig::from_lookup(lookup_from(&[("ENV", "staging")]));
        assert_eq!(config.environment, DEFAULT_ENVIRONMENT);
    }
}
