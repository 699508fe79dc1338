use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// Represents the backends the dashboard can poll.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Environment {
    /// Local development server.
    Local,
    /// Hosted SIMOC deployment.
    #[default]
    Production,
    /// Any other server, addressed by its base URL.
    Custom { base_url: String },
}

impl Environment {
    /// Returns the base URL of the simulation server for this environment.
    pub fn base_url(&self) -> String {
        match self {
            Environment::Local => "http://localhost:8000".to_string(),
            Environment::Production => "https://ngs.simoc.space".to_string(),
            Environment::Custom { base_url } => base_url.clone(),
        }
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            "local" => Ok(Environment::Local),
            "production" | "prod" => Ok(Environment::Production),
            _ if trimmed.starts_with("http://") || trimmed.starts_with("https://") => {
                Ok(Environment::Custom {
                    base_url: trimmed.trim_end_matches('/').to_string(),
                })
            }
            _ => Err(format!(
                "Unknown environment '{}': expected 'local', 'production' or an http(s) URL",
                s
            )),
        }
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Local => write!(f, "Local"),
            Environment::Production => write!(f, "Production"),
            Environment::Custom { .. } => write!(f, "Custom"),
        }
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Environment::{}, URL: {}", self, self.base_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_named_environments() {
        assert_eq!("local".parse::<Environment>(), Ok(Environment::Local));
        assert_eq!("Production".parse::<Environment>(), Ok(Environment::Production));
        assert_eq!("prod".parse::<Environment>(), Ok(Environment::Production));
    }

    #[test]
    // A URL becomes a custom environment without its trailing slash.
    fn test_parse_custom_url() {
        let env = "http://10.0.0.5:8080/".parse::<Environment>().unwrap();
        assert_eq!(env.base_url(), "http://10.0.0.5:8080");
        assert_eq!(env.to_string(), "Custom");
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!("staging".parse::<Environment>().is_err());
        assert!("".parse::<Environment>().is_err());
    }
}
