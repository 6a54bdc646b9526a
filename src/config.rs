use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;
use std::time::Duration;

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: default_user_agent(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        let mut config = Self::new(get_env("JOBBOARD_API_URL")?);
        if let Some(secs) = get_env_parse_opt::<u64>("JOBBOARD_HTTP_TIMEOUT_SECS")? {
            config.timeout = Duration::from_secs(secs);
        }
        if let Ok(agent) = env::var("JOBBOARD_USER_AGENT") {
            config.user_agent = agent;
        }

        Ok(config)
    }
}

fn default_user_agent() -> String {
    format!("jobboard-client/{}", env!("CARGO_PKG_VERSION"))
}

fn get_env(name: &str) -> Result<String> {
    env::var(name).map_err(|_| Error::Config(format!("Missing environment variable: {}", name)))
}

fn get_env_parse_opt<T>(name: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map(Some)
            .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e))),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ClientConfig::new("https://api.example.com");
        assert_eq!(config.base_url, "https://api.example.com");
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert!(config.user_agent.starts_with("jobboard-client/"));
    }

    #[test]
    fn builder_setters() {
        let config = ClientConfig::new("http://localhost:5000")
            .with_timeout(Duration::from_secs(5))
            .with_user_agent("admin-dashboard/2.1");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.user_agent, "admin-dashboard/2.1");
    }

    // Single test owns the JOBBOARD_* variables; parallel test threads share
    // the process environment.
    #[test]
    fn from_env_round_trip() {
        env::remove_var("JOBBOARD_API_URL");
        env::remove_var("JOBBOARD_HTTP_TIMEOUT_SECS");
        assert!(ClientConfig::from_env().is_err());

        env::set_var("JOBBOARD_API_URL", "https://jobs.example.com");
        env::set_var("JOBBOARD_HTTP_TIMEOUT_SECS", "7");
        let config = ClientConfig::from_env().expect("config");
        assert_eq!(config.base_url, "https://jobs.example.com");
        assert_eq!(config.timeout, Duration::from_secs(7));

        env::set_var("JOBBOARD_HTTP_TIMEOUT_SECS", "not-a-number");
        assert!(ClientConfig::from_env().is_err());

        env::remove_var("JOBBOARD_API_URL");
        env::remove_var("JOBBOARD_HTTP_TIMEOUT_SECS");
    }
}
