//! Client settings, which are configurable using environment variables.
use crate::config::get_config;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OrthancSettings {
    /// Base URL of the Orthanc server, e.g. `http://localhost:8042`
    #[serde(default = "default_url")]
    pub url: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    /// Total timeout of each HTTP request. Unset means no timeout.
    #[serde(default, with = "humantime_serde")]
    pub timeout: Option<Duration>,
}

impl OrthancSettings {
    /// Read settings from `ORTHANC_*` environment variables.
    pub fn from_env() -> Result<Self, figment::Error> {
        get_config().extract()
    }

    /// Username and password, only if both are given.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        self.username
            .as_deref()
            .zip(self.password.as_deref())
    }
}

impl Default for OrthancSettings {
    fn default() -> Self {
        Self {
            url: default_url(),
            username: None,
            password: None,
            timeout: None,
        }
    }
}

fn default_url() -> String {
    "http://localhost:8042".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_defaults_without_env() {
        Jail::expect_with(|_jail| {
            let settings = OrthancSettings::from_env()?;
            assert_eq!(settings, OrthancSettings::default());
            assert!(settings.credentials().is_none());
            Ok(())
        })
    }

    #[test]
    fn test_from_env() {
        Jail::expect_with(|jail| {
            jail.set_env("ORTHANC_URL", "http://pacs.example.org:8042");
            jail.set_env("ORTHANC_USERNAME", "alice");
            jail.set_env("ORTHANC_PASSWORD", "s3cret");
            jail.set_env("ORTHANC_TIMEOUT", "90s");
            let settings = OrthancSettings::from_env()?;
            assert_eq!(settings.url, "http://pacs.example.org:8042");
            assert_eq!(settings.credentials(), Some(("alice", "s3cret")));
            assert_eq!(settings.timeout, Some(Duration::from_secs(90)));
            Ok(())
        })
    }

    #[test]
    fn test_credentials_need_both_parts() {
        Jail::expect_with(|jail| {
            jail.set_env("ORTHANC_USERNAME", "alice");
            let settings = OrthancSettings::from_env()?;
            assert_eq!(settings.username.as_deref(), Some("alice"));
            assert!(settings.credentials().is_none());
            Ok(())
        })
    }

    #[test]
    fn test_numeric_credentials_stay_text() {
        Jail::expect_with(|jail| {
            jail.set_env("ORTHANC_USERNAME", "1001");
            jail.set_env("ORTHANC_PASSWORD", "007");
            let settings = OrthancSettings::from_env()?;
            assert_eq!(settings.credentials(), Some(("1001", "007")));
            Ok(())
        })
    }

    #[test]
    fn test_numeric_password() {
        Jail::expect_with(|jail| {
            jail.set_env("ORTHANC_USERNAME", "orthanc");
            jail.set_env("ORTHANC_PASSWORD", "123456");
            jail.set_env("ORTHANC_TIMEOUT", "5s");
            let settings = OrthancSettings::from_env()?;
            assert_eq!(settings.credentials(), Some(("orthanc", "123456")));
            assert_eq!(settings.timeout, Some(Duration::from_secs(5)));
            Ok(())
        })
    }
}
