//! Configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before any link is
//! transcoded.
//!
//! ```bash
//! export AGENT_LINKS_TRACKING_TAG="spring-drop"
//! export AGENT_LINKS_REFERRAL_PANDABUY="ABC123"
//! export AGENT_LINKS_REFERRAL_CNFANS="1234567"
//! ```
//!
//! ## Optional Variables
//!
//! - `RUST_LOG` - Log level (default: `warn`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `AGENT_LINKS_TRACKING_TAG` - Default tracking tag for agents that carry one
//! - `AGENT_LINKS_REFERRAL_<AGENT>` - Default referral code for `<AGENT>`,
//!   e.g. `AGENT_LINKS_REFERRAL_HIPOBUY`

use anyhow::{Context, Result};
use std::env;

use crate::domain::{Agent, Referrals};
use crate::transcoder::Transcoder;

/// Prefix of the per-agent referral variables.
pub const REFERRAL_VAR_PREFIX: &str = "AGENT_LINKS_REFERRAL_";

const MAX_TRACKING_TAG_LEN: usize = 64;

/// Transcoder configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub log_format: String,
    /// Tracking tag used when a call supplies none.
    pub tracking_tag: Option<String>,
    /// Referral codes used when a call supplies none.
    pub referrals: Referrals,
    /// Referral variables naming no known agent, reported by `print_summary`.
    pub ignored_referral_vars: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            log_format: "text".to_string(),
            tracking_tag: None,
            referrals: Referrals::new(),
            ignored_referral_vars: Vec::new(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a referral variable holds non-unicode data.
    pub fn from_env() -> Result<Self> {
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let tracking_tag = env::var("AGENT_LINKS_TRACKING_TAG")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        let (referrals, ignored_referral_vars) =
            Self::load_referrals().context("Failed to load referral codes")?;

        Ok(Self {
            log_level,
            log_format,
            tracking_tag,
            referrals,
            ignored_referral_vars,
        })
    }

    /// Collects `AGENT_LINKS_REFERRAL_<AGENT>` variables.
    ///
    /// Variables naming an unknown agent are skipped and returned by name, so
    /// they can be reported once logging is up. Blank values are ignored.
    fn load_referrals() -> Result<(Referrals, Vec<String>)> {
        let mut referrals = Referrals::new();
        let mut ignored = Vec::new();

        for (key, value) in env::vars_os() {
            let Some(key) = key.to_str() else {
                continue;
            };
            let Some(suffix) = key.strip_prefix(REFERRAL_VAR_PREFIX) else {
                continue;
            };

            let Ok(agent) = suffix.parse::<Agent>() else {
                ignored.push(key.to_string());
                continue;
            };
            let code = value
                .into_string()
                .map_err(|_| anyhow::anyhow!("{key} must be valid UTF-8"))?;
            referrals.set(agent, code);
        }

        ignored.sort();
        Ok((referrals, ignored))
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - the tracking tag is too long or contains characters other than
    ///   ASCII letters, digits, `-` and `_`
    /// - a referral code contains whitespace
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if let Some(ref tag) = self.tracking_tag {
            if tag.len() > MAX_TRACKING_TAG_LEN {
                anyhow::bail!(
                    "AGENT_LINKS_TRACKING_TAG is too long (max: {}), got {} characters",
                    MAX_TRACKING_TAG_LEN,
                    tag.len()
                );
            }
            if !tag
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
            {
                anyhow::bail!(
                    "AGENT_LINKS_TRACKING_TAG may only contain letters, digits, '-' and '_', got '{}'",
                    tag
                );
            }
        }

        for (agent, code) in self.referrals.iter() {
            if code.chars().any(char::is_whitespace) {
                anyhow::bail!(
                    "{}{} must not contain whitespace",
                    REFERRAL_VAR_PREFIX,
                    agent.as_str().to_ascii_uppercase()
                );
            }
        }

        Ok(())
    }

    /// Builds a transcoder carrying the configured defaults.
    pub fn transcoder(&self) -> Transcoder {
        Transcoder::new()
            .with_referrals(self.referrals.clone())
            .with_tracking_tag(self.tracking_tag.clone())
    }

    /// Prints configuration summary (without referral codes).
    ///
    /// Must run after the tracing subscriber is installed, since it also
    /// warns about ignored referral variables.
    pub fn print_summary(&self) {
        for variable in &self.ignored_referral_vars {
            tracing::warn!(variable = %variable, "Ignoring referral code for unknown agent");
        }

        tracing::info!("Configuration loaded:");
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!(
            "  Tracking tag: {}",
            self.tracking_tag.as_deref().unwrap_or("(default)")
        );

        if self.referrals.is_empty() {
            tracing::info!("  Referral codes: none");
        } else {
            for (agent, code) in self.referrals.iter() {
                tracing::info!("  Referral {}: {}", agent, mask_code(code));
            }
        }
    }
}

/// Masks a referral code for logging, keeping only its first two characters.
///
/// - `ABC123` → `AB***`
/// - `abc` → `***`
fn mask_code(code: &str) -> String {
    if code.chars().count() <= 4 {
        return "***".to_string();
    }
    let visible: String = code.chars().take(2).collect();
    format!("{visible}***")
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if loading or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_mask_code() {
        assert_eq!(mask_code("ABC123"), "AB***");
        assert_eq!(mask_code("abcd"), "***");
        assert_eq!(mask_code(""), "***");
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.log_format = "yaml".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.tracking_tag = Some("spring drop".to_string());
        assert!(config.validate().is_err());

        config.tracking_tag = Some("x".repeat(MAX_TRACKING_TAG_LEN + 1));
        assert!(config.validate().is_err());

        config.tracking_tag = Some("spring-drop_2".to_string());
        assert!(config.validate().is_ok());

        config.referrals.set(Agent::Cnfans, "12 34");
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_load_referrals_from_env() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("AGENT_LINKS_REFERRAL_PANDABUY", "ABC123");
            env::set_var("AGENT_LINKS_REFERRAL_cnfans", " 42 ");
            env::set_var("AGENT_LINKS_REFERRAL_HOOBUY", "");
            env::set_var("AGENT_LINKS_REFERRAL_NOPEBUY", "x");
        }

        let (referrals, ignored) = Config::load_referrals().unwrap();

        assert_eq!(referrals.get(Agent::Pandabuy), Some("ABC123"));
        assert_eq!(referrals.get(Agent::Cnfans), Some("42"));
        assert_eq!(referrals.get(Agent::Hoobuy), None);
        assert_eq!(referrals.len(), 2);
        assert_eq!(ignored, vec!["AGENT_LINKS_REFERRAL_NOPEBUY".to_string()]);

        // Cleanup
        unsafe {
            env::remove_var("AGENT_LINKS_REFERRAL_PANDABUY");
            env::remove_var("AGENT_LINKS_REFERRAL_cnfans");
            env::remove_var("AGENT_LINKS_REFERRAL_HOOBUY");
            env::remove_var("AGENT_LINKS_REFERRAL_NOPEBUY");
        }
    }

    #[test]
    #[serial]
    fn test_unknown_referral_variable_survives_into_config() {
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("AGENT_LINKS_REFERRAL_NOPEBUY", "x");
            env::set_var("AGENT_LINKS_REFERRAL_SUGARGOO", "S1");
        }

        let config = load_from_env().unwrap();
        assert_eq!(
            config.ignored_referral_vars,
            vec!["AGENT_LINKS_REFERRAL_NOPEBUY".to_string()]
        );
        assert_eq!(config.referrals.get(Agent::Sugargoo), Some("S1"));
        config.print_summary();

        unsafe {
            env::remove_var("AGENT_LINKS_REFERRAL_NOPEBUY");
            env::remove_var("AGENT_LINKS_REFERRAL_SUGARGOO");
        }
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        // SAFETY: Tests are run serially
        unsafe {
            env::remove_var("LOG_FORMAT");
            env::set_var("AGENT_LINKS_TRACKING_TAG", "   ");
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.log_format, "text");
        assert_eq!(config.tracking_tag, None);

        unsafe {
            env::remove_var("AGENT_LINKS_TRACKING_TAG");
        }
    }

    #[test]
    #[serial]
    fn test_configured_transcoder_uses_defaults() {
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("AGENT_LINKS_TRACKING_TAG", "7");
            env::set_var("AGENT_LINKS_REFERRAL_HIPOBUY", "myC0d3");
        }

        let config = load_from_env().unwrap();
        let url = config
            .transcoder()
            .to_agent(
                crate::transcoder::LinkSource::Link("https://weidian.com/item.html?itemID=5"),
                Agent::Hipobuy,
                None,
                None,
            )
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://www.hipobuy.com/shopdetail?ra=7&t=wd&id=5&inviteCode=myC0d3"
        );

        unsafe {
            env::remove_var("AGENT_LINKS_TRACKING_TAG");
            env::remove_var("AGENT_LINKS_REFERRAL_HIPOBUY");
        }
    }
}
