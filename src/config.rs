//! Digest configuration
//!
//! The digest seed is read from the environment:
//!
//! - `CODABLE_WRAPPER_DIGEST_SEED` - decimal or `0x`-prefixed hexadecimal `u64` (default `0`)
//!
//! Raw values are collected into [`EnvConfig`] and validated into a
//! [`DigestConfig`] with defaults applied.

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;

/// Name of the environment variable holding the digest seed
pub const DIGEST_SEED_VAR: &str = "CODABLE_WRAPPER_DIGEST_SEED";

/// Validated digest configuration with defaults applied
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DigestConfig {
    pub seed: u64,
}

/// Environment-based configuration, unvalidated
#[derive(Deserialize, Debug, Default)]
pub struct EnvConfig {
    pub codable_wrapper_digest_seed: Option<String>,
}

impl DigestConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self { seed }
    }

    /// Load and validate the configuration from the process environment
    pub fn from_env() -> Result<Self> {
        EnvConfig::from_env()?.validate()
    }
}

impl EnvConfig {
    /// Parse configuration from environment variables only
    ///
    /// Variables whose name or value is not valid UTF-8 are skipped.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(std::env::vars_os().filter_map(|(key, value)| {
            Some((key.into_string().ok()?, value.into_string().ok()?))
        }))
    }

    /// Parse configuration from explicit name/value pairs
    pub fn from_vars<I>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter(vars).context("Failed to parse environment variables")
    }

    /// Validate and apply defaults
    pub fn validate(self) -> Result<DigestConfig> {
        let seed = match self.codable_wrapper_digest_seed {
            Some(raw) => parse_seed(&raw).with_context(|| format!("Invalid {DIGEST_SEED_VAR}"))?,
            None => 0,
        };
        log::debug!("Resolved digest seed {seed:#x}");
        Ok(DigestConfig { seed })
    }
}

fn parse_seed(raw: &str) -> Result<u64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(anyhow!("seed value is empty"));
    }
    let parsed = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => trimmed.parse::<u64>(),
    };
    parsed.with_context(|| format!("'{trimmed}' is not a u64"))
}

#[cfg(test)]
mod config_tests {
    use super::*;

    fn env(pairs: &[(&str, &str)]) -> Result<EnvConfig> {
        let vars = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<Vec<_>>();
        EnvConfig::from_vars(vars)
    }

    #[test]
    fn test_default_seed_when_unset() {
        let config = env(&[]).unwrap().validate().unwrap();
        assert_eq!(config, DigestConfig::default());
        assert_eq!(config.seed, 0);
    }

    #[test]
    fn test_decimal_seed() {
        let config = env(&[(DIGEST_SEED_VAR, "42")]).unwrap().validate().unwrap();
        assert_eq!(config, DigestConfig::with_seed(42));
    }

    #[test]
    fn test_hex_seed() {
        let config = env(&[(DIGEST_SEED_VAR, " 0xFF ")]).unwrap().validate().unwrap();
        assert_eq!(config.seed, 255);
        assert_eq!(parse_seed("0X10").unwrap(), 16);
    }

    #[test]
    fn test_invalid_seed_names_variable() {
        let err = env(&[(DIGEST_SEED_VAR, "not-a-number")])
            .unwrap()
            .validate()
            .unwrap_err();
        assert!(format!("{err:#}").contains(DIGEST_SEED_VAR));
    }

    #[test]
    fn test_empty_seed_is_rejected() {
        assert!(parse_seed("   ").is_err());
        assert!(parse_seed("0x").is_err());
    }

    #[test]
    fn test_unrelated_variables_are_ignored() {
        let config = env(&[("PATH", "/usr/bin"), (DIGEST_SEED_VAR, "7")])
            .unwrap()
            .validate()
            .unwrap();
        assert_eq!(config.seed, 7);
    }
}
