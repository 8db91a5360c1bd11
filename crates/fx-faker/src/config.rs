//! Facade configuration.

/// Environment variable that silences fallback logging when set to
/// `1`, `true` or `yes`.
pub const QUIET_ENV_VAR: &str = "FX_FAKER_QUIET";

/// Configuration for the [`Faker`](crate::Faker) facade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakerConfig {
    /// Log the cause whenever a lookup falls back
    pub log_failures: bool,
    /// Length of the alphanumeric fallback string
    pub fallback_length: usize,
}

impl Default for FakerConfig {
    fn default() -> Self {
        Self {
            log_failures: true,
            fallback_length: 5,
        }
    }
}

impl FakerConfig {
    /// No fallback logging.
    #[must_use]
    pub fn quiet() -> Self {
        Self {
            log_failures: false,
            ..Self::default()
        }
    }

    /// Defaults, adjusted by `FX_FAKER_QUIET`.
    #[must_use]
    pub fn from_env() -> Self {
        let quiet = std::env::var(QUIET_ENV_VAR)
            .map(|value| is_truthy(&value))
            .unwrap_or(false);

        if quiet {
            Self::quiet()
        } else {
            Self::default()
        }
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes"
    )
}
