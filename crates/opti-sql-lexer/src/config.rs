//! Lexer configuration.

use std::env;
use std::num::NonZeroUsize;

use serde::Deserialize;
use tracing::warn;

/// Environment variable selecting the [`LexMode`].
pub const MODE_ENV: &str = "OPTI_SQL_LEX_MODE";
/// Environment variable holding [`LexerConfig::max_errors`].
pub const MAX_ERRORS_ENV: &str = "OPTI_SQL_MAX_ERRORS";

/// How the lexer reacts to malformed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LexMode {
    /// Stop at the first error and return it.
    #[default]
    FailFast,
    /// Record each error, skip past the offending input and keep going.
    Batch,
}

impl LexMode {
    /// Parses a mode name (`fail-fast` or `batch`, case-insensitive).
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "fail-fast" | "fail_fast" | "failfast" => Some(Self::FailFast),
            "batch" => Some(Self::Batch),
            _ => None,
        }
    }
}

/// Lexer settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct LexerConfig {
    /// Error handling mode.
    pub mode: LexMode,
    /// In batch mode, stop after this many errors. `None` means no limit.
    pub max_errors: Option<NonZeroUsize>,
}

impl LexerConfig {
    /// Fail-fast configuration.
    #[must_use]
    pub const fn fail_fast() -> Self {
        Self {
            mode: LexMode::FailFast,
            max_errors: None,
        }
    }

    /// Batch configuration with no error limit.
    #[must_use]
    pub const fn batch() -> Self {
        Self {
            mode: LexMode::Batch,
            max_errors: None,
        }
    }

    /// Sets the batch-mode error limit. A limit of zero removes the limit.
    #[must_use]
    pub const fn with_max_errors(mut self, limit: usize) -> Self {
        self.max_errors = NonZeroUsize::new(limit);
        self
    }

    /// Reads the configuration from `OPTI_SQL_LEX_MODE` and
    /// `OPTI_SQL_MAX_ERRORS`.
    ///
    /// Missing variables keep their defaults. Unrecognised values are logged
    /// and ignored.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(MODE_ENV) {
            match LexMode::parse(&raw) {
                Some(mode) => config.mode = mode,
                None => warn!(
                    var = MODE_ENV,
                    value = %raw,
                    "Unrecognised lex mode, using fail-fast"
                ),
            }
        }

        if let Some(raw) = lookup(MAX_ERRORS_ENV) {
            match raw.trim().parse::<NonZeroUsize>() {
                Ok(limit) => config.max_errors = Some(limit),
                Err(e) => warn!(
                    var = MAX_ERRORS_ENV,
                    value = %raw,
                    error = %e,
                    "Invalid error limit, ignoring"
                ),
            }
        }

        config
    }
}
