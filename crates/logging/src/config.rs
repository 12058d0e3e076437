//! crates/logging/src/config.rs
//! Runtime configuration and the compile-time knobs selected through Cargo features.

use std::env;

use crate::error::ParseSeverityError;
use crate::severity::Severity;

/// Environment variable consulted by [`LoggerConfig::from_env`].
pub const LEVEL_ENV_VAR: &str = "TINYLOG_LEVEL";

/// Compile-time severity ceiling, if one of the `max-level-*` features is enabled.
///
/// When several features are enabled the most restrictive one wins, matching
/// how Cargo unifies features across a dependency graph.
pub const STATIC_MAX_LEVEL: Option<Severity> = static_max_level();

/// `true` when a compile-time ceiling is configured.
///
/// The `log_*!` macros call the direct emitters instead of the gated
/// [`Logger::log`](crate::Logger::log) when this is set.
pub const CEILING_CONFIGURED: bool = STATIC_MAX_LEVEL.is_some();

/// Highest severity compiled into call sites; [`Severity::Trace`] without a ceiling.
pub const EFFECTIVE_MAX_LEVEL: Severity = match STATIC_MAX_LEVEL {
    Some(ceiling) => ceiling,
    None => Severity::Trace,
};

const fn static_max_level() -> Option<Severity> {
    if cfg!(feature = "max-level-off") {
        Some(Severity::Off)
    } else if cfg!(feature = "max-level-critical") {
        Some(Severity::Critical)
    } else if cfg!(feature = "max-level-error") {
        Some(Severity::Error)
    } else if cfg!(feature = "max-level-warning") {
        Some(Severity::Warning)
    } else if cfg!(feature = "max-level-info") {
        Some(Severity::Info)
    } else if cfg!(feature = "max-level-verbose") {
        Some(Severity::Verbose)
    } else if cfg!(feature = "max-level-debug") {
        Some(Severity::Debug)
    } else if cfg!(feature = "max-level-trace") {
        Some(Severity::Trace)
    } else {
        None
    }
}

/// Which pieces of call-site context the macros prefix to each message.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ContextOptions {
    /// Prefix the enclosing function name.
    pub function: bool,
    /// Prefix the source file name.
    pub file: bool,
    /// Prefix the source line number.
    pub line: bool,
}

impl ContextOptions {
    /// No context at all.
    pub const NONE: Self = Self {
        function: false,
        file: false,
        line: false,
    };

    /// Every piece of context.
    pub const ALL: Self = Self {
        function: true,
        file: true,
        line: true,
    };

    /// Returns `true` when nothing would be rendered.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        !self.function && !self.file && !self.line
    }
}

/// Context options selected by the `context-*` features.
pub const CONTEXT: ContextOptions = ContextOptions {
    function: cfg!(feature = "context-function"),
    file: cfg!(feature = "context-file"),
    line: cfg!(feature = "context-line"),
};

/// Runtime configuration used to build a [`Logger`](crate::Logger).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LoggerConfig {
    /// Initial severity threshold.
    pub level: Severity,
    /// Upper bound accepted by `set_level`. Defaults to [`STATIC_MAX_LEVEL`].
    pub ceiling: Option<Severity>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: Severity::Trace,
            ceiling: STATIC_MAX_LEVEL,
        }
    }
}

impl LoggerConfig {
    /// Creates a configuration with the given threshold.
    #[must_use]
    pub fn with_level(level: Severity) -> Self {
        Self {
            level,
            ..Self::default()
        }
    }

    /// Default configuration overridden by [`LEVEL_ENV_VAR`] when it holds a valid severity.
    ///
    /// An unparsable value is ignored rather than failing start-up.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(value) = env::var(LEVEL_ENV_VAR) {
            let _ = config.apply_level_token(&value);
        }
        config
    }

    /// Applies a single level token such as `"debug"` or `"3"`.
    pub fn apply_level_token(&mut self, token: &str) -> Result<(), ParseSeverityError> {
        self.level = token.parse()?;
        Ok(())
    }

    /// Sets the ceiling enforced by `set_level`.
    ///
    /// A compile-time ceiling cannot be relaxed: the lower of the two is kept.
    #[must_use]
    pub fn with_ceiling(mut self, ceiling: Severity) -> Self {
        self.ceiling = Some(match STATIC_MAX_LEVEL {
            Some(compiled) if compiled < ceiling => compiled,
            _ => ceiling,
        });
        self
    }
}
