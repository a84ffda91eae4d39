use std::sync::Once;

use log::LevelFilter;

/// Logger configuration for the gradient tools.
///
/// `filter` uses the `env_logger` directive syntax, e.g. `"debug"` or
/// `"swatch_engine::stops=trace,warn"`. When it is unset, `RUST_LOG` is
/// read, and failing that every target logs at `fallback`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub filter: Option<String>,
    pub fallback: LevelFilter,
    /// Prefix records with a timestamp. Off for CLI use.
    pub timestamps: bool,
}

impl LoggingConfig {
    pub fn with_filter(filter: Option<String>) -> Self {
        Self { filter, ..Self::default() }
    }

    /// Directive string the logger is built from.
    fn directives(&self, env: Option<String>) -> String {
        self.filter
            .clone()
            .or(env)
            .filter(|f| !f.trim().is_empty())
            .unwrap_or_else(|| self.fallback.to_string().to_lowercase())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { filter: None, fallback: LevelFilter::Info, timestamps: false }
    }
}

static INIT: Once = Once::new();

/// Installs `env_logger` behind the `log` facade. Only the first call has
/// any effect.
///
/// Records go to stderr; stdout is left for gradient text.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let directives = config.directives(std::env::var("RUST_LOG").ok());

        let mut builder = env_logger::Builder::new();
        builder
            .parse_filters(&directives)
            .target(env_logger::Target::Stderr)
            .write_style(env_logger::WriteStyle::Auto);
        if !config.timestamps {
            builder.format_timestamp(None);
        }
        builder.init();

        log::debug!("logging initialized with {directives:?}");
    });
}
