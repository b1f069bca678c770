use std::sync::Once;

/// Logger settings applied at startup.
///
/// `env_filter` uses `env_logger` filter syntax, e.g.
/// `"sweep_face=trace,wgpu=warn"`. When unset, `RUST_LOG` is honored, and
/// failing that the face stays quiet at `info`.
#[derive(Debug, Clone, Default)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

static INIT: Once = Once::new();

/// Installs the global `env_logger` backend. Safe to call more than once;
/// only the first call takes effect.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        let filter = config
            .env_filter
            .or_else(|| std::env::var("RUST_LOG").ok());

        match filter {
            Some(filter) => {
                builder.parse_filters(&filter);
            }
            // Per-tick detail sits at trace; default to a quiet face.
            None => {
                builder.filter_level(log::LevelFilter::Info);
            }
        }

        builder.write_style(config.write_style).init();

        log::debug!("logging initialized");
    });
}
