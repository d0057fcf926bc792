// Tags-view library entry point
// Exposes all modules so a shell (webview bridge, tests) can drive the tab state.

use env_logger::{Builder, Env};

pub mod error;
pub mod settings;

// Shared state
pub mod state;

// Pure logic modules (no shell imports)
pub mod modules;

pub use error::TagsViewError;
pub use modules::tags_view::TagsViewStore;
pub use settings::TagsViewSettings;
pub use state::{AppState, TagsPayload, ViewMeta, ViewRecord, ViewsSnapshot};

const ENV_LOG: &str = "TAGS_VIEW_LOG";
const ENV_LOG_STYLE: &str = "TAGS_VIEW_LOG_STYLE";

/// Installs the logger, filtered by `TAGS_VIEW_LOG` or the configured level.
/// Safe to call more than once; later calls leave the first logger in place.
pub fn init_logging(settings: &TagsViewSettings) {
    let result = Builder::from_env(
        Env::new()
            .filter_or(ENV_LOG, settings.log_level.as_str())
            .write_style(ENV_LOG_STYLE),
    )
    .try_init();

    if result.is_err() {
        log::debug!("[Logging] Logger already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_twice() {
        let settings = TagsViewSettings::default();
        init_logging(&settings);
        init_logging(&settings);
        log::info!("[Logging] still alive");
    }
}
