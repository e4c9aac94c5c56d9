use desk_core::{CollectionKind, DeskApp, DeskConfig};

/// Build the app container, filling in any snapshot path the caller left unset.
pub fn desk_app(mut config: DeskConfig) -> DeskApp {
    let defaults = DeskConfig::with_defaults();
    for kind in CollectionKind::ALL {
        let key = kind.config_key();
        if !config.has(key) {
            if let Some(path) = defaults.get(key) {
                config.set(key, path);
            }
        }
    }
    DeskApp::with_config(config)
}
