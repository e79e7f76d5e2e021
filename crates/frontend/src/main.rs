use beacon_frontend_common::{logging, AppConfig, BeaconApp, BeaconAppProps};

fn main() {
    logging::init();

    let config = AppConfig::from_toml_str_or_default(include_str!("../app.toml"));
    tracing::info!(title = %config.branding.title, "Starting Beacon dashboard");

    yew::Renderer::<BeaconApp>::with_props(BeaconAppProps { config }).render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_is_valid() {
        let config = AppConfig::from_toml_str(include_str!("../app.toml")).unwrap();
        assert!(!config.branding.title.is_empty());
        assert_eq!(config.settings_fields.len(), 2);
        assert!(config.show_streamers);
    }
}
