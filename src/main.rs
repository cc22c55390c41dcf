use doggo_wasm::config::Config;
use doggo_wasm::ui;
use tracing::{info, warn};

const EMBEDDED_CONFIG: &str = include_str!("../doggo.json");

fn main() {
    // Logging level comes from config, so parse first and report problems after init.
    let (config, config_error) = match Config::parse(EMBEDDED_CONFIG) {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    dioxus_logger::init(config.log_level()).expect("failed to init logger");

    if let Some(e) = config_error {
        warn!(error = %e, "invalid doggo.json, using defaults");
    }

    info!(
        api = %config.api.base_url,
        "doggo v{} starting",
        env!("CARGO_PKG_VERSION")
    );

    ui::launch(config);
}
