#![allow(non_snake_case)]

mod client;

use aidhub::config::AppConfig;

fn main() {
    #[cfg(feature = "desktop")]
    dotenvy::dotenv().ok();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = dioxus_logger::init(config.log_level) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    dioxus::LaunchBuilder::new()
        .with_context(config)
        .launch(client::App);
}
