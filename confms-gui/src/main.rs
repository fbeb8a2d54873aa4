mod app;

use confms_core::PortalConfig;

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            // Override via RUST_LOG, e.g. RUST_LOG=confms_core::pagination=debug
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "confms_core=info,confms_gui=info".into()),
        )
        .init();
}

fn main() -> iced::Result {
    init_logging();

    let config = match PortalConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {}", e);
            std::process::exit(1);
        }
    };

    iced::application("ConfMS Records", app::update, app::view)
        .run_with(move || app::initialize(config))
}
