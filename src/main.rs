mod api;
mod app;
mod charts;
mod message;
mod metrics;
mod reports;
mod screens;
mod theme;

use api::ApiClient;
use app::App;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Fire-fighting-system reliability dashboard.
#[derive(Debug, Parser)]
#[command(name = "ffsr-dashboard", version, about)]
struct Cli {
    /// Base URL of the metrics API.
    #[arg(long, env = "FFSR_API_URL", default_value = "http://127.0.0.1:5000")]
    api_url: String,

    /// Log filter, e.g. "info" or "ffsr_dashboard=debug".
    #[arg(long, env = "FFSR_LOG", default_value = "info")]
    log: String,
}

fn main() -> iced::Result {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&cli.log))
        .init();

    let api = ApiClient::new(cli.api_url);
    tracing::info!(base_url = %api.base_url(), "starting reliability dashboard");

    iced::application(move || App::new(api.clone()), App::update, App::view)
        .theme(App::theme)
        .window_size((1024.0, 768.0))
        .run()
}
