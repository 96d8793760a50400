mod app;
mod cli;
mod event;
mod logging;
mod terminal;
mod ui;

use std::sync::Arc;

use app::actions::AppActions;
use app::App;
use blankspot_tui::api::{
    BlankspotBackend, BlankspotClient, GazetteerAutocomplete, NominatimAutocomplete,
    PlaceAutocomplete,
};
use blankspot_tui::config::{init_app_config, AppConfig, GeocoderConfig};
use clap::Parser;
use cli::CliArgs;
use color_eyre::Result;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();

    let config = init_app_config()?;
    let headless = args.headless || !is_terminal();
    logging::init_logging(&config, headless)?;
    tracing::info!(api_url = %config.api_url, headless, "starting blankspot");

    let backend = BlankspotClient::new(&config.api_url, config.http_timeout)?;

    if headless {
        return event::run_headless(&backend, &args.filter_selection(), args.json).await;
    }

    let places = place_provider(&config)?;
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    let actions = AppActions::new(
        Arc::new(backend) as Arc<dyn BlankspotBackend>,
        places,
        config.blankspot_file.clone(),
        tx,
    );
    let mut app = App::new(actions);

    let mut terminal = terminal::setup_terminal()?;
    let result = event::run(&mut terminal, &mut app, &mut rx).await;
    terminal::cleanup_terminal_state(true, true);

    if let Err(e) = &result {
        tracing::error!(error = %e, "event loop ended with an error");
    }
    result
}

fn place_provider(config: &AppConfig) -> Result<Arc<dyn PlaceAutocomplete>> {
    let provider: Arc<dyn PlaceAutocomplete> = match &config.geocoder {
        GeocoderConfig::Nominatim { url } => {
            Arc::new(NominatimAutocomplete::new(url, config.http_timeout)?)
        }
        GeocoderConfig::Offline => Arc::new(GazetteerAutocomplete::new()),
    };
    tracing::info!(provider = provider.name(), "place search ready");
    Ok(provider)
}

fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
