use blankspot_tui::domain::TowerStatus;
use blankspot_tui::towers::FilterSelection;
use clap::{CommandFactory, Parser};

#[derive(Debug, Parser)]
#[command(name = "blankspot", version, about = "Blankspot report & tower map TUI")]
pub struct CliArgs {
    /// Print a tower summary and exit
    #[arg(long)]
    pub headless: bool,

    /// Print the headless summary as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Override the blank spot API base URL
    #[arg(long = "api-url", value_name = "URL")]
    pub api_url: Option<String>,

    /// Search places offline with the built-in gazetteer
    #[arg(long)]
    pub offline: bool,

    /// JSON file with blank spot locations for the map layer
    #[arg(long = "blankspot-file", value_name = "PATH")]
    pub blankspot_file: Option<String>,

    /// Override the log file path
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<String>,

    /// Only show towers of this operator (repeatable)
    #[arg(long = "operator", value_name = "OPERATOR")]
    pub operators: Vec<String>,

    /// Only show towers with this status: aktif or tidak-aktif (repeatable)
    #[arg(long = "status", value_name = "STATUS", value_parser = parse_status)]
    pub statuses: Vec<TowerStatus>,
}

fn parse_status(value: &str) -> Result<TowerStatus, String> {
    TowerStatus::parse(value).ok_or_else(|| format!("unknown tower status `{value}`"))
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Some(url) = &self.api_url {
            std::env::set_var("BLANKSPOT_API_URL", url);
        }
        if self.offline {
            std::env::set_var("GEOCODER_OFFLINE", "1");
        }
        if let Some(path) = &self.blankspot_file {
            std::env::set_var("BLANKSPOT_FILE", path);
        }
        if let Some(path) = &self.log_file {
            std::env::set_var("LOG_FILE", path);
        }
        if self.debug {
            std::env::set_var("DEBUG", "1");
        }
    }

    pub fn filter_selection(&self) -> FilterSelection {
        FilterSelection::new()
            .with_operators(self.operators.iter().cloned())
            .with_statuses(self.statuses.iter().copied())
    }

    pub fn help_text() -> String {
        let mut command = Self::command();
        let mut buffer = Vec::new();
        command.write_help(&mut buffer).ok();
        String::from_utf8_lossy(&buffer).to_string()
    }
}
