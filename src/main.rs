use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;
use sun_panel::config::{Config, API_KEY_ENV};
use sun_panel::location::Geocoder;
use sun_panel::panel::SunPanel;
use sun_panel::sun::SunTimeLookup;
use sun_panel::timezone::TimezoneChoice;
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Sun Panel: sunrise and sunset for any place on Earth.
///
/// Examples:
///   sunpanel Oslo
///   sunpanel --location "New York" --tz "EST (UTC-5)" --date 2026-03-20
///   sunpanel Singapore --json
#[derive(Parser)]
#[command(name = "sunpanel", version, about, long_about = None)]
struct Cli {
    /// Location (positional). Example: sunpanel Oslo
    #[arg(index = 1)]
    location_positional: Option<String>,

    /// Location (named). Example: --location "Kuala Lumpur"
    #[arg(long, short = 'l')]
    location: Option<String>,

    /// Timezone label as shown in the selector. Unknown labels use UTC+8.
    #[arg(long, default_value = "UTC+8")]
    tz: String,

    /// Date (YYYY-MM-DD). Defaults to today.
    #[arg(long, short = 'd')]
    date: Option<NaiveDate>,

    /// Print the result as JSON instead of the panels.
    #[arg(long)]
    json: bool,

    /// List the selector's timezone labels and exit.
    #[arg(long)]
    list_timezones: bool,

    /// Config file. Defaults to <config dir>/sun_panel/config.json.
    #[arg(long)]
    config: Option<PathBuf>,

    /// RapidAPI key. Overrides the config file and SUNPANEL_API_KEY.
    #[arg(long)]
    api_key: Option<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.list_timezones {
        for choice in TimezoneChoice::ALL {
            println!("{:<12} -> {}", choice.label(), choice.identifier());
        }
        return;
    }

    let config = load_config(&cli);
    if config.api_key.is_empty() {
        warn!("no API key configured; set {} or pass --api-key", API_KEY_ENV);
    }

    let Some(location) = cli.location.clone().or(cli.location_positional.clone()) else {
        eprintln!("Error: No location specified.");
        eprintln!();
        eprintln!("Usage:");
        eprintln!("  sunpanel Oslo");
        eprintln!("  sunpanel --location \"New York\" --tz \"EST (UTC-5)\"");
        std::process::exit(1);
    };

    let mut panel = SunPanel::new(Geocoder::new(&config), SunTimeLookup::new(&config));
    let form = panel.form_mut();
    form.location = location;
    form.timezone = cli.tz.clone();
    if let Some(date) = cli.date {
        form.date = date.format("%Y-%m-%d").to_string();
    }

    let report = panel.submit().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    if cli.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        eprintln!("  {}", report.location.display_line());
        print!("{}", panel.state().render_text());
    }
}

fn load_config(cli: &Cli) -> Config {
    let loaded = match &cli.config {
        Some(path) => Config::load_from(path)
            .map(|c| c.with_api_key(std::env::var(API_KEY_ENV).ok())),
        None => Config::load(),
    };
    let config = loaded.unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    config.with_api_key(cli.api_key.clone())
}
