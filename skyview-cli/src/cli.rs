use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{Password, PasswordDisplayMode, Select, Text};
use skyview_core::{
    Config, ForecastDay, SkyView, WeatherReport,
    locations::{OTHER_LOCATION, load_locations, parse_locations},
};
use tracing::debug;

const BUNDLED_LOCATIONS: &str = include_str!("../locations.txt");

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skyview", version, about = "Today's weather and tomorrow's forecast for Australia")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the WeatherAPI.com API key.
    Configure,

    /// Show the weather for a location.
    Show {
        /// Location name; if absent, pick one interactively.
        location: Option<String>,

        /// Show the predicted weather for tomorrow instead of today.
        #[arg(long)]
        tomorrow: bool,
    },

    /// List the known locations.
    Locations,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { location, tomorrow } => {
                let config = Config::load()?;
                let day = if tomorrow { ForecastDay::Tomorrow } else { ForecastDay::Today };
                let location = match location {
                    Some(location) => location,
                    None => pick_location(&known_locations(&config)?)?,
                };
                show(&config, &location, day).await
            }
            Command::Locations => {
                let config = Config::load()?;
                for location in known_locations(&config)? {
                    println!("{location}");
                }
                Ok(())
            }
        }
    }
}

fn configure() -> anyhow::Result<()> {
    // Read the file only: an env override must not end up on disk.
    let mut config = Config::load_from(&Config::config_file_path()?)?;

    let api_key = Password::new("WeatherAPI.com API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    config.set_weather_api_key(api_key.trim().to_string());
    let path = config.save()?;
    println!("Saved configuration to {}", path.display());

    Ok(())
}

fn known_locations(config: &Config) -> anyhow::Result<Vec<String>> {
    match &config.locations_file {
        Some(path) => load_locations(path),
        None => Ok(parse_locations(BUNDLED_LOCATIONS)),
    }
}

fn pick_location(locations: &[String]) -> anyhow::Result<String> {
    let choice = Select::new("Select location", locations.to_vec())
        .with_help_message(
            "If you don't see the desired location, select 'Other' and type it in.",
        )
        .prompt()
        .context("No location selected")?;

    if choice != OTHER_LOCATION {
        return Ok(choice);
    }

    Text::new("Write your location:").prompt().context("No location entered")
}

async fn show(config: &Config, location: &str, day: ForecastDay) -> anyhow::Result<()> {
    let app = SkyView::from_config(config)?;
    debug!(location, ?day, "requesting report");

    let report = match app.report(location, day).await {
        Ok(report) => report,
        Err(err) => {
            let message = err.user_message();
            return Err(anyhow::Error::new(err).context(message));
        }
    };

    print!("{}", render(&report));
    Ok(())
}

fn render(report: &WeatherReport) -> String {
    const COLUMN: usize = 32;

    let mut out = format!("{}\n", report.heading());
    if let Some(condition) = &report.condition {
        out.push_str(&format!("Description: {}.\n", condition.text));
        out.push_str(&format!("Icon: {}\n", icon_url(&condition.icon)));
    }
    out.push('\n');

    let cells: Vec<String> = report.fields.iter().map(|(k, v)| format!("{k}: {v}")).collect();
    for pair in cells.chunks(2) {
        match pair {
            [left, right] => out.push_str(&format!("{left:<COLUMN$}{right}\n")),
            [left] => out.push_str(&format!("{left}\n")),
            _ => {}
        }
    }

    out
}

/// WeatherAPI.com returns protocol-relative icon URLs.
fn icon_url(icon: &str) -> String {
    if icon.starts_with("//") { format!("https:{icon}") } else { icon.to_string() }
}
