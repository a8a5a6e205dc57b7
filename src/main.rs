mod api;
mod core;
#[cfg(test)]
mod test_support;
mod tui;

use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

use crate::core::config::{self, CliOverrides};
use crate::core::state::Route;

#[derive(Parser)]
#[command(name = "atlas", about = "Terminal country explorer")]
struct Args {
    /// Country to open directly, skipping the search screen
    country: Option<String>,

    /// Open the listing for a region (e.g. "Europe")
    #[arg(short, long, conflicts_with = "country")]
    region: Option<String>,

    /// Open the listing for a subregion (e.g. "Western Europe")
    #[arg(short, long, conflicts_with_all = ["country", "region"])]
    subregion: Option<String>,

    /// Override the country API base URL
    #[arg(long)]
    api_base_url: Option<String>,

    /// Override the boundary data base URL
    #[arg(long)]
    geo_base_url: Option<String>,
}

impl Args {
    fn initial_route(&self) -> Route {
        if let Some(country) = &self.country {
            Route::Country(country.clone())
        } else if let Some(region) = &self.region {
            Route::Region(region.clone())
        } else if let Some(subregion) = &self.subregion {
            Route::Subregion(subregion.clone())
        } else {
            Route::Home
        }
    }
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to atlas.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("atlas.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Invalid config file: {e}");
            return Ok(());
        }
    };
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            api_base_url: args.api_base_url.clone(),
            geo_base_url: args.geo_base_url.clone(),
        },
    );

    log::info!("Atlas starting up against {}", resolved.api_base_url);

    tui::run(resolved, args.initial_route())
}
