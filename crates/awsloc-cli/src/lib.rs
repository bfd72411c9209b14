//! awsloc-cli
//! ==========
//!
//! Command-line interface for AWS Location Service place indexes, built on
//! [`awsloc-core`].
//!
//! Quick start
//! -----------
//!
//! ```text
//! cargo install awsloc-cli
//! ```
//!
//! Put the profile and region in `./config.yaml`:
//!
//! ```text
//! AwsProfile: default
//! AwsRegion: us-east-1
//! IndexName: my-places
//! ```
//!
//! Basic usage:
//!
//! ```text
//! awsloc create --index my-places --description "test index" --tags env=dev
//! awsloc list
//! awsloc describe --json
//! awsloc position --lat 49.2847 --lon -123.1174
//! awsloc suggestion --text "eiffel tow" --country FRA
//! awsloc text --text "1600 Pennsylvania Ave" --country USA --lat 38.9 --lon -77.0
//! awsloc delete --index my-places
//! ```
//!
//! The binary lives in `main.rs`; this library target exposes the argument
//! types and the dispatcher so they can be exercised in tests.

pub mod args;

use crate::args::{CliArgs, Commands, SearchArgs};
use anyhow::Context;
use awsloc_core::aws::AwsLocationBackend;
use awsloc_core::{
    ClientConfig, FreeTextInput, GeoFilterInput, LocationBackend, OutputMode, PlaceService,
    Presenter, Settings,
};
use std::io::{self, Write};

/// Loads config, connects to the service and runs one command against stdout.
pub fn run(args: CliArgs) -> anyhow::Result<()> {
    let path = args.config.clone().unwrap_or_else(Settings::default_path);
    let settings = Settings::load(&path)?;
    let config = ClientConfig::new(settings, args.command.index().map(str::to_string))
        .with_context(|| format!("invalid settings in {}", path.display()))?;

    let backend = AwsLocationBackend::connect(&config).context("failed to create location service")?;
    let service = PlaceService::new(config, backend);

    let mut presenter = Presenter::new(io::stdout().lock(), OutputMode::from_json_flag(args.json));
    execute(&service, &mut presenter, args.command)
}

/// Runs one subcommand against any backend and writes its result.
pub fn execute<B, W>(
    service: &PlaceService<B>,
    presenter: &mut Presenter<W>,
    command: Commands,
) -> anyhow::Result<()>
where
    B: LocationBackend,
    W: Write,
{
    match command {
        Commands::Create {
            description, tags, ..
        } => {
            let out = service
                .create_index(description.as_deref(), &tags)
                .context("error creating index")?;
            presenter.created(&out)?;
        }

        Commands::Delete { .. } => {
            let out = service.delete_index().context("error deleting index")?;
            presenter.deleted(&out)?;
        }

        Commands::Describe { .. } => {
            let out = service.describe_index().context("error describing index")?;
            presenter.described(&out)?;
        }

        Commands::List { max_results } => {
            let out = service
                .list_indexes(max_results)
                .context("error listing indexes")?;
            presenter.listed(&out)?;
        }

        Commands::Position {
            lat,
            lon,
            max_results,
            ..
        } => {
            let out = service
                .search_position(lat, lon, max_results)
                .context("error searching position")?;
            presenter.position(&out)?;
        }

        Commands::Suggestion { search, countries } => {
            let out = service
                .search_suggestions(free_text(search, countries))
                .context("error searching suggestion")?;
            presenter.suggestions(&out)?;
        }

        Commands::Text { search, countries } => {
            let out = service
                .search_text(free_text(search, countries))
                .context("error searching text")?;
            presenter.text(&out)?;
        }

        Commands::Update { description, .. } => {
            let out = service
                .update_index(description.as_deref())
                .context("error updating index")?;
            presenter.updated(&out)?;
        }
    }

    Ok(())
}

fn free_text(search: SearchArgs, countries: Vec<String>) -> FreeTextInput {
    FreeTextInput {
        text: search.text,
        countries,
        geo: GeoFilterInput {
            lat: search.lat,
            lon: search.lon,
            x1: search.x1,
            x2: search.x2,
            y1: search.y1,
            y2: search.y2,
        },
        max_results: search.max_results,
    }
}
