// UNRaf Academy - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. config.toml loading and logging initialisation (debug mode support)
// 3. Catalogue loading (JSON file or built-in sample)
// 4. Filtering the requested listing and writing it out

use clap::Parser;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use unraf_academy::app::browse::{self, BrowseOptions};
use unraf_academy::core::catalog::{self, Catalog, Listing};
use unraf_academy::core::export::ExportFormat;
use unraf_academy::core::filter::Query;
use unraf_academy::platform::config::{self, AppConfig, PlatformPaths};
use unraf_academy::util;
use unraf_academy::util::error::{AcademyError, Result};

/// UNRaf Academy - browse and search the academic resource catalogue.
///
/// Filters one listing by free text, category, kind, and an inclusive date
/// range, and prints the matching records. With no listing, prints the size
/// of every listing.
#[derive(Parser, Debug)]
#[command(name = "unraf-academy", version, about)]
struct Cli {
    /// Listing to browse: users, resources, logs, papers, datasets,
    /// algorithms, models, news, downloads, favorites, uploads.
    #[arg(value_parser = parse_listing)]
    listing: Option<Listing>,

    /// Case-insensitive text to search for.
    #[arg(short = 't', long = "text")]
    text: Option<String>,

    /// Exact category ("all" = any).
    #[arg(short = 'c', long = "category")]
    category: Option<String>,

    /// Exact kind, e.g. Paper, Dataset, Algorithm ("all" = any).
    #[arg(short = 'k', long = "kind")]
    kind: Option<String>,

    /// Earliest date to include (YYYY-MM-DD).
    #[arg(long = "from")]
    from: Option<String>,

    /// Latest date to include (YYYY-MM-DD).
    #[arg(long = "to")]
    to: Option<String>,

    /// Regular expression matched against searchable fields.
    #[arg(short = 'r', long = "pattern")]
    pattern: Option<String>,

    /// Output format: text, csv, json.
    #[arg(short = 'f', long = "format", value_parser = parse_format)]
    format: Option<ExportFormat>,

    /// Maximum records to print (0 = unlimited).
    #[arg(short = 'n', long = "limit")]
    limit: Option<usize>,

    /// JSON catalogue to use instead of the configured or built-in one.
    #[arg(long = "catalog")]
    catalog: Option<PathBuf>,

    /// Write output to a file instead of stdout.
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Alternative config.toml location.
    #[arg(long = "config")]
    config: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn parse_listing(name: &str) -> std::result::Result<Listing, String> {
    Listing::from_name(name).ok_or_else(|| {
        let known: Vec<&str> = Listing::all().iter().map(|l| l.name()).collect();
        format!("unknown listing '{name}' (expected one of: {})", known.join(", "))
    })
}

fn parse_format(name: &str) -> std::result::Result<ExportFormat, String> {
    ExportFormat::from_name(name)
        .ok_or_else(|| format!("unknown format '{name}' (expected text, csv or json)"))
}

fn main() {
    let cli = Cli::parse();

    let platform_paths = PlatformPaths::resolve();
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| platform_paths.config_file());
    let (app_config, config_warnings) = config::load_config(&config_path);

    util::logging::init(
        cli.debug,
        app_config.log_level.as_deref(),
        app_config.log_file.as_deref(),
    );

    if platform_paths.is_fallback {
        tracing::warn!("Could not determine platform directories, using current directory");
    }
    tracing::debug!(
        config = %platform_paths.config_dir.display(),
        data = %platform_paths.data_dir.display(),
        "Platform paths resolved"
    );

    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Configuration warning");
    }

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "UNRaf Academy starting"
    );

    if let Err(e) = run(&cli, &app_config, &platform_paths) {
        tracing::error!(error = %e, "Command failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli, app_config: &AppConfig, paths: &PlatformPaths) -> Result<()> {
    let catalog = resolve_catalog(cli, app_config, paths)?;

    let Some(listing) = cli.listing else {
        print_summary(&catalog);
        return Ok(());
    };

    let query = build_query(cli)?;
    let format = cli.format.unwrap_or(app_config.format);
    let limit = cli.limit.unwrap_or(app_config.max_results);

    tracing::debug!(
        listing = listing.name(),
        format = format.name(),
        limit,
        query = ?query,
        "Running query"
    );

    match &cli.output {
        Some(path) => {
            let file = File::create(path).map_err(|e| AcademyError::Io {
                path: path.clone(),
                operation: "create output file",
                source: e,
            })?;
            let target = path.display().to_string();
            let options = BrowseOptions {
                format,
                limit,
                target: &target,
            };
            browse::browse(&catalog, listing, &query, options, BufWriter::new(file))?;
        }
        None => {
            let options = BrowseOptions {
                format,
                limit,
                target: "stdout",
            };
            browse::browse(&catalog, listing, &query, options, io::stdout().lock())?;
        }
    }

    Ok(())
}

/// Catalogue source priority: --catalog > [catalog] path > data dir > built-in.
fn resolve_catalog(cli: &Cli, app_config: &AppConfig, paths: &PlatformPaths) -> Result<Catalog> {
    if let Some(path) = cli.catalog.as_ref().or(app_config.catalog_path.as_ref()) {
        return Ok(catalog::load_catalog(path)?);
    }

    let user_catalog = paths.data_dir.join(util::constants::USER_CATALOG_FILE_NAME);
    if user_catalog.is_file() {
        return Ok(catalog::load_catalog(&user_catalog)?);
    }

    tracing::debug!("Using built-in sample catalogue");
    Ok(Catalog::builtin()?)
}

fn build_query(cli: &Cli) -> Result<Query> {
    let mut query = Query::default()
        .with_text(cli.text.clone().unwrap_or_default())
        .with_category(cli.category.as_deref().unwrap_or_default())
        .with_kind(cli.kind.as_deref().unwrap_or_default())
        .with_date_from_str(cli.from.as_deref().unwrap_or_default())
        .with_date_to_str(cli.to.as_deref().unwrap_or_default());

    if let Some(ref pattern) = cli.pattern {
        query.set_pattern(pattern)?;
    }
    Ok(query)
}

fn print_summary(catalog: &Catalog) {
    println!(
        "{} v{} - {} records",
        util::constants::APP_NAME,
        util::constants::APP_VERSION,
        catalog.total_records()
    );
    for listing in Listing::all() {
        println!(
            "  {:<10} {:>5}  {}",
            listing.name(),
            catalog.len_of(*listing),
            listing.label()
        );
    }
}
