mod cli;
mod config;

use cli::Args;
use config::{discover_config, load_config_from_path, ConfigFile};
use std::process;
use std::time::Duration;
use stock_fetcher::prelude::*;
use stock_fetcher::shared::error::ExitCode;
use stock_fetcher::stock_display::domain::attributes::{
    BASE_URL, DEALER_ID, ENDPOINT, PRIMARY_COL,
};

#[tokio::main]
async fn main() {
    let args = Args::parse_args();

    if let Err(e) = run(args).await {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

async fn run(args: Args) -> Result<()> {
    let config = load_config(&args)?.unwrap_or_default();

    let mode = resolve_mode(&args, &config);
    let options = build_options(&args, &config, mode);
    let attributes = build_attributes(&args, &config, mode);

    let timeout = args
        .timeout
        .or(config.timeout_secs)
        .unwrap_or(DEFAULT_TIMEOUT_SECS);
    let source = HttpStockSource::with_timeout(Duration::from_secs(timeout))?;
    let progress_reporter = if args.quiet {
        StderrProgressReporter::quiet()
    } else {
        StderrProgressReporter::new()
    };

    // Keep a handle on the fragment; the element owns the other clone
    let fragment = InMemoryFragment::new();
    let element = StockFetcherElement::new(source, fragment.clone(), progress_reporter, options);

    let observed = element.observed_attributes();
    for name in unobserved_attributes(&attributes, &observed) {
        eprintln!(
            "⚠️  Warning: '{}' has no effect in {} mode and will be ignored.",
            name, mode
        );
    }

    // The host sets attributes before attaching the element
    for (name, value) in attributes.iter() {
        element.set_attribute(name, value).await;
    }
    element.connected().await;

    let presenter = PresenterFactory::create(PresenterType::from_output(args.output));
    presenter.present(&fragment.to_html())?;

    Ok(())
}

fn load_config(args: &Args) -> Result<Option<ConfigFile>> {
    match args.config.as_deref() {
        Some(path) => Ok(Some(load_config_from_path(path)?)),
        None => {
            let cwd = std::env::current_dir()?;
            discover_config(&cwd)
        }
    }
}

/// Flag, then config, then inferred from which identifier was supplied
fn resolve_mode(args: &Args, config: &ConfigFile) -> IdentifierMode {
    if let Some(mode) = args.mode.or_else(|| config.identifier_mode()) {
        return mode;
    }

    let query_has_endpoint = args
        .query
        .as_deref()
        .map(|query| QueryParamsReader::attributes(query).get(ENDPOINT).is_some())
        .unwrap_or(false);

    if args.dealer_id.is_none() && (args.endpoint.is_some() || query_has_endpoint) {
        IdentifierMode::Endpoint
    } else {
        IdentifierMode::Dealer
    }
}

fn build_options(args: &Args, config: &ConfigFile, mode: IdentifierMode) -> ElementOptions {
    let mut url_config = UrlConfig::for_mode(mode);
    if let Some(base_url) = &config.base_url {
        url_config.base_url = Some(base_url.clone());
    }
    if let Some(path_prefix) = &config.path_prefix {
        url_config.path_prefix = path_prefix.clone();
    }
    if let Some(file_name) = &config.file_name {
        url_config.file_name = Some(file_name.clone()).filter(|name| !name.is_empty());
    }
    // In dealer mode the base URL is not an attribute, so the flag overrides config
    if mode == IdentifierMode::Dealer {
        if let Some(base_url) = &args.base_url {
            url_config.base_url = Some(base_url.clone());
        }
    }

    let mut options = ElementOptions::new(url_config);
    if let Some(placeholder) = &config.placeholder_image {
        options = options.with_placeholder_image(placeholder.clone());
    }
    if args.no_stylesheet {
        options = options.with_stylesheet(None);
    } else if let Some(href) = args.stylesheet.as_ref().or(config.stylesheet.as_ref()) {
        options = options.with_stylesheet(Some(href.clone()));
    }
    options
}

/// Query string first, explicit flags override, config fills `primary-col`
fn build_attributes(args: &Args, config: &ConfigFile, mode: IdentifierMode) -> Attributes {
    let mut attributes = args
        .query
        .as_deref()
        .map(QueryParamsReader::attributes)
        .unwrap_or_default();

    if let Some(dealer_id) = &args.dealer_id {
        attributes.set(DEALER_ID, dealer_id);
    }
    if let Some(endpoint) = &args.endpoint {
        attributes.set(ENDPOINT, endpoint);
    }
    if mode == IdentifierMode::Endpoint {
        if let Some(base_url) = &args.base_url {
            attributes.set(BASE_URL, base_url);
        }
    }
    if let Some(primary_col) = &args.primary_col {
        attributes.set(PRIMARY_COL, primary_col);
    } else if attributes.get(PRIMARY_COL).is_none() {
        if let Some(primary_col) = &config.primary_col {
            attributes.set(PRIMARY_COL, primary_col);
        }
    }

    attributes
}

/// Supplied attributes the element does not react to in this mode
fn unobserved_attributes<'a>(attributes: &'a Attributes, observed: &[&str]) -> Vec<&'a str> {
    attributes
        .iter()
        .map(|(name, _)| name)
        .filter(|name| !observed.contains(name))
        .collect()
}
