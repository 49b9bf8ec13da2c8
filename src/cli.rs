use clap::Parser;
use std::path::PathBuf;

use stock_fetcher::stock_display::domain::IdentifierMode;

/// Fetch a dealer's stock feed and render it as an HTML fragment
#[derive(Parser, Debug)]
#[command(name = "stock-fetcher")]
#[command(version)]
#[command(about = "Fetch a dealer's stock feed and render it as an HTML fragment", long_about = None)]
pub struct Args {
    /// Dealer identifier (dealer mode)
    #[arg(short, long = "dealer-id", value_name = "ID")]
    pub dealer_id: Option<String>,

    /// Endpoint path appended to the base URL (endpoint mode)
    #[arg(short, long, value_name = "PATH")]
    pub endpoint: Option<String>,

    /// Base URL of the stock feed
    #[arg(short, long = "base-url", value_name = "URL")]
    pub base_url: Option<String>,

    /// Primary colour applied to headers (any CSS colour)
    #[arg(short = 'c', long = "primary-col", value_name = "COLOR")]
    pub primary_col: Option<String>,

    /// Page query string to read attributes from, e.g. "dealer-id=2343&primary-col=red"
    #[arg(short, long, value_name = "QUERY")]
    pub query: Option<String>,

    /// Identifier convention: dealer or endpoint (inferred when omitted)
    #[arg(short, long)]
    pub mode: Option<IdentifierMode>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path to a config file (defaults to ./stock-fetcher.config.yml when present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Stylesheet href attached to the fragment
    #[arg(long, value_name = "HREF", conflicts_with = "no_stylesheet")]
    pub stylesheet: Option<String>,

    /// Do not attach any stylesheet reference
    #[arg(long)]
    pub no_stylesheet: bool,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECONDS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Only print errors to stderr
    #[arg(long)]
    pub quiet: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
