//! Utils

use clap::Parser;

/// Arguments for the storefront demo
#[derive(Debug, Parser)]
pub struct DemoArgs {
    /// Fixture set to load the catalog and orders from
    #[clap(short, long, default_value = "demo")]
    pub fixture: String,

    /// Category label to filter the product list by
    #[clap(short, long)]
    pub category: Option<String>,

    /// Page of the product list to display
    #[clap(short, long, default_value_t = 1)]
    pub page: usize,

    /// Products per page
    #[clap(short = 's', long, default_value_t = 6)]
    pub page_size: usize,
}
