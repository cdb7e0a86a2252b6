use clap::Parser;

use super::BundleArgs;

/// Arguments for the list command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List bundles in the current directory:\n    bundlehost list\n\n\
                  Include archives that were rejected:\n    bundlehost list --detailed\n\n\
                  List another directory:\n    bundlehost list --dir ./dapps")]
pub struct ListArgs {
    #[command(flatten)]
    pub bundles: BundleArgs,

    /// Show detailed output, including rejected archives
    #[arg(long)]
    pub detailed: bool,
}
