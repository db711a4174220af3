// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use clap's "derive" API: the struct below IS the CLI definition, and
// each field becomes an argument or flag.
//
// Usage:
//   page-mirror https://ru.hexlet.io/courses --output ./snapshots
// =============================================================================

use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::config::{HttpOptions, MirrorConfig};
use crate::naming::NamingOptions;

#[derive(Parser, Debug)]
#[command(
    name = "page-mirror",
    version,
    about = "Download a web page and its same-origin assets for offline viewing",
    long_about = "page-mirror saves a page as <name>.html next to a <name>_files directory \
                  holding its scripts, stylesheets and images. References to those assets \
                  are rewritten to point at the local copies; references to other sites \
                  are left as they are."
)]
pub struct Cli {
    /// Page URL to download (e.g., https://ru.hexlet.io/courses)
    pub url: String,

    /// Directory to save the page into (must already exist)
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub output: PathBuf,

    /// Use the query string when naming files (app.js?v=2 -> app-v-2.js)
    #[arg(long)]
    pub include_query: bool,

    /// Per-request timeout in seconds (default: no timeout)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Print the result as JSON instead of a summary
    #[arg(long)]
    pub json: bool,

    /// More log output on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Mirror settings selected by the flags.
    pub fn config(&self) -> MirrorConfig {
        MirrorConfig {
            naming: NamingOptions {
                include_query: self.include_query,
            },
            http: HttpOptions {
                timeout_secs: self.timeout,
            },
        }
    }
}
