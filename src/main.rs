// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging on stderr
// 3. Build the HTTP client and run one mirror operation
// 4. Print the result and exit with the proper code
//    (0 = mirrored, 1 = mirror failed, 2 = setup error)
// =============================================================================

mod cli; // src/cli.rs - command-line parsing
mod config; // src/config.rs - settings for a run
mod error; // src/error.rs - MirrorError
mod fetch; // src/fetch/ - HTTP client
mod logging; // src/logging.rs - tracing subscriber setup
mod mirror; // src/mirror/ - the mirror pipeline
mod naming; // src/naming/ - URL -> file name encoding
mod page; // src/page/ - HTML discovery and rewriting
mod store; // src/store/ - filesystem access

use anyhow::Result;
use clap::Parser;

use cli::Cli;
use fetch::ReqwestClient;
use mirror::{Mirror, MirrorResult};
use store::LocalFileStore;

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Returns:
//   Ok(0) = page and assets saved
//   Ok(1) = the mirror operation failed (its message is on stderr)
//   Err   = could not even start (bad client setup, output failure)
async fn run() -> Result<i32> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let config = cli.config();
    let http = ReqwestClient::new(&config.http)?;
    let mirror = Mirror::new(http, LocalFileStore, config);

    match mirror.mirror(&cli.url, &cli.output).await {
        Ok(result) => {
            print_result(&result, cli.json)?;
            Ok(0)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "mirror failed");
            // The error's own text: e.g. "Request failed with status code 404"
            eprintln!("{}", e);
            Ok(1)
        }
    }
}

fn print_result(result: &MirrorResult, json: bool) -> Result<()> {
    if json {
        let json_output = serde_json::to_string_pretty(result)?;
        println!("{}", json_output);
    } else {
        print_summary(result);
    }
    Ok(())
}

fn print_summary(result: &MirrorResult) {
    println!("✅ Page saved: {}", result.page_path.display());

    if let Some(asset_dir) = &result.asset_dir {
        println!(
            "📦 {} asset(s) saved to {}",
            result.asset_paths.len(),
            asset_dir.display()
        );
        for path in &result.asset_paths {
            println!("   {}", path.display());
        }
    }

    if result.foreign_references > 0 {
        println!(
            "🌐 {} external reference(s) left untouched",
            result.foreign_references
        );
    }
}
