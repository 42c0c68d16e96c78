//! Environment inspector: load, validate, and print the effective
//! environment record for a build profile.
//!
//! Usage: `brewenv [DIR] [--production] [--schema]`. DIR defaults to the
//! current directory and must contain `environment.yaml` (plus
//! `environment.prod.yaml` when `--production` is given).

use std::path::PathBuf;
use std::process;

use tracing::{error, info};

use brewenv::environment::{load_profile, print_schema, Profile};
use brewenv::logging::{init_logging, logging_from_env};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.iter().any(|arg| arg == "--schema") {
        print_schema();
        return;
    }

    let profile = if args.iter().any(|arg| arg == "--production") {
        Profile::Prod
    } else {
        Profile::Dev
    };
    let dir = args
        .iter()
        .find(|arg| !arg.starts_with("--"))
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    // Logging must come up before loading so load failures are reported
    // through it; bad BREWENV_LOG_* values just mean default logging.
    let logging = logging_from_env().unwrap_or_default();
    init_logging(&logging);

    let environment = match load_profile(&dir, profile) {
        Ok(environment) => environment,
        Err(e) => {
            error!("Error loading environment: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = environment.validate() {
        error!("Invalid environment: {}", e);
        process::exit(1);
    }

    // Summarize without echoing the client id.
    info!(
        production = environment.production,
        api_server_url = %environment.api_server_url,
        auth0_domain = %environment.auth0.url,
        "environment loaded"
    );

    println!("{}", serde_json::to_string_pretty(&environment).unwrap());
}
