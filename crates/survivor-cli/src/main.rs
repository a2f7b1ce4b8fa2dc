//! Survivor binary
//!
//! Prints the chair of the last person left in the circle.

use survivor_cli::{execute, failure, print_usage};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    // Initialize tracing; logs go to stderr so stdout stays machine-readable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "survivor=info,survivor_cli=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match execute(std::env::args().skip(1), |key| std::env::var(key).ok()) {
        Ok(Some(output)) => println!("{output}"),
        Ok(None) => print_usage(),
        Err(error) => {
            let (code, line) = failure(&error);
            eprintln!("{line}");
            std::process::exit(code);
        }
    }
}
