//! CLI configuration: environment first, then command-line overrides.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use survivor_core::{parse_chairs, DEFAULT_CHAIRS};

use crate::error::{Error, Result};

/// Environment variable holding the default chair count.
pub const CHAIRS_ENV: &str = "SURVIVOR_CHAIRS";

/// Environment variable holding the default method.
pub const METHOD_ENV: &str = "SURVIVOR_METHOD";

/// A way of finding the survivor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    /// Halving recurrence, `O(log n)`.
    Fast,
    /// Full elimination over every chair, `O(n)`.
    Brute,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Fast => f.write_str("fast"),
            Method::Brute => f.write_str("brute"),
        }
    }
}

/// Which methods to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MethodSelection {
    #[default]
    Fast,
    Brute,
    /// Run both and require them to agree.
    Both,
}

impl MethodSelection {
    /// Methods in the order they run.
    pub fn methods(self) -> &'static [Method] {
        match self {
            MethodSelection::Fast => &[Method::Fast],
            MethodSelection::Brute => &[Method::Brute],
            MethodSelection::Both => &[Method::Brute, Method::Fast],
        }
    }
}

impl FromStr for MethodSelection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fast" => Ok(MethodSelection::Fast),
            "brute" => Ok(MethodSelection::Brute),
            "both" => Ok(MethodSelection::Both),
            other => Err(Error::Usage(format!(
                "unknown method {other:?} (expected fast, brute or both)"
            ))),
        }
    }
}

/// Settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Chairs in the circle.
    pub chairs: u64,

    /// Methods to run.
    pub method: MethodSelection,

    /// Emit JSON instead of text.
    pub json: bool,

    /// Include the round schedule in JSON output.
    pub rounds: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            chairs: DEFAULT_CHAIRS,
            method: MethodSelection::default(),
            json: false,
            rounds: false,
        }
    }
}

impl CliConfig {
    /// Layer environment variables over the defaults.
    ///
    /// `lookup` is `std::env::var` in the binary and a map in tests.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(chairs) = lookup(CHAIRS_ENV) {
            config.chairs = parse_chairs(&chairs)?;
        }
        if let Some(method) = lookup(METHOD_ENV) {
            config.method = method.parse()?;
        }

        Ok(config)
    }
}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Compute the survivor.
    Run(CliConfig),
    /// Print usage and exit.
    Help,
}

/// Apply command-line arguments (program name excluded) on top of `base`.
pub fn parse_args<I>(args: I, base: CliConfig) -> Result<Command>
where
    I: IntoIterator<Item = String>,
{
    let mut config = base;
    let mut chairs_seen = false;
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" | "help" => return Ok(Command::Help),
            "--json" => config.json = true,
            "--rounds" => config.rounds = true,
            "-m" | "--method" => {
                let Some(value) = args.next() else {
                    return Err(Error::Usage("--method requires a value".to_string()));
                };
                config.method = value.parse()?;
            }
            flag if flag.starts_with("--method=") => {
                config.method = flag["--method=".len()..].parse()?;
            }
            flag if flag.starts_with('-') && flag.len() > 1 && !is_number(flag) => {
                return Err(Error::Usage(format!("unknown option {flag}")));
            }
            value => {
                if chairs_seen {
                    return Err(Error::Usage(format!("unexpected argument {value}")));
                }
                config.chairs = parse_chairs(value)?;
                chairs_seen = true;
            }
        }
    }

    Ok(Command::Run(config))
}

// Lets "-5" reach parse_chairs and fail as an invalid count.
fn is_number(arg: &str) -> bool {
    arg[1..].chars().all(|c| c.is_ascii_digit() || c == '.')
}

/// Print usage information.
pub fn print_usage() {
    eprintln!("survivor - Find the last chair left when every second person leaves");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  survivor [CHAIRS] [--method fast|brute|both] [--json] [--rounds]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -m, --method <METHOD>  fast (default), brute, or both to cross-check");
    eprintln!("      --json             Print a JSON report per method");
    eprintln!("      --rounds           Include the round schedule in the JSON report");
    eprintln!("  -h, --help             Show this help");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  {CHAIRS_ENV}  Default chair count (default: {DEFAULT_CHAIRS})");
    eprintln!("  {METHOD_ENV}  Default method (default: fast)");
    eprintln!("  RUST_LOG         Log filter (default: survivor=info)");
}
