//! Survivor CLI
//!
//! Command-line front end for `survivor-core`. Reads the chair count from the
//! command line or the environment, runs the halving recurrence and/or the
//! brute-force oracle, times each one and prints the survivor's chair.
//!
//! # Example
//!
//! ```
//! use survivor_cli::{render, run, CliConfig};
//!
//! let config = CliConfig::default();
//! let outcomes = run(&config).unwrap();
//! assert_eq!(
//!     render(&config, &outcomes).unwrap(),
//!     "The survivor is sitting in chair #72"
//! );
//! ```

pub mod config;
pub mod error;
pub mod runner;

pub use config::{parse_args, print_usage, CliConfig, Command, Method, MethodSelection};
pub use error::{Error, Result};
pub use runner::{execute, failure, micros, render, run, run_method, Outcome, Report};
