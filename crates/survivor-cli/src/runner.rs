//! Timed execution of each method and rendering of the results.

use std::time::{Duration, Instant};

use serde::Serialize;
use survivor_core::{brute_force_position, RoundDescriptor, RoundSequence};
use tracing::{debug, info};

use crate::config::{parse_args, CliConfig, Command, Method};
use crate::error::{Error, Result};

/// Result of one method.
#[derive(Debug, Clone)]
pub struct Outcome {
    /// Method that produced the result.
    pub method: Method,
    /// Chair of the survivor.
    pub survivor: u64,
    /// Wall time spent inside the method.
    pub elapsed: Duration,
    /// Round schedule, only for the recurrence.
    pub rounds: Option<RoundSequence>,
}

/// JSON view of an [`Outcome`].
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub chairs: u64,
    pub survivor: u64,
    pub method: Method,
    pub elapsed_micros: u128,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rounds: Option<&'a [RoundDescriptor]>,
}

/// Run one method, timing it from the outside.
pub fn run_method(method: Method, chairs: u64) -> Result<Outcome> {
    let start = Instant::now();
    let (survivor, rounds) = match method {
        Method::Fast => {
            let seq = RoundSequence::forward(chairs)?;
            (seq.survivor(), Some(seq))
        }
        Method::Brute => (brute_force_position(chairs)?, None),
    };
    let elapsed = start.elapsed();

    if let Some(seq) = &rounds {
        for (depth, round) in seq.iter().enumerate() {
            debug!(depth, count = round.count, delete_head = round.delete_head, "round");
        }
    }
    info!(
        %method,
        chairs,
        survivor,
        elapsed_micros = micros(elapsed),
        "survivor found"
    );

    Ok(Outcome {
        method,
        survivor,
        elapsed,
        rounds,
    })
}

/// Whole microseconds in `elapsed`, saturating at `u64::MAX`.
pub fn micros(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX)
}

/// Run every selected method; with more than one, they must agree.
pub fn run(config: &CliConfig) -> Result<Vec<Outcome>> {
    let outcomes = config
        .method
        .methods()
        .iter()
        .map(|&method| run_method(method, config.chairs))
        .collect::<Result<Vec<_>>>()?;

    let fast = outcomes.iter().find(|o| o.method == Method::Fast);
    let brute = outcomes.iter().find(|o| o.method == Method::Brute);
    if let (Some(fast), Some(brute)) = (fast, brute) {
        if fast.survivor != brute.survivor {
            return Err(Error::Mismatch {
                fast: fast.survivor,
                brute: brute.survivor,
            });
        }
    }

    Ok(outcomes)
}

/// Render outcomes as text lines or JSON lines.
pub fn render(config: &CliConfig, outcomes: &[Outcome]) -> Result<String> {
    let mut lines = Vec::with_capacity(outcomes.len());

    for outcome in outcomes {
        if config.json {
            let report = Report {
                chairs: config.chairs,
                survivor: outcome.survivor,
                method: outcome.method,
                elapsed_micros: outcome.elapsed.as_micros(),
                rounds: outcome
                    .rounds
                    .as_ref()
                    .filter(|_| config.rounds)
                    .map(RoundSequence::descriptors),
            };
            lines.push(serde_json::to_string(&report)?);
        } else {
            lines.push(format!(
                "The survivor is sitting in chair #{}",
                outcome.survivor
            ));
        }
    }

    Ok(lines.join("\n"))
}

/// Configure from `lookup` and `args`, run, and render.
///
/// Returns `None` when help was requested.
pub fn execute<I, F>(args: I, lookup: F) -> Result<Option<String>>
where
    I: IntoIterator<Item = String>,
    F: Fn(&str) -> Option<String>,
{
    let base = CliConfig::from_lookup(lookup)?;
    let config = match parse_args(args, base)? {
        Command::Run(config) => config,
        Command::Help => return Ok(None),
    };

    debug!(?config, "starting");

    let outcomes = run(&config)?;
    render(&config, &outcomes).map(Some)
}

/// Process exit code and stderr line for a failed run.
pub fn failure(error: &Error) -> (i32, String) {
    (1, format!("error: {error}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MethodSelection;

    fn config(chairs: u64, method: MethodSelection) -> CliConfig {
        CliConfig {
            chairs,
            method,
            ..CliConfig::default()
        }
    }

    #[test]
    fn fast_method_reports_rounds() {
        let outcome = run_method(Method::Fast, 100).unwrap();
        assert_eq!(outcome.survivor, 72);
        assert_eq!(outcome.rounds.as_ref().map(RoundSequence::len), Some(8));
    }

    #[test]
    fn brute_method_has_no_rounds() {
        let outcome = run_method(Method::Brute, 100).unwrap();
        assert_eq!(outcome.survivor, 72);
        assert!(outcome.rounds.is_none());
    }

    #[test]
    fn both_methods_agree() {
        let outcomes = run(&config(1_000_000, MethodSelection::Both)).unwrap();
        assert_eq!(outcomes.len(), 2);
        assert!(outcomes.iter().all(|o| o.survivor == 951_424));
    }

    #[test]
    fn zero_chairs_fails_before_running() {
        let err = run(&config(0, MethodSelection::Both)).unwrap_err();
        assert!(matches!(err, Error::Core(_)));
    }

    #[test]
    fn text_output() {
        let cfg = config(100, MethodSelection::Both);
        let out = render(&cfg, &run(&cfg).unwrap()).unwrap();
        assert_eq!(
            out,
            "The survivor is sitting in chair #72\nThe survivor is sitting in chair #72"
        );
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn micros_saturates() {
        assert_eq!(micros(Duration::from_micros(1_500)), 1_500);
        assert_eq!(micros(Duration::MAX), u64::MAX);
    }

    #[test]
    fn execute_prints_survivor() {
        let out = execute(args(&["1000000"]), no_env).unwrap();
        assert_eq!(out.as_deref(), Some("The survivor is sitting in chair #951424"));
    }

    #[test]
    fn execute_help_renders_nothing() {
        assert_eq!(execute(args(&["--help"]), no_env).unwrap(), None);
    }

    #[test]
    fn execute_reads_environment() {
        let out = execute(Vec::new(), |k| (k == "SURVIVOR_CHAIRS").then(|| "6".to_string()))
            .unwrap();
        assert_eq!(out.as_deref(), Some("The survivor is sitting in chair #4"));
    }

    #[test]
    fn invalid_input_exits_with_code_one() {
        let err = execute(args(&["0"]), no_env).unwrap_err();
        let (code, line) = failure(&err);
        assert_eq!(code, 1);
        assert_eq!(
            line,
            "error: invalid argument: number of chairs must be at least 1"
        );

        let err = execute(args(&["--frobnicate"]), no_env).unwrap_err();
        assert_eq!(
            failure(&err),
            (1, "error: usage error: unknown option --frobnicate".to_string())
        );
    }

    #[test]
    fn oversized_brute_force_is_an_error() {
        let err = execute(args(&["18446744073709551615", "--method", "brute"]), no_env)
            .unwrap_err();
        assert!(matches!(err, Error::Core(survivor_core::Error::InvalidArgument(_))));
        assert_eq!(failure(&err).0, 1);
    }

    #[test]
    fn json_output() {
        let mut cfg = config(6, MethodSelection::Fast);
        cfg.json = true;
        let out = render(&cfg, &run(&cfg).unwrap()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["chairs"], 6);
        assert_eq!(value["survivor"], 4);
        assert_eq!(value["method"], "fast");
        assert!(value.get("rounds").is_none());

        cfg.rounds = true;
        let out = render(&cfg, &run(&cfg).unwrap()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(
            value["rounds"],
            serde_json::json!([
                { "delete_head": true, "count": 6 },
                { "delete_head": true, "count": 3 },
                { "delete_head": false, "count": 1 },
            ])
        );
    }
}
