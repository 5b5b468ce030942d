//! Batch placement runner (default binary).
//!
//! Reads placements from the command line (or stdin), plays them on a fresh
//! grid and prints the final stack height, `-1` on failure.

use std::io::{self, IsTerminal, Read};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use tetris_sim::config::{Args, CliConfig};
use tetris_sim::engine::{Outcome, Simulation};
use tetris_sim::render::render_grid;
use tetris_sim::report::Report;

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    let mut config = CliConfig::from_env();
    config.apply_args(&args);

    let tokens = if args.placements.is_empty() {
        read_tokens(io::stdin()).context("failed to read placements from stdin")?
    } else {
        args.placements.clone()
    };

    let (report, sim) = run(&config, &tokens);

    if args.show {
        if let Some(sim) = &sim {
            let mut stdout = io::stdout();
            let color = stdout.is_terminal();
            render_grid(sim.grid(), &mut stdout, color).context("failed to render grid")?;
        }
    }

    if args.json {
        println!("{}", report.to_json().context("failed to encode report")?);
    } else {
        println!("{}", report.to_line());
    }

    if let Some(err) = &report.error {
        eprintln!("[sim] {}", err.message);
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

/// Play every token in order. The simulation is returned whenever the grid
/// could be created, so a failed run can still be shown.
fn run(config: &CliConfig, tokens: &[String]) -> (Report, Option<Simulation>) {
    let mut sim = match Simulation::new(config.simulation_config()) {
        Ok(sim) => sim,
        Err(err) => {
            return (Report::failure(&err, None, &Outcome::default()), None);
        }
    };

    for (turn, token) in tokens.iter().enumerate() {
        match sim.play_encoded(token) {
            Ok(Some(landing)) => {
                if config.verbose {
                    eprintln!(
                        "[sim] turn {}: {}@{} -> row {}, cleared {}",
                        turn + 1,
                        landing.kind,
                        landing.column,
                        landing.row,
                        landing.lines_cleared
                    );
                }
            }
            Ok(None) => {
                if config.verbose {
                    eprintln!("[sim] turn {}: skipped unknown block in {:?}", turn + 1, token);
                }
            }
            Err(err) => {
                let report = Report::failure(&err, Some(token), &sim.outcome());
                return (report, Some(sim));
            }
        }
    }

    (Report::success(&sim.outcome()), Some(sim))
}

/// Split input on whitespace and commas
fn read_tokens<R: Read>(mut input: R) -> io::Result<Vec<String>> {
    let mut text = String::new();
    input.read_to_string(&mut text)?;
    Ok(text
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_tokens_accepts_commas_and_newlines() {
        let tokens = read_tokens("Q0, I4\nT1,,\n".as_bytes()).unwrap();
        assert_eq!(tokens, vec!["Q0", "I4", "T1"]);
    }

    #[test]
    fn run_reports_failure_with_progress() {
        let config = CliConfig {
            width: 10,
            height: 20,
            ..CliConfig::default()
        };
        let tokens: Vec<String> = ["Q0", "K1"].iter().map(|s| s.to_string()).collect();
        let (report, sim) = run(&config, &tokens);

        assert!(!report.ok);
        assert_eq!(report.stack_height, -1);
        assert_eq!(report.turns, 1);
        assert_eq!(sim.map(|s| s.stack_height()), Some(2));
    }

    #[test]
    fn run_reports_invalid_dimensions() {
        let config = CliConfig {
            width: 0,
            ..CliConfig::default()
        };
        let (report, sim) = run(&config, &[]);
        assert_eq!(
            report.error.map(|e| e.code),
            Some("invalid_dimensions")
        );
        assert!(sim.is_none());
    }
}
