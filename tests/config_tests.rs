//! CLI configuration tests - env layering and flag overrides

use std::collections::HashMap;

use clap::Parser;

use tetris_sim::config::{Args, CliConfig, CLI_DEFAULT_HEIGHT, CLI_DEFAULT_WIDTH};
use tetris_sim::core::Orientation;
use tetris_sim::engine::UnknownBlockPolicy;

fn config_from(vars: &[(&str, &str)]) -> CliConfig {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    CliConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn test_defaults_without_env() {
    let config = config_from(&[]);
    assert_eq!(config, CliConfig::default());
    assert_eq!(config.width, CLI_DEFAULT_WIDTH);
    assert_eq!(config.height, CLI_DEFAULT_HEIGHT);
}

#[test]
fn test_env_overrides() {
    let config = config_from(&[
        ("TETRIS_SIM_WIDTH", "12"),
        ("TETRIS_SIM_HEIGHT", " 40 "),
        ("TETRIS_SIM_SKIP_UNKNOWN", "true"),
        ("TETRIS_SIM_FLAT_JL", "1"),
        ("TETRIS_SIM_VERBOSE", "no"),
    ]);
    assert_eq!(config.width, 12);
    assert_eq!(config.height, 40);
    assert!(config.skip_unknown);
    assert!(config.flat_jl);
    assert!(!config.verbose);
}

#[test]
fn test_unparsable_env_falls_back() {
    let config = config_from(&[("TETRIS_SIM_WIDTH", "wide"), ("TETRIS_SIM_HEIGHT", "-3")]);
    assert_eq!(config.width, CLI_DEFAULT_WIDTH);
    assert_eq!(config.height, CLI_DEFAULT_HEIGHT);
}

#[test]
fn test_flags_override_env() {
    let mut config = config_from(&[("TETRIS_SIM_WIDTH", "12"), ("TETRIS_SIM_HEIGHT", "40")]);
    let args = Args::try_parse_from(["tetris-sim", "--width", "5", "--skip-unknown", "Q0", "I1"])
        .unwrap();
    config.apply_args(&args);

    assert_eq!(config.width, 5);
    assert_eq!(config.height, 40);
    assert!(config.skip_unknown);
    assert_eq!(args.placements, vec!["Q0", "I1"]);
}

#[test]
fn test_switches_do_not_turn_env_settings_off() {
    let mut config = config_from(&[("TETRIS_SIM_VERBOSE", "yes")]);
    let args = Args::try_parse_from(["tetris-sim"]).unwrap();
    config.apply_args(&args);
    assert!(config.verbose);
    assert!(args.placements.is_empty());
}

#[test]
fn test_output_flags_parse() {
    let args = Args::try_parse_from(["tetris-sim", "--json", "--show", "-v", "T1"]).unwrap();
    assert!(args.json);
    assert!(args.show);
    assert!(args.verbose);
}

#[test]
fn test_rejects_bad_width_flag() {
    assert!(Args::try_parse_from(["tetris-sim", "--width", "ten"]).is_err());
}

#[test]
fn test_simulation_config_mapping() {
    let config = CliConfig {
        width: 7,
        height: 9,
        skip_unknown: true,
        flat_jl: true,
        verbose: false,
    };
    let sim = config.simulation_config();
    assert_eq!(sim.width, 7);
    assert_eq!(sim.height, 9);
    assert_eq!(sim.orientation, Orientation::Flat);
    assert_eq!(sim.unknown_blocks, UnknownBlockPolicy::Skip);

    let sim = CliConfig::default().simulation_config();
    assert_eq!(sim.orientation, Orientation::Upright);
    assert_eq!(sim.unknown_blocks, UnknownBlockPolicy::Abort);
}
