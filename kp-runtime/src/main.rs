use anyhow::{anyhow, Result};
use clap::{arg, Command};
use kp_algorithms::knapsack::{solve, solve_all, sweep::collision_sweep};
use kp_challenges::knapsack::{Instance, Track};
use kp_structs::{config::SolverConfig, core::Approach};
use kp_utils::{dejsonify, jsonify, jsonify_pretty, read_int_list, read_single_int, u8s_from_str};
use log::info;
use std::{fs, path::PathBuf};

const INSTANCE_HELP: &str = "Instance json string, path to json file, \
    'seed:<STRING>:<NUM_ITEMS>' or 'lists:<VALUES_FILE>,<WEIGHTS_FILE>,<CAPACITY_FILE>'";

fn cli() -> Command {
    Command::new("kp-runtime")
        .about("Solves 0/1 knapsack instances and measures sparse store collisions")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("solve")
                .about("Solves an instance with one or all approaches")
                .arg(arg!(<INSTANCE>).help(INSTANCE_HELP).value_parser(clap::value_parser!(String)))
                .arg(
                    arg!(--config [CONFIG] "Config json string or path to json file")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(--approach [APPROACH] "traditional, space_efficient, greedy_sort or greedy_heap")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(--output [OUTPUT_FILE] "If set, the reports will be saved to this file path (pretty json)")
                        .value_parser(clap::value_parser!(PathBuf)),
                ),
        )
        .subcommand(
            Command::new("sweep")
                .about("Counts sparse store collisions across a range of table sizes")
                .arg(arg!(<INSTANCE>).help(INSTANCE_HELP).value_parser(clap::value_parser!(String)))
                .arg(
                    arg!(--config [CONFIG] "Config json string or path to json file")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(--output [OUTPUT_FILE] "If set, one collision count per line is written to this file path")
                        .value_parser(clap::value_parser!(PathBuf)),
                ),
        )
}

fn main() {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("warn"));
    let matches = cli().get_matches();

    if let Err(e) = match matches.subcommand() {
        Some(("solve", sub_m)) => solve_instance(
            sub_m.get_one::<String>("INSTANCE").unwrap(),
            sub_m.get_one::<String>("config").cloned(),
            sub_m.get_one::<String>("approach").cloned(),
            sub_m.get_one::<PathBuf>("output").cloned(),
        ),
        Some(("sweep", sub_m)) => sweep_instance(
            sub_m.get_one::<String>("INSTANCE").unwrap(),
            sub_m.get_one::<String>("config").cloned(),
            sub_m.get_one::<PathBuf>("output").cloned(),
        ),
        _ => Err(anyhow!("Invalid subcommand")),
    } {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

pub fn solve_instance(
    instance: &str,
    config: Option<String>,
    approach: Option<String>,
    output_file: Option<PathBuf>,
) -> Result<()> {
    let config = load_config(config.as_deref())?;
    let instance = load_instance(instance)?;
    info!(
        "solving {} items with capacity {}",
        instance.num_items(),
        instance.capacity()
    );

    let reports = match approach {
        Some(approach) => vec![solve(&instance, approach.parse::<Approach>()?, &config)?],
        None => solve_all(&instance, &config)?,
    };
    for report in &reports {
        instance.evaluate(&report.selected)?;
    }

    if let Some(path) = output_file {
        fs::write(&path, jsonify_pretty(&reports)?)?;
        println!("reports written to: {:?}", path);
    } else {
        println!("{}", jsonify(&reports)?);
    }
    Ok(())
}

pub fn sweep_instance(instance: &str, config: Option<String>, output_file: Option<PathBuf>) -> Result<()> {
    let config = load_config(config.as_deref())?;
    let instance = load_instance(instance)?;
    let report = collision_sweep(&instance, config.sweep_granularity)?;
    info!("swept {} table sizes", report.samples.len());

    if let Some(path) = output_file {
        fs::write(&path, report.to_collision_lines())?;
        println!("collisions written to: {:?}", path);
    } else {
        print!("{}", report.to_collision_lines());
    }
    Ok(())
}

fn load_config(config: Option<&str>) -> Result<SolverConfig> {
    match config {
        Some(config) => SolverConfig::load(config),
        None => Ok(SolverConfig::default()),
    }
}

fn load_instance(instance: &str) -> Result<Instance> {
    if let Some(rest) = instance.strip_prefix("seed:") {
        let (seed, num_items) = rest
            .rsplit_once(':')
            .ok_or_else(|| anyhow!("Expected 'seed:<STRING>:<NUM_ITEMS>'"))?;
        let num_items = num_items
            .parse::<usize>()
            .map_err(|e| anyhow!("Invalid number of items '{}': {}", num_items, e))?;
        return Instance::generate_instance(&u8s_from_str(seed), &Track { num_items });
    }

    if let Some(rest) = instance.strip_prefix("lists:") {
        let paths: Vec<&str> = rest.split(',').collect();
        let [values, weights, capacity] = paths.as_slice() else {
            return Err(anyhow!(
                "Expected 'lists:<VALUES_FILE>,<WEIGHTS_FILE>,<CAPACITY_FILE>'"
            ));
        };
        return Ok(Instance::new(
            &read_int_list(values)?,
            &read_int_list(weights)?,
            read_single_int(capacity)?,
        )?);
    }

    let instance = if instance.ends_with(".json") {
        fs::read_to_string(instance)
            .map_err(|e| anyhow!("Failed to read instance file {}: {}", instance, e))?
    } else {
        instance.to_string()
    };
    dejsonify::<Instance>(&instance).map_err(|e| anyhow!("Failed to parse instance: {}", e))
}
