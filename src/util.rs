use anyhow::{bail, Context, Result};
use clap::ArgMatches;
use serde_json::Value;

use crate::{
    color::{ColoringInstance, Solution, CheckerResult, checker, solution_to_classes},
    compact_instance::CompactInstance,
    generator::{random_graph, sample_graph},
};

/** parameters of a solver run (read from the command line) */
#[derive(Debug)]
pub struct Params {
    /// instance name (file name, or generator description)
    pub inst_name: String,
    /// instance to color
    pub instance: CompactInstance,
    /// color budget
    pub nb_colors: usize,
    /// enumerate all solutions instead of stopping at the first one
    pub find_all: bool,
    /// print every enumerated solution
    pub print_all: bool,
    /// where to write the solution (color classes)
    pub sol_file: Option<String>,
    /// where to write the statistics (json)
    pub perf_file: Option<String>,
}

/// parses an optional argument, uses default if not given
fn parse_or<T:std::str::FromStr>(main_args:&ArgMatches, name:&str, default:T) -> Result<T>
where T::Err: std::error::Error + Send + Sync + 'static {
    match main_args.value_of(name) {
        None => Ok(default),
        Some(s) => s.parse::<T>()
            .with_context(|| format!("unable to parse --{} (given: {})", name, s)),
    }
}

/** reads command line input and returns the run parameters */
pub fn read_params(main_args:&ArgMatches) -> Result<Params> {
    let nb_colors:usize = match main_args.value_of("colors") {
        None => bail!("the number of colors (--colors) is required"),
        Some(s) => s.parse::<usize>()
            .with_context(|| format!("unable to parse the number of colors given ({})", s))?,
    };
    // read value of the solution filename
    let sol_file: Option<String> = main_args.value_of("solution").map(|e| {
        println!("printing solutions in: {}", e);
        e.to_string()
    });
    // read value of the performance logs filename
    let perf_file: Option<String> = main_args.value_of("perf").map(|e| {
        println!("printing perfs in: {}", e);
        e.to_string()
    });
    // read (or build) the instance
    let (inst_name, instance) = match (main_args.value_of("instance"), main_args.value_of("random")) {
        (Some(filename), _) => {
            let inst = CompactInstance::from_dimacs_file(filename)
                .with_context(|| format!("unable to read instance {}", filename))?;
            (filename.to_string(), inst)
        },
        (None, Some(_)) => {
            let n:usize = parse_or(main_args, "random", 0)?;
            let density:f64 = parse_or(main_args, "density", 0.5)?;
            let seed:u64 = parse_or(main_args, "seed", 0)?;
            if !(0. ..=1.).contains(&density) {
                bail!("the density must be in [0,1] (given: {})", density);
            }
            (format!("random_{}_{}_{}", n, density, seed), random_graph(n, density, seed))
        },
        (None, None) => ("sample".to_string(), sample_graph()),
    };
    log::info!("instance: {}", inst_name);
    instance.display_statistics();
    println!("=======================");
    Ok(Params {
        inst_name,
        instance,
        nb_colors,
        find_all: main_args.is_present("all"),
        print_all: main_args.is_present("print-all"),
        sol_file,
        perf_file,
    })
}

/// exports search results to files
pub fn export_results(params:&Params, solutions:&[Solution], stats:&Value) -> Result<()> {
    // export statistics
    if let Some(filename) = &params.perf_file {
        std::fs::write(filename, serde_json::to_string(stats)?)
            .with_context(|| format!("couldn't write {}", filename))?;
    }
    // export solution
    if let Some(filename) = &params.sol_file {
        match solutions.first() {
            None => log::warn!("no solution to write in {}", filename),
            Some(sol) => {
                let checker_result = checker(&params.instance, params.nb_colors, sol);
                if !matches!(checker_result, CheckerResult::Ok(_)) {
                    bail!("invalid solution (reason: {:?})", checker_result);
                }
                let classes = solution_to_classes(sol, params.nb_colors);
                params.instance.write_solution(filename, &classes)
                    .with_context(|| format!("couldn't write {}", filename))?;
            }
        }
    }
    Ok(())
}
