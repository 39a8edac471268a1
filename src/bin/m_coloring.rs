use std::time::Instant;

use anyhow::Result;
use clap::{App, load_yaml};
use serde_json::json;

use backtrack_color::color::format_coloring;
use backtrack_color::search::backtracking::BacktrackingSpace;
use backtrack_color::util::{read_params, export_results};


/** decides whether an instance can be colored with m colors (and possibly enumerates them) */
pub fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    // parse arguments
    let yaml = load_yaml!("m_coloring.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    let params = read_params(&main_args)?;
    let m = params.nb_colors;

    // solve it
    let t_start = Instant::now();
    let mut space = BacktrackingSpace::new(&params.instance, m, params.find_all)?;
    space.run();
    let duration = t_start.elapsed().as_secs_f32();
    println!("backtracking took {:.3} seconds.", duration);
    match space.solutions().first() {
        None => println!("Graph cannot be colored with {} colors.", m),
        Some(sol) => {
            println!("Graph can be colored with {} colors. One coloring:", m);
            print!("{}", format_coloring(sol));
        }
    }
    if params.find_all {
        println!("\nFound {} solution(s) with {} colors.\n", space.solutions().len(), m);
        if params.print_all {
            for (idx, sol) in space.solutions().iter().enumerate() {
                println!("Solution {}: {:?}", idx+1, sol);
            }
        }
    }
    let stats = json!({
        "nb_colors": m,
        "find_all": params.find_all,
        "nb_solutions": space.solutions().len(),
        "search": space.stats(),
        "time_searched": duration,
        "inst_name": params.inst_name,
    });

    // export results
    export_results(&params, space.solutions(), &stats)
}
