use std::env;
use std::process;

use clap::{App, Arg, ArgGroup};

use warehouse_solver::config::Method;
use warehouse_solver::data::{Dir, Pos};
use warehouse_solver::formatter::SolutionFormatter;
use warehouse_solver::solver;
use warehouse_solver::LoadWarehouse;

fn main() {
    env_logger::init();

    let matches = App::new("warehouse-solver")
        .author("Warehouse Solver Developers")
        .version("0.1.0")
        .arg(
            Arg::with_name("taboo")
                .short("-t")
                .long("--taboo")
                .help("print taboo cells instead of solving"),
        )
        .arg(
            Arg::with_name("replay")
                .long("--replay")
                .takes_value(true)
                .value_name("ACTIONS")
                .help("replay a comma separated action sequence instead of solving"),
        )
        .arg(
            Arg::with_name("can-go")
                .long("--can-go")
                .takes_value(true)
                .value_name("ROW,COLUMN")
                .help("check whether the worker can walk to a cell instead of solving"),
        )
        .group(
            ArgGroup::with_name("query")
                .arg("taboo")
                .arg("replay")
                .arg("can-go"),
        )
        .arg(
            Arg::with_name("macro")
                .short("-m")
                .long("--macro")
                .help("solve with box pushes instead of worker moves"),
        )
        .arg(
            Arg::with_name("allow-taboo-push")
                .long("--allow-taboo-push")
                .help("do not prune pushes onto taboo cells"),
        )
        .arg(
            Arg::with_name("method")
                .long("--method")
                .takes_value(true)
                .possible_values(&["bfs", "astar"])
                .default_value("astar"),
        )
        .arg(
            Arg::with_name("stats")
                .long("--stats")
                .help("print search statistics"),
        )
        .arg(
            Arg::with_name("states")
                .long("--states")
                .help("print intermediate states of the solution"),
        )
        .arg(Arg::with_name("file").required(true))
        .get_matches();

    let path = matches.value_of("file").unwrap();
    let warehouse = path.load_warehouse().unwrap_or_else(|err| {
        let current_dir = env::current_dir().unwrap();
        println!("Can't load warehouse {} in {}: {}", path, current_dir.display(), err);
        process::exit(1);
    });

    if matches.is_present("taboo") {
        println!("{}", solver::taboo_cells(&warehouse));
        return;
    }

    if let Some(sequence) = matches.value_of("replay") {
        let actions = parse_actions(sequence);
        match solver::check_action_seq(&warehouse, &actions) {
            Some(end) => print!("{}", end),
            None => println!("Failure"),
        }
        return;
    }

    if let Some(dest) = matches.value_of("can-go") {
        let dest = parse_pos(dest);
        println!("{}", solver::can_go_there(&warehouse, dest));
        return;
    }

    let method: Method = matches.value_of("method").unwrap().parse().unwrap();
    let allow_taboo_push = matches.is_present("allow-taboo-push");
    let print_status = matches.is_present("stats");

    if matches.is_present("macro") {
        let solution = solver::solve_macro(&warehouse, method, allow_taboo_push, print_status);
        if print_status {
            print!("{}", solution.stats);
        }
        match solution.actions {
            None => println!("Impossible"),
            Some(pushes) => {
                println!("{}", format_actions(&pushes));
                if matches.is_present("states") {
                    print!("{}", SolutionFormatter::pushes(&warehouse, &pushes));
                }
            }
        }
    } else {
        let solution = solver::solve_elementary(&warehouse, method, allow_taboo_push, print_status);
        if print_status {
            print!("{}", solution.stats);
        }
        match solution.actions {
            None => println!("Impossible"),
            Some(moves) => {
                println!("{}", format_actions(&moves));
                if matches.is_present("states") {
                    print!("{}", SolutionFormatter::moves(&warehouse, &moves));
                }
            }
        }
    }
}

fn format_actions<A: std::fmt::Display>(actions: &[A]) -> String {
    let actions: Vec<String> = actions.iter().map(|action| action.to_string()).collect();
    actions.join(", ")
}

fn parse_actions(sequence: &str) -> Vec<Dir> {
    sequence
        .split(',')
        .map(|action| {
            action.trim().parse().unwrap_or_else(|err: String| {
                println!("{}", err);
                process::exit(1);
            })
        })
        .collect()
}

fn parse_pos(pos: &str) -> Pos {
    let mut coords = pos.split(',').map(|coord| coord.trim().parse::<i16>());
    match (coords.next(), coords.next(), coords.next()) {
        (Some(Ok(r)), Some(Ok(c)), None) => Pos::new(r, c),
        _ => {
            println!("Expected a row,column pair: {}", pos);
            process::exit(1);
        }
    }
}
