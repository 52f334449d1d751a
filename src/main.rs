use std::env;
use std::process;

use clap::{crate_version, App, Arg};
use prettytable::{Cell, Row, Table};

use eleven_piece_solver::config::{Format, Method};
use eleven_piece_solver::fs::save_route;
use eleven_piece_solver::route::Route;
use eleven_piece_solver::state::State;
use eleven_piece_solver::task::Task;
use eleven_piece_solver::{LoadTasks, Solve};

fn main() {
    env_logger::init();

    let matches = App::new("eleven-piece-solver")
        .author("martin-t")
        .version(crate_version!())
        .about("Finds the shortest way to move the 11 piece puzzle from one state to another")
        .arg(
            Arg::with_name("method")
                .short("m")
                .long("method")
                .takes_value(true)
                .possible_values(&Method::NAMES)
                .default_value("a-star")
                .help("search method"),
        ).arg(
            Arg::with_name("max-moves")
                .short("d")
                .long("max-moves")
                .takes_value(true)
                .value_name("N")
                .help("give up on routes longer than N moves"),
        ).arg(
            Arg::with_name("file")
                .short("f")
                .long("file")
                .takes_value(true)
                .value_name("PATH")
                .conflicts_with("start")
                .help("read tasks from a file, one 'START END' pair per line"),
        ).arg(
            Arg::with_name("out-dir")
                .short("o")
                .long("out-dir")
                .takes_value(true)
                .value_name("DIR")
                .default_value(".")
                .help("where to save routes"),
        ).arg(
            Arg::with_name("no-save")
                .long("no-save")
                .help("don't save routes to files"),
        ).arg(
            Arg::with_name("moves")
                .long("moves")
                .help("print moves of the blank (lrdu) instead of states"),
        ).arg(
            Arg::with_name("print-status")
                .short("s")
                .long("print-status")
                .help("print search progress"),
        ).arg(
            Arg::with_name("cross-check")
                .long("cross-check")
                .help("solve using both methods and compare route lengths"),
        ).arg(
            Arg::with_name("start")
                .requires("end")
                .help("start state, e.g. +dd+b_cb+dda+abd (all literal tasks if omitted)"),
        ).arg(Arg::with_name("end").help("end state"))
        .get_matches();

    // validated by clap
    let method: Method = matches
        .value_of("method")
        .unwrap_or("a-star")
        .parse()
        .unwrap_or_else(|err| {
            println!("{}", err);
            process::exit(1);
        });
    let max_moves = matches.value_of("max-moves").map(|max| {
        max.parse::<usize>().unwrap_or_else(|err| {
            println!("Invalid move limit {}: {}", max, err);
            process::exit(1);
        })
    });
    let format = if matches.is_present("moves") {
        Format::Moves
    } else {
        Format::Matrix
    };
    let out_dir = matches.value_of("out-dir").unwrap_or(".");
    let save = !matches.is_present("no-save");
    let print_status = matches.is_present("print-status");
    let cross_check = matches.is_present("cross-check");
    let methods = if cross_check {
        vec![Method::AStar, Method::IterativeDeepening]
    } else {
        vec![method]
    };

    let tasks = if let Some(path) = matches.value_of("file") {
        path.load_tasks().unwrap_or_else(|err| {
            let current_dir = env::current_dir().unwrap_or_default();
            println!(
                "Can't load tasks from {} in {}: {}",
                path,
                current_dir.display(),
                err
            );
            process::exit(1);
        })
    } else if let (Some(start), Some(end)) = (matches.value_of("start"), matches.value_of("end")) {
        vec![Task::new(parse_state(start), parse_state(end))]
    } else {
        Task::literal_tasks()
    };

    let mut summary = Table::new();
    summary.set_titles(Row::new(vec![
        Cell::new("Task"),
        Cell::new("Method"),
        Cell::new("Moves"),
        Cell::new("Visited"),
    ]));
    let mut failed = false;

    for task in &tasks {
        let mut lengths = Vec::new();
        let mut saved = false;

        for &method in &methods {
            println!("Solving {} using {}...", task, method);
            let solution = match task.solve(method, max_moves, print_status) {
                Ok(solution) => solution,
                Err(err) => {
                    println!("Can't solve {}: {}", task, err);
                    failed = true;
                    continue;
                }
            };
            if print_status {
                println!("{}", solution.stats);
            }

            match solution.route {
                None => println!("No route"),
                Some(ref route) => {
                    println!("Found route:");
                    match format {
                        Format::Matrix => println!("{}", route.matrix()),
                        Format::Moves => println!("{}", route.moves()),
                    }
                    println!("Moves: {}", route.move_cnt());
                    if cross_check
                        && route.moves().apply(&task.start).as_deref() != Some(route.states())
                    {
                        println!("Moves don't replay to the same route");
                        failed = true;
                    }

                    // both methods would save to the same file
                    if save && !saved {
                        if let Some(path) = save_route(out_dir, route) {
                            println!("Saved to {}", path.display());
                        }
                        saved = true;
                    }
                }
            }

            let length = solution.route.as_ref().map(Route::move_cnt);
            summary.add_row(Row::new(vec![
                Cell::new(&task.to_string()),
                Cell::new(&method.to_string()),
                Cell::new(&length.map_or("-".to_owned(), |l| l.to_string())),
                Cell::new(&solution.stats.total_visited().to_string()),
            ]));
            lengths.push(length);
        }

        if lengths.len() > 1 {
            if lengths.windows(2).all(|pair| pair[0] == pair[1]) {
                println!("Methods agree");
            } else {
                println!("Methods disagree: {:?}", lengths);
                failed = true;
            }
        }
    }

    if tasks.len() > 1 {
        summary.printstd();
    }
    if failed {
        process::exit(1);
    }
}

fn parse_state(s: &str) -> State {
    s.parse().unwrap_or_else(|err| {
        println!("Invalid state {}: {}", s, err);
        process::exit(1);
    })
}
