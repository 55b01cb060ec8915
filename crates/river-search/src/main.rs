//! CLI entry point for the river crossing search.
//!
//! Usage:
//!   river-search [options]
//!
//! Options:
//!   -c, --cannibals <n>     Number of cannibals (default: 3)
//!   -m, --missionaries <n>  Number of missionaries (default: 3)
//!   -d, --depthFirst        Switch to depth first search
//!   --forward               Print the path from the start instead of the goal
//!   --json                  Print a JSON report

use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use river_search::{
    move_between, Move, Search, SearchConfig, SearchError, SearchStatistics, SelectionMode, State,
};

#[derive(Parser)]
#[command(name = "river-search")]
#[command(about = "Breadth-first or depth-first search for the missionaries and cannibals puzzle")]
#[command(version)]
struct Cli {
    /// Number of cannibals
    #[arg(short, long, default_value = "3")]
    cannibals: u32,

    /// Number of missionaries
    #[arg(short, long, default_value = "3")]
    missionaries: u32,

    /// Switch to depth first search
    #[arg(short = 'd', long = "depthFirst")]
    depth_first: bool,

    /// Print the path from the starting state to the goal
    #[arg(long)]
    forward: bool,

    /// Print a JSON report instead of plain text
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn search_config(&self) -> SearchConfig {
        SearchConfig {
            cannibals: self.cannibals,
            missionaries: self.missionaries,
            mode: SelectionMode::from_breadth_first(!self.depth_first),
        }
    }
}

/// Output format for the JSON report
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchOutput {
    solved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
    mode: SelectionMode,
    cannibals: u32,
    missionaries: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    move_count: Option<usize>,
    path: Vec<State>,
    moves: Vec<Move>,
    statistics: SearchStatistics,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    }
}

/// Run the search and print the result. Returns the process exit status.
fn run(cli: &Cli) -> Result<i32> {
    let config = cli.search_config();
    let mut search = Search::from_config(&config);
    let result = search.run();

    if cli.json {
        let output = format_result(&config, &result, search.statistics());
        let json = serde_json::to_string_pretty(&output).context("serializing search report")?;
        println!("{}", json);
        return Ok(if result.is_ok() { 0 } else { 1 });
    }

    match result {
        Ok(goal) => {
            if cli.forward {
                for state in goal.reconstruct_path() {
                    println!("{}", state);
                }
            } else {
                for state in goal.ancestors() {
                    println!("{}", state);
                }
            }
            Ok(0)
        }
        Err(e @ SearchError::Unsolvable { .. }) => {
            println!("{}", e);
            Ok(1)
        }
    }
}

fn format_result(
    config: &SearchConfig,
    result: &Result<State, SearchError>,
    statistics: &SearchStatistics,
) -> SearchOutput {
    let (path, reason) = match result {
        Ok(goal) => (goal.reconstruct_path(), None),
        Err(e) => (Vec::new(), Some(e.to_string())),
    };
    let moves: Vec<Move> = path
        .windows(2)
        .filter_map(|pair| move_between(&pair[0], &pair[1]))
        .collect();

    SearchOutput {
        solved: result.is_ok(),
        reason,
        mode: config.mode,
        cannibals: config.cannibals,
        missionaries: config.missionaries,
        move_count: result.as_ref().ok().map(|_| moves.len()),
        path,
        moves,
        statistics: statistics.clone(),
    }
}
