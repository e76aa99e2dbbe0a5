//! Main CLI application structure

use std::fs;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use super::input::Request;
use super::output::{Output, OutputFormat};
use super::render::render_board;
use crate::domain::{PathFinder, PathGraph, ShortestPaths};
use crate::storage::Config;

#[derive(Parser)]
#[command(name = "knight-paths")]
#[command(author, version, about = "Find every shortest knight path between two squares")]
pub struct Cli {
    /// Start square in algebraic notation (e.g., a1)
    #[arg(long, short = 's')]
    pub start: Option<String>,

    /// End square in algebraic notation (e.g., h8)
    #[arg(long, short = 'e')]
    pub end: Option<String>,

    /// Path to a JSON or TOML config file
    #[arg(long, short = 'c', env = "KNIGHT_PATHS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Board width in files (default 8)
    #[arg(long)]
    pub width: Option<u32>,

    /// Board height in ranks (default 8)
    #[arg(long)]
    pub height: Option<u32>,

    /// Fail instead of listing more than this many paths
    #[arg(long)]
    pub max_paths: Option<usize>,

    /// Only report the distance and the number of shortest paths
    #[arg(long)]
    pub count: bool,

    /// Print the board with the step number of every visited square
    #[arg(long)]
    pub board: bool,

    /// Write a Graphviz DOT diagram of all paths to this file
    #[arg(long, value_name = "FILE")]
    pub dot: Option<PathBuf>,

    /// Output format
    #[arg(long, short = 'f', default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl Cli {
    /// Config values given on the command line
    fn overrides(&self) -> Config {
        Config {
            start: self.start.clone(),
            end: self.end.clone(),
            width: self.width,
            height: self.height,
            max_paths: self.max_paths,
        }
    }
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(cli.format, cli.verbose);

    output.verbose("knight-paths starting");

    if let Err(e) = execute(&cli, &output) {
        if output.is_json() {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
        return Err(e);
    }

    output.verbose("Search completed successfully");
    Ok(())
}

fn execute(cli: &Cli, output: &Output) -> Result<()> {
    let file_config = match &cli.config {
        Some(path) => {
            output.verbose_ctx("config", &format!("Loading config from: {}", path.display()));
            Config::load(path)?
        }
        None => Config::default(),
    };
    let config = file_config.merge(cli.overrides());

    let request = Request::resolve(config, &mut io::stdin().lock(), &mut io::stderr())?;
    output.verbose_ctx(
        "search",
        &format!(
            "Finding shortest paths from {} to {} on a {} board",
            request.start, request.end, request.board
        ),
    );

    let finder = PathFinder::new(request.board).with_options(request.options);

    if cli.count {
        let start = request.board.parse_square(&request.start)?;
        let end = request.board.parse_square(&request.end)?;
        let distance = finder.distance(start, end)?;
        let count = finder.count(start, end)?;

        output.data(&serde_json::json!({
            "start": start,
            "end": end,
            "distance": distance,
            "count": count,
        }));
        output.line(&format!(
            "{} -> {}: {} move(s), {} shortest path(s)",
            start, end, distance, count
        ));
        return Ok(());
    }

    let result = finder.find_between(&request.start, &request.end)?;
    output.verbose_ctx("search", &format!("Found {} shortest path(s)", result.count()));

    print_paths(output, &request, &result);

    if cli.board {
        output.blank();
        output.line(render_board(&request.board, &result).trim_end());
    }

    if let Some(path) = &cli.dot {
        let dot = PathGraph::from_paths(&result.paths).to_dot();
        fs::write(path, dot)
            .with_context(|| format!("Failed to write graph: {}", path.display()))?;
        output.verbose_ctx("dot", &format!("Wrote graph to: {}", path.display()));
        output.line(&format!("Graph saved as {}", path.display()));
    }

    Ok(())
}

fn print_paths(output: &Output, request: &Request, result: &ShortestPaths) {
    if output.is_json() {
        output.data(&serde_json::json!({
            "start": result.start,
            "end": result.end,
            "width": request.board.width(),
            "height": request.board.height(),
            "distance": result.distance,
            "count": result.count(),
            "paths": result.paths,
        }));
        return;
    }

    output.line(&format!(
        "Found {} shortest path(s) from {} to {} ({} move(s))",
        result.count(),
        result.start,
        result.end,
        result.distance
    ));
    for path in &result.paths {
        output.line(&format!("Path: {}", path));
    }
}
