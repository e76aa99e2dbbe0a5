//! # Command-Line Interface
//!
//! Resolves the search request, runs it and prints the result.
//!
//! ## Input Resolution
//!
//! | Value | Sources, highest priority first |
//! |-------|---------------------------------|
//! | `start`, `end` | `--start`/`--end`, config file, interactive prompt |
//! | `width`, `height` | `--width`/`--height`, config file, default 8 |
//! | `max_paths` | `--max-paths`, config file, unlimited |
//!
//! ## Output Formats
//!
//! All output supports the `--format` flag:
//! - `text` (default) - One `Path: a1 -> b3 -> ...` line per path
//! - `json` - A single JSON object with the distance and every path
//!
//! `--board` adds a step-numbered board and `--dot FILE` writes a Graphviz
//! diagram of all paths.
//!
//! ## Verbose Mode
//!
//! Use `--verbose` (or `-v`) for debug output on stderr:
//! ```bash
//! knight-paths --verbose --start a1 --end h8
//! ```
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the search.

mod app;
mod input;
mod output;
mod render;

pub use app::{run, Cli};
pub use input::Request;
pub use output::{Output, OutputFormat};
pub use render::render_board;
