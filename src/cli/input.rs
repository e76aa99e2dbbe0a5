//! Resolution of the search request from flags, config file and prompts

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};

use crate::domain::{Board, SearchOptions};
use crate::storage::Config;

/// A fully resolved search request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub board: Board,
    pub start: String,
    pub end: String,
    pub options: SearchOptions,
}

impl Request {
    /// Builds a request, prompting for any square the config leaves unset
    pub fn resolve<R: BufRead, W: Write>(config: Config, input: &mut R, prompt: &mut W) -> Result<Self> {
        let board = config.board()?;
        let options = config.search_options();

        if config.start.is_none() || config.end.is_none() {
            writeln!(prompt, "Enter squares in algebraic notation (e.g., a1, h8).")?;
        }

        let start = match config.start {
            Some(start) => start,
            None => ask(input, prompt, "start")?,
        };
        let end = match config.end {
            Some(end) => end,
            None => ask(input, prompt, "end")?,
        };

        Ok(Self {
            board,
            start,
            end,
            options,
        })
    }
}

/// Reads one non-empty answer for the named square
fn ask<R: BufRead, W: Write>(input: &mut R, prompt: &mut W, name: &str) -> Result<String> {
    write!(prompt, "Enter the {} square: ", name)?;
    prompt.flush()?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .with_context(|| format!("Failed to read the {} square", name))?;

    let answer = line.trim();
    if read == 0 || answer.is_empty() {
        bail!("No {} square given", name);
    }
    Ok(answer.to_string())
}
