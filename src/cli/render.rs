//! Text rendering of paths on the board

use std::collections::BTreeMap;

use crate::domain::{file_letters, Board, ShortestPaths, Square};

/// Renders the board with the step number of every square on a shortest path
///
/// Ranks run from the top (highest) down, file letters label the bottom row,
/// and squares not on any path show `.`.
pub fn render_board(board: &Board, result: &ShortestPaths) -> String {
    render_steps(board, &result.steps())
}

fn render_steps(board: &Board, steps: &BTreeMap<Square, usize>) -> String {
    let rank_width = board.height().to_string().len();
    let cell_width = steps
        .values()
        .map(|step| step.to_string().len())
        .chain(std::iter::once(file_letters(board.width() - 1).len()))
        .max()
        .unwrap_or(1);

    let mut out = String::new();

    for rank in (0..board.height()).rev() {
        let cells: Vec<String> = (0..board.width())
            .map(|file| {
                let cell = steps
                    .get(&Square::new(file, rank))
                    .map(|step| step.to_string())
                    .unwrap_or_else(|| ".".to_string());
                format!("{:>width$}", cell, width = cell_width)
            })
            .collect();
        out.push_str(&format!(
            "{:>width$} {}\n",
            rank + 1,
            cells.join(" "),
            width = rank_width
        ));
    }

    let files: Vec<String> = (0..board.width())
        .map(|file| format!("{:>width$}", file_letters(file), width = cell_width))
        .collect();
    out.push_str(&format!(
        "{:>width$} {}\n",
        "",
        files.join(" "),
        width = rank_width
    ));

    out
}
