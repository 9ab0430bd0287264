//! Parsing of console commands.

use crate::games::tictactoe::Position;

/// A line typed at the console prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place a mark.
    Place(Position),
    /// Start a new round.
    ResetRound,
    /// Clear the scoreboard.
    ResetScores,
    /// Show the command summary.
    Help,
    /// Leave the match.
    Quit,
}

/// Help text shown on `h` and on unrecognised input.
pub const HELP: &str = "Commands: 1-9 or \"row col\" (0-2) to play, r = reset round, s = reset scores, h = help, q = quit";

/// Parses one input line.
///
/// Accepts a cell number `1`-`9`, a zero-based `row col` pair, a cell label
/// such as `center`, or a single-letter command.
pub fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    match line.to_lowercase().as_str() {
        "" => return Err("Enter a move or a command".to_string()),
        "r" | "reset" => return Ok(Command::ResetRound),
        "s" | "scores" => return Ok(Command::ResetScores),
        "h" | "help" | "?" => return Ok(Command::Help),
        "q" | "quit" | "exit" => return Ok(Command::Quit),
        _ => {}
    }

    let parts: Vec<&str> = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|p| !p.is_empty())
        .collect();
    if let [row, col] = parts.as_slice() {
        let row = row.parse::<usize>().map_err(|_| format!("Bad row: {}", row))?;
        let col = col.parse::<usize>().map_err(|_| format!("Bad column: {}", col))?;
        return Position::from_row_col(row, col)
            .map(Command::Place)
            .map_err(|e| e.to_string());
    }

    Position::from_label_or_number(line)
        .map(Command::Place)
        .ok_or_else(|| format!("Unrecognised input: {}", line))
}
