//! Console match loop.

use super::backend::GameBackend;
use super::input::{Command, HELP, parse_command};
use super::mode::{GameMode, Seating};
use crate::games::tictactoe::Board;
use crate::session::GameView;
use anyhow::Result;
use std::io::Write;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info, instrument};

/// Runs one console session against a backend.
pub struct Match<B> {
    backend: B,
    seating: Seating,
    cpu_delay: Duration,
}

impl<B: GameBackend> Match<B> {
    /// Creates a match. `cpu_delay` only paces output; it never changes the CPU's choice.
    pub fn new(backend: B, seating: Seating, cpu_delay: Duration) -> Self {
        Self {
            backend,
            seating,
            cpu_delay,
        }
    }

    /// Plays rounds until `q` or end of input, returning the last snapshot.
    #[instrument(skip_all, fields(mode = ?self.seating.mode(), human = ?self.seating.human()))]
    pub async fn run<R, W>(&self, input: R, out: &mut W) -> Result<GameView>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let mut lines = input.lines();
        let mut view = self.backend.create().await?;
        info!(session_id = %view.id, "Match started");

        writeln!(out, "Tic-tac-toe: {}", self.seating.mode().name())?;
        writeln!(out, "{}", HELP)?;

        loop {
            if !view.is_over() && self.seating.is_cpu(view.current_player) {
                writeln!(out, "\n{}", status_line(&view, self.seating))?;
                if !self.cpu_delay.is_zero() {
                    tokio::time::sleep(self.cpu_delay).await;
                }
                view = self.backend.cpu_move(view.id).await?;
            }

            render(out, &view, self.seating)?;
            write!(out, "> ")?;
            out.flush()?;

            let Some(line) = lines.next_line().await? else {
                debug!("Input closed");
                break;
            };

            match parse_command(&line) {
                Ok(Command::Place(position)) => {
                    if view.is_over() {
                        writeln!(out, "Round over. Press r to play again.")?;
                        continue;
                    }
                    let player = match self.seating.mode() {
                        GameMode::Cpu => Some(self.seating.human()),
                        GameMode::Pvp => None,
                    };
                    match self
                        .backend
                        .play(view.id, position.row(), position.col(), player)
                        .await
                    {
                        Ok(next) => view = next,
                        Err(e) => writeln!(out, "{}", e)?,
                    }
                }
                Ok(Command::ResetRound) => view = self.backend.reset(view.id).await?,
                Ok(Command::ResetScores) => view = self.backend.reset_scores(view.id).await?,
                Ok(Command::Help) => writeln!(out, "{}", HELP)?,
                Ok(Command::Quit) => break,
                Err(msg) => writeln!(out, "{}", msg)?,
            }
        }

        info!(scores = ?view.scores, "Match finished");
        Ok(view)
    }
}

/// One-line description of whose turn it is or how the round ended.
pub fn status_line(view: &GameView, seating: Seating) -> String {
    if let Some(winner) = view.winner {
        return format!("Winner: {}", winner);
    }
    if view.draw {
        return "Draw".to_string();
    }
    match seating.mode() {
        GameMode::Cpu if view.current_player == seating.human() => {
            format!("Your turn ({})", seating.human())
        }
        GameMode::Cpu => "CPU is thinking…".to_string(),
        GameMode::Pvp => format!("Turn: {}", view.current_player),
    }
}

fn render<W: Write>(out: &mut W, view: &GameView, seating: Seating) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", Board::from_marks(view.board).display())?;
    writeln!(out, "{}", status_line(view, seating))?;
    if let Some([a, b, c]) = view.winning_line {
        writeln!(out, "Winning line: {}-{}-{}", a + 1, b + 1, c + 1)?;
    }
    writeln!(
        out,
        "X: {}  O: {}  Draws: {}",
        view.scores.x(),
        view.scores.o(),
        view.scores.draws()
    )?;
    Ok(())
}
