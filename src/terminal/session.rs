use std::io::{self, BufRead, Write};

use shakmaty::Square;
use thiserror::Error;

use super::display::render_board;
use crate::MoveLog;
use crate::game_logic::{PieceName, Reply, TurnController, color_name};

/// Error that ends an interactive session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Presentation switches for [`run_session`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    /// Clear the screen before drawing the board.
    pub clear_screen: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self { clear_screen: true }
    }
}

/// Runs the line-driven game loop until `exit` or end of input.
///
/// Generic over reader and writer so scripted input can drive it.
pub fn run_session<R, W, L>(
    controller: &mut TurnController,
    log: &mut L,
    mut input: R,
    output: &mut W,
    options: SessionOptions,
) -> Result<(), SessionError>
where
    R: BufRead,
    W: Write,
    L: MoveLog,
{
    log::info!("session started");
    draw_interface(output, controller, options)?;
    let mut buf = Vec::new();

    loop {
        if controller.awaiting_destination() {
            write!(output, "Enter the new position to move the piece: ")?;
        } else {
            write!(output, "> ")?;
        }
        output.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            log::info!("input closed");
            writeln!(output)?;
            break;
        }
        // Undecodable bytes become U+FFFD and are rejected like any other bad input.
        let line = String::from_utf8_lossy(&buf);

        match controller.handle(&line, log) {
            Ok(Reply::Exit) => break,
            Ok(Reply::Redisplay) => draw_interface(output, controller, options)?,
            Ok(Reply::Help {
                square,
                piece,
                can_capture,
            }) => {
                if can_capture {
                    writeln!(
                        output,
                        "The {} in {square} can capture your opponent's piece.",
                        PieceName(piece)
                    )?;
                } else {
                    writeln!(output, "Safe place")?;
                }
            }
            Ok(Reply::Candidates { candidates, .. }) => write_candidates(output, &candidates)?,
            Ok(Reply::Moved {
                record,
                record_error,
            }) => {
                draw_interface(output, controller, options)?;
                writeln!(output, "{record}")?;
                if let Some(e) = record_error {
                    writeln!(output, "Error while recording move: {e}")?;
                }
            }
            Err(e) => writeln!(output, "{e}")?,
        }
    }

    writeln!(output, "Game ended. Thanks for playing!")?;
    output.flush()?;
    log::info!("session ended");
    Ok(())
}

/// Clears the screen and moves cursor to top-left.
fn clear_screen(w: &mut impl Write) -> io::Result<()> {
    write!(w, "\x1B[2J\x1B[H")
}

/// Draws the board, the player to move and the command help.
fn draw_interface(
    w: &mut impl Write,
    controller: &TurnController,
    options: SessionOptions,
) -> io::Result<()> {
    if options.clear_screen {
        clear_screen(w)?;
    }
    render_board(w, controller.board())?;
    writeln!(w)?;
    writeln!(
        w,
        "Current player: {}",
        color_name(controller.active_player())
    )?;
    writeln!(w)?;
    writeln!(w, "Enter 'exit' to quit")?;
    writeln!(w, "Enter 'print' to show the current state")?;
    writeln!(w, "Enter '<square> --help' to check whether a piece can capture")?;
    writeln!(w, "Enter your piece's square (e.g., 'b1')")?;
    Ok(())
}

fn write_candidates(w: &mut impl Write, candidates: &[Square]) -> io::Result<()> {
    if candidates.is_empty() {
        return writeln!(w, "No valid moves for the selected piece.");
    }
    let listed: Vec<String> = candidates.iter().map(Square::to_string).collect();
    writeln!(w, "Possible moves: {}", listed.join(" "))
}
