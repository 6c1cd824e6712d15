use shakmaty::{Color, Piece, Square};
use thiserror::Error;

use super::notation::{MoveRecord, parse_square};
use crate::MoveLog;
use crate::board::Board;
use crate::resolver::{can_capture, candidate_moves, is_among};

const HELP_SUFFIX: &str = " --help";

/// Where the controller is within a move attempt.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Phase {
    /// Waiting for a command or a source square.
    #[default]
    AwaitingSource,
    /// A piece was selected; the next line is read as its destination.
    AwaitingDestination {
        from: Square,
        piece: Piece,
        candidates: Vec<Square>,
    },
}

/// Successful outcome of one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// `exit` was entered.
    Exit,
    /// `print` was entered; the board should be drawn again.
    Redisplay,
    /// Answer to `<square> --help`.
    Help {
        square: Square,
        piece: Piece,
        can_capture: bool,
    },
    /// A piece of the active player was selected; a destination is expected next.
    Candidates {
        from: Square,
        piece: Piece,
        candidates: Vec<Square>,
    },
    /// The move was executed and the turn passed to the other player.
    Moved {
        record: MoveRecord,
        /// Set when the move could not be written to the move log.
        record_error: Option<String>,
    },
}

/// Rejected input. None of these change the board or the active player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TurnError {
    #[error("invalid input, please enter a valid position")]
    InvalidInput,
    #[error("invalid move at {0}, choose your own piece")]
    NotYourPiece(Square),
    #[error("invalid destination, please enter a valid position")]
    InvalidDestination,
    #[error("invalid move, {0} is not a possible destination")]
    NotACandidate(Square),
    #[error("no piece at {0}")]
    NoPieceAt(Square),
}

/// Turn-control state machine.
///
/// Owns the board and the active player. Each call to [`TurnController::handle`]
/// consumes one trimmed input line; a move takes two calls, the source square
/// and then its destination.
#[derive(Debug, Clone)]
pub struct TurnController {
    board: Board,
    active: Color,
    phase: Phase,
}

impl Default for TurnController {
    fn default() -> Self {
        Self::new()
    }
}

impl TurnController {
    /// Standard starting position with White to move.
    #[inline]
    pub fn new() -> Self {
        Self::from_board(Board::new(), Color::White)
    }

    /// Creates a controller from an existing position.
    pub fn from_board(board: Board, active: Color) -> Self {
        Self {
            board,
            active,
            phase: Phase::AwaitingSource,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn active_player(&self) -> Color {
        self.active
    }

    #[inline]
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    #[inline]
    pub fn awaiting_destination(&self) -> bool {
        matches!(self.phase, Phase::AwaitingDestination { .. })
    }

    /// Process one input line.
    ///
    /// Completed moves are appended to `log`. A failed append is reported in
    /// the reply but the move stands.
    pub fn handle<L: MoveLog>(&mut self, input: &str, log: &mut L) -> Result<Reply, TurnError> {
        let input = input.trim().to_ascii_lowercase();
        let result = match std::mem::take(&mut self.phase) {
            Phase::AwaitingSource => self.handle_command(&input),
            Phase::AwaitingDestination {
                from,
                piece,
                candidates,
            } => self.complete_move(&input, from, piece, &candidates, log),
        };
        if let Err(e) = &result {
            log::debug!("rejected {input:?}: {e}");
        }
        result
    }

    fn handle_command(&mut self, input: &str) -> Result<Reply, TurnError> {
        match input {
            "exit" => Ok(Reply::Exit),
            "print" => Ok(Reply::Redisplay),
            _ => {
                if let Some(square) = input.strip_suffix(HELP_SUFFIX) {
                    self.help(square)
                } else {
                    self.select(input)
                }
            }
        }
    }

    /// Report whether the piece on `square` could take a piece of the
    /// non-active color. Ownership of the queried piece is not checked.
    fn help(&self, square: &str) -> Result<Reply, TurnError> {
        let square = parse_square(square).ok_or(TurnError::InvalidInput)?;
        let piece = self
            .board
            .piece_at(square)
            .ok_or(TurnError::NoPieceAt(square))?;
        let candidates = candidate_moves(square, piece.role);
        Ok(Reply::Help {
            square,
            piece,
            can_capture: can_capture(&self.board, &candidates, self.active.other()),
        })
    }

    fn select(&mut self, input: &str) -> Result<Reply, TurnError> {
        let from = parse_square(input).ok_or(TurnError::InvalidInput)?;
        let piece = self
            .board
            .piece_at(from)
            .filter(|piece| piece.color == self.active)
            .ok_or(TurnError::NotYourPiece(from))?;

        let candidates = candidate_moves(from, piece.role);
        self.phase = Phase::AwaitingDestination {
            from,
            piece,
            candidates: candidates.clone(),
        };
        Ok(Reply::Candidates {
            from,
            piece,
            candidates,
        })
    }

    fn complete_move<L: MoveLog>(
        &mut self,
        input: &str,
        from: Square,
        piece: Piece,
        candidates: &[Square],
        log: &mut L,
    ) -> Result<Reply, TurnError> {
        let to = parse_square(input).ok_or(TurnError::InvalidDestination)?;
        if !is_among(candidates, to) {
            return Err(TurnError::NotACandidate(to));
        }

        // Destination color is not checked, so own pieces can be taken.
        let captured = self.board.piece_at(to);
        self.board.move_piece(from, to);
        let record = MoveRecord {
            piece,
            from,
            to,
            captured,
        };
        log::info!("{record}");

        let record_error = log.append(&record.to_string()).err().map(|e| {
            log::warn!("move was played but not recorded: {e}");
            e.to_string()
        });

        self.active = self.active.other();
        Ok(Reply::Moved {
            record,
            record_error,
        })
    }
}
