use std::io::{self, Write};

use shakmaty::{Color, File, Piece, Rank, Role, Square};

use crate::board::Board;

const RULE_WIDTH: usize = 43;
const EMPTY_CELL: &str = "|_|";

/// Render the board as an 8-row grid, rank 8 at the top.
///
/// Each cell is five characters wide; occupied cells show a color/type tag
/// such as `W_R` or `B_N`, empty cells show `|_|`.
pub fn render_board(w: &mut impl Write, board: &Board) -> io::Result<()> {
    writeln!(w, "{}", "*".repeat(RULE_WIDTH))?;
    write!(w, "   ")?;
    for file in File::ALL {
        write!(w, "   {} ", file.char())?;
    }
    writeln!(w)?;
    writeln!(w)?;

    for rank in Rank::ALL.iter().rev() {
        write!(w, " {} ", rank.char())?;
        for file in File::ALL {
            let square = Square::from_coords(file, *rank);
            match board.piece_at(square) {
                Some(piece) => write!(w, "  {}", piece_tag(piece))?,
                None => write!(w, "  {EMPTY_CELL}")?,
            }
        }
        writeln!(w)?;
    }

    writeln!(w, "{}", "*".repeat(RULE_WIDTH))?;
    w.flush()
}

/// Three-character tag for a piece, e.g. `W_K` for the white king.
fn piece_tag(piece: Piece) -> String {
    let color = match piece.color {
        Color::White => 'W',
        Color::Black => 'B',
    };
    let role = match piece.role {
        Role::King => 'K',
        Role::Queen => 'Q',
        Role::Bishop => 'B',
        Role::Knight => 'N',
        Role::Rook => 'R',
        Role::Pawn => 'P',
    };
    format!("{color}_{role}")
}
