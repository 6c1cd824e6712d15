use std::fmt;

use shakmaty::{Color, Piece, Role, Square};

pub fn color_name(color: Color) -> &'static str {
    match color {
        Color::White => "White",
        Color::Black => "Black",
    }
}

fn role_name(role: Role) -> &'static str {
    match role {
        Role::King => "King",
        Role::Queen => "Queen",
        Role::Bishop => "Bishop",
        Role::Knight => "Knight",
        Role::Rook => "Rook",
        Role::Pawn => "Pawn",
    }
}

/// `Display` adapter naming a piece, e.g. "White Knight".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceName(pub Piece);

impl fmt::Display for PieceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", color_name(self.0.color), role_name(self.0.role))
    }
}

/// Parse a coordinate such as "b1" or "B1".
///
/// Exactly two characters are accepted: a file `a`-`h` followed by a rank `1`-`8`.
pub fn parse_square(text: &str) -> Option<Square> {
    let text = text.to_ascii_lowercase();
    match text.as_bytes() {
        [b'a'..=b'h', b'1'..=b'8'] => text.parse().ok(),
        _ => None,
    }
}

/// A completed move, as written to the move log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub piece: Piece,
    pub from: Square,
    pub to: Square,
    pub captured: Option<Piece>,
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at {} moved to {}",
            PieceName(self.piece),
            self.from,
            self.to
        )?;
        if let Some(captured) = self.captured {
            write!(f, ", capturing {}", PieceName(captured))?;
        }
        Ok(())
    }
}
