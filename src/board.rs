use shakmaty::{Color, File, Piece, Rank, Role, Square};

/// Number of squares on the board
pub const NUM_SQUARES: usize = 64;

const BACK_RANK: [Role; 8] = [
    Role::Rook,
    Role::Knight,
    Role::Bishop,
    Role::Queen,
    Role::King,
    Role::Bishop,
    Role::Knight,
    Role::Rook,
];

/// An 8×8 grid of optional pieces, indexed by `row * 8 + col`.
///
/// Row 0 is rank 1 and column 0 is the a-file, so the slot index matches
/// the square index (a1 = 0, h8 = 63).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; NUM_SQUARES],
}

impl Board {
    /// Standard starting position: White on rows 0-1, Black on rows 6-7.
    pub fn new() -> Self {
        let mut board = Self::empty();
        for (col, role) in BACK_RANK.into_iter().enumerate() {
            let file = File::new(col as u32);
            board.place(file, Rank::First, Color::White, role);
            board.place(file, Rank::Second, Color::White, Role::Pawn);
            board.place(file, Rank::Seventh, Color::Black, Role::Pawn);
            board.place(file, Rank::Eighth, Color::Black, role);
        }
        board
    }

    /// A board with no pieces on it.
    pub const fn empty() -> Self {
        Self {
            squares: [None; NUM_SQUARES],
        }
    }

    /// Build an arbitrary position. Later entries win on duplicate squares.
    pub fn from_pieces(pieces: impl IntoIterator<Item = (Square, Piece)>) -> Self {
        let mut board = Self::empty();
        for (square, piece) in pieces {
            board.squares[square as usize] = Some(piece);
        }
        board
    }

    fn place(&mut self, file: File, rank: Rank, color: Color, role: Role) {
        let square = Square::from_coords(file, rank);
        self.squares[square as usize] = Some(Piece { color, role });
    }

    /// Piece at `(row, col)`.
    ///
    /// Coordinates outside `0..8` are not an error, they simply hold no piece.
    pub fn get(&self, row: i32, col: i32) -> Option<Piece> {
        if !(0..8).contains(&row) || !(0..8).contains(&col) {
            return None;
        }
        self.squares[(row * 8 + col) as usize]
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square as usize]
    }

    /// Relocate whatever sits on `from` (possibly nothing) to `to`, clearing `from`.
    ///
    /// The previous occupant of `to` is overwritten. Callers that need to
    /// report a capture must read it with [`Board::piece_at`] first.
    pub fn move_piece(&mut self, from: Square, to: Square) {
        let moving = self.squares[from as usize].take();
        self.squares[to as usize] = moving;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn piece(color: Color, role: Role) -> Option<Piece> {
        Some(Piece { color, role })
    }

    fn occupied(board: &Board) -> usize {
        Square::ALL
            .into_iter()
            .filter(|&square| board.piece_at(square).is_some())
            .count()
    }

    #[test]
    fn new_board_has_standard_back_ranks() {
        let board = Board::new();
        for (col, role) in BACK_RANK.into_iter().enumerate() {
            let col = col as i32;
            assert_eq!(board.get(0, col), piece(Color::White, role));
            assert_eq!(board.get(7, col), piece(Color::Black, role));
            assert_eq!(board.get(1, col), piece(Color::White, Role::Pawn));
            assert_eq!(board.get(6, col), piece(Color::Black, Role::Pawn));
        }
    }

    #[test]
    fn new_board_kings_and_queens_on_their_files() {
        let board = Board::new();
        assert_eq!(board.piece_at(Square::D1), piece(Color::White, Role::Queen));
        assert_eq!(board.piece_at(Square::E1), piece(Color::White, Role::King));
        assert_eq!(board.piece_at(Square::D8), piece(Color::Black, Role::Queen));
        assert_eq!(board.piece_at(Square::E8), piece(Color::Black, Role::King));
    }

    #[test]
    fn new_board_middle_rows_are_empty() {
        let board = Board::new();
        for row in 2..6 {
            for col in 0..8 {
                assert_eq!(board.get(row, col), None, "row {row} col {col}");
            }
        }
        assert_eq!(occupied(&board), 32);
    }

    #[test_case(-1, 0)]
    #[test_case(0, -1)]
    #[test_case(8, 0)]
    #[test_case(0, 8)]
    #[test_case(i32::MIN, i32::MAX)]
    #[test_case(100, -100)]
    fn out_of_range_is_empty(row: i32, col: i32) {
        assert_eq!(Board::new().get(row, col), None);
    }

    #[test]
    fn get_agrees_with_piece_at() {
        let board = Board::new();
        for square in Square::ALL {
            let (row, col) = (square.rank() as i32, square.file() as i32);
            assert_eq!(board.get(row, col), board.piece_at(square));
        }
    }

    #[test]
    fn move_piece_relocates_and_clears_source() {
        let mut board = Board::new();
        board.move_piece(Square::B1, Square::C3);

        assert_eq!(board.piece_at(Square::B1), None);
        assert_eq!(board.piece_at(Square::C3), piece(Color::White, Role::Knight));
    }

    #[test]
    fn move_piece_overwrites_destination() {
        let mut board = Board::new();
        board.move_piece(Square::A1, Square::A8);

        assert_eq!(board.piece_at(Square::A8), piece(Color::White, Role::Rook));
        assert_eq!(occupied(&board), 31);
    }

    #[test]
    fn move_piece_from_empty_square_clears_destination() {
        let mut board = Board::new();
        board.move_piece(Square::E4, Square::E2);

        assert_eq!(board.piece_at(Square::E2), None);
        assert_eq!(board.piece_at(Square::E4), None);
    }

    #[test]
    fn from_pieces_places_only_given_pieces() {
        let knight = Piece {
            color: Color::Black,
            role: Role::Knight,
        };
        let board = Board::from_pieces([(Square::D4, knight)]);

        assert_eq!(board.piece_at(Square::D4), Some(knight));
        assert_eq!(occupied(&board), 1);
    }
}
