use shakmaty::{File, Rank, Role, Square};

/// A single (row, column) step applied once from a source square.
///
/// Rows follow ranks (positive is towards rank 8), columns follow files
/// (positive is towards the h-file).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Offset {
    pub rows: i8,
    pub cols: i8,
}

impl Offset {
    pub const fn new(rows: i8, cols: i8) -> Self {
        Self { rows, cols }
    }

    /// Apply this offset to `from`, returning `None` when the result falls off the board.
    pub fn apply(self, from: Square) -> Option<Square> {
        let row = from.rank() as i32 + i32::from(self.rows);
        let col = from.file() as i32 + i32::from(self.cols);
        if !(0..8).contains(&row) || !(0..8).contains(&col) {
            return None;
        }
        Some(Square::from_coords(
            File::new(col as u32),
            Rank::new(row as u32),
        ))
    }
}

const ORTHOGONAL: [Offset; 4] = [
    Offset::new(1, 0),
    Offset::new(-1, 0),
    Offset::new(0, 1),
    Offset::new(0, -1),
];

const DIAGONAL: [Offset; 4] = [
    Offset::new(1, 1),
    Offset::new(1, -1),
    Offset::new(-1, 1),
    Offset::new(-1, -1),
];

const QUEEN: [Offset; 8] = [
    DIAGONAL[0],
    DIAGONAL[1],
    DIAGONAL[2],
    DIAGONAL[3],
    ORTHOGONAL[0],
    ORTHOGONAL[1],
    ORTHOGONAL[2],
    ORTHOGONAL[3],
];

const KNIGHT: [Offset; 8] = [
    Offset::new(2, 1),
    Offset::new(2, -1),
    Offset::new(-2, 1),
    Offset::new(-2, -1),
    Offset::new(1, 2),
    Offset::new(1, -2),
    Offset::new(-1, 2),
    Offset::new(-1, -2),
];

// Pawns step towards higher ranks for both colors.
const PAWN: [Offset; 1] = [Offset::new(1, 0)];

/// Ordered move offsets for a piece type.
///
/// The table is static and shared read-only; the order of the returned slice
/// is the order in which candidate destinations are reported.
pub fn offsets_for(role: Role) -> &'static [Offset] {
    match role {
        Role::King | Role::Rook => &ORTHOGONAL,
        Role::Queen => &QUEEN,
        Role::Bishop => &DIAGONAL,
        Role::Knight => &KNIGHT,
        Role::Pawn => &PAWN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(Role::King, 4)]
    #[test_case(Role::Queen, 8)]
    #[test_case(Role::Bishop, 4)]
    #[test_case(Role::Knight, 8)]
    #[test_case(Role::Rook, 4)]
    #[test_case(Role::Pawn, 1)]
    fn table_sizes(role: Role, expected: usize) {
        assert_eq!(offsets_for(role).len(), expected);
    }

    #[test]
    fn king_and_rook_share_orthogonal_offsets() {
        assert_eq!(offsets_for(Role::King), offsets_for(Role::Rook));
        assert_eq!(
            offsets_for(Role::King),
            &[
                Offset::new(1, 0),
                Offset::new(-1, 0),
                Offset::new(0, 1),
                Offset::new(0, -1)
            ]
        );
    }

    #[test]
    fn queen_lists_diagonals_before_orthogonals() {
        let queen = offsets_for(Role::Queen);
        assert_eq!(&queen[..4], offsets_for(Role::Bishop));
        assert_eq!(&queen[4..], offsets_for(Role::Rook));
    }

    #[test]
    fn knight_offsets_are_all_leaps() {
        for offset in offsets_for(Role::Knight) {
            let (r, c) = (offset.rows.abs(), offset.cols.abs());
            assert!(
                (r, c) == (2, 1) || (r, c) == (1, 2),
                "{offset:?} is not a knight leap"
            );
        }
    }

    #[test]
    fn pawn_only_steps_forward() {
        assert_eq!(offsets_for(Role::Pawn), &[Offset::new(1, 0)]);
    }

    #[test_case(Square::E4, Offset::new(1, 0), Some(Square::E5))]
    #[test_case(Square::E4, Offset::new(-2, 1), Some(Square::F2))]
    #[test_case(Square::A1, Offset::new(-1, 0), None; "below rank 1")]
    #[test_case(Square::H8, Offset::new(0, 1), None; "past the h-file")]
    #[test_case(Square::H4, Offset::new(0, -7), Some(Square::A4))]
    fn apply_respects_bounds(from: Square, offset: Offset, expected: Option<Square>) {
        assert_eq!(offset.apply(from), expected);
    }
}
