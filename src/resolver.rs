use shakmaty::{Color, Role, Square};

use crate::board::Board;
use crate::catalog::offsets_for;

/// Destinations reachable from `from` by applying each offset for `role` once.
///
/// Off-board results are dropped; the order follows the offset table.
/// Occupancy is not considered, so squares held by the mover's own pieces
/// are still candidates.
pub fn candidate_moves(from: Square, role: Role) -> Vec<Square> {
    offsets_for(role)
        .iter()
        .filter_map(|offset| offset.apply(from))
        .collect()
}

/// Exact membership test against a candidate list.
#[inline]
pub fn is_among(candidates: &[Square], to: Square) -> bool {
    candidates.contains(&to)
}

/// Whether any candidate square holds a piece of `opponent`.
pub fn can_capture(board: &Board, candidates: &[Square], opponent: Color) -> bool {
    candidates
        .iter()
        .filter_map(|&square| board.piece_at(square))
        .any(|piece| piece.color == opponent)
}
