//! Semantic action IDs for dice-table click targets.

/// Die N is `HOLD_DIE_BASE + N` (N in 0..DICE_COUNT).
pub const HOLD_DIE_BASE: u16 = 1;
/// The primary button: roll, or start a new game once the round is won.
pub const ROLL_OR_NEW: u16 = 20;
