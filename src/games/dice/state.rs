/// Tenzies round state.

use crate::time::TICKS_PER_SEC;

use super::save;

/// Number of dice on the table.
pub const DICE_COUNT: usize = 10;

/// One die. The id is a stable identity token: it survives rerolls and
/// is never reused within a session, so a stale click on a die from a
/// finished round cannot land on a new one.
#[derive(Clone, Debug, PartialEq)]
pub struct Die {
    pub id: u32,
    pub value: u8,
    pub held: bool,
}

/// Which control keyboard input acts on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Focus {
    Die(usize),
    RollButton,
}

pub struct DiceState {
    /// The ten dice, in fixed display order.
    pub dice: Vec<Die>,
    /// Completed rolls this round.
    pub rolls: u32,
    /// Ticks accrued while the round timer is running.
    pub active_ticks: u64,
    /// True once the first hold/roll of the round happened; cleared the
    /// moment the round is won, which also makes it the win-transition
    /// edge detector.
    pub started: bool,
    /// Best winning time in seconds across all sessions, if any.
    pub best_secs: Option<u32>,
    pub focus: Focus,
    /// Animation frame counter; advances even while the timer is stopped.
    pub anim_frame: u32,
    /// LCG state for die rolls.
    pub rng_seed: u64,
    /// Next die identity token.
    next_die_id: u32,
}

impl DiceState {
    pub fn new(seed: u64) -> Self {
        let mut state = DiceState {
            dice: Vec::new(),
            rolls: 0,
            active_ticks: 0,
            started: false,
            best_secs: save::load_best(),
            focus: Focus::Die(0),
            anim_frame: 0,
            rng_seed: seed,
            next_die_id: 0,
        };
        state.deal();
        state
    }

    /// Replace all dice with a fresh unheld batch.
    pub(super) fn deal(&mut self) {
        let mut dice = Vec::with_capacity(DICE_COUNT);
        for _ in 0..DICE_COUNT {
            dice.push(self.fresh_die());
        }
        self.dice = dice;
    }

    fn fresh_die(&mut self) -> Die {
        let value = roll_value(&mut self.rng_seed);
        let id = self.next_die_id;
        self.next_die_id += 1;
        Die {
            id,
            value,
            held: false,
        }
    }

    /// The win condition, recomputed from the dice on every read: all
    /// dice held and showing one value. Never stored, so it cannot drift
    /// out of sync with the dice.
    pub fn won(&self) -> bool {
        !self.dice.is_empty()
            && self.dice.iter().all(|d| d.held)
            && self.dice.iter().all(|d| d.value == self.dice[0].value)
    }

    /// Whole elapsed seconds for the current round.
    pub fn elapsed_secs(&self) -> u32 {
        (self.active_ticks / TICKS_PER_SEC as u64) as u32
    }

    /// Position of a die by identity token.
    pub fn die_index(&self, die_id: u32) -> Option<usize> {
        self.dice.iter().position(|d| d.id == die_id)
    }
}

// ── RNG ─────────────────────────────────────────────────────────

fn next_seed(seed: u64) -> u64 {
    seed.wrapping_mul(6364136223846793005)
        .wrapping_add(1442695040888963407)
}

/// Roll one die: uniform value in 1..=6.
pub(super) fn roll_value(seed: &mut u64) -> u8 {
    *seed = next_seed(*seed);
    ((*seed >> 33) % 6 + 1) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_round() {
        let state = DiceState::new(42);
        assert_eq!(state.dice.len(), DICE_COUNT);
        assert!(state.dice.iter().all(|d| (1..=6).contains(&d.value)));
        assert!(state.dice.iter().all(|d| !d.held));
        assert_eq!(state.rolls, 0);
        assert_eq!(state.active_ticks, 0);
        assert!(!state.started);
        assert_eq!(state.focus, Focus::Die(0));
    }

    #[test]
    fn initial_ids_are_distinct() {
        let state = DiceState::new(7);
        for (i, a) in state.dice.iter().enumerate() {
            for b in &state.dice[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn deal_never_reuses_ids() {
        let mut state = DiceState::new(7);
        let old_ids: Vec<u32> = state.dice.iter().map(|d| d.id).collect();
        state.deal();
        for die in &state.dice {
            assert!(!old_ids.contains(&die.id));
        }
    }

    #[test]
    fn won_requires_all_held_and_equal() {
        let mut state = DiceState::new(1);
        for die in state.dice.iter_mut() {
            die.value = 4;
            die.held = true;
        }
        assert!(state.won());

        state.dice[3].held = false;
        assert!(!state.won(), "one unheld die breaks the win");

        state.dice[3].held = true;
        state.dice[3].value = 5;
        assert!(!state.won(), "one differing value breaks the win");
    }

    #[test]
    fn won_is_false_without_dice() {
        let mut state = DiceState::new(1);
        state.dice.clear();
        assert!(!state.won());
    }

    #[test]
    fn elapsed_secs_floors_partial_seconds() {
        let mut state = DiceState::new(1);
        state.active_ticks = 0;
        assert_eq!(state.elapsed_secs(), 0);
        state.active_ticks = 9;
        assert_eq!(state.elapsed_secs(), 0);
        state.active_ticks = 10;
        assert_eq!(state.elapsed_secs(), 1);
        state.active_ticks = 259;
        assert_eq!(state.elapsed_secs(), 25);
    }

    #[test]
    fn die_index_resolves_ids() {
        let state = DiceState::new(9);
        let id = state.dice[6].id;
        assert_eq!(state.die_index(id), Some(6));
        assert_eq!(state.die_index(9999), None);
    }

    #[test]
    fn roll_value_stays_in_range() {
        let mut seed = 0u64;
        for _ in 0..1000 {
            let v = roll_value(&mut seed);
            assert!((1..=6).contains(&v), "rolled {v}");
        }
    }

    #[test]
    fn roll_value_hits_every_face() {
        let mut seed = 123u64;
        let mut seen = [false; 6];
        for _ in 0..1000 {
            seen[(roll_value(&mut seed) - 1) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s), "faces seen: {seen:?}");
    }
}
