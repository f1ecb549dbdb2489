/// Tenzies round logic — pure state transitions, fully testable.
///
/// Round lifecycle: idle (fresh dice, timer stopped) → active (first
/// hold or roll starts the timer) → won (all dice held on one value;
/// terminal until a new round is dealt).

use super::save;
use super::state::{roll_value, DiceState, Focus};

/// Start a fresh round: ten new unheld dice with counters reset and
/// focus back on the first die.
pub fn new_round(state: &mut DiceState) {
    state.deal();
    state.rolls = 0;
    state.active_ticks = 0;
    state.started = false;
    state.focus = Focus::Die(0);
}

/// Flip one die's held flag, addressed by identity token.
///
/// Unknown ids are ignored: they can only come from a stale UI
/// reference, and there is nothing a player could do about them. Once
/// the round is won the dice are settled; only `roll_or_reset` acts.
pub fn toggle_hold(state: &mut DiceState, die_id: u32) {
    if state.won() {
        return;
    }
    let idx = match state.die_index(die_id) {
        Some(idx) => idx,
        None => return,
    };
    state.dice[idx].held = !state.dice[idx].held;
    state.focus = Focus::Die(idx);
    state.started = true;
    settle_win(state);
}

/// The primary command. Roll and new-game share one gesture; the round
/// state picks the meaning: rerolling every unheld die while the round
/// runs, dealing a whole new round once it is won.
pub fn roll_or_reset(state: &mut DiceState) {
    if state.won() {
        new_round(state);
        return;
    }
    for die in state.dice.iter_mut() {
        if !die.held {
            die.value = roll_value(&mut state.rng_seed);
        }
    }
    state.started = true;
    state.rolls += 1;
    settle_win(state);
}

/// Advance the clock by `delta_ticks`.
///
/// The animation counter always moves; the round timer accrues only
/// while the round is active, and the win check runs before accrual so
/// a tick arriving together with the winning action adds no time.
pub fn tick_n(state: &mut DiceState, delta_ticks: u32) {
    state.anim_frame = state.anim_frame.wrapping_add(delta_ticks);
    if state.started && !state.won() {
        state.active_ticks += delta_ticks as u64;
    }
}

/// Win bookkeeping, run after every mutating command.
///
/// Requires `started` and clears it, so per round it fires at most once,
/// on the transition into the won state. A strictly faster time becomes
/// the new persisted best; the timer stops and focus lands on the roll
/// button.
fn settle_win(state: &mut DiceState) {
    if !state.started || !state.won() {
        return;
    }
    let secs = state.elapsed_secs();
    if state.best_secs.map_or(true, |best| secs < best) {
        state.best_secs = Some(secs);
        save::store_best(secs);
    }
    state.started = false;
    state.focus = Focus::RollButton;
}
