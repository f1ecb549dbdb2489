/// Tenzies — roll ten dice until they all show the same face.
///
/// Hold dice between rolls by clicking them (or pressing their number);
/// once every die is held on one value the round is won, the timer
/// stops, and a best time is kept across sessions.

pub mod actions;
pub mod logic;
pub mod render;
pub mod save;
pub mod state;

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::games::Game;
use crate::input::{ClickState, InputEvent};

use actions::{HOLD_DIE_BASE, ROLL_OR_NEW};
use state::{DiceState, Focus, DICE_COUNT};

pub struct DiceGame {
    pub state: DiceState,
}

impl DiceGame {
    pub fn new(seed: u64) -> Self {
        Self {
            state: DiceState::new(seed),
        }
    }

    /// Toggle the die currently at display position `idx`.
    fn toggle_at(&mut self, idx: usize) {
        if let Some(die) = self.state.dice.get(idx) {
            let die_id = die.id;
            logic::toggle_hold(&mut self.state, die_id);
        }
    }

    /// Activate whatever control has keyboard focus.
    fn activate_focus(&mut self) {
        match self.state.focus {
            Focus::Die(idx) => self.toggle_at(idx),
            Focus::RollButton => logic::roll_or_reset(&mut self.state),
        }
    }

    /// Move keyboard focus through the dice and onto the roll button,
    /// wrapping at both ends.
    fn move_focus(&mut self, delta: i32) {
        let slots = DICE_COUNT as i32 + 1;
        let current = match self.state.focus {
            Focus::Die(idx) => idx as i32,
            Focus::RollButton => slots - 1,
        };
        let next = (current + delta).rem_euclid(slots);
        self.state.focus = if next == slots - 1 {
            Focus::RollButton
        } else {
            Focus::Die(next as usize)
        };
    }

    fn handle_key(&mut self, key: char) -> bool {
        match key {
            'r' => {
                logic::roll_or_reset(&mut self.state);
                true
            }
            ' ' => {
                self.activate_focus();
                true
            }
            'h' => {
                self.move_focus(-1);
                true
            }
            'l' => {
                self.move_focus(1);
                true
            }
            '1'..='9' => {
                self.toggle_at(key as usize - '1' as usize);
                true
            }
            '0' => {
                self.toggle_at(9);
                true
            }
            _ => false,
        }
    }

    fn handle_click(&mut self, action_id: u16) -> bool {
        if action_id == ROLL_OR_NEW {
            logic::roll_or_reset(&mut self.state);
            return true;
        }
        let die_range = HOLD_DIE_BASE..HOLD_DIE_BASE + DICE_COUNT as u16;
        if die_range.contains(&action_id) {
            self.toggle_at((action_id - HOLD_DIE_BASE) as usize);
            return true;
        }
        false
    }
}

impl Game for DiceGame {
    fn handle_input(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::Key(c) => self.handle_key(*c),
            InputEvent::Click(action_id) => self.handle_click(*action_id),
        }
    }

    fn tick(&mut self, delta_ticks: u32) {
        logic::tick_n(&mut self.state, delta_ticks);
    }

    fn render(&self, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
        render::render(&self.state, f, area, click_state);
    }
}
