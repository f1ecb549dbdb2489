//! Reusable clickable UI components for the dice table.
//!
//! Each component draws itself and registers its own click target, so the
//! hit region always matches what is actually on screen.
//!
//! # Components
//!
//! - [`DieButton`] — one die: pip face (or compact glyph) + click target.
//! - [`ActionButton`] — bordered, centered label button + click target.

use ratzilla::ratatui::layout::{Alignment, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph};
use ratzilla::ratatui::Frame;

use crate::input::ClickState;

// ── Die faces ──────────────────────────────────────────────────

/// Pip coordinates on the 3×3 face grid for a value in 1..=6.
pub fn pip_positions(value: u8) -> &'static [(u8, u8)] {
    match value {
        1 => &[(1, 1)],
        2 => &[(0, 2), (2, 0)],
        3 => &[(0, 2), (1, 1), (2, 0)],
        4 => &[(0, 0), (0, 2), (2, 0), (2, 2)],
        5 => &[(0, 0), (0, 2), (1, 1), (2, 0), (2, 2)],
        6 => &[(0, 0), (1, 0), (2, 0), (0, 2), (1, 2), (2, 2)],
        _ => &[],
    }
}

/// Render the 3×3 pip grid as three 5-column text rows (pip columns are
/// spaced one cell apart so the face reads square in a terminal font).
pub fn pip_lines(value: u8) -> [String; 3] {
    let mut face = [[' '; 5], [' '; 5], [' '; 5]];
    for &(row, col) in pip_positions(value) {
        face[row as usize][col as usize * 2] = '●';
    }
    face.map(|row| row.iter().collect())
}

/// Unicode die face for a value in 1..=6.
pub fn die_glyph(value: u8) -> char {
    match value {
        1 => '⚀',
        2 => '⚁',
        3 => '⚂',
        4 => '⚃',
        5 => '⚄',
        6 => '⚅',
        _ => '?',
    }
}

// ── DieButton ──────────────────────────────────────────────────

/// A single clickable die.
///
/// Tall areas (3+ inner rows) get the pip face; shorter areas fall back
/// to a compact `⚄ 5` line for narrow/mobile layouts. Held dice render
/// green, the focused die gets a bold yellow border.
pub struct DieButton {
    pub value: u8,
    pub held: bool,
    pub focused: bool,
    pub action_id: u16,
}

impl DieButton {
    pub fn render(self, f: &mut Frame, area: Rect, cs: &mut ClickState) {
        let border_style = if self.focused {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else if self.held {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let face_style = if self.held {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        let block = Block::default().borders(Borders::ALL).border_style(border_style);
        let inner = block.inner(area);

        let lines: Vec<Line> = if inner.height >= 3 {
            pip_lines(self.value)
                .into_iter()
                .map(|row| Line::from(Span::styled(row, face_style)))
                .collect()
        } else {
            vec![Line::from(Span::styled(
                format!("{} {}", die_glyph(self.value), self.value),
                face_style,
            ))]
        };

        let widget = Paragraph::new(lines).block(block).alignment(Alignment::Center);
        f.render_widget(widget, area);

        cs.add_click_target(area, self.action_id);
    }
}

// ── ActionButton ───────────────────────────────────────────────

/// A bordered, centered, clickable label button.
pub struct ActionButton<'a> {
    label: &'a str,
    style: Style,
    border_style: Style,
    action_id: u16,
}

impl<'a> ActionButton<'a> {
    pub fn new(label: &'a str, action_id: u16) -> Self {
        Self {
            label,
            style: Style::default(),
            border_style: Style::default().fg(Color::DarkGray),
            action_id,
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn border_style(mut self, style: Style) -> Self {
        self.border_style = style;
        self
    }

    pub fn render(self, f: &mut Frame, area: Rect, cs: &mut ClickState) {
        let widget = Paragraph::new(Line::from(Span::styled(self.label, self.style)))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(self.border_style),
            )
            .alignment(Alignment::Center);
        f.render_widget(widget, area);

        cs.add_click_target(area, self.action_id);
    }
}
