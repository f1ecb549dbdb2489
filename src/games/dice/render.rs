/// Dice table rendering with responsive layout and celebration flash.

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratzilla::ratatui::Frame;

use crate::input::{is_narrow_layout, ClickState};
use crate::widgets::{ActionButton, DieButton};

use super::actions::{HOLD_DIE_BASE, ROLL_OR_NEW};
use super::state::{DiceState, Focus};

/// Dice grid shape: two rows of five.
const GRID_COLS: usize = 5;
const GRID_ROWS: usize = 2;

/// Die cell size in terminal cells. Tall cells get the pip face, short
/// ones the compact glyph (see `DieButton`).
const DIE_W: u16 = 7;
const DIE_H_WIDE: u16 = 5;
const DIE_H_NARROW: u16 = 3;

pub fn render(
    state: &DiceState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    if is_narrow_layout(area.width) {
        render_narrow(state, f, area, click_state);
    } else {
        render_wide(state, f, area, click_state);
    }
}

/// Wide layout: title, instructions, stats, dice, button, help.
fn render_wide(
    state: &DiceState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                                // Title
            Constraint::Length(3),                                // Instructions
            Constraint::Length(3),                                // Stats
            Constraint::Length(DIE_H_WIDE * GRID_ROWS as u16 + 1), // Dice (+ sparkle row)
            Constraint::Length(3),                                // Roll button
            Constraint::Min(3),                                   // Help bar
        ])
        .split(area);

    render_title(state, f, chunks[0]);
    render_instructions(f, chunks[1]);
    render_stats(state, f, chunks[2]);
    render_dice(state, f, chunks[3], DIE_H_WIDE, click_state);
    render_roll_button(state, f, chunks[4], click_state);
    render_help(state, f, chunks[5], click_state);
}

/// Narrow layout: drop the instructions panel, compact dice.
fn render_narrow(
    state: &DiceState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                                  // Title
            Constraint::Length(3),                                  // Stats
            Constraint::Length(DIE_H_NARROW * GRID_ROWS as u16 + 1), // Dice (+ sparkle row)
            Constraint::Length(3),                                  // Roll button
            Constraint::Min(3),                                     // Help bar
        ])
        .split(area);

    render_title(state, f, chunks[0]);
    render_stats(state, f, chunks[1]);
    render_dice(state, f, chunks[2], DIE_H_NARROW, click_state);
    render_roll_button(state, f, chunks[3], click_state);
    render_help(state, f, chunks[4], click_state);
}

fn render_title(state: &DiceState, f: &mut Frame, area: Rect) {
    let (title, style) = if state.won() {
        // Flash between two colors while the celebration runs
        let color = if (state.anim_frame / 3) % 2 == 0 {
            Color::Yellow
        } else {
            Color::Magenta
        };
        (
            "★ テンジーズ達成！ ★",
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )
    } else {
        (
            "テンジーズ - Tenzies",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )
    };

    let widget = Paragraph::new(Line::from(Span::styled(title, style)))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .alignment(Alignment::Center);
    f.render_widget(widget, area);
}

fn render_instructions(f: &mut Frame, area: Rect) {
    let text = "全てのサイコロを同じ目に揃えよう。サイコロをタップすると目を固定したまま振り直せる。";
    let widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(widget, area);
}

fn render_stats(state: &DiceState, f: &mut Frame, area: Rect) {
    let time_style = if state.won() {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    let best = match state.best_secs {
        Some(secs) => format!("{secs}秒"),
        None => "ー".to_string(),
    };

    let line = Line::from(vec![
        Span::styled(format!("⏱ {}", format_time(state.elapsed_secs())), time_style),
        Span::styled(format!("  🏆 ベスト {best}"), Style::default().fg(Color::Yellow)),
        Span::styled(
            format!("  🎲 {}回", state.rolls),
            Style::default().fg(Color::Cyan),
        ),
    ]);

    let widget = Paragraph::new(line)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .alignment(Alignment::Center);
    f.render_widget(widget, area);
}

fn render_dice(
    state: &DiceState,
    f: &mut Frame,
    area: Rect,
    die_h: u16,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let grid_w = DIE_W * GRID_COLS as u16;
    let grid_h = die_h * GRID_ROWS as u16;
    if area.width < grid_w || area.height < grid_h {
        return;
    }
    let x_off = area.x + (area.width - grid_w) / 2;

    // Sparkle row above the dice while the celebration runs
    let y_off = if area.height > grid_h {
        if state.won() {
            let widget = Paragraph::new(Line::from(Span::styled(
                sparkle_line(state.anim_frame, grid_w),
                Style::default().fg(Color::Yellow),
            )));
            f.render_widget(widget, Rect::new(x_off, area.y, grid_w, 1));
        }
        area.y + 1
    } else {
        area.y
    };

    let mut cs = click_state.borrow_mut();
    for (idx, die) in state.dice.iter().enumerate() {
        let col = (idx % GRID_COLS) as u16;
        let row = (idx / GRID_COLS) as u16;
        if row >= GRID_ROWS as u16 {
            break;
        }
        let rect = Rect::new(x_off + col * DIE_W, y_off + row * die_h, DIE_W, die_h);
        DieButton {
            value: die.value,
            held: die.held,
            focused: state.focus == Focus::Die(idx),
            action_id: HOLD_DIE_BASE + idx as u16,
        }
        .render(f, rect, &mut cs);
    }
}

fn render_roll_button(
    state: &DiceState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let won = state.won();
    let label = if won {
        "新しいゲーム [R]"
    } else {
        "サイコロを振る [R]"
    };

    let mut style = if won {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    };
    // Pulse the fresh "new game" button so the eye lands on it
    if won && (state.anim_frame / 5) % 2 == 0 {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let border_style = if state.focus == Focus::RollButton {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let button_w = (Line::from(label).width() as u16 + 4).min(area.width);
    let rect = Rect::new(
        area.x + area.width.saturating_sub(button_w) / 2,
        area.y,
        button_w,
        area.height.min(3),
    );

    let mut cs = click_state.borrow_mut();
    ActionButton::new(label, ROLL_OR_NEW)
        .style(style)
        .border_style(border_style)
        .render(f, rect, &mut cs);
}

fn render_help(
    state: &DiceState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let help_text = if state.won() {
        "[R] 新しいゲームを始める"
    } else {
        "[1-0] 目を固定  [H/L ←→] 選択  [Space/Enter] 決定  [R] 振る"
    };
    let widget = Paragraph::new(Line::from(Span::styled(
        help_text,
        Style::default().fg(Color::DarkGray),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    )
    .alignment(Alignment::Center);
    f.render_widget(widget, area);

    // Once won, the single advertised action makes the whole bar a
    // comfortable tap target.
    if state.won() {
        let mut cs = click_state.borrow_mut();
        cs.add_click_target(area, ROLL_OR_NEW);
    }
}

// ── Pure display helpers ───────────────────────────────────────

/// Format whole seconds as m:ss.
pub fn format_time(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// A row of celebration sparkles; the pattern scrolls with the
/// animation frame. Deterministic so rendering stays a pure read.
pub fn sparkle_line(frame: u32, width: u16) -> String {
    const GLYPHS: [char; 4] = ['✦', '✧', '.', ' '];
    (0..width)
        .map(|col| {
            // Cheap position/frame mix; only has to look lively
            let n = (col as u32).wrapping_mul(2654435761).wrapping_add(frame / 2);
            GLYPHS[((n >> 4) % GLYPHS.len() as u32) as usize]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_time_minutes_and_seconds() {
        assert_eq!(format_time(0), "0:00");
        assert_eq!(format_time(9), "0:09");
        assert_eq!(format_time(59), "0:59");
        assert_eq!(format_time(60), "1:00");
        assert_eq!(format_time(725), "12:05");
    }

    #[test]
    fn sparkle_line_matches_width() {
        for width in [0u16, 1, 35, 80] {
            assert_eq!(sparkle_line(0, width).chars().count(), width as usize);
        }
    }

    #[test]
    fn sparkle_line_is_deterministic_but_animates() {
        assert_eq!(sparkle_line(4, 35), sparkle_line(4, 35));
        // Over a long stretch of frames the pattern must change at least once
        let first = sparkle_line(0, 35);
        assert!(
            (1..60).any(|frame| sparkle_line(frame, 35) != first),
            "sparkles never moved"
        );
    }
}
