mod games;
mod input;
mod time;
mod widgets;

use std::{cell::RefCell, io, rc::Rc};

use games::dice::DiceGame;
use games::Game;
use input::{pixel_x_to_col, pixel_y_to_row, ClickState, InputEvent};
use ratzilla::event::{KeyCode, MouseButton, MouseEventKind};
use ratzilla::ratatui::Terminal;
use ratzilla::{DomBackend, WebRenderer};
use time::{FrameClock, TICKS_PER_SEC};

/// Query the grid container's bounding rect and convert pixel
/// coordinates to a terminal cell.
fn dom_pixel_to_cell(mouse_x: u32, mouse_y: u32, cs: &ClickState) -> Option<(u16, u16)> {
    let window = web_sys::window()?;
    let document = window.document()?;

    // DomBackend creates a <div> as the grid container inside <body>.
    let grid = document.query_selector("body > div").ok()??;
    let rect = grid.get_bounding_client_rect();

    let col = pixel_x_to_col(mouse_x as f64 - rect.left(), rect.width(), cs.terminal_cols)?;
    let row = pixel_y_to_row(mouse_y as f64 - rect.top(), rect.height(), cs.terminal_rows)?;
    Some((col, row))
}

fn main() -> io::Result<()> {
    console_error_panic_hook::set_once();

    let game = Rc::new(RefCell::new(DiceGame::new(js_sys::Date::now() as u64)));
    let click_state = Rc::new(RefCell::new(ClickState::new()));
    let clock = Rc::new(RefCell::new(FrameClock::new(TICKS_PER_SEC)));

    let backend = DomBackend::new()?;
    let terminal = Terminal::new(backend)?;

    // Mouse/touch click handler
    terminal.on_mouse_event({
        let game = game.clone();
        let click_state = click_state.clone();
        move |mouse_event| {
            if mouse_event.event != MouseEventKind::Pressed
                || mouse_event.button != MouseButton::Left
            {
                return;
            }

            let cs = click_state.borrow();
            if cs.terminal_rows == 0 || cs.terminal_cols == 0 {
                return;
            }

            let (col, row) = match dom_pixel_to_cell(mouse_event.x, mouse_event.y, &cs) {
                Some(cell) => cell,
                None => return,
            };
            let action = cs.hit_test(col, row);
            drop(cs);

            if let Some(action_id) = action {
                game.borrow_mut().handle_input(&InputEvent::Click(action_id));
            }
        }
    });

    // Keyboard handler. Arrow keys and Enter fold onto their letter-key
    // equivalents so the game sees one key vocabulary.
    terminal.on_key_event({
        let game = game.clone();
        move |key_event| {
            let event = match key_event.code {
                KeyCode::Char(c) => Some(InputEvent::Key(c.to_ascii_lowercase())),
                KeyCode::Left => Some(InputEvent::Key('h')),
                KeyCode::Right => Some(InputEvent::Key('l')),
                KeyCode::Enter => Some(InputEvent::Key(' ')),
                _ => None,
            };
            if let Some(event) = event {
                game.borrow_mut().handle_input(&event);
            }
        }
    });

    // Render loop: the frame clock drives game ticks, and each frame
    // re-registers its own click targets.
    terminal.draw_web({
        let game = game.clone();
        let click_state = click_state.clone();
        let clock = clock.clone();
        move |f| {
            let delta_ticks = clock.borrow_mut().update(js_sys::Date::now());

            let mut g = game.borrow_mut();
            g.tick(delta_ticks);

            let size = f.area();
            {
                let mut cs = click_state.borrow_mut();
                cs.terminal_cols = size.width;
                cs.terminal_rows = size.height;
                cs.clear_targets();
            }

            g.render(f, size, &click_state);
        }
    });

    Ok(())
}
