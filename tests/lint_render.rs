//! Lint: click registrations must use named action IDs.
//!
//! Every click target a `render.rs` registers — directly via
//! `add_click_target()` or through a widget's `action_id` field — must
//! name a constant from the game's `actions.rs`. A raw numeric literal
//! at a registration site silently collides with neighbouring targets
//! the moment IDs are renumbered, and the hit-test layer has no way to
//! notice.
//!
//! This test scans all `render.rs` files under `src/games/` and flags
//! registration sites whose ID argument is a bare number.

use std::fs;
use std::path::Path;

/// Extract the ID argument from a single-line `add_click_target(...)`
/// call: the last comma-separated argument before the closing paren.
fn click_target_id_arg(line: &str) -> Option<&str> {
    let rest = line.split("add_click_target(").nth(1)?;
    let args = rest.split(')').next()?;
    Some(args.rsplit(',').next()?.trim())
}

/// Extract the value of an `action_id:` struct field on this line.
fn action_id_field_value(line: &str) -> Option<&str> {
    let rest = line.split("action_id:").nth(1)?;
    Some(rest.trim_start().split([',', '}']).next()?.trim())
}

fn is_numeric_literal(token: &str) -> bool {
    token
        .chars()
        .next()
        .map(|c| c.is_ascii_digit())
        .unwrap_or(false)
}

/// Scan one source file for registration sites with literal IDs.
fn find_literal_action_ids(source: &str) -> Vec<(usize, String)> {
    let mut violations = Vec::new();

    for (line_num_0, line) in source.lines().enumerate() {
        let trimmed = line.trim();

        // Skip comments
        if trimmed.starts_with("//") {
            continue;
        }

        let bad = click_target_id_arg(line).is_some_and(is_numeric_literal)
            || action_id_field_value(line).is_some_and(is_numeric_literal);

        if bad {
            violations.push((line_num_0 + 1, trimmed.to_string()));
        }
    }

    violations
}

fn visit_render_files(dir: &Path, violations: &mut Vec<(String, usize, String)>) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return,
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            visit_render_files(&path, violations);
        } else if path.file_name().is_some_and(|n| n == "render.rs") {
            let source = match fs::read_to_string(&path) {
                Ok(s) => s,
                Err(_) => continue,
            };
            for (line_num, line) in find_literal_action_ids(&source) {
                violations.push((path.display().to_string(), line_num, line));
            }
        }
    }
}

#[test]
fn no_literal_action_ids_in_render() {
    let games_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("src/games");
    let mut all_violations = Vec::new();

    visit_render_files(&games_dir, &mut all_violations);

    if !all_violations.is_empty() {
        let mut msg = String::from(
            "Found click registrations with bare numeric action IDs.\n\
             Use the named constants from the game's actions.rs instead.\n\n",
        );
        for (file, line_num, line) in &all_violations {
            msg.push_str(&format!("  {}:{}: {}\n", file, line_num, line));
        }
        panic!("{}", msg);
    }
}

#[test]
fn literal_ids_are_detected() {
    let source = "
        cs.add_click_target(area, 42);
        cs.add_click_target(Rect::new(0, 0, 5, 1), HOLD_DIE_BASE);
        // cs.add_click_target(area, 7);
    ";
    let violations = find_literal_action_ids(source);
    assert_eq!(violations.len(), 1);
    assert!(violations[0].1.contains("42"));
}

#[test]
fn literal_struct_fields_are_detected() {
    let source = "
        DieButton { value: die.value, held: die.held, focused: false, action_id: 3 }
        DieButton { value: die.value, held: die.held, focused: false, action_id: HOLD_DIE_BASE + idx as u16 }
        action_id: ROLL_OR_NEW,
    ";
    let violations = find_literal_action_ids(source);
    assert_eq!(violations.len(), 1);
    assert!(violations[0].1.contains("action_id: 3"));
}

#[test]
fn constant_expressions_pass() {
    let source = "cs.add_click_target(area, HOLD_DIE_BASE + idx as u16);";
    assert!(find_literal_action_ids(source).is_empty());
}
