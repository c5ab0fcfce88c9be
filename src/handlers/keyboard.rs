//! Keyboard Input Handler
//!
//! Handles all keyboard input and drives the screen state machine:
//! `SelectFrom -> SelectTo -> EnterAmount -> (ShowResult | ShowError) -> SelectFrom`.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::logic::amount::parse_amount;
use crate::messages::Command;
use crate::model::{Model, Screen};
use crate::services::ConversionRequest;

/// Handle keyboard input
///
/// Returns a command when the key press starts a conversion.
pub fn handle_key(model: &mut Model, key: KeyEvent) -> Option<Command> {
    // Some terminals report releases and repeats as separate events
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if is_quit(&key) {
        tracing::debug!("Quit requested from {:?}", model.screen);
        model.should_quit = true;
        return None;
    }

    // Result and error screens only answer Enter and Esc, both start over
    if model.screen.is_outcome() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            model.restart();
            tracing::debug!("New conversion");
        }
        return None;
    }

    match key.code {
        KeyCode::Esc => {
            handle_back(model);
            None
        }
        KeyCode::Enter => handle_enter(model),
        _ => {
            if model.screen.is_selecting() {
                handle_selector_key(model, key);
            } else {
                handle_amount_key(model, key);
            }
            None
        }
    }
}

/// `q` or Ctrl+C, on every screen
fn is_quit(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('c') | KeyCode::Char('C') => key.modifiers.contains(KeyModifiers::CONTROL),
        KeyCode::Char('q') => !key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT),
        _ => false,
    }
}

/// Esc: step back one screen
fn handle_back(model: &mut Model) {
    match model.screen {
        Screen::SelectFrom => {}
        Screen::SelectTo => {
            model.screen = Screen::SelectFrom;
            match model.from_code.clone() {
                Some(code) => model.selector.reset_to(&code),
                None => model.selector.reset(),
            }
        }
        Screen::EnterAmount => {
            if let Some(seq) = model.conversion.abandon() {
                tracing::debug!(seq, "Abandoned pending conversion");
            }
            model.screen = Screen::SelectTo;
            match model.to_code.clone() {
                Some(code) => model.selector.reset_to(&code),
                None => model.selector.reset(),
            }
        }
        Screen::ShowResult | Screen::ShowError => {}
    }
    tracing::debug!("Back to {:?}", model.screen);
}

/// Enter: commit the current screen
fn handle_enter(model: &mut Model) -> Option<Command> {
    match model.screen {
        Screen::SelectFrom => {
            let code = model.selector.selected()?.to_string();
            tracing::debug!("Source currency {}", code);
            model.from_code = Some(code);
            model.selector.reset();
            model.screen = Screen::SelectTo;
            None
        }
        Screen::SelectTo => {
            let code = model.selector.selected()?.to_string();
            tracing::debug!("Target currency {}", code);
            model.to_code = Some(code);
            model.selector.reset();
            model.amount_input.clear();
            model.screen = Screen::EnterAmount;
            None
        }
        Screen::EnterAmount => submit_amount(model),
        Screen::ShowResult | Screen::ShowError => None,
    }
}

fn submit_amount(model: &mut Model) -> Option<Command> {
    let text = model.amount_input.value();

    let amount = match parse_amount(&text) {
        Ok(amount) => amount,
        Err(e) => {
            tracing::debug!("Rejected amount {:?}", text);
            model.conversion.abandon();
            model.show_error(e);
            return None;
        }
    };

    let (Some(from), Some(to)) = (model.from_code.clone(), model.to_code.clone()) else {
        // Unreachable through the key flow; start over rather than guess
        tracing::warn!("Amount submitted without both currencies selected");
        model.restart();
        return None;
    };

    let seq = model.conversion.begin();
    Some(Command::Convert(ConversionRequest {
        seq,
        from,
        to,
        amount,
    }))
}

fn handle_selector_key(model: &mut Model, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => model.selector.move_up(),
        KeyCode::Down | KeyCode::Char('j') => model.selector.move_down(),
        KeyCode::Backspace => model.selector.pop_filter_char(),
        KeyCode::Char(c) if !has_command_modifier(&key) => {
            model.selector.push_filter_char(c);
        }
        _ => {}
    }
}

fn handle_amount_key(model: &mut Model, key: KeyEvent) {
    let input = &mut model.amount_input;
    match key.code {
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_home(),
        KeyCode::End => input.move_end(),
        KeyCode::Char(c) if !has_command_modifier(&key) => {
            input.insert(c);
        }
        _ => {}
    }
}

fn has_command_modifier(key: &KeyEvent) -> bool {
    key.modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ConversionTracker;

    fn press(model: &mut Model, code: KeyCode) -> Option<Command> {
        handle_key(model, KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(model: &mut Model, text: &str) {
        for c in text.chars() {
            press(model, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_q_quits_from_every_screen() {
        for screen in [
            Screen::SelectFrom,
            Screen::SelectTo,
            Screen::EnterAmount,
            Screen::ShowResult,
            Screen::ShowError,
        ] {
            let mut model = Model::new();
            model.screen = screen;
            press(&mut model, KeyCode::Char('q'));
            assert!(model.should_quit, "q should quit from {:?}", screen);
        }
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut model = Model::new();
        handle_key(
            &mut model,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(model.should_quit);
    }

    #[test]
    fn test_release_events_ignored() {
        let mut model = Model::new();
        let mut key = KeyEvent::new(KeyCode::Down, KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        handle_key(&mut model, key);
        assert_eq!(model.selector.cursor, 0);
    }

    #[test]
    fn test_vim_keys_navigate_not_filter() {
        let mut model = Model::new();
        press(&mut model, KeyCode::Char('j'));
        press(&mut model, KeyCode::Char('j'));
        press(&mut model, KeyCode::Char('k'));
        assert_eq!(model.selector.cursor, 1);
        assert!(model.selector.filter_text.is_empty());
    }

    #[test]
    fn test_uppercase_j_filters() {
        let mut model = Model::new();
        handle_key(
            &mut model,
            KeyEvent::new(KeyCode::Char('J'), KeyModifiers::SHIFT),
        );
        assert_eq!(model.selector.filter_text, "J");
        assert_eq!(model.selector.filtered, vec!["JPY"]);
    }

    #[test]
    fn test_enter_commits_source_and_resets_selector() {
        let mut model = Model::new();
        type_text(&mut model, "e");
        press(&mut model, KeyCode::Enter);
        assert_eq!(model.from_code.as_deref(), Some("EUR"));
        assert_eq!(model.screen, Screen::SelectTo);
        assert!(model.selector.filter_text.is_empty());
        assert_eq!(model.selector.cursor, 0);
        assert!(model.to_code.is_none());
    }

    #[test]
    fn test_filtering_does_not_commit() {
        let mut model = Model::new();
        type_text(&mut model, "g");
        press(&mut model, KeyCode::Down);
        assert!(model.from_code.is_none());
        assert_eq!(model.screen, Screen::SelectFrom);
    }

    #[test]
    fn test_esc_from_select_from_is_noop() {
        let mut model = Model::new();
        press(&mut model, KeyCode::Down);
        press(&mut model, KeyCode::Esc);
        assert_eq!(model.screen, Screen::SelectFrom);
        assert_eq!(model.selector.cursor, 1);
    }

    #[test]
    fn test_esc_from_select_to_returns_to_previous_choice() {
        let mut model = Model::new();
        press(&mut model, KeyCode::Down); // EUR
        press(&mut model, KeyCode::Enter);
        press(&mut model, KeyCode::Esc);
        assert_eq!(model.screen, Screen::SelectFrom);
        assert_eq!(model.selector.selected(), Some("EUR"));
    }

    #[test]
    fn test_amount_editing_keys() {
        let mut model = Model::new();
        press(&mut model, KeyCode::Enter);
        press(&mut model, KeyCode::Enter);
        assert_eq!(model.screen, Screen::EnterAmount);
        type_text(&mut model, "105");
        press(&mut model, KeyCode::Left);
        press(&mut model, KeyCode::Backspace);
        press(&mut model, KeyCode::End);
        type_text(&mut model, ".5");
        assert_eq!(model.amount_input.value(), "15.5");
    }

    #[test]
    fn test_valid_amount_issues_tagged_request() {
        let mut model = Model::new();
        press(&mut model, KeyCode::Enter); // USD
        press(&mut model, KeyCode::Down);
        press(&mut model, KeyCode::Enter); // EUR
        type_text(&mut model, "100");
        let cmd = press(&mut model, KeyCode::Enter);

        assert_eq!(
            cmd,
            Some(Command::Convert(ConversionRequest {
                seq: 1,
                from: "USD".to_string(),
                to: "EUR".to_string(),
                amount: 100.0,
            }))
        );
        assert_eq!(model.screen, Screen::EnterAmount);
        assert!(model.is_converting());
    }

    #[test]
    fn test_invalid_amount_shows_error_without_request() {
        let mut model = Model::new();
        press(&mut model, KeyCode::Enter);
        press(&mut model, KeyCode::Enter);
        type_text(&mut model, "abc");
        let cmd = press(&mut model, KeyCode::Enter);

        assert!(cmd.is_none());
        assert_eq!(model.screen, Screen::ShowError);
        assert!(model.last_error.as_ref().unwrap().to_string().contains("abc"));
        assert_eq!(model.conversion, ConversionTracker::new());
    }

    #[test]
    fn test_esc_from_amount_abandons_request() {
        let mut model = Model::new();
        press(&mut model, KeyCode::Enter);
        press(&mut model, KeyCode::Enter);
        type_text(&mut model, "5");
        press(&mut model, KeyCode::Enter);
        assert!(model.is_converting());

        press(&mut model, KeyCode::Esc);
        assert_eq!(model.screen, Screen::SelectTo);
        assert!(!model.is_converting());
        assert_eq!(model.selector.selected(), Some("USD"));
    }

    #[test]
    fn test_outcome_screens_return_to_start() {
        for key in [KeyCode::Enter, KeyCode::Esc] {
            let mut model = Model::new();
            model.screen = Screen::ShowError;
            model.selector.push_filter_char('Z');
            press(&mut model, key);
            assert_eq!(model.screen, Screen::SelectFrom);
            assert!(model.selector.filter_text.is_empty());
            assert_eq!(model.selector.cursor, 0);
        }
    }

    #[test]
    fn test_keys_ignored_on_outcome_screens() {
        let mut model = Model::new();
        model.screen = Screen::ShowResult;
        press(&mut model, KeyCode::Down);
        type_text(&mut model, "ab");
        assert_eq!(model.screen, Screen::ShowResult);
        assert!(model.selector.filter_text.is_empty());
    }
}
