/*
[INPUT]:  Crossterm key codes
[OUTPUT]: TUI key routing to notices, modals, and board actions
[POS]:    TUI event handling
[UPDATE]: When adding hotkeys or modal submit flows
*/

use crossterm::event::KeyCode;

use super::app::{ActiveModal, AppState, Tab};
use super::ui::modal::ModalAction;

enum ModalSubmit {
    CreateTask,
    BaseUrl(String),
}

/// Handles key events for the TUI.
///
/// Returns `true` if quit is requested, `false` otherwise.
pub(super) fn handle_key_event(app: &mut AppState, key: KeyCode) -> bool {
    // notices block everything until acknowledged
    if app.board.notice().is_some() {
        if matches!(key, KeyCode::Enter | KeyCode::Esc) {
            app.board.dismiss_notice();
        }
        return false;
    }

    if app.active_modal.is_some() {
        handle_modal_key_event(app, key);
        return false;
    }

    match key {
        KeyCode::Char('q') => true,
        KeyCode::Char('r') => {
            app.trigger_reload();
            false
        }
        KeyCode::Char('n') | KeyCode::Char('a') => {
            app.open_create_task();
            false
        }
        KeyCode::Char('b') => {
            app.open_base_url();
            false
        }
        KeyCode::Tab | KeyCode::Char('l') => {
            app.next_tab();
            false
        }
        KeyCode::Char('1') => {
            app.set_tab(Tab::Tasks);
            false
        }
        KeyCode::Char('2') => {
            app.set_tab(Tab::Logs);
            false
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.move_selection(-1);
            false
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.move_selection(1);
            false
        }
        _ => false,
    }
}

fn handle_modal_key_event(app: &mut AppState, key: KeyCode) {
    let (action, submit) = match app.active_modal.as_mut() {
        Some(ActiveModal::CreateTask(modal)) => {
            let action = modal.handle_key(app.board.form_mut(), key);
            let submit = (action == ModalAction::Submit).then_some(ModalSubmit::CreateTask);
            (action, submit)
        }
        Some(ActiveModal::BaseUrl(modal)) => {
            let action = modal.handle_key(key);
            let submit =
                (action == ModalAction::Submit).then(|| ModalSubmit::BaseUrl(modal.url().to_string()));
            (action, submit)
        }
        None => return,
    };

    if action == ModalAction::Cancel {
        app.close_modal();
        return;
    }

    match submit {
        // the create modal stays open until the request succeeds
        Some(ModalSubmit::CreateTask) => app.submit_create(),
        Some(ModalSubmit::BaseUrl(url)) => {
            app.apply_base_url(url);
            app.close_modal();
        }
        None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::tui::app::tests::test_app;
    use crate::tui::runtime::UiEvent;

    fn press(app: &mut AppState, keys: &[KeyCode]) {
        for key in keys {
            handle_key_event(app, *key);
        }
    }

    fn type_text(app: &mut AppState, text: &str) {
        for ch in text.chars() {
            handle_key_event(app, KeyCode::Char(ch));
        }
    }

    #[test]
    fn test_quit_only_outside_modal() {
        let (mut app, _rx) = test_app();
        press(&mut app, &[KeyCode::Char('n')]);
        assert!(!handle_key_event(&mut app, KeyCode::Char('q')));
        assert_eq!(app.board.form().title, "q");

        press(&mut app, &[KeyCode::Esc]);
        assert!(app.active_modal.is_none());
        assert!(handle_key_event(&mut app, KeyCode::Char('q')));
    }

    #[test]
    fn test_typing_fills_form_fields() {
        let (mut app, _rx) = test_app();
        press(&mut app, &[KeyCode::Char('n')]);
        type_text(&mut app, "Buy milk");
        press(&mut app, &[KeyCode::Tab]);
        type_text(&mut app, "2 litres");
        // priority select: 3 -> 1
        press(&mut app, &[KeyCode::Tab, KeyCode::Up, KeyCode::Up]);
        // status select: PENDING -> COMPLETED
        press(&mut app, &[KeyCode::Tab, KeyCode::Down, KeyCode::Down]);
        press(&mut app, &[KeyCode::Tab]);
        type_text(&mut app, "2025-06-01");

        let form = app.board.form();
        assert_eq!(form.title, "Buy milk");
        assert_eq!(form.description, "2 litres");
        assert_eq!(form.priority, "1");
        assert_eq!(form.status, "COMPLETED");
        assert_eq!(form.due_date, "2025-06-01");
    }

    #[test]
    fn test_blank_save_shows_notice_until_dismissed() {
        let (mut app, mut rx) = test_app();
        press(&mut app, &[KeyCode::Char('n')]);
        // focus the Save button
        press(&mut app, &[KeyCode::BackTab, KeyCode::BackTab, KeyCode::Enter]);

        assert!(app.board.notice().is_some());
        assert!(rx.try_recv().is_err());

        press(&mut app, &[KeyCode::Char('x')]);
        assert!(app.board.notice().is_some());
        assert!(app.board.form().title.is_empty());

        press(&mut app, &[KeyCode::Enter]);
        assert!(app.board.notice().is_none());
        assert!(matches!(app.active_modal, Some(ActiveModal::CreateTask(_))));
    }

    #[tokio::test]
    async fn test_pressing_save_twice_posts_twice() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/tasks"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 7})))
            .expect(2)
            .mount(&server)
            .await;

        let (mut app, mut rx) = test_app();
        app.board.set_base_url(server.uri());
        press(&mut app, &[KeyCode::Char('n')]);
        type_text(&mut app, "Water plants");
        press(&mut app, &[KeyCode::BackTab, KeyCode::BackTab, KeyCode::Enter, KeyCode::Enter]);

        let mut created = 0;
        while created < 2 {
            match rx.recv().await {
                Some(UiEvent::TaskCreated(Ok(id))) => {
                    assert_eq!(id.as_deref(), Some("7"));
                    created += 1;
                }
                Some(UiEvent::TaskCreated(Err(err))) => panic!("create failed: {err}"),
                Some(_) => {}
                None => panic!("Event channel closed"),
            }
        }
    }

    #[test]
    fn test_base_url_modal_applies_value() {
        let (mut app, _rx) = test_app();
        press(&mut app, &[KeyCode::Char('b')]);
        for _ in 0..64 {
            press(&mut app, &[KeyCode::Backspace]);
        }
        type_text(&mut app, "http://h/api");
        press(&mut app, &[KeyCode::Tab, KeyCode::Enter]);

        assert!(app.active_modal.is_none());
        assert_eq!(app.board.base_url(), "http://h/api");
    }

    #[test]
    fn test_tab_switching() {
        let (mut app, _rx) = test_app();
        press(&mut app, &[KeyCode::Char('2')]);
        assert_eq!(app.current_tab, Tab::Logs);
        press(&mut app, &[KeyCode::Tab]);
        assert_eq!(app.current_tab, Tab::Tasks);
    }
}
