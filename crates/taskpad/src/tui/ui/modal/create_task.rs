/*
[INPUT]:  Board create form and key events
[OUTPUT]: Create task modal fields and form updates
[POS]:    TUI UI modal for new tasks
[UPDATE]: When create form fields change
*/

use crossterm::event::KeyCode;
use taskpad_client::TaskForm;
use taskpad_client::form::{PRIORITY_OPTIONS, STATUS_OPTIONS};

use super::{Field, Modal, ModalAction, handle_modal_key};

const TITLE: usize = 0;
const DESCRIPTION: usize = 1;
const PRIORITY: usize = 2;
const STATUS: usize = 3;
const DUE_DATE: usize = 4;

/// Field values live in the board's [`TaskForm`]; the modal keeps focus
/// and the option lists.
pub(in crate::tui) struct CreateTaskModal {
    focus_index: usize,
    priority_options: Vec<String>,
    status_options: Vec<String>,
}

impl CreateTaskModal {
    pub(in crate::tui) fn new(form: &TaskForm) -> Self {
        let priorities = PRIORITY_OPTIONS.iter().map(i64::to_string).collect();
        let statuses = STATUS_OPTIONS.iter().map(|s| s.to_string()).collect();
        Self {
            focus_index: TITLE,
            priority_options: with_current(priorities, &form.priority),
            status_options: with_current(statuses, &form.status),
        }
    }

    pub(in crate::tui) fn to_modal(&self, form: &TaskForm) -> Modal {
        Modal {
            title: String::from("New Task"),
            focus_index: self.focus_index,
            fields: vec![
                Field::TextInput {
                    label: String::from("Title"),
                    value: form.title.clone(),
                },
                Field::TextInput {
                    label: String::from("Description"),
                    value: form.description.clone(),
                },
                Field::Select {
                    label: String::from("Priority"),
                    options: self.priority_options.clone(),
                    selected: option_index(&self.priority_options, &form.priority),
                },
                Field::Select {
                    label: String::from("Status"),
                    options: self.status_options.clone(),
                    selected: option_index(&self.status_options, &form.status),
                },
                Field::TextInput {
                    label: String::from("Due date (YYYY-MM-DD)"),
                    value: form.due_date.clone(),
                },
                Field::Button {
                    label: String::from("Save"),
                    action: ModalAction::Submit,
                },
                Field::Button {
                    label: String::from("Cancel"),
                    action: ModalAction::Cancel,
                },
            ],
        }
    }

    pub(in crate::tui) fn handle_key(&mut self, form: &mut TaskForm, key: KeyCode) -> ModalAction {
        let mut modal = self.to_modal(form);
        let action = handle_modal_key(&mut modal, key);
        self.apply_modal_state(&modal, form);
        action
    }

    fn apply_modal_state(&mut self, modal: &Modal, form: &mut TaskForm) {
        self.focus_index = modal.focus_index;
        if let Some(Field::TextInput { value, .. }) = modal.fields.get(TITLE) {
            form.title = value.clone();
        }
        if let Some(Field::TextInput { value, .. }) = modal.fields.get(DESCRIPTION) {
            form.description = value.clone();
        }
        if let Some(Field::Select { options, selected, .. }) = modal.fields.get(PRIORITY) {
            if let Some(value) = options.get(*selected) {
                form.priority = value.clone();
            }
        }
        if let Some(Field::Select { options, selected, .. }) = modal.fields.get(STATUS) {
            if let Some(value) = options.get(*selected) {
                form.status = value.clone();
            }
        }
        if let Some(Field::TextInput { value, .. }) = modal.fields.get(DUE_DATE) {
            form.due_date = value.clone();
        }
    }
}

fn with_current(mut options: Vec<String>, current: &str) -> Vec<String> {
    if !current.is_empty() && !options.iter().any(|option| option == current) {
        options.push(current.to_string());
    }
    options
}

fn option_index(options: &[String], value: &str) -> usize {
    options.iter().position(|option| option == value).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_preselected() {
        let form = TaskForm::default();
        let modal = CreateTaskModal::new(&form).to_modal(&form);
        match (&modal.fields[PRIORITY], &modal.fields[STATUS]) {
            (
                Field::Select { options: p, selected: ps, .. },
                Field::Select { options: s, selected: ss, .. },
            ) => {
                assert_eq!(p[*ps], "3");
                assert_eq!(s[*ss], "PENDING");
                assert_eq!(p.len(), 5);
                assert_eq!(s.len(), 3);
            }
            _ => panic!("Expected select fields"),
        }
    }

    #[test]
    fn test_unknown_status_kept_as_option() {
        let form = TaskForm {
            status: "BLOCKED".to_string(),
            ..TaskForm::default()
        };
        let mut modal = CreateTaskModal::new(&form);
        assert_eq!(modal.status_options.last().map(String::as_str), Some("BLOCKED"));

        let mut form = form;
        modal.handle_key(&mut form, KeyCode::Char('x'));
        assert_eq!(form.status, "BLOCKED");
        assert_eq!(form.title, "x");
    }

    #[test]
    fn test_cleared_form_shows_empty_inputs() {
        let mut form = TaskForm {
            title: "a".to_string(),
            description: "b".to_string(),
            due_date: "c".to_string(),
            ..TaskForm::default()
        };
        let modal = CreateTaskModal::new(&form);
        form.clear_text_fields();

        let rendered = modal.to_modal(&form);
        for index in [TITLE, DESCRIPTION, DUE_DATE] {
            match &rendered.fields[index] {
                Field::TextInput { value, .. } => assert!(value.is_empty()),
                _ => panic!("Expected text input"),
            }
        }
    }
}
