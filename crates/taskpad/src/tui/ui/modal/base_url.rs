/*
[INPUT]:  Current base URL and key events
[OUTPUT]: Base URL editing modal
[POS]:    TUI UI modal for the API base URL
[UPDATE]: When base URL editing changes
*/

use crossterm::event::KeyCode;

use super::{Field, Modal, ModalAction, handle_modal_key};

pub(in crate::tui) struct BaseUrlModal {
    url: String,
    focus_index: usize,
}

impl BaseUrlModal {
    pub(in crate::tui) fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            focus_index: 0,
        }
    }

    pub(in crate::tui) fn to_modal(&self) -> Modal {
        Modal {
            title: String::from("API Base URL"),
            focus_index: self.focus_index,
            fields: vec![
                Field::TextInput {
                    label: String::from("Base URL"),
                    value: self.url.clone(),
                },
                Field::Button {
                    label: String::from("Apply"),
                    action: ModalAction::Submit,
                },
                Field::Button {
                    label: String::from("Cancel"),
                    action: ModalAction::Cancel,
                },
            ],
        }
    }

    pub(in crate::tui) fn handle_key(&mut self, key: KeyCode) -> ModalAction {
        let mut modal = self.to_modal();
        let action = handle_modal_key(&mut modal, key);
        self.focus_index = modal.focus_index;
        if let Some(Field::TextInput { value, .. }) = modal.fields.first() {
            self.url = value.clone();
        }
        action
    }

    /// Used as typed; an empty value is allowed
    pub(in crate::tui) fn url(&self) -> &str {
        self.url.as_str()
    }
}
