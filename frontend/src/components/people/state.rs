//! State for the people registration component.
//!
//! Holds the form fields, the drop-zone state, the currently selected
//! spreadsheet and the rows mirrored from the last successful list fetch.
//! Fields are `pub` because they are accessed by the `view` and `update`
//! modules.

use common::model::person::PersonRow;
use web_sys::File;
use yew::prelude::*;

pub struct PeopleComponent {
    /// Value of the required `name` form field.
    pub name: String,

    /// Value of the required `surname` form field.
    pub surname: String,

    /// True while a file is hovered over the drop target. Cosmetic only.
    pub is_dragging: bool,

    /// The validated spreadsheet chosen by drop or file picker. Stays
    /// `None` (or keeps its previous value) when an unsupported file type
    /// is offered.
    pub selected_file: Option<File>,

    /// True while a create request is in flight. Display state only; it
    /// does not gate further submits.
    pub submitting: bool,

    /// Rows mirrored from the last successful list response. Always
    /// replaced wholesale, never merged.
    pub rows: Vec<PersonRow>,

    /// Reference to the hidden native file input.
    pub file_input_ref: NodeRef,

    /// Guard so the initial list fetch runs only on the first render.
    pub loaded: bool,
}

impl PeopleComponent {
    pub fn new() -> Self {
        Self {
            name: String::new(),
            surname: String::new(),
            is_dragging: false,
            selected_file: None,
            submitting: false,
            rows: Vec::new(),
            file_input_ref: Default::default(),
            loaded: false,
        }
    }

    /// Both required fields are non-empty.
    pub fn form_is_valid(&self) -> bool {
        !self.name.is_empty() && !self.surname.is_empty()
    }

    /// Submission gate: valid form plus a selected spreadsheet.
    pub fn can_submit(&self) -> bool {
        self.form_is_valid() && self.selected_file.is_some()
    }

    /// Replaces the table rows with the latest server response.
    pub fn set_rows(&mut self, rows: Vec<PersonRow>) {
        self.rows = rows;
    }

    /// Resets the form to its pristine state after a successful submit.
    pub fn reset_form(&mut self) {
        self.name.clear();
        self.surname.clear();
        self.selected_file = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> PeopleComponent {
        let mut state = PeopleComponent::new();
        state.name = "John".to_string();
        state.surname = "Doe".to_string();
        state
    }

    #[test]
    fn form_requires_both_fields() {
        let mut state = PeopleComponent::new();
        assert!(!state.form_is_valid());
        state.name = "John".to_string();
        assert!(!state.form_is_valid());
        state.surname = "Doe".to_string();
        assert!(state.form_is_valid());
    }

    #[test]
    fn submit_gate_also_requires_a_file() {
        // A valid form alone must not be submittable; files cannot be
        // constructed off-browser, so only the refusing side is checked.
        let state = filled();
        assert!(state.form_is_valid());
        assert!(!state.can_submit());
    }

    #[test]
    fn set_rows_replaces_instead_of_merging() {
        let mut state = PeopleComponent::new();
        let first: Vec<PersonRow> = serde_json::from_str(
            r#"[{"id":1,"name":"John","surname":"Doe"},{"id":2,"name":"Jane","surname":"Roe"}]"#,
        )
        .unwrap();
        state.set_rows(first);
        assert_eq!(state.rows.len(), 2);

        let second: Vec<PersonRow> =
            serde_json::from_str(r#"[{"id":3,"name":"Max","surname":"Mustermann"}]"#).unwrap();
        state.set_rows(second);
        assert_eq!(state.rows.len(), 1);
        assert_eq!(state.rows[0].id, Some(3));
    }

    #[test]
    fn reset_form_clears_fields_and_selection() {
        let mut state = filled();
        state.reset_form();
        assert!(state.name.is_empty());
        assert!(state.surname.is_empty());
        assert!(state.selected_file.is_none());
    }
}
