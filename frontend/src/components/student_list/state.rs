//! State container for the student directory.
//!
//! Holds the loaded records, the local filter, and the delete-confirmation
//! slice. All transitions are pure methods so they can be exercised without
//! a rendering layer; `update.rs` wires them to messages and side effects.

use common::model::student::{programs_present, Program, Student};

/// What to show when the filtered table would be empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmptyState {
    /// Nothing loaded at all: prompt to register the first student.
    NoneRegistered,
    /// Records exist but the active filter excludes all of them.
    NoMatches,
}

pub struct StudentListComponent {
    /// Last successfully loaded collection. Only overwritten on a successful
    /// load, so a failed refresh keeps showing the stale list.
    pub students: Vec<Student>,
    pub loading: bool,
    pub error: Option<String>,
    pub search_term: String,
    /// `None` means "All Programs".
    pub selected_program: Option<Program>,
    /// The record pending deletion, while the confirmation modal is open.
    pub delete_confirm: Option<Student>,
    /// Guards the first-render fetch.
    pub loaded: bool,
}

impl StudentListComponent {
    pub fn new() -> Self {
        Self {
            students: Vec::new(),
            loading: true,
            error: None,
            search_term: String::new(),
            selected_program: None,
            delete_confirm: None,
            loaded: false,
        }
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn load_succeeded(&mut self, records: Vec<Student>) {
        self.loading = false;
        self.error = None;
        self.students = records;
    }

    /// Keeps whatever was last displayed; the error is shown alongside it.
    pub fn load_failed(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    pub fn request_delete(&mut self, student: Student) {
        self.delete_confirm = Some(student);
    }

    pub fn cancel_delete(&mut self) {
        self.delete_confirm = None;
    }

    /// Removes exactly the acknowledged record, matched by id; no reload.
    pub fn delete_succeeded(&mut self, id: &str) {
        self.students.retain(|s| s.id != id);
        self.delete_confirm = None;
    }

    /// The confirmation is cleared either way; the user must re-initiate.
    pub fn delete_failed(&mut self, message: String) {
        self.error = Some(message);
        self.delete_confirm = None;
    }

    pub fn set_search_term(&mut self, term: String) {
        self.search_term = term;
    }

    pub fn set_selected_program(&mut self, program: Option<Program>) {
        self.selected_program = program;
    }

    /// The records visible under the current filter, in load order.
    pub fn filtered(&self) -> Vec<&Student> {
        self.students
            .iter()
            .filter(|s| s.matches_filter(&self.search_term, self.selected_program))
            .collect()
    }

    /// Options for the program dropdown: the distinct sorted programs
    /// present in the loaded data.
    pub fn filter_programs(&self) -> Vec<Program> {
        programs_present(&self.students)
    }

    pub fn empty_state(&self) -> Option<EmptyState> {
        if !self.filtered().is_empty() {
            None
        } else if self.students.is_empty() {
            Some(EmptyState::NoneRegistered)
        } else {
            Some(EmptyState::NoMatches)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn student(id: &str, name: &str, email: &str, program: Program) -> Student {
        Student {
            id: id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            birth_date: NaiveDate::from_ymd_opt(2003, 5, 20).unwrap(),
            program,
        }
    }

    fn loaded_state() -> StudentListComponent {
        let mut state = StudentListComponent::new();
        state.load_succeeded(vec![
            student("1", "Alice Johnson", "alice@uni.edu", Program::ComputerScience),
            student("2", "Bob Smith", "bob@uni.edu", Program::WebDevelopment),
            student("3", "Carol Jones", "carol@mail.com", Program::ComputerScience),
        ]);
        state
    }

    #[test]
    fn failed_reload_keeps_the_stale_list() {
        let mut state = loaded_state();
        state.begin_load();
        state.load_failed("Failed to fetch students: boom".to_string());

        assert_eq!(state.students.len(), 3);
        assert_eq!(
            state.error.as_deref(),
            Some("Failed to fetch students: boom")
        );
        assert!(!state.loading);
    }

    #[test]
    fn only_success_overwrites_records() {
        let mut state = loaded_state();
        state.begin_load();
        assert!(state.error.is_none());

        state.load_succeeded(vec![student("9", "Eve", "eve@uni.edu", Program::DataScience)]);
        assert_eq!(state.students.len(), 1);
        assert!(state.error.is_none());
    }

    #[test]
    fn cancel_delete_changes_nothing_but_the_confirmation() {
        let mut state = loaded_state();
        let victim = state.students[1].clone();

        state.request_delete(victim.clone());
        assert_eq!(state.delete_confirm.as_ref(), Some(&victim));

        state.cancel_delete();
        assert!(state.delete_confirm.is_none());
        assert_eq!(state.students.len(), 3);
        assert_eq!(state.filtered().len(), 3);
    }

    #[test]
    fn confirmed_delete_removes_exactly_one_by_id() {
        let mut state = loaded_state();
        let victim = state.students[1].clone();
        state.request_delete(victim.clone());

        state.delete_succeeded(&victim.id);
        assert_eq!(state.students.len(), 2);
        assert!(state.students.iter().all(|s| s.id != victim.id));
        assert!(state.delete_confirm.is_none());
    }

    #[test]
    fn failed_delete_clears_the_confirmation_and_sets_the_error() {
        let mut state = loaded_state();
        state.request_delete(state.students[0].clone());

        state.delete_failed("Failed to delete student: gone away".to_string());
        assert!(state.delete_confirm.is_none());
        assert_eq!(state.students.len(), 3);
        assert_eq!(
            state.error.as_deref(),
            Some("Failed to delete student: gone away")
        );
    }

    #[test]
    fn filter_narrows_the_visible_rows() {
        let mut state = loaded_state();

        state.set_search_term("jo".to_string());
        let visible: Vec<&str> = state.filtered().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(visible, vec!["1", "3"]);

        state.set_selected_program(Some(Program::ComputerScience));
        assert_eq!(state.filtered().len(), 2);

        state.set_search_term("alice".to_string());
        assert_eq!(state.filtered().len(), 1);
    }

    #[test]
    fn dropdown_lists_only_programs_present() {
        let state = loaded_state();
        assert_eq!(
            state.filter_programs(),
            vec![Program::ComputerScience, Program::WebDevelopment]
        );
    }

    #[test]
    fn empty_states_are_distinguished() {
        let mut state = StudentListComponent::new();
        state.load_succeeded(Vec::new());
        assert_eq!(state.empty_state(), Some(EmptyState::NoneRegistered));

        let mut state = loaded_state();
        assert_eq!(state.empty_state(), None);

        state.set_search_term("zzz".to_string());
        assert_eq!(state.empty_state(), Some(EmptyState::NoMatches));
    }
}
