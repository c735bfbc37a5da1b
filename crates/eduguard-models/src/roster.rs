//! Roster state as seen by observers.

use serde::Serialize;
use std::collections::BTreeSet;

use crate::ids::StudentId;
use crate::students::Student;

/// Immutable view of the roster handed to subscribers.
///
/// `students` is in display order. `selected` only ever holds ids present in
/// `students`, and `focused` (when set) does too.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct RosterState {
    pub students: Vec<Student>,
    pub selected: BTreeSet<StudentId>,
    pub selection_mode: bool,
    pub focused: Option<StudentId>,
    pub error: Option<String>,
    /// Bumped on every published change.
    pub version: u64,
}

impl RosterState {
    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn position(&self, id: StudentId) -> Option<usize> {
        self.students.iter().position(|s| s.id == id)
    }

    pub fn get(&self, id: StudentId) -> Option<&Student> {
        self.students.iter().find(|s| s.id == id)
    }

    pub fn find_by_student_id(&self, student_id: &str) -> Option<&Student> {
        self.students.iter().find(|s| s.student_id == student_id)
    }

    pub fn is_selected(&self, id: StudentId) -> bool {
        self.selected.contains(&id)
    }

    /// The focused record, resolved against the current roster.
    pub fn focused_student(&self) -> Option<&Student> {
        self.focused.and_then(|id| self.get(id))
    }

    /// Screen title: "N selected" in selection mode, "Manage Students" otherwise.
    pub fn title(&self) -> String {
        if self.selection_mode {
            format!("{} selected", self.selected.len())
        } else {
            "Manage Students".to_string()
        }
    }
}
