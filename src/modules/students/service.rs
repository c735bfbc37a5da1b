//! The roster store.
//!
//! [`RosterStore`] is the single source of truth for the student list and the
//! multi-select state of the student management screen. Every state change
//! is published as a full [`RosterState`] snapshot on a `tokio::sync::watch`
//! channel; the store itself is mutated synchronously by one writer.
//!
//! Failed operations never touch the roster. They record their message in
//! [`RosterState::error`] and return the [`AppError`] to the caller.

use anyhow::anyhow;
use eduguard_core::{AppError, validate};
use tokio::sync::watch;
use tracing::{info, instrument, warn};

use crate::modules::students::model::{
    CreateStudentDto, RosterState, Student, StudentId, UpdateStudentDto,
};

pub struct RosterStore {
    tx: watch::Sender<RosterState>,
}

impl RosterStore {
    /// Build a store from initial records. Records that would break the
    /// roster invariants (invalid, duplicate id or student number) are skipped.
    pub fn new(students: Vec<Student>) -> Self {
        let mut state = RosterState::default();
        for student in students {
            if let Err(err) = insert(&mut state, student) {
                warn!(error = %err, "Skipping seed record");
            }
        }
        info!(count = state.len(), "Roster store initialised");

        let (tx, _rx) = watch::channel(state);
        Self { tx }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Receive a snapshot after every state change.
    pub fn subscribe(&self) -> watch::Receiver<RosterState> {
        self.tx.subscribe()
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> RosterState {
        self.tx.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.tx.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.tx.borrow().is_empty()
    }

    pub fn get(&self, id: StudentId) -> Option<Student> {
        self.tx.borrow().get(id).cloned()
    }

    /// Append a fully formed record to the end of the roster.
    #[instrument(skip(self, student), fields(student_id = %student.student_id))]
    pub fn add(&mut self, student: Student) -> Result<Student, AppError> {
        self.apply(|state| insert(state, student).map(|added| (added, true)))
    }

    /// Validate the form, assign a fresh id and append the record.
    #[instrument(skip(self, dto), fields(student_id = %dto.student_id))]
    pub fn create(&mut self, dto: CreateStudentDto) -> Result<Student, AppError> {
        self.apply(|state| {
            validate(&dto)?;
            insert(state, dto.into_student()).map(|added| (added, true))
        })
    }

    /// Replace the record carrying `student.id`, keeping its position.
    #[instrument(skip(self, student), fields(id = %student.id))]
    pub fn update(&mut self, student: Student) -> Result<Student, AppError> {
        self.apply(|state| replace(state, student))
    }

    /// Apply a partial edit on top of the stored record.
    #[instrument(skip(self, dto))]
    pub fn edit(&mut self, id: StudentId, dto: UpdateStudentDto) -> Result<Student, AppError> {
        self.apply(|state| {
            validate(&dto)?;
            let existing = state.get(id).ok_or_else(|| not_found(id))?;
            let updated = dto.apply(existing);
            replace(state, updated)
        })
    }

    /// Remove one record and drop it from the selection.
    #[instrument(skip(self))]
    pub fn delete(&mut self, id: StudentId) -> Result<Student, AppError> {
        self.apply(|state| {
            let index = state.position(id).ok_or_else(|| not_found(id))?;
            let removed = state.students.remove(index);
            state.selected.remove(&id);
            if state.focused == Some(id) {
                state.focused = None;
            }
            info!(student_id = %removed.student_id, "Student deleted");
            Ok((removed, true))
        })
    }

    /// Remove every selected record, clear the selection and leave selection
    /// mode, as one published change. Returns how many records were removed.
    #[instrument(skip(self))]
    pub fn delete_selected(&mut self) -> Result<usize, AppError> {
        self.apply(|state| {
            let before = state.len();
            let selected = std::mem::take(&mut state.selected);
            state
                .students
                .retain(|student| !selected.contains(&student.id));
            if state.focused.is_some_and(|id| selected.contains(&id)) {
                state.focused = None;
            }
            let removed = before - state.len();
            let changed = removed > 0 || !selected.is_empty() || state.selection_mode;
            state.selection_mode = false;
            info!(removed, "Selected students deleted");
            Ok((removed, changed))
        })
    }

    /// Flip membership of `id` in the selection. Returns whether the record is
    /// selected afterwards.
    #[instrument(skip(self))]
    pub fn toggle_selection(&mut self, id: StudentId) -> Result<bool, AppError> {
        self.apply(|state| {
            let selected = toggle(state, id)?;
            Ok((selected, true))
        })
    }

    /// Long-press on a row: enter selection mode and toggle that row.
    #[instrument(skip(self))]
    pub fn begin_selection(&mut self, id: StudentId) -> Result<bool, AppError> {
        self.apply(|state| {
            if state.get(id).is_none() {
                return Err(not_found(id));
            }
            state.selection_mode = true;
            let selected = toggle(state, id)?;
            Ok((selected, true))
        })
    }

    /// Force selection mode on or off. Turning it off clears the selection.
    #[instrument(skip(self))]
    pub fn set_selection_mode(&mut self, enabled: bool) -> Result<(), AppError> {
        self.apply(|state| {
            let mut changed = state.selection_mode != enabled;
            state.selection_mode = enabled;
            if !enabled && !state.selected.is_empty() {
                state.selected.clear();
                changed = true;
            }
            Ok(((), changed))
        })
    }

    pub fn clear_selection(&mut self) -> Result<(), AppError> {
        self.set_selection_mode(false)
    }

    /// Set or clear the focused record used by the detail/edit flow.
    #[instrument(skip(self))]
    pub fn select(&mut self, id: Option<StudentId>) -> Result<Option<Student>, AppError> {
        self.apply(|state| {
            let focused = match id {
                Some(id) => Some(state.get(id).cloned().ok_or_else(|| not_found(id))?),
                None => None,
            };
            let changed = state.focused != id;
            state.focused = id;
            Ok((focused, changed))
        })
    }

    pub fn clear_error(&mut self) {
        // Clearing the error can only succeed
        let _ = self.apply(|_| Ok(((), false)));
    }

    /// Run `op` against the state and publish if anything changed.
    ///
    /// `op` returns its value and whether it modified the state. It must not
    /// modify the state when it returns an error. A successful operation
    /// clears the last error, a failed one records it.
    fn apply<T>(
        &mut self,
        op: impl FnOnce(&mut RosterState) -> Result<(T, bool), AppError>,
    ) -> Result<T, AppError> {
        let mut outcome = None;
        self.tx.send_if_modified(|state| {
            let (result, changed) = match op(state) {
                Ok((value, changed)) => {
                    let cleared = state.error.take().is_some();
                    (Ok(value), changed || cleared)
                }
                Err(err) => {
                    warn!(error = %err, "Roster operation failed");
                    state.error = Some(err.message());
                    (Err(err), true)
                }
            };
            if changed {
                state.version += 1;
            }
            outcome = Some(result);
            changed
        });
        outcome.unwrap_or_else(|| Err(AppError::internal(anyhow!("Roster update did not run"))))
    }
}

impl Default for RosterStore {
    fn default() -> Self {
        Self::empty()
    }
}

fn not_found(id: StudentId) -> AppError {
    AppError::not_found(anyhow!("Student {} not found", id))
}

fn duplicate_student_id(student_id: &str) -> AppError {
    AppError::conflict(anyhow!("Student with ID {} already exists", student_id))
}

fn insert(state: &mut RosterState, student: Student) -> Result<Student, AppError> {
    validate(&student)?;
    if state.get(student.id).is_some() {
        return Err(AppError::conflict(anyhow!(
            "Student {} already exists",
            student.id
        )));
    }
    if state.find_by_student_id(&student.student_id).is_some() {
        return Err(duplicate_student_id(&student.student_id));
    }
    info!(id = %student.id, student_id = %student.student_id, "Student added");
    state.students.push(student.clone());
    Ok(student)
}

fn replace(state: &mut RosterState, student: Student) -> Result<(Student, bool), AppError> {
    validate(&student)?;
    let index = state.position(student.id).ok_or_else(|| not_found(student.id))?;
    let taken = state
        .students
        .iter()
        .any(|other| other.id != student.id && other.student_id == student.student_id);
    if taken {
        return Err(duplicate_student_id(&student.student_id));
    }
    if state.students[index] == student {
        return Ok((student, false));
    }
    info!(id = %student.id, student_id = %student.student_id, "Student updated");
    state.students[index] = student.clone();
    Ok((student, true))
}

fn toggle(state: &mut RosterState, id: StudentId) -> Result<bool, AppError> {
    if state.get(id).is_none() {
        return Err(not_found(id));
    }
    let selected = if state.selected.remove(&id) {
        false
    } else {
        state.selected.insert(id);
        true
    };
    state.selection_mode = !state.selected.is_empty();
    Ok(selected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use eduguard_core::ErrorKind;

    fn student(number: u32) -> Student {
        Student::new(
            format!("Student {number}"),
            "Grade 10",
            format!("STU{number:03}"),
            format!("student{number}@school.com"),
            format!("+25670000000{number}"),
        )
    }

    fn store_with(count: u32) -> RosterStore {
        RosterStore::new((1..=count).map(student).collect())
    }

    #[test]
    fn test_new_skips_duplicate_seed_records() {
        let a = student(1);
        let mut copy = student(2);
        copy.id = a.id;
        let store = RosterStore::new(vec![a, copy, student(1)]);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_add_appends() {
        let mut store = store_with(2);
        let added = store.add(student(3)).unwrap();
        let state = store.snapshot();
        assert_eq!(state.students.last(), Some(&added));
        assert_eq!(state.len(), 3);
    }

    #[test]
    fn test_add_rejects_duplicate_student_number() {
        let mut store = store_with(2);
        let err = store.add(student(2)).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);
        let state = store.snapshot();
        assert_eq!(state.len(), 2);
        assert_eq!(
            state.error.as_deref(),
            Some("Student with ID STU002 already exists")
        );
    }

    #[test]
    fn test_add_rejects_invalid_record() {
        let mut store = RosterStore::empty();
        let mut invalid = student(1);
        invalid.grade = String::new();
        let err = store.add(invalid).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(err.message(), "Grade is required");
        assert!(store.is_empty());
    }

    #[test]
    fn test_create_assigns_fresh_id() {
        let mut store = store_with(1);
        let dto = CreateStudentDto {
            name: "Dana Scully".to_string(),
            grade: "Grade 12".to_string(),
            student_id: "STU900".to_string(),
            email: Some("dana@school.com".to_string()),
            ..Default::default()
        };
        let created = store.create(dto).unwrap();
        assert_eq!(store.get(created.id), Some(created));
    }

    #[test]
    fn test_create_rejects_bad_email() {
        let mut store = RosterStore::empty();
        let dto = CreateStudentDto {
            name: "Dana Scully".to_string(),
            grade: "Grade 12".to_string(),
            student_id: "STU900".to_string(),
            email: Some("dana".to_string()),
            ..Default::default()
        };
        let err = store.create(dto).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert!(store.is_empty());
    }

    #[test]
    fn test_successful_operation_clears_error() {
        let mut store = store_with(1);
        assert!(store.delete(StudentId::new()).is_err());
        assert!(store.snapshot().error.is_some());
        store.add(student(2)).unwrap();
        assert!(store.snapshot().error.is_none());
    }

    #[test]
    fn test_clear_error() {
        let mut store = store_with(1);
        assert!(store.toggle_selection(StudentId::new()).is_err());
        store.clear_error();
        assert!(store.snapshot().error.is_none());
    }

    #[test]
    fn test_update_replaces_in_place() {
        let mut store = store_with(3);
        let mut target = store.snapshot().students[1].clone();
        target.name = "Renamed".to_string();
        target.is_active = false;
        store.update(target.clone()).unwrap();

        let state = store.snapshot();
        assert_eq!(state.students[1], target);
        assert_eq!(state.len(), 3);
    }

    #[test]
    fn test_update_unknown_id_is_not_found() {
        let mut store = store_with(3);
        let before = store.snapshot().students;
        let err = store.update(student(9)).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(store.snapshot().students, before);
    }

    #[test]
    fn test_update_rejects_taking_another_student_number() {
        let mut store = store_with(2);
        let mut first = store.snapshot().students[0].clone();
        first.student_id = "STU002".to_string();
        let err = store.update(first).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);
    }

    #[test]
    fn test_update_identical_record_does_not_publish() {
        let mut store = store_with(2);
        let rx = store.subscribe();
        let same = store.snapshot().students[0].clone();
        store.update(same).unwrap();
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn test_edit_applies_partial_changes() {
        let mut store = store_with(2);
        let id = store.snapshot().students[0].id;
        let dto = UpdateStudentDto {
            phone_number: Some("+256711111111".to_string()),
            ..Default::default()
        };
        let updated = store.edit(id, dto).unwrap();
        assert_eq!(updated.phone_number, "+256711111111");
        assert_eq!(updated.name, "Student 1");
        assert_eq!(store.get(id), Some(updated));
    }

    #[test]
    fn test_edit_unknown_id() {
        let mut store = store_with(1);
        let err = store
            .edit(StudentId::new(), UpdateStudentDto::default())
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_delete_prunes_selection_and_focus() {
        let mut store = store_with(3);
        let ids: Vec<_> = store.snapshot().students.iter().map(|s| s.id).collect();
        store.toggle_selection(ids[0]).unwrap();
        store.toggle_selection(ids[1]).unwrap();
        store.select(Some(ids[1])).unwrap();

        store.delete(ids[1]).unwrap();

        let state = store.snapshot();
        assert_eq!(state.len(), 2);
        assert!(!state.is_selected(ids[1]));
        assert!(state.is_selected(ids[0]));
        assert!(state.focused.is_none());
    }

    #[test]
    fn test_delete_selected_with_empty_selection_exits_mode() {
        let mut store = store_with(2);
        store.set_selection_mode(true).unwrap();
        assert_eq!(store.delete_selected().unwrap(), 0);
        let state = store.snapshot();
        assert_eq!(state.len(), 2);
        assert!(!state.selection_mode);
    }

    #[test]
    fn test_toggle_unknown_id_keeps_selection_valid() {
        let mut store = store_with(2);
        let err = store.toggle_selection(StudentId::new()).unwrap_err();
        assert!(err.is_not_found());
        let state = store.snapshot();
        assert!(state.selected.is_empty());
        assert!(!state.selection_mode);
    }

    #[test]
    fn test_toggle_tracks_selection_mode() {
        let mut store = store_with(2);
        let id = store.snapshot().students[0].id;
        assert!(store.toggle_selection(id).unwrap());
        assert!(store.snapshot().selection_mode);
        assert!(!store.toggle_selection(id).unwrap());
        assert!(!store.snapshot().selection_mode);
    }

    #[test]
    fn test_set_selection_mode_forces_flag() {
        let mut store = store_with(2);
        store.set_selection_mode(true).unwrap();
        let state = store.snapshot();
        assert!(state.selection_mode);
        assert!(state.selected.is_empty());
    }

    #[test]
    fn test_disabling_selection_mode_clears_selection() {
        let mut store = store_with(2);
        let id = store.snapshot().students[0].id;
        store.toggle_selection(id).unwrap();
        store.clear_selection().unwrap();
        let state = store.snapshot();
        assert!(!state.selection_mode);
        assert!(state.selected.is_empty());
    }

    #[test]
    fn test_begin_selection_is_one_change() {
        let mut store = store_with(2);
        let id = store.snapshot().students[1].id;
        let version = store.snapshot().version;
        assert!(store.begin_selection(id).unwrap());
        let state = store.snapshot();
        assert_eq!(state.version, version + 1);
        assert!(state.selection_mode);
        assert!(state.is_selected(id));
        assert_eq!(state.title(), "1 selected");
    }

    #[test]
    fn test_select_sets_and_clears_focus() {
        let mut store = store_with(2);
        let target = store.snapshot().students[1].clone();
        assert_eq!(store.select(Some(target.id)).unwrap(), Some(target.clone()));
        assert_eq!(store.snapshot().focused_student(), Some(&target));
        assert_eq!(store.select(None).unwrap(), None);
        assert!(store.snapshot().focused.is_none());
    }

    #[test]
    fn test_select_unknown_is_not_found() {
        let mut store = store_with(1);
        assert!(store.select(Some(StudentId::new())).is_err());
        assert!(store.snapshot().focused.is_none());
    }

    #[test]
    fn test_select_is_independent_of_multi_select() {
        let mut store = store_with(2);
        let id = store.snapshot().students[0].id;
        store.toggle_selection(id).unwrap();
        store.select(Some(id)).unwrap();
        store.select(None).unwrap();
        assert!(store.snapshot().is_selected(id));
    }

    #[test]
    fn test_focus_follows_updates() {
        let mut store = store_with(1);
        let mut target = store.snapshot().students[0].clone();
        store.select(Some(target.id)).unwrap();
        target.grade = "Grade 12".to_string();
        store.update(target).unwrap();
        let state = store.snapshot();
        assert_eq!(state.focused_student().unwrap().grade, "Grade 12");
    }
}
