mod common;

use common::{id_of, new_student, sample_state, student_codes};
use eduguard::eduguard_core::ErrorKind;
use eduguard::eduguard_models::{CreateStudentDto, StudentId, UpdateStudentDto};
use eduguard::modules::students::RosterStore;

#[test]
fn test_seeded_roster_has_sample_students_in_order() {
    let state = sample_state();

    assert_eq!(
        student_codes(&state),
        vec!["STU001", "STU002", "STU003", "STU004", "STU005"]
    );
    let roster = state.roster.snapshot();
    assert!(roster.selected.is_empty());
    assert!(!roster.selection_mode);
    assert!(roster.focused.is_none());
    assert!(roster.error.is_none());
}

#[test]
fn test_delete_from_seeded_roster_keeps_relative_order() {
    let mut state = sample_state();
    let bob = id_of(&state, "STU003");

    let removed = state.roster.delete(bob).unwrap();

    assert_eq!(removed.name, "Bob Johnson");
    assert_eq!(student_codes(&state), vec!["STU001", "STU002", "STU004", "STU005"]);
}

#[test]
fn test_adds_preserve_insertion_order_with_unique_ids() {
    let mut store = RosterStore::empty();
    let names = ["Ada Lovelace", "Alan Turing", "Grace Hopper", "Edsger Dijkstra"];

    for (i, name) in names.iter().enumerate() {
        store
            .add(new_student(name, &format!("NEW{:03}", i + 1)))
            .unwrap();
    }

    let roster = store.snapshot();
    let stored: Vec<&str> = roster.students.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(stored, names);

    let mut ids: Vec<StudentId> = roster.students.iter().map(|s| s.id).collect();
    ids.sort_by_key(|id| id.into_inner());
    ids.dedup();
    assert_eq!(ids.len(), names.len());
}

#[test]
fn test_add_rejects_duplicate_student_id() {
    let mut state = sample_state();

    let err = state
        .roster
        .add(new_student("Someone Else", "STU001"))
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::Conflict);
    assert_eq!(state.roster.len(), 5);
    assert_eq!(
        state.roster.snapshot().error.as_deref(),
        Some("Student with ID STU001 already exists")
    );
}

#[test]
fn test_create_from_form_appends_validated_student() {
    let mut state = sample_state();

    let created = state
        .roster
        .create(CreateStudentDto {
            name: "  Diana Prince ".to_string(),
            grade: "Grade 12".to_string(),
            student_id: "STU006".to_string(),
            email: Some("diana.prince@school.com".to_string()),
            phone_number: Some("+256700000006".to_string()),
            device_id: Some("DEV-0006".to_string()),
        })
        .unwrap();

    assert_eq!(created.name, "Diana Prince");
    assert!(created.is_active);
    let roster = state.roster.snapshot();
    assert_eq!(roster.students.last().map(|s| s.id), Some(created.id));
}

#[test]
fn test_create_rejects_missing_name() {
    let mut state = sample_state();

    let err = state
        .roster
        .create(CreateStudentDto {
            name: "   ".to_string(),
            grade: "Grade 12".to_string(),
            student_id: "STU006".to_string(),
            email: None,
            phone_number: None,
            device_id: None,
        })
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::Validation);
    assert!(err.message().contains("Name is required"));
    assert_eq!(state.roster.len(), 5);
}

#[test]
fn test_delete_twice_is_a_noop_the_second_time() {
    let mut state = sample_state();
    let jane = id_of(&state, "STU002");

    state.roster.delete(jane).unwrap();
    let after_first = state.roster.snapshot();

    let err = state.roster.delete(jane).unwrap_err();

    assert_eq!(err.kind, ErrorKind::NotFound);
    assert_eq!(state.roster.snapshot().students, after_first.students);
    assert_eq!(state.roster.snapshot().selected, after_first.selected);
}

#[test]
fn test_toggle_selection_twice_restores_state() {
    let mut state = sample_state();
    let alice = id_of(&state, "STU004");
    let before = state.roster.snapshot();

    assert!(state.roster.toggle_selection(alice).unwrap());
    let during = state.roster.snapshot();
    assert!(during.selection_mode);
    assert!(during.is_selected(alice));

    assert!(!state.roster.toggle_selection(alice).unwrap());
    let after = state.roster.snapshot();
    assert_eq!(after.selected, before.selected);
    assert_eq!(after.selection_mode, before.selection_mode);
}

#[test]
fn test_toggle_selection_unknown_id_is_not_found() {
    let mut state = sample_state();

    let err = state.roster.toggle_selection(StudentId::new()).unwrap_err();

    assert!(err.is_not_found());
    assert!(state.roster.snapshot().selected.is_empty());
}

#[test]
fn test_delete_selected_publishes_one_snapshot() {
    let mut state = sample_state();
    let a = id_of(&state, "STU001");
    let b = id_of(&state, "STU005");
    state.roster.toggle_selection(a).unwrap();
    state.roster.toggle_selection(b).unwrap();

    let mut rx = state.roster.subscribe();
    let version_before = rx.borrow_and_update().version;

    let removed = state.roster.delete_selected().unwrap();

    assert_eq!(removed, 2);
    assert!(rx.has_changed().unwrap());
    let published = rx.borrow_and_update().clone();
    assert_eq!(published.version, version_before + 1);
    assert_eq!(
        published
            .students
            .iter()
            .map(|s| s.student_id.as_str())
            .collect::<Vec<_>>(),
        vec!["STU002", "STU003", "STU004"]
    );
    assert!(published.selected.is_empty());
    assert!(!published.selection_mode);
}

#[test]
fn test_delete_prunes_selection_and_focus() {
    let mut state = sample_state();
    let a = id_of(&state, "STU001");
    let b = id_of(&state, "STU002");
    state.roster.toggle_selection(a).unwrap();
    state.roster.toggle_selection(b).unwrap();
    state.roster.select(Some(a)).unwrap();

    state.roster.delete(a).unwrap();

    let roster = state.roster.snapshot();
    assert!(!roster.is_selected(a));
    assert!(roster.is_selected(b));
    assert!(roster.focused.is_none());
}

#[test]
fn test_update_unknown_id_leaves_roster_unchanged() {
    let mut state = sample_state();
    let before = state.roster.snapshot();

    let err = state
        .roster
        .update(new_student("Ghost Student", "STU999"))
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::NotFound);
    let after = state.roster.snapshot();
    assert_eq!(after.students, before.students);
    assert_eq!(after.selected, before.selected);
    assert_eq!(after.selection_mode, before.selection_mode);
}

#[test]
fn test_update_replaces_in_place() {
    let mut state = sample_state();
    let charlie = state.roster.get(id_of(&state, "STU005")).unwrap();

    let mut changed = charlie.clone();
    changed.grade = "Grade 12".to_string();
    changed.device_id = Some("DEV-0005".to_string());
    state.roster.update(changed).unwrap();

    let roster = state.roster.snapshot();
    assert_eq!(roster.position(charlie.id), Some(4));
    let stored = roster.get(charlie.id).unwrap();
    assert_eq!(stored.grade, "Grade 12");
    assert_eq!(stored.device_id.as_deref(), Some("DEV-0005"));
}

#[test]
fn test_edit_keeps_unchanged_fields() {
    let mut state = sample_state();
    let john = id_of(&state, "STU001");

    let updated = state
        .roster
        .edit(
            john,
            UpdateStudentDto {
                email: Some("jd@school.com".to_string()),
                ..Default::default()
            },
        )
        .unwrap();

    assert_eq!(updated.name, "John Doe");
    assert_eq!(updated.email, "jd@school.com");
    assert_eq!(state.roster.snapshot().position(john), Some(0));
}

#[test]
fn test_set_selection_mode_and_clear() {
    let mut state = sample_state();
    let a = id_of(&state, "STU003");

    state.roster.set_selection_mode(true).unwrap();
    assert!(state.roster.snapshot().selection_mode);
    assert!(state.roster.snapshot().selected.is_empty());

    state.roster.toggle_selection(a).unwrap();
    state.roster.clear_selection().unwrap();

    let roster = state.roster.snapshot();
    assert!(!roster.selection_mode);
    assert!(roster.selected.is_empty());
}

#[test]
fn test_select_is_independent_of_multi_select() {
    let mut state = sample_state();
    let a = id_of(&state, "STU002");

    let focused = state.roster.select(Some(a)).unwrap();

    assert_eq!(focused.map(|s| s.name), Some("Jane Smith".to_string()));
    let roster = state.roster.snapshot();
    assert_eq!(roster.focused, Some(a));
    assert!(roster.selected.is_empty());
    assert!(!roster.selection_mode);

    assert!(state.roster.select(None).unwrap().is_none());
    assert!(state.roster.snapshot().focused.is_none());
}

#[test]
fn test_observer_sees_every_change() {
    let mut state = sample_state();
    let mut rx = state.roster.subscribe();
    rx.borrow_and_update();

    state.roster.add(new_student("Peter Parker", "STU006")).unwrap();
    assert!(rx.has_changed().unwrap());
    assert_eq!(rx.borrow_and_update().len(), 6);

    let err = state.roster.delete(StudentId::new()).unwrap_err();
    assert!(err.is_not_found());
    assert!(rx.has_changed().unwrap());
    assert!(rx.borrow_and_update().error.is_some());

    state.roster.clear_error();
    assert!(rx.borrow_and_update().error.is_none());
}

#[test]
fn test_edit_can_clear_email() {
    let mut state = sample_state();
    let john = id_of(&state, "STU001");

    let updated = state
        .roster
        .edit(
            john,
            UpdateStudentDto {
                email: Some(String::new()),
                ..Default::default()
            },
        )
        .unwrap();

    assert_eq!(updated.email, "");
    assert!(state.roster.snapshot().error.is_none());

    let err = state
        .roster
        .edit(
            john,
            UpdateStudentDto {
                email: Some("john.doe".to_string()),
                ..Default::default()
            },
        )
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);
    assert!(err.message().contains("Email is invalid"));
}
