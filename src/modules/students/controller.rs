//! Student management screen.
//!
//! Mirrors the mobile screen: a list of students, an add/edit form, a per
//! student action sheet and a multi-select mode for bulk deletion.

use eduguard_core::AppError;
use tracing::instrument;

use super::model::{CreateStudentDto, Student, StudentId, UpdateStudentDto};
use crate::cli::prompt::choose;
use crate::cli::{Flow, Prompt, render, shell};
use crate::state::AppState;

#[derive(Clone, Copy)]
enum Action {
    Add,
    Open,
    Select,
    Back,
    Menu,
    Quit,
}

#[derive(Clone, Copy)]
enum SelectionAction {
    Toggle,
    DeleteSelected,
    Cancel,
}

#[derive(Clone, Copy)]
enum SheetAction {
    Edit,
    Delete,
    Close,
}

#[instrument(skip_all)]
pub fn students_screen<P: Prompt + ?Sized>(
    state: &mut AppState,
    prompt: &mut P,
) -> Result<Flow, AppError> {
    let roster = state.roster.snapshot();

    prompt.say(&format!("\n== {} ==", roster.title()));
    prompt.say(&render::roster_table(&roster));

    if roster.selection_mode {
        selection_menu(state, prompt)?;
        return Ok(Flow::Continue);
    }

    let actions = [
        (Action::Add, "Add student"),
        (Action::Open, "Open student"),
        (Action::Select, "Select students"),
        (Action::Back, "Back"),
        (Action::Menu, "Open menu"),
        (Action::Quit, "Quit"),
    ];
    match choose(prompt, "Students", &actions)? {
        Some(Action::Add) => add_student(state, prompt)?,
        Some(Action::Open) => {
            if let Some(id) = pick_student(state, prompt, "Open which student?")? {
                student_sheet(state, prompt, id)?;
            }
        }
        Some(Action::Select) => {
            if let Some(id) = pick_student(state, prompt, "Start selecting with")? {
                report(prompt, state.roster.begin_selection(id));
            }
        }
        Some(Action::Back) | None => {
            state.navigator.back();
        }
        Some(Action::Menu) => return shell::open_drawer(state, prompt),
        Some(Action::Quit) => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}

fn selection_menu<P: Prompt + ?Sized>(state: &mut AppState, prompt: &mut P) -> Result<(), AppError> {
    let actions = [
        (SelectionAction::Toggle, "Toggle student"),
        (SelectionAction::DeleteSelected, "Delete selected"),
        (SelectionAction::Cancel, "Cancel selection"),
    ];
    match choose(prompt, "Selection", &actions)? {
        Some(SelectionAction::Toggle) => {
            if let Some(id) = pick_student(state, prompt, "Toggle which student?")? {
                report(prompt, state.roster.toggle_selection(id));
            }
        }
        Some(SelectionAction::DeleteSelected) => match state.roster.delete_selected() {
            Ok(count) => prompt.say(&format!("🗑️  Deleted {count} student(s)")),
            Err(err) => prompt.say(&format!("❌ {}", err.message())),
        },
        Some(SelectionAction::Cancel) | None => {
            report(prompt, state.roster.clear_selection());
        }
    }
    Ok(())
}

/// Per-student action sheet, with the student focused while it is open.
fn student_sheet<P: Prompt + ?Sized>(
    state: &mut AppState,
    prompt: &mut P,
    id: StudentId,
) -> Result<(), AppError> {
    let Some(student) = state.roster.select(Some(id))? else {
        return Ok(());
    };

    prompt.say(&format!("\n{}\n{}", student.name, student.subtitle()));
    prompt.say(&format!("✉  {}\n☎  {}", student.email, student.phone_number));

    let actions = [
        (SheetAction::Edit, "Edit"),
        (SheetAction::Delete, "Delete"),
        (SheetAction::Close, "Close"),
    ];
    match choose(prompt, &student.name, &actions)? {
        Some(SheetAction::Edit) => edit_student(state, prompt, &student)?,
        Some(SheetAction::Delete) => match state.roster.delete(id) {
            Ok(removed) => prompt.say(&format!("🗑️  Deleted {}", removed.name)),
            Err(err) => prompt.say(&format!("❌ {}", err.message())),
        },
        Some(SheetAction::Close) | None => {}
    }

    // The student may be gone by now, which already cleared the focus
    if state.roster.snapshot().focused.is_some() {
        state.roster.select(None)?;
    }
    Ok(())
}

fn add_student<P: Prompt + ?Sized>(state: &mut AppState, prompt: &mut P) -> Result<(), AppError> {
    prompt.say("\nAdd Student");
    let dto = CreateStudentDto {
        name: prompt.input("Full Name", "")?,
        grade: prompt.input("Grade (e.g., Grade 10)", "")?,
        student_id: prompt.input("Student ID", "")?,
        email: non_empty(prompt.input("Email", "")?),
        phone_number: non_empty(prompt.input("Phone Number", "")?),
        device_id: None,
    };

    match state.roster.create(dto) {
        Ok(student) => prompt.say(&format!("✅ Added {}", student.name)),
        Err(err) => prompt.say(&format!("❌ {}", err.message())),
    }
    Ok(())
}

fn edit_student<P: Prompt + ?Sized>(
    state: &mut AppState,
    prompt: &mut P,
    existing: &Student,
) -> Result<(), AppError> {
    prompt.say("\nEdit Student");
    let name = prompt.input("Full Name", &existing.name)?;
    let grade = prompt.input("Grade (e.g., Grade 10)", &existing.grade)?;
    let student_id = prompt.input("Student ID", &existing.student_id)?;
    let email = prompt.input("Email", &existing.email)?;
    let phone_number = prompt.input("Phone Number", &existing.phone_number)?;

    let dto = UpdateStudentDto {
        name: changed(name, &existing.name),
        grade: changed(grade, &existing.grade),
        student_id: changed(student_id, &existing.student_id),
        email: changed(email, &existing.email),
        phone_number: changed(phone_number, &existing.phone_number),
        ..Default::default()
    };
    if dto.is_empty() {
        prompt.say("Nothing changed");
        return Ok(());
    }

    match state.roster.edit(existing.id, dto) {
        Ok(student) => prompt.say(&format!("✅ Updated {}", student.name)),
        Err(err) => prompt.say(&format!("❌ {}", err.message())),
    }
    Ok(())
}

fn pick_student<P: Prompt + ?Sized>(
    state: &AppState,
    prompt: &mut P,
    label: &str,
) -> Result<Option<StudentId>, AppError> {
    let roster = state.roster.snapshot();
    if roster.is_empty() {
        prompt.say("No students registered yet");
        return Ok(None);
    }
    let items: Vec<String> = roster
        .students
        .iter()
        .map(|s| {
            let mark = if roster.is_selected(s.id) { "✓ " } else { "" };
            format!("{mark}{} ({})", s.name, s.subtitle())
        })
        .collect();
    Ok(prompt
        .select(label, &items)?
        .and_then(|index| roster.students.get(index))
        .map(|s| s.id))
}

fn report<T, P: Prompt + ?Sized>(prompt: &mut P, result: Result<T, AppError>) {
    if let Err(err) = result {
        prompt.say(&format!("❌ {}", err.message()));
    }
}

fn non_empty(value: String) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn changed(value: String, current: &str) -> Option<String> {
    let value = value.trim();
    (value != current).then(|| value.to_string())
}
