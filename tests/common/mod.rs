#![allow(dead_code)]

use anyhow::anyhow;
use eduguard::cli::Prompt;
use eduguard::eduguard_config::{LoginConfig, RosterConfig};
use eduguard::eduguard_core::AppError;
use eduguard::eduguard_models::{Student, StudentId};
use eduguard::state::AppState;
use std::collections::VecDeque;

/// One scripted answer to a prompt.
#[derive(Debug, Clone)]
pub enum Answer {
    Text(String),
    /// Accept the pre-filled value.
    Keep,
    Choice(Option<usize>),
    Yes(bool),
}

pub fn text(value: &str) -> Answer {
    Answer::Text(value.to_string())
}

pub fn choice(index: usize) -> Answer {
    Answer::Choice(Some(index))
}

/// Prompt that replays a fixed list of answers and records everything shown.
///
/// Running out of answers, or getting an answer of the wrong kind, is an
/// error so a test can never hang in the screen loop.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<Answer>,
    pub output: Vec<String>,
}

impl ScriptedPrompt {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            output: Vec::new(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    pub fn said(&self, needle: &str) -> bool {
        self.output.iter().any(|line| line.contains(needle))
    }

    fn next(&mut self, label: &str) -> Result<Answer, AppError> {
        self.answers
            .pop_front()
            .ok_or_else(|| AppError::internal(anyhow!("No scripted answer for '{label}'")))
    }
}

impl Prompt for ScriptedPrompt {
    fn input(&mut self, label: &str, initial: &str) -> Result<String, AppError> {
        match self.next(label)? {
            Answer::Text(value) => Ok(value),
            Answer::Keep => Ok(initial.to_string()),
            other => Err(AppError::internal(anyhow!("Expected text for '{label}', got {other:?}"))),
        }
    }

    fn secret(&mut self, label: &str) -> Result<String, AppError> {
        self.input(label, "")
    }

    fn select(&mut self, label: &str, items: &[String]) -> Result<Option<usize>, AppError> {
        match self.next(label)? {
            Answer::Choice(Some(index)) if index >= items.len() => Err(AppError::internal(
                anyhow!("Choice {index} out of range for '{label}'"),
            )),
            Answer::Choice(choice) => Ok(choice),
            other => Err(AppError::internal(anyhow!(
                "Expected a choice for '{label}', got {other:?}"
            ))),
        }
    }

    fn confirm(&mut self, label: &str) -> Result<bool, AppError> {
        match self.next(label)? {
            Answer::Yes(answer) => Ok(answer),
            other => Err(AppError::internal(anyhow!(
                "Expected yes/no for '{label}', got {other:?}"
            ))),
        }
    }

    fn say(&mut self, text: &str) {
        self.output.push(text.to_string());
    }
}

/// App state seeded with the five sample students and no login delay.
pub fn sample_state() -> AppState {
    AppState::new(LoginConfig::immediate(), &RosterConfig::default())
}

pub fn new_student(name: &str, student_id: &str) -> Student {
    let email = format!("{}@school.com", name.to_lowercase().replace(' ', "."));
    Student::new(name, "Grade 10", student_id, email, "+256700000099")
}

pub fn id_of(state: &AppState, student_id: &str) -> StudentId {
    state
        .roster
        .snapshot()
        .find_by_student_id(student_id)
        .map(|s| s.id)
        .unwrap_or_else(|| panic!("{student_id} not in roster"))
}

pub fn student_codes(state: &AppState) -> Vec<String> {
    state
        .roster
        .snapshot()
        .students
        .iter()
        .map(|s| s.student_id.clone())
        .collect()
}
