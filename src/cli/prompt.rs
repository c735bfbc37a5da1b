use dialoguer::{Confirm, Input, Password, Select};
use eduguard_core::AppError;

/// What the shell should do after a screen returns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Everything a screen needs from the terminal.
///
/// Screens only talk to this trait, so tests can drive them with scripted
/// answers instead of a real terminal.
pub trait Prompt {
    /// Free text. `initial` pre-fills the answer.
    fn input(&mut self, label: &str, initial: &str) -> Result<String, AppError>;

    /// Hidden text, used for the PIN.
    fn secret(&mut self, label: &str) -> Result<String, AppError>;

    /// Pick one of `items`; `None` when the user backs out.
    fn select(&mut self, label: &str, items: &[String]) -> Result<Option<usize>, AppError>;

    fn confirm(&mut self, label: &str) -> Result<bool, AppError>;

    /// Show screen output.
    fn say(&mut self, text: &str);
}

/// [`Prompt`] backed by `dialoguer` on the current terminal.
#[derive(Debug, Default)]
pub struct DialoguerPrompt;

impl Prompt for DialoguerPrompt {
    fn input(&mut self, label: &str, initial: &str) -> Result<String, AppError> {
        let value: String = Input::new()
            .with_prompt(label)
            .with_initial_text(initial)
            .allow_empty(true)
            .interact_text()?;
        Ok(value)
    }

    fn secret(&mut self, label: &str) -> Result<String, AppError> {
        let value = Password::new()
            .with_prompt(label)
            .allow_empty_password(true)
            .interact()?;
        Ok(value)
    }

    fn select(&mut self, label: &str, items: &[String]) -> Result<Option<usize>, AppError> {
        let choice = Select::new()
            .with_prompt(label)
            .items(items)
            .default(0)
            .interact_opt()?;
        Ok(choice)
    }

    fn confirm(&mut self, label: &str) -> Result<bool, AppError> {
        let answer = Confirm::new()
            .with_prompt(label)
            .default(false)
            .interact()?;
        Ok(answer)
    }

    fn say(&mut self, text: &str) {
        println!("{text}");
    }
}

/// Offer `actions` and return the chosen one, or `None` on escape.
pub fn choose<P, A>(prompt: &mut P, label: &str, actions: &[(A, &str)]) -> Result<Option<A>, AppError>
where
    P: Prompt + ?Sized,
    A: Copy,
{
    let items: Vec<String> = actions.iter().map(|(_, text)| text.to_string()).collect();
    Ok(prompt
        .select(label, &items)?
        .and_then(|index| actions.get(index))
        .map(|(action, _)| *action))
}
