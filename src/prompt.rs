//! 交互式输入
//!
//! 未提供项目名称时询问用户，输入不合法时重新提示

use dialoguer::{console::Term, theme::ColorfulTheme, Input};
use std::io;

use crate::error::{ScaffoldError, ScaffoldResult};
use crate::project::{NamePolicy, ProjectName, DEFAULT_PROJECT_NAME};

/// 询问项目名称。Ctrl+C 返回 `ScaffoldError::Cancelled`
pub fn prompt_project_name() -> ScaffoldResult<ProjectName> {
    if !Term::stderr().is_term() {
        return Err(not_a_terminal());
    }

    let value: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("What would you like to name your IC app?")
        .default(DEFAULT_PROJECT_NAME.to_string())
        .validate_with(|input: &String| ProjectName::validate_strict(input))
        .interact_text()
        .map_err(prompt_error)?;

    ProjectName::parse(&value, NamePolicy::Strict)
}

fn prompt_error(err: dialoguer::Error) -> ScaffoldError {
    match err {
        dialoguer::Error::IO(e) if e.kind() == io::ErrorKind::Interrupted => {
            ScaffoldError::Cancelled
        }
        dialoguer::Error::IO(e) if e.kind() == io::ErrorKind::NotConnected => not_a_terminal(),
        other => ScaffoldError::Prompt(other.to_string()),
    }
}

fn not_a_terminal() -> ScaffoldError {
    ScaffoldError::Prompt("not a terminal; pass the project name as an argument".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interrupt_maps_to_cancelled() {
        let err = prompt_error(dialoguer::Error::IO(io::Error::new(
            io::ErrorKind::Interrupted,
            "read interrupted",
        )));
        assert!(err.is_cancelled());
    }

    #[test]
    fn test_non_terminal_maps_to_prompt_error() {
        let err = prompt_error(dialoguer::Error::IO(io::Error::new(
            io::ErrorKind::NotConnected,
            "not a terminal",
        )));
        assert!(matches!(err, ScaffoldError::Prompt(_)));
        assert!(err.to_string().contains("pass the project name"));
    }
}
