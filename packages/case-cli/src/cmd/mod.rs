use std::process::ExitCode;

pub mod list;
pub mod refresh;
pub mod run;
pub mod status;

/// How a command finished, mapped to the process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Done,
    Failed,
}

impl From<Completion> for ExitCode {
    fn from(completion: Completion) -> Self {
        match completion {
            Completion::Done => ExitCode::SUCCESS,
            Completion::Failed => ExitCode::FAILURE,
        }
    }
}
