pub mod greet;
pub mod setup;

use crate::cli::{Args, Command};
use crate::error::CommandResult;

/// Dispatches execution to the appropriate command handler.
pub fn execute(args: &Args) -> CommandResult<String> {
    match &args.command {
        None => Ok(greet::message().to_owned()),
        Some(Command::Setup(opts)) => setup::run(opts),
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;
    use crate::cli::SetupArgs;

    #[test]
    fn bare_invocation_dispatches_to_greeting() {
        let args = Args { command: None };
        let message = execute(&args).expect("greeting succeeds");
        assert_eq!(message, greet::GREETING);
    }

    #[test]
    fn setup_dispatches_to_scaffold_personalization() {
        let tmp = tempdir().unwrap();
        fs::write(tmp.path().join("README.md"), "# pipepal\n").unwrap();

        let args = Args {
            command: Some(Command::Setup(SetupArgs {
                package_name: "voicekit".into(),
                package_repo_without_git_extension: "https://github.com/ada/voicekit".into(),
                github_nickname: "ada".into(),
                codecov_token: "TOKEN12345".into(),
                email: "ada@example.org".into(),
                root: tmp.path().to_path_buf(),
            })),
        };

        let message = execute(&args).expect("setup succeeds");
        assert!(message.contains("1 files rewritten"), "message: {message}");
        assert_eq!(
            fs::read_to_string(tmp.path().join("README.md")).unwrap(),
            "# voicekit\n"
        );
    }
}
