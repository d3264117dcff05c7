use std::path::Path;

use crate::cli::SetupArgs;
use crate::error::{CommandResult, PipepalError};
use crate::scaffold::{self, Replacements, Summary};

/// Personalizes the scaffold under `opts.root` and reports what changed.
pub fn run(opts: &SetupArgs) -> CommandResult<String> {
    let package_name = opts.package_name.trim();
    if package_name.is_empty() {
        return Err(PipepalError::EmptyPackageName);
    }
    if !opts.root.is_dir() {
        return Err(PipepalError::InvalidRoot(opts.root.clone()));
    }

    let replacements = Replacements::personalization(
        package_name,
        &opts.package_repo_without_git_extension,
        &opts.github_nickname,
        &opts.codecov_token,
        &opts.email,
    );
    let summary = scaffold::personalize(&opts.root, &replacements)?;

    Ok(format_summary(&opts.root, &summary))
}

fn format_summary(root: &Path, summary: &Summary) -> String {
    format!(
        "Personalized scaffold at {}: {} files rewritten, {} entries renamed, {} binary files skipped",
        root.display(),
        summary.files_rewritten,
        summary.entries_renamed,
        summary.binary_skipped
    )
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use tempfile::tempdir;

    use super::*;

    fn setup_args(root: PathBuf) -> SetupArgs {
        SetupArgs {
            package_name: "voicekit".into(),
            package_repo_without_git_extension: "https://github.com/ada/voicekit".into(),
            github_nickname: "ada".into(),
            codecov_token: "TOKEN12345".into(),
            email: "ada@example.org".into(),
            root,
        }
    }

    #[test]
    fn formats_summary_line() {
        let summary = Summary {
            files_rewritten: 4,
            entries_renamed: 3,
            binary_skipped: 1,
        };
        let message = format_summary(Path::new("/tmp/checkout"), &summary);

        assert_eq!(
            message,
            "Personalized scaffold at /tmp/checkout: 4 files rewritten, 3 entries renamed, 1 binary files skipped"
        );
    }

    #[test]
    fn rejects_blank_package_name() {
        let tmp = tempdir().unwrap();
        let mut opts = setup_args(tmp.path().to_path_buf());
        opts.package_name = "   ".into();

        let err = run(&opts).unwrap_err();
        assert!(matches!(err, PipepalError::EmptyPackageName));
    }

    #[test]
    fn rejects_missing_root() {
        let tmp = tempdir().unwrap();
        let missing = tmp.path().join("does_not_exist");
        let opts = setup_args(missing.clone());

        let err = run(&opts).unwrap_err();
        assert!(err.to_string().contains("is not a directory"));
    }

    #[test]
    fn trims_package_name_before_substitution() {
        let tmp = tempdir().unwrap();
        std::fs::write(tmp.path().join("README.md"), "# pipepal\n").unwrap();
        let mut opts = setup_args(tmp.path().to_path_buf());
        opts.package_name = "  voicekit  ".into();

        run(&opts).expect("setup succeeds");
        assert_eq!(
            std::fs::read_to_string(tmp.path().join("README.md")).unwrap(),
            "# voicekit\n"
        );
    }
}
