/// Package name the template ships under.
pub const TEMPLATE_NAME: &str = "pipepal";
/// Repository URL baked into the template, without the .git extension.
pub const TEMPLATE_REPO: &str = "https://github.com/fabiocat93/pipepal";
/// GitHub nickname of the template author.
pub const TEMPLATE_OWNER: &str = "fabiocat93";
/// Codecov graphics token baked into the template badges.
pub const TEMPLATE_CODECOV_TOKEN: &str = "IQR1RCYMAA";
/// Contact email baked into the template metadata.
pub const TEMPLATE_EMAIL: &str = "fabiocat@mit.edu";

/// Ordered placeholder substitutions.
///
/// Pairs are applied longest placeholder first so that composite
/// placeholders (the repository URL, the email address) are rewritten before
/// the bare name and owner tokens they contain.
#[derive(Debug, Clone)]
pub struct Replacements {
    pairs: Vec<(String, String)>,
}

impl Replacements {
    /// Builds a replacement set from `(placeholder, value)` pairs.
    ///
    /// Empty placeholders are discarded; they would match everywhere.
    pub fn new<I, P, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (P, V)>,
        P: Into<String>,
        V: Into<String>,
    {
        let mut pairs: Vec<(String, String)> = pairs
            .into_iter()
            .map(|(placeholder, value)| (placeholder.into(), value.into()))
            .filter(|(placeholder, _)| !placeholder.is_empty())
            .collect();
        pairs.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

        Self { pairs }
    }

    /// The standard substitution set for personalizing the package template.
    pub fn personalization(
        package_name: &str,
        package_repo: &str,
        github_nickname: &str,
        codecov_token: &str,
        email: &str,
    ) -> Self {
        Self::new([
            (TEMPLATE_NAME, package_name),
            (TEMPLATE_REPO, package_repo),
            (TEMPLATE_OWNER, github_nickname),
            (TEMPLATE_CODECOV_TOKEN, codecov_token),
            (TEMPLATE_EMAIL, email),
        ])
    }

    /// Applies every substitution to `input`.
    pub fn apply(&self, input: &str) -> String {
        let mut output = input.to_owned();
        for (placeholder, value) in &self.pairs {
            output = output.replace(placeholder.as_str(), value);
        }
        output
    }
}
