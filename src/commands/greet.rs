pub const GREETING: &str = "Hello, world!";

/// Returns the greeting message printed by a bare invocation.
pub fn message() -> &'static str {
    GREETING
}
