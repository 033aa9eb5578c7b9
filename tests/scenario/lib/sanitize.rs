use std::sync::LazyLock;

use regex::Regex;

static ANSI_RE: LazyLock<Regex> = LazyLock::new(|| {
    // Matches: \x1b[1;31m or \x1b[0m
    Regex::new(r"\x1b\[[0-9;]*m").unwrap()
});

pub fn strip_ansi(input: &str) -> String {
    ANSI_RE.replace_all(input, "").to_string()
}
