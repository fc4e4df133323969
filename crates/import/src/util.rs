use regex::Regex;
use std::sync::OnceLock;

fn re_whitespace_run() -> &'static Regex {
    static R: OnceLock<Regex> = OnceLock::new();
    R.get_or_init(|| Regex::new(r"\s{2,}").expect("invalid regex"))
}

/// Trims a cell and, when it holds a space, folds whitespace runs into one
/// space. Cells without a space keep their inner whitespace untouched.
pub fn normalize_cell(cell: &str) -> String {
    let trimmed = cell.trim();
    if !trimmed.contains(' ') {
        return trimmed.to_string();
    }
    re_whitespace_run().replace_all(trimmed, " ").into_owned()
}
