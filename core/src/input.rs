/// Literal substrings that delimit clauses within a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    By,
    At,
    Date,
    On,
}

impl Marker {
    pub const fn as_str(self) -> &'static str {
        match self {
            Marker::By => "/by",
            Marker::At => "/at",
            Marker::Date => "/date",
            Marker::On => "/on",
        }
    }
}

/// Splits a line into its leading keyword and the text after it.
///
/// The line is trimmed first; the remainder is returned as typed, so
/// `"todo  read"` yields `("todo", Some(" read"))`.
pub fn split_keyword(line: &str) -> (&str, Option<&str>) {
    let line = line.trim();
    match line.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, Some(rest)),
        None => (line, None),
    }
}

/// Splits `text` once around the first `marker`. Neither side is trimmed.
pub fn split_on_marker(text: &str, marker: Marker) -> Option<(&str, &str)> {
    text.split_once(marker.as_str())
}

/// Last whitespace-separated token of `clause`.
pub fn last_token(clause: &str) -> Option<&str> {
    clause.split_whitespace().next_back()
}
