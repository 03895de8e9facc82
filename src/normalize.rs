use once_cell::sync::Lazy;
use regex::Regex;

static SPACE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t]+").unwrap());

// A leading run of digits only counts as a rank prefix when something
// non-whitespace follows the gap ("5 Joe" -> "Joe", but "5Joe" stays).
static RANK_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\s+(\S.*)$").unwrap());

static ALL_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+$").unwrap());

/// Collapses the irregular whitespace random.org pages carry (non-breaking
/// and narrow spaces, carriage returns, runs of tabs/spaces) into plain
/// single-spaced text. Newlines are kept so line-oriented extraction still
/// works. Idempotent.
pub fn normalize_text(input: &str) -> String {
    let rewritten = input
        .replace('\r', "")
        .replace(['\u{00A0}', '\u{202F}', '\u{2007}'], " ");

    SPACE_RUNS.replace_all(&rewritten, " ").trim().to_string()
}

/// Strips a leading rank prefix from a captured participant name. Purely
/// numeric names are legitimate on these pages and are returned verbatim.
pub fn clean_name(raw: &str) -> String {
    let name = raw.trim();
    if ALL_DIGITS.is_match(name) {
        return name.to_string();
    }
    match RANK_PREFIX.captures(name) {
        Some(captures) => captures[1].trim().to_string(),
        None => name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_odd_whitespace() {
        let raw = "  1.\u{00A0}1.\t\tAlice\u{202F}Smith \r\n 1.\u{2007}2. Bob  ";
        assert_eq!(normalize_text(raw), "1. 1. Alice Smith \n 1. 2. Bob");
    }

    #[test]
    fn normalize_is_idempotent() {
        let once = normalize_text("a\u{00A0} b\t c");
        assert_eq!(normalize_text(&once), once);
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(normalize_text(""), "");
        assert_eq!(normalize_text(" \t\r "), "");
    }

    #[test]
    fn keeps_numeric_names() {
        assert_eq!(clean_name("56"), "56");
    }

    #[test]
    fn strips_rank_prefix() {
        assert_eq!(clean_name("5 Joe"), "Joe");
        assert_eq!(clean_name("12  Jane Doe"), "Jane Doe");
    }

    #[test]
    fn leaves_names_starting_with_digits() {
        assert_eq!(clean_name("5Joe"), "5Joe");
        assert_eq!(clean_name("2fast4u"), "2fast4u");
    }
}
