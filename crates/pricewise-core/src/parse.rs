//! # List Text Parsing
//!
//! Turns pasted text ("Milk, Bread\n2. Eggs") into item names.
//!
//! ```text
//! "• Milk\n2) Bread; (Eggs"
//!      │ split on '\n' ',' ';'
//!      ▼
//! ["• Milk", "2) Bread", " (Eggs"]
//!      │ trim, strip bullet → list number → opening bracket, trim
//!      ▼
//! ["Milk", "Bread", "Eggs"]
//! ```

const DELIMITERS: [char; 3] = ['\n', ',', ';'];
const BULLETS: [char; 3] = ['-', '•', '*'];
const BRACKETS: [char; 2] = ['[', '('];

/// Splits free-form list text into item names.
///
/// Each marker is stripped at most once and in a fixed order, so
/// `"- 1. Milk"` becomes `"Milk"` but `"1. - Milk"` keeps its dash.
///
/// ## Example
/// ```rust
/// use pricewise_core::parse::parse_list_text;
///
/// assert_eq!(
///     parse_list_text("1. Milk\n2. Bread; Eggs"),
///     vec!["Milk", "Bread", "Eggs"]
/// );
/// assert!(parse_list_text("  \n ").is_empty());
/// ```
pub fn parse_list_text(text: &str) -> Vec<String> {
    text.split(DELIMITERS)
        .map(clean_entry)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

fn clean_entry(entry: &str) -> &str {
    let entry = entry.trim();
    let entry = strip_bullet(entry);
    let entry = strip_list_number(entry);
    let entry = strip_bracket(entry);
    entry.trim()
}

fn strip_bullet(entry: &str) -> &str {
    match entry.strip_prefix(BULLETS) {
        Some(rest) => rest.trim_start(),
        None => entry,
    }
}

/// `"12. x"` or `"3) x"`; digits without a following `.` or `)` are kept
/// ("2 liters milk").
fn strip_list_number(entry: &str) -> &str {
    let digits = entry.len() - entry.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits == 0 {
        return entry;
    }

    match entry[digits..].strip_prefix(['.', ')']) {
        Some(rest) => rest.trim_start(),
        None => entry,
    }
}

fn strip_bracket(entry: &str) -> &str {
    match entry.strip_prefix(BRACKETS) {
        Some(rest) => rest.trim_start(),
        None => entry,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn groceries() -> Vec<String> {
        vec!["Milk", "Bread", "Eggs", "Butter"]
            .into_iter()
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_parse_newline_separated() {
        assert_eq!(parse_list_text("Milk\nBread\nEggs\nButter"), groceries());
    }

    #[test]
    fn test_parse_comma_separated() {
        assert_eq!(parse_list_text("Milk, Bread, Eggs, Butter"), groceries());
    }

    #[test]
    fn test_parse_strips_bullets() {
        assert_eq!(
            parse_list_text("• Milk\n• Bread\n• Eggs\n• Butter"),
            groceries()
        );
        assert_eq!(parse_list_text("- Milk\n* Bread\n-Eggs\n*Butter"), groceries());
    }

    #[test]
    fn test_parse_strips_list_numbers() {
        assert_eq!(
            parse_list_text("1. Milk\n2. Bread\n3. Eggs\n4. Butter"),
            groceries()
        );
        assert_eq!(parse_list_text("10) Milk"), vec!["Milk"]);
    }

    #[test]
    fn test_parse_keeps_leading_quantity() {
        assert_eq!(parse_list_text("2 liters milk"), vec!["2 liters milk"]);
    }

    #[test]
    fn test_parse_mixed_delimiters() {
        assert_eq!(parse_list_text("Milk, Bread\nEggs; Butter"), groceries());
    }

    #[test]
    fn test_parse_strips_opening_bracket() {
        assert_eq!(parse_list_text("[ Milk\n(Bread"), vec!["Milk", "Bread"]);
        assert_eq!(parse_list_text("- 1. ( Eggs"), vec!["Eggs"]);
    }

    #[test]
    fn test_parse_empty_text() {
        assert!(parse_list_text("").is_empty());
        assert!(parse_list_text("   ").is_empty());
    }

    #[test]
    fn test_parse_drops_blank_entries() {
        assert_eq!(
            parse_list_text("Milk\n\n\nBread\n\nEggs"),
            vec!["Milk", "Bread", "Eggs"]
        );
        assert!(parse_list_text("-\n1.\n( ").is_empty());
    }

    #[test]
    fn test_parse_windows_line_endings() {
        assert_eq!(parse_list_text("Milk\r\nBread\r\n"), vec!["Milk", "Bread"]);
    }
}
