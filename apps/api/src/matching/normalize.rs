/// Normalizes document text to lowercase ASCII letters, digits and single spaces.
///
/// Any other character (punctuation, symbols, control characters, non-ASCII
/// letters) acts as a word separator, so "Power-BI" becomes "power bi".
/// Never fails; empty input yields an empty string.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;

    for c in text.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(c);
        } else {
            pending_space = true;
        }
    }

    out
}
