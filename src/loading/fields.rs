/// Removes one pair of matching single or double quotes around `s`.
#[inline]
pub fn strip_surrounding_quotes(s: &str) -> &str {
    let b = s.as_bytes();
    if b.len() >= 2 {
        let first = b[0];
        let last = b[b.len() - 1];
        if (first == b'\'' && last == b'\'') || (first == b'"' && last == b'"') {
            return &s[1..s.len() - 1];
        }
    }
    s
}

/// Splits one record on commas that are not inside quotes. Every field is
/// trimmed and unquoted. A trailing comma yields a trailing empty field.
pub fn split_fields(line: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut cur = String::new();
    let mut in_quotes: Option<char> = None;

    for ch in line.chars() {
        match in_quotes {
            Some(q) => {
                if ch == q {
                    in_quotes = None;
                }
                cur.push(ch);
            }
            None if ch == '"' || ch == '\'' => {
                in_quotes = Some(ch);
                cur.push(ch);
            }
            None if ch == ',' => {
                out.push(strip_surrounding_quotes(cur.trim()).to_string());
                cur.clear();
            }
            None => cur.push(ch),
        }
    }
    out.push(strip_surrounding_quotes(cur.trim()).to_string());
    out
}
