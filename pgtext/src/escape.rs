//! Escaping primitives for array literal elements.

/// Returns `true` if `text` spells the NULL sentinel, case insensitive.
///
/// On encode this forces quoting of a real string that happens to spell
/// `null`, on decode it recognizes the bare `NULL` token inside arrays.
pub fn is_null_token(text: &str) -> bool {
    text.eq_ignore_ascii_case("null")
}

/// Returns `true` if an array element with this text must be double quoted.
///
/// `text_typed` marks a value that decodes back as text, which must also be
/// quoted when it spells the NULL sentinel.
pub fn needs_quoting(text: &str, text_typed: bool) -> bool {
    text.is_empty()
        || text.bytes().any(|b| matches!(b, b'"' | b'\\' | b'{' | b'}' | b',' | b';' | b' '))
        || (text_typed && is_null_token(text))
}

/// Appends `text` to `out` with a backslash before every double quote and
/// backslash.
pub fn escape_into(text: &str, out: &mut String) {
    for c in text.chars() {
        if matches!(c, '"' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn null_token() {
        assert!(is_null_token("null"));
        assert!(is_null_token("NULL"));
        assert!(is_null_token("Null"));
        assert!(is_null_token("nuLL"));
        assert!(!is_null_token("null "));
        assert!(!is_null_token("nullify"));
        assert!(!is_null_token(""));
    }

    #[test]
    fn quoting() {
        assert!(needs_quoting("", false));
        assert!(!needs_quoting("abc", false));
        assert!(!needs_quoting("-1.5", false));
        assert!(needs_quoting("a b", false));
        assert!(needs_quoting("a,b", false));
        assert!(needs_quoting("a;b", false));
        assert!(needs_quoting("{1}", false));
        assert!(needs_quoting("say \"hi\"", false));
        assert!(needs_quoting("a\\b", false));
        assert!(needs_quoting("null", true));
        assert!(needs_quoting("NULL", true));
        assert!(!needs_quoting("null", false));
    }

    #[test]
    fn escaping() {
        let mut out = String::new();
        escape_into("a\"b\\c", &mut out);
        assert_eq!(out, "a\\\"b\\\\c");

        let mut out = String::new();
        escape_into("plain", &mut out);
        assert_eq!(out, "plain");
    }
}
