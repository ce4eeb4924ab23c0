use once_cell::sync::Lazy;
use regex::Regex;

/// Leading `scheme:` of an absolute URL, scheme captured without the colon.
pub static SCHEME_PREFIX_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z][A-Za-z0-9+.\-]*):").unwrap()
});

/// Splits `input` into its scheme and the text after the `:`.
///
/// Returns `None` when the input does not start with a well-formed scheme.
pub fn split_scheme(input: &str) -> Option<(&str, &str)> {
    let captures = SCHEME_PREFIX_REGEX.captures(input)?;
    let scheme = captures.get(1)?;
    Some((scheme.as_str(), &input[scheme.end() + 1..]))
}

/// Checks whether `scheme` is a well-formed scheme name (no trailing colon)
pub fn is_valid_scheme(scheme: &str) -> bool {
    let mut chars = scheme.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '+' | '-' | '.'))
        }
        _ => false,
    }
}

/// Ports are kept as text; only non-empty all-digit text is recognized as a
/// port. `host:` therefore keeps its colon in the host.
pub fn is_port_text(port: &str) -> bool {
    !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_scheme() {
        assert_eq!(split_scheme("http://example.com"), Some(("http", "//example.com")));
        assert_eq!(split_scheme("mailto:someone@example.com"), Some(("mailto", "someone@example.com")));
        assert_eq!(split_scheme("svn+ssh:"), Some(("svn+ssh", "")));
        assert_eq!(split_scheme("1http://x"), None);
        assert_eq!(split_scheme("/x:y"), None);
        assert_eq!(split_scheme("not a url"), None);
        assert_eq!(split_scheme(""), None);
    }

    #[test]
    fn test_is_valid_scheme() {
        assert!(is_valid_scheme("https"));
        assert!(is_valid_scheme("x-custom.v2"));
        assert!(!is_valid_scheme(""));
        assert!(!is_valid_scheme("http:"));
        assert!(!is_valid_scheme("9p"));
    }

    #[test]
    fn test_is_port_text() {
        assert!(is_port_text("8080"));
        assert!(!is_port_text(""));
        assert!(!is_port_text("80a"));
        assert!(!is_port_text("-1"));
    }
}
