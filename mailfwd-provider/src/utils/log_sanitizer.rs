//! Log sanitization utilities
//!
//! Keeps API keys, secrets and large response bodies out of debug/error logs.

/// Maximum number of bytes of a response body included in log output.
const TRUNCATE_LIMIT: usize = 256;

/// Number of leading characters of a secret kept visible.
const SECRET_VISIBLE_CHARS: usize = 4;

/// Largest char boundary not greater than `index`.
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    (0..=index).rev().find(|&i| s.is_char_boundary(i)).unwrap_or(0)
}

/// Truncate a string for safe logging.
///
/// Strings within the limit are returned unchanged; longer ones keep the
/// first `TRUNCATE_LIMIT` bytes (on a char boundary) plus a length suffix.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        s.to_string()
    } else {
        format!(
            "{}... [truncated, total {} bytes]",
            &s[..floor_char_boundary(s, TRUNCATE_LIMIT)],
            s.len()
        )
    }
}

/// Mask a credential for logging: `ABCD***` (or `***` when too short to reveal anything).
pub fn mask_secret(secret: &str) -> String {
    if secret.chars().count() <= SECRET_VISIBLE_CHARS * 2 {
        return "***".to_string();
    }
    let visible: String = secret.chars().take(SECRET_VISIBLE_CHARS).collect();
    format!("{visible}***")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_string_unchanged() {
        let s = "[\"1\",\"2\"]";
        assert_eq!(truncate_for_log(s), s);
    }

    #[test]
    fn over_limit_truncated() {
        let s = "a".repeat(TRUNCATE_LIMIT + 100);
        let result = truncate_for_log(&s);
        assert!(result.contains(&format!("total {} bytes]", TRUNCATE_LIMIT + 100)));
        assert!(result.len() < s.len());
    }

    #[test]
    fn multibyte_chars_safe() {
        let s = "é".repeat(200);
        let result = truncate_for_log(&s);
        assert!(result.contains("... [truncated, total 400 bytes]"));
    }

    #[test]
    fn long_secret_keeps_prefix() {
        assert_eq!(mask_secret("ABCDEFGHIJKL"), "ABCD***");
    }

    #[test]
    fn short_secret_fully_hidden() {
        assert_eq!(mask_secret("ABCD"), "***");
        assert_eq!(mask_secret(""), "***");
    }
}
