use std::sync::LazyLock;

use regex::Regex;

static UUID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$")
        .expect("uuid pattern is valid")
});

static LONG_HASH_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]{16,}$").expect("long hash pattern is valid"));

/**
    Number of characters of an opaque identifier that may be shown.
*/
pub const SHORT_ID_LEN: usize = 6;

/**
    Checks if the given string is a UUID in its canonical,
    dashed 8-4-4-4-12 hex grouping. Case-insensitive.

    Bare 32-character hex strings are *not* considered UUIDs here,
    although most of them will be caught by [`is_long_hash`] instead.
*/
#[must_use]
pub fn is_uuid(s: &str) -> bool {
    UUID_PATTERN.is_match(s)
}

/**
    Checks if the given string looks like a long random token -
    16 or more characters made up of ASCII letters, digits,
    hyphens and underscores, with nothing else in between.
*/
#[must_use]
pub fn is_long_hash(s: &str) -> bool {
    LONG_HASH_PATTERN.is_match(s)
}

/**
    Checks if the given token is an opaque identifier that
    should never be shown verbatim as part of a display name.
*/
#[must_use]
pub fn is_opaque_identifier(s: &str) -> bool {
    is_uuid(s) || is_long_hash(s)
}

/**
    Returns the first [`SHORT_ID_LEN`] characters of the given string.

    Counts characters and not bytes, so multi-byte
    input can never be split in the middle of a character.
*/
#[must_use]
pub fn short_id(s: &str) -> String {
    s.chars().take(SHORT_ID_LEN).collect()
}

/**
    Capitalizes a single word: the first character is uppercased,
    the remainder is lowercased.

    Casing is not locale-aware, `"ISTANBUL"` becomes `"Istanbul"`
    regardless of any system language settings.
*/
#[must_use]
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut result = String::with_capacity(s.len());
    result.extend(first.to_uppercase());
    for ch in chars {
        result.extend(ch.to_lowercase());
    }
    result
}

/**
    Extracts the local part of an email address - everything before the
    first `@`, trimmed. Strings without any `@` are returned trimmed as-is.
*/
#[must_use]
pub fn email_local_part(email: &str) -> &str {
    match email.split_once('@') {
        Some((local, _)) => local.trim(),
        None => email.trim(),
    }
}

/**
    Splits the local part of an email address into name tokens,
    on runs of `.`, `_` and `-`. Empty tokens are discarded.
*/
pub fn email_tokens(local: &str) -> impl Iterator<Item = &str> {
    local
        .split(['.', '_', '-'])
        .filter(|token| !token.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    // is_uuid

    #[test]
    fn uuid_canonical() {
        assert!(is_uuid("a1b2c3d4-e5f6-7890-abcd-ef1234567890"));
        assert!(is_uuid("A1B2C3D4-E5F6-7890-ABCD-EF1234567890"));
    }

    #[test]
    fn uuid_rejects_bare_hex() {
        assert!(!is_uuid("a1b2c3d4e5f67890abcdef1234567890"));
    }

    #[test]
    fn uuid_rejects_wrong_grouping() {
        assert!(!is_uuid("a1b2c3d4-e5f6-7890-abcdef-1234567890"));
        assert!(!is_uuid("a1b2c3d4-e5f6-7890-abcd-ef1234567890-"));
        assert!(!is_uuid("g1b2c3d4-e5f6-7890-abcd-ef1234567890"));
        assert!(!is_uuid(""));
    }

    // is_long_hash

    #[test]
    fn long_hash_basic() {
        assert!(is_long_hash("abcdefghijklmnop"));
        assert!(is_long_hash("Zx9_-Zx9_-Zx9_-Zx9"));
        assert!(is_long_hash("a1b2c3d4e5f67890abcdef1234567890"));
    }

    #[test]
    fn long_hash_too_short() {
        assert!(!is_long_hash("abcdefghijklmno"));
        assert!(!is_long_hash(""));
    }

    #[test]
    fn long_hash_rejects_other_characters() {
        assert!(!is_long_hash("abcdefgh.ijklmnop"));
        assert!(!is_long_hash("abcdefgh ijklmnop"));
        assert!(!is_long_hash("abcdefghijklmnopé"));
    }

    // short_id

    #[test]
    fn short_id_truncates() {
        assert_eq!(short_id("a1b2c3d4-e5f6"), "a1b2c3");
        assert_eq!(short_id("abc"), "abc");
    }

    #[test]
    fn short_id_counts_chars() {
        assert_eq!(short_id("ééééééééé"), "éééééé");
    }

    // capitalize

    #[test]
    fn capitalize_mixed_case() {
        assert_eq!(capitalize("maria"), "Maria");
        assert_eq!(capitalize("MARIA"), "Maria");
        assert_eq!(capitalize("mArIa"), "Maria");
    }

    #[test]
    fn capitalize_non_ascii() {
        assert_eq!(capitalize("ÉLODIE"), "Élodie");
        assert_eq!(capitalize("joão"), "João");
    }

    #[test]
    fn capitalize_empty() {
        assert_eq!(capitalize(""), "");
    }

    // email parts

    #[test]
    fn local_part_before_first_at() {
        assert_eq!(email_local_part("john.smith@example.com"), "john.smith");
        assert_eq!(email_local_part(" jane @a@b"), "jane");
        assert_eq!(email_local_part("no-at-sign"), "no-at-sign");
    }

    #[test]
    fn tokens_split_on_delimiter_runs() {
        let tokens = email_tokens("jane__doe..x-y").collect::<Vec<_>>();
        assert_eq!(tokens, vec!["jane", "doe", "x", "y"]);
    }

    #[test]
    fn tokens_only_delimiters() {
        assert_eq!(email_tokens("._-").count(), 0);
    }
}
