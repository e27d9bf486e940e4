use crate::util::{
    capitalize, email_local_part, email_tokens, is_long_hash, is_opaque_identifier, short_id,
};

/**
    Display name used whenever nothing presentable can be derived.
*/
pub const FALLBACK_NAME: &str = "Usuário";

/**
    Known placeholder names sent by the backend, matched
    case-insensitively, and the literal shown in their place.
*/
pub const SENTINELS: &[(&str, &str)] = &[
    ("anonymous", "Usuário Anônimo"),
    ("guest", "Usuário"),
];

/**
    Single email tokens longer than this are treated as opaque.
*/
const MAX_EMAIL_TOKEN_LEN: usize = 12;

/**
    Raw identity input, with blank values already filtered out.

    A name is only present if it is non-empty after trimming,
    an email is present whenever it is a non-empty string.
*/
#[derive(Debug, Clone, Copy)]
struct RawIdentity<'a> {
    name: Option<&'a str>,
    email: Option<&'a str>,
}

impl<'a> RawIdentity<'a> {
    fn new(name: Option<&'a str>, email: Option<&'a str>) -> Self {
        Self {
            name: name.map(str::trim).filter(|n| !n.is_empty()),
            email: email.filter(|e| !e.is_empty()),
        }
    }
}

type Rule = fn(&RawIdentity<'_>) -> Option<String>;

/**
    The fallback chain, evaluated in order - the first
    rule that produces a display name wins.
*/
const RULES: &[Rule] = &[
    from_sentinel_name,
    from_email_like_name,
    from_full_name,
    from_opaque_name,
    from_single_name,
    from_email,
];

/**
    Turns an arbitrary, possibly missing identity into a
    short display name such as `"John Doe"` or `"Maria"`.

    This never fails - when nothing presentable can be derived
    from the given name and email, a fallback name is returned,
    optionally followed by a short id (`"Usuário a1b2c3"`).
    Full email addresses and long opaque identifiers never
    make it into the returned display name.
*/
#[must_use]
pub fn normalize(name: Option<&str>, email: Option<&str>) -> String {
    let identity = RawIdentity::new(name, email);
    RULES
        .iter()
        .find_map(|rule| rule(&identity))
        .unwrap_or_else(|| FALLBACK_NAME.to_string())
}

/**
    Derives up to two avatar initials from a display name
    previously produced by [`normalize`].

    Fallback names only ever produce the initial of the fallback
    itself, so that no part of a short id is shown in an avatar.
*/
#[must_use]
pub fn initials(display_name: &str) -> String {
    let display_name = display_name.trim();
    if display_name == FALLBACK_NAME
        || display_name
            .strip_prefix(FALLBACK_NAME)
            .is_some_and(|rest| rest.starts_with(' '))
    {
        return initial_of(FALLBACK_NAME);
    }

    let mut words = display_name.split_whitespace();
    let first = words.next().map(initial_of).unwrap_or_default();
    let last = words.last().map(initial_of).unwrap_or_default();
    first + &last
}

fn initial_of(word: &str) -> String {
    word.chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}

fn with_short_id(token: &str) -> String {
    format!("{FALLBACK_NAME} {}", short_id(token))
}

fn first_and_last(first: &str, last: &str) -> String {
    format!("{} {}", capitalize(first), capitalize(last))
}

// Name rules

fn from_sentinel_name(identity: &RawIdentity<'_>) -> Option<String> {
    let name = identity.name?.to_lowercase();
    SENTINELS
        .iter()
        .find(|(sentinel, _)| *sentinel == name)
        .map(|(_, literal)| (*literal).to_string())
}

fn from_email_like_name(identity: &RawIdentity<'_>) -> Option<String> {
    // Some signup flows copy the email address into the name field
    let address = identity
        .name?
        .split_whitespace()
        .find(|token| token.contains('@'))?;
    Some(name_from_email(address.trim_matches(['<', '>'])))
}

fn from_full_name(identity: &RawIdentity<'_>) -> Option<String> {
    let mut tokens = identity.name?.split_whitespace();
    let first = tokens.next()?;
    let last = tokens.last()?;
    Some(first_and_last(first, last))
}

fn from_opaque_name(identity: &RawIdentity<'_>) -> Option<String> {
    let token = identity.name?;
    if !is_opaque_identifier(token) {
        return None;
    }
    // Only the email rule may run here, it never looks at the name again
    Some(match identity.email {
        Some(email) => name_from_email(email),
        None => with_short_id(token),
    })
}

fn from_single_name(identity: &RawIdentity<'_>) -> Option<String> {
    identity.name.map(capitalize)
}

// Email rules

fn from_email(identity: &RawIdentity<'_>) -> Option<String> {
    identity.email.map(name_from_email)
}

fn name_from_email(email: &str) -> String {
    let mut tokens = email_tokens(email_local_part(email));

    let Some(first) = tokens.next() else {
        return FALLBACK_NAME.to_string();
    };

    if let Some(last) = tokens.last() {
        first_and_last(first, last)
    } else if is_long_hash(first) || first.chars().count() > MAX_EMAIL_TOKEN_LEN {
        with_short_id(first)
    } else {
        capitalize(first)
    }
}
