//! Stable resource keys derived from source strings
//!
//! String extraction tooling stores each translatable string under a key
//! computed from its source text. Looking a string up by its source means
//! computing exactly the same key, so the cleaning rules and the hash below
//! must not drift: changing either orphans every translation already in a
//! resource store.

/// Multiplier applied after each code unit is added (largest 16-bit prime).
const HASH_MULTIPLIER: u64 = 65521;

/// Modulus keeping the running hash inside 30 bits (largest 30-bit prime).
const HASH_MODULUS: u64 = 1_073_741_789;

/// Prefix that makes every key a valid identifier in generated code.
pub const KEY_PREFIX: char = 'r';

/// Derive the resource key for a source string.
///
/// The source is cleaned first (see [`clean_source`]) so that insignificant
/// whitespace and source-code escapes do not change the key.
///
/// # Example
///
/// ```
/// use resbundle::key::derive_key;
///
/// assert_eq!(derive_key("Preferences in your profile"), "r372802078");
/// assert_eq!(derive_key("  All   settings\n"), derive_key("All settings"));
/// ```
pub fn derive_key(source: &str) -> String {
    hash_key(&clean_source(source))
}

/// Hash already-cleaned text into an `r<digits>` key.
///
/// The hash runs over UTF-16 code units so that keys agree with tools that
/// index strings that way.
pub fn hash_key(text: &str) -> String {
    let hash = text.encode_utf16().fold(0u64, |hash, unit| {
        ((hash + u64::from(unit)) * HASH_MULTIPLIER) % HASH_MODULUS
    });
    format!("{}{}", KEY_PREFIX, hash)
}

fn is_key_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0C')
}

/// Normalize a source string the way the extraction tool does before hashing.
///
/// - `\\`, `\'` and `\"` are unescaped
/// - the escapes `\b`, `\t`, `\n`, `\f` and `\r` count as whitespace
/// - every run of whitespace becomes a single space
/// - leading and trailing whitespace is dropped
///
/// Only ASCII whitespace is collapsed; a non-breaking space is content.
pub fn clean_source(source: &str) -> String {
    let mut cleaned = String::with_capacity(source.len());
    let mut pending_space = false;
    let mut chars = source.chars().peekable();

    while let Some(c) = chars.next() {
        let resolved = if c == '\\' {
            match chars.peek().copied() {
                Some(next @ ('\\' | '\'' | '"')) => {
                    chars.next();
                    Some(next)
                }
                Some('b' | 't' | 'n' | 'f' | 'r') => {
                    chars.next();
                    None
                }
                _ => Some('\\'),
            }
        } else if is_key_whitespace(c) {
            None
        } else {
            Some(c)
        };

        match resolved {
            Some(c) => {
                if pending_space && !cleaned.is_empty() {
                    cleaned.push(' ');
                }
                pending_space = false;
                cleaned.push(c);
            }
            None => pending_space = true,
        }
    }
    cleaned
}
