//! Pseudo-localization
//!
//! Pseudo-localization makes untranslated strings look foreign while staying
//! readable, so that hard-coded strings, encoding problems and truncation can
//! be spotted in a UI before real translations exist. Letters are swapped for
//! look-alikes from the target script and, optionally, a run of digits is
//! appended to simulate the growth typical of translated text:
//!
//! ```text
//! "This is a string"  ->  "Ťĥíš íš à šţŕíñğ76543210"
//! ```
//!
//! The padding always ends in `0`; if the `0` is not visible in the UI the
//! string was truncated, and the last visible digit says by how much.

use crate::options::ContentType;
use crate::scanner::Scanner;
use crate::script::CharMap;

/// Pseudo-localize `source`.
///
/// Structural spans (see [`Scanner`]) are copied through verbatim. Every
/// character of a text span is replaced through `table`, or kept when the
/// table has no entry for it. With `lengthen`, padding digits are appended
/// as described in [`padding_length`].
pub fn pseudo_localize(
    source: &str,
    content_type: ContentType,
    table: &CharMap,
    lengthen: bool,
) -> String {
    let mut result = String::with_capacity(source.len() * 2);
    for span in Scanner::new(source, content_type).scan() {
        if span.is_protected() {
            result.push_str(span.text);
        } else {
            for c in span.text.chars() {
                table.push_substituted(c, &mut result);
            }
        }
    }

    if lengthen {
        let length = padding_length(result.encode_utf16().count());
        push_padding(&mut result, length);
    }
    result
}

/// Number of padding digits for a transformed string `length` UTF-16 code
/// units long: half of it up to 20, a third up to 40, a fifth beyond that.
/// Division truncates.
pub fn padding_length(length: usize) -> usize {
    if length <= 20 {
        length / 2
    } else if length <= 40 {
        length / 3
    } else {
        length / 5
    }
}

/// Append `count` digits counting down to `0`, wrapping modulo 10.
fn push_padding(out: &mut String, count: usize) {
    for i in (0..count).rev() {
        out.push(char::from(b'0' + (i % 10) as u8));
    }
}
