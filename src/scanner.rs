use std::sync::OnceLock;

use regex::Regex;

use crate::options::ContentType;
use crate::span::{Span, SpanKind, SpanList};

/// printf-style specifier: `%`, optional `n$` position, one flag, width,
/// `.precision`, then a conversion letter, `%` or `n`.
fn format_specifier_regex() -> &'static Regex {
    static FORMAT_SPECIFIER: OnceLock<Regex> = OnceLock::new();
    FORMAT_SPECIFIER.get_or_init(|| {
        Regex::new(r"^%([0-9]+\$)?[-#+ 0,(]?([0-9]+)?(\.[0-9]+)?[bBhHsScCdoxXeEfgGaAtT%n]")
            .unwrap()
    })
}

/// A single-pass scanner that splits a string into translatable text and
/// structure that must survive pseudo-localization untouched.
///
/// Which structures are recognized depends on the content type:
///
/// - always: `{placeholder}`
/// - HTML and XML: `<tag ...>` and `&entity;` (an entity may also end at a space)
/// - platform format strings: backslash escapes (`\uXXXX` as a unit) and
///   printf-style format specifiers
///
/// At each position the content-type rules are tried first and the
/// placeholder rule last. Anything left unterminated runs to the end of the
/// input, so scanning never fails and never backtracks.
pub struct Scanner<'a> {
    input: &'a str,
    /// Byte offset of the next unread character
    position: usize,
    content_type: ContentType,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str, content_type: ContentType) -> Self {
        Scanner {
            input,
            position: 0,
            content_type,
        }
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn rest(&self) -> &'a str {
        &self.input[self.position..]
    }

    /// Consumes the current character and advances the position.
    fn consume(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.position += c.len_utf8();
        Some(c)
    }

    /// Consumes characters up to and including the first one accepted by
    /// `is_end`, or to the end of the input. Returns everything from `start`.
    fn consume_through(&mut self, start: usize, is_end: impl Fn(char) -> bool) -> &'a str {
        while let Some(c) = self.consume() {
            if is_end(c) {
                break;
            }
        }
        &self.input[start..self.position]
    }

    fn scan_tag(&mut self) -> Option<Span<'a>> {
        if self.peek() != Some('<') {
            return None;
        }
        let start = self.position;
        self.consume();
        let text = self.consume_through(start, |c| c == '>');
        Some(Span::new(SpanKind::Tag, text))
    }

    fn scan_entity(&mut self) -> Option<Span<'a>> {
        if self.peek() != Some('&') {
            return None;
        }
        let start = self.position;
        self.consume();
        let text = self.consume_through(start, |c| c == ';' || c == ' ');
        Some(Span::new(SpanKind::Entity, text))
    }

    /// `\uXXXX` is taken whole when four characters follow the `u`; any other
    /// backslash takes exactly one following character with it.
    fn scan_escape(&mut self) -> Option<Span<'a>> {
        if self.peek() != Some('\\') {
            return None;
        }
        let start = self.position;
        self.consume();

        let rest = self.rest();
        let length = if rest.starts_with('u') && rest.chars().take(5).count() == 5 {
            5
        } else {
            1
        };
        for _ in 0..length {
            self.consume();
        }
        Some(Span::new(SpanKind::Escape, &self.input[start..self.position]))
    }

    /// A `%` that does not start a valid specifier is left as text.
    fn scan_format_specifier(&mut self) -> Option<Span<'a>> {
        if self.peek() != Some('%') {
            return None;
        }
        let found = format_specifier_regex().find(self.rest())?;
        let start = self.position;
        self.position += found.end();
        Some(Span::new(
            SpanKind::FormatSpecifier,
            &self.input[start..self.position],
        ))
    }

    fn scan_placeholder(&mut self) -> Option<Span<'a>> {
        if self.peek() != Some('{') {
            return None;
        }
        let start = self.position;
        self.consume();
        let text = self.consume_through(start, |c| c == '}');
        Some(Span::new(SpanKind::Placeholder, text))
    }

    fn scan_structure(&mut self) -> Option<Span<'a>> {
        match self.content_type {
            ContentType::Html | ContentType::Xml => {
                if let Some(span) = self.scan_tag() {
                    return Some(span);
                }
                if let Some(span) = self.scan_entity() {
                    return Some(span);
                }
            }
            ContentType::Java => {
                if let Some(span) = self.scan_escape() {
                    return Some(span);
                }
                if let Some(span) = self.scan_format_specifier() {
                    return Some(span);
                }
            }
            ContentType::Raw => {}
        }
        self.scan_placeholder()
    }

    /// Scan the whole input. Adjacent text characters are merged into one
    /// [`SpanKind::Text`] span.
    pub fn scan(&mut self) -> SpanList<'a> {
        let mut spans = SpanList::new();
        let mut text_start = self.position;

        while self.position < self.input.len() {
            let here = self.position;
            match self.scan_structure() {
                Some(span) => {
                    if here > text_start {
                        spans.push(Span::text(&self.input[text_start..here]));
                    }
                    spans.push(span);
                    text_start = self.position;
                }
                None => {
                    self.consume();
                }
            }
        }

        if self.position > text_start {
            spans.push(Span::text(&self.input[text_start..self.position]));
        }
        spans
    }
}

/// Scan `input` under the rules for `content_type`.
pub fn scan(input: &str, content_type: ContentType) -> SpanList<'_> {
    Scanner::new(input, content_type).scan()
}
