/// What a run of source text is, as far as pseudo-localization cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    /// Translatable text; characters are substituted
    Text,
    /// `<...>` markup tag
    Tag,
    /// `&name;` entity reference
    Entity,
    /// `{name}` replacement parameter
    Placeholder,
    /// Backslash escape such as `\n` or `\u00a0`
    Escape,
    /// printf-style format specifier such as `%2$s`
    FormatSpecifier,
}

/// A slice of the scanned input together with its classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'a> {
    pub kind: SpanKind,
    pub text: &'a str,
}

impl<'a> Span<'a> {
    pub fn new(kind: SpanKind, text: &'a str) -> Self {
        Span { kind, text }
    }

    pub fn text(text: &'a str) -> Self {
        Span::new(SpanKind::Text, text)
    }

    /// Structural spans are copied through verbatim.
    pub fn is_protected(&self) -> bool {
        self.kind != SpanKind::Text
    }
}

impl std::fmt::Display for Span<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Spans in input order. Concatenating them reproduces the input exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpanList<'a>(pub Vec<Span<'a>>);

impl<'a> SpanList<'a> {
    pub fn new() -> Self {
        SpanList(Vec::new())
    }

    pub fn push(&mut self, span: Span<'a>) {
        self.0.push(span);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the structural spans only.
    pub fn protected(&self) -> impl Iterator<Item = &Span<'a>> {
        self.0.iter().filter(|span| span.is_protected())
    }
}

impl std::fmt::Display for SpanList<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for span in &self.0 {
            write!(f, "{}", span)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for SpanList<'a> {
    type Item = Span<'a>;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'s, 'a> IntoIterator for &'s SpanList<'a> {
    type Item = &'s Span<'a>;
    type IntoIter = std::slice::Iter<'s, Span<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
