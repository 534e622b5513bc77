//! Script-specific character substitution tables for pseudo-localization
//!
//! Each table maps ASCII letters to a rough look-alike or transliteration in a
//! target writing system. Letters a table does not cover, digits and
//! punctuation pass through untouched. The table used by a bundle is chosen
//! once, from the script of its target locale.

use std::collections::HashMap;
use std::sync::OnceLock;

use icu_locale::{Locale, LocaleExpander};

/// The closed set of built-in substitution tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScriptTable {
    /// Cyrillic (`Cyrl`)
    Cyrillic,
    /// Han characters (`Hans`, also used for `Hant`)
    Han,
    /// Hebrew (`Hebr`)
    Hebrew,
    /// Accented Latin letters; the default for every other script
    #[default]
    LatinExtended,
}

impl ScriptTable {
    /// Select the table for an ISO 15924 script code.
    ///
    /// Matching is case-insensitive. Unknown codes fall back to
    /// [`ScriptTable::LatinExtended`].
    pub fn for_script_code(code: &str) -> Self {
        match code.to_ascii_lowercase().as_str() {
            "cyrl" => ScriptTable::Cyrillic,
            "hans" | "hant" => ScriptTable::Han,
            "hebr" => ScriptTable::Hebrew,
            _ => ScriptTable::LatinExtended,
        }
    }

    /// The ISO 15924 code this table stands for.
    pub fn script_code(self) -> &'static str {
        match self {
            ScriptTable::Cyrillic => "Cyrl",
            ScriptTable::Han => "Hans",
            ScriptTable::Hebrew => "Hebr",
            ScriptTable::LatinExtended => "Latn",
        }
    }

    /// The character map for this script, built on first use and shared
    /// for the rest of the process.
    pub fn char_map(self) -> &'static CharMap {
        static CYRILLIC_MAP: OnceLock<CharMap> = OnceLock::new();
        static HAN_MAP: OnceLock<CharMap> = OnceLock::new();
        static HEBREW_MAP: OnceLock<CharMap> = OnceLock::new();
        static LATIN_MAP: OnceLock<CharMap> = OnceLock::new();

        let (cell, entries) = match self {
            ScriptTable::Cyrillic => (&CYRILLIC_MAP, CYRILLIC),
            ScriptTable::Han => (&HAN_MAP, HAN),
            ScriptTable::Hebrew => (&HEBREW_MAP, HEBREW),
            ScriptTable::LatinExtended => (&LATIN_MAP, LATIN),
        };
        cell.get_or_init(|| CharMap::new(self, entries))
    }
}

/// Convenience for [`ScriptTable::for_script_code`] followed by
/// [`ScriptTable::char_map`].
pub fn table_for_script(code: &str) -> &'static CharMap {
    ScriptTable::for_script_code(code).char_map()
}

/// An immutable single character to replacement string mapping.
///
/// Replacements may be longer than one character (`q` becomes `ку` in the
/// Cyrillic table).
#[derive(Debug)]
pub struct CharMap {
    script: ScriptTable,
    map: HashMap<char, &'static str>,
}

impl CharMap {
    fn new(script: ScriptTable, entries: &[(char, &'static str)]) -> Self {
        CharMap {
            script,
            map: entries.iter().copied().collect(),
        }
    }

    pub fn script(&self) -> ScriptTable {
        self.script
    }

    /// Replacement for `c`, if the table covers it.
    pub fn get(&self, c: char) -> Option<&'static str> {
        self.map.get(&c).copied()
    }

    /// Append the replacement for `c` to `out`, or `c` itself when the table
    /// does not cover it.
    pub fn push_substituted(&self, c: char, out: &mut String) {
        match self.get(c) {
            Some(replacement) => out.push_str(replacement),
            None => out.push(c),
        }
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Locale to script lookup.
///
/// This is the seam to whatever locale-data service the host uses. The
/// bundle asks it once, at construction, which table to use.
pub trait ScriptLookup {
    fn script_for(&self, locale: &Locale) -> ScriptTable;
}

/// [`ScriptLookup`] backed by ICU likely-subtags data.
///
/// An explicit script subtag (`zxx-Cyrl-RU`) wins. Otherwise the locale is
/// maximized (`uk-UA` becomes `uk-Cyrl-UA`) and the inferred script is used.
/// Locales with no likely-subtags data get the Latin table.
#[derive(Debug)]
pub struct IcuScriptLookup {
    expander: LocaleExpander,
}

impl IcuScriptLookup {
    pub fn new() -> Self {
        IcuScriptLookup {
            expander: LocaleExpander::new_common(),
        }
    }
}

impl Default for IcuScriptLookup {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptLookup for IcuScriptLookup {
    fn script_for(&self, locale: &Locale) -> ScriptTable {
        if let Some(script) = locale.id.script {
            return ScriptTable::for_script_code(script.as_str());
        }

        let mut id = locale.id.clone();
        self.expander.maximize(&mut id);
        match id.script {
            Some(script) => ScriptTable::for_script_code(script.as_str()),
            None => ScriptTable::LatinExtended,
        }
    }
}

#[rustfmt::skip]
const CYRILLIC: &[(char, &str)] = &[
    ('a', "а"), ('b', "б"), ('c', "ч"), ('d', "д"), ('e', "э"),
    ('f', "ф"), ('g', "г"), ('h', "х"), ('i', "и"), ('j', "ж"),
    ('k', "к"), ('l', "л"), ('m', "м"), ('n', "н"), ('o', "о"),
    ('p', "п"), ('q', "ку"), ('r', "р"), ('s', "с"), ('t', "т"),
    ('u', "у"), ('v', "в"), ('x', "кс"), ('y', "я"), ('z', "з"),
    ('A', "А"), ('B', "Б"), ('C', "Ч"), ('D', "Д"), ('E', "Э"),
    ('F', "Ф"), ('G', "Г"), ('H', "Х"), ('I', "И"), ('J', "Ж"),
    ('K', "К"), ('L', "Л"), ('M', "М"), ('N', "Н"), ('O', "О"),
    ('P', "П"), ('Q', "КУ"), ('R', "Р"), ('S', "С"), ('T', "Т"),
    ('U', "У"), ('V', "В"), ('X', "КС"), ('Y', "Я"), ('Z', "З"),
];

#[rustfmt::skip]
const HAN: &[(char, &str)] = &[
    ('a', "阿"), ('b', "不"), ('c', "可"), ('d', "的"), ('e', "俄"),
    ('f', "凡"), ('g', "个"), ('h', "和"), ('i', "意"), ('j', "中"),
    ('k', "可"), ('l', "了"), ('m', "们"), ('n', "尼"), ('o', "夥"),
    ('p', "琶"), ('q', "氣"), ('r', "熱"), ('s', "思"), ('t', "推"),
    ('u', "思"), ('v', "於"), ('x', "相"), ('y', "謝"), ('z', "子"),
    ('A', "阿"), ('B', "不"), ('C', "可"), ('D', "的"), ('E', "俄"),
    ('F', "凡"), ('G', "个"), ('H', "和"), ('I', "意"), ('J', "中"),
    ('K', "可"), ('L', "了"), ('M', "们"), ('N', "尼"), ('O', "夥"),
    ('P', "琶"), ('Q', "氣"), ('R', "熱"), ('S', "思"), ('T', "推"),
    ('U', "思"), ('V', "於"), ('X', "相"), ('Y', "謝"), ('Z', "子"),
];

#[rustfmt::skip]
const HEBREW: &[(char, &str)] = &[
    ('a', "\u{5b7}"), ('b', "\u{5d1}\u{5bc}"), ('c', "\u{5e7}"),
    ('d', "\u{5d3}"), ('e', "\u{5b6}"), ('f', "\u{5e4}"),
    ('g', "\u{5d2}"), ('h', "\u{5d4}"), ('i', "\u{5b4}"),
    ('j', "\u{5d2}\u{5f3}"), ('k', "\u{5db}"), ('l', "\u{5dc}"),
    ('m', "\u{5de}"), ('n', "\u{5e0}"), ('o', "\u{5b9}"),
    ('p', "\u{5e4}"), ('q', "\u{5e7}"), ('r', "\u{5e8}"),
    ('s', "\u{5e1}"), ('t', "\u{5d8}"), ('u', "\u{5bb}"),
    ('v', "\u{5d1}"), ('w', "\u{5d5}"), ('x', "\u{5e9}\u{5c2}\u{5e7}"),
    ('y', "\u{5d9}"), ('z', "\u{5d6}"), ('A', "\u{5b7}"),
    ('B', "\u{5d1}\u{5bc}"), ('C', "\u{5e7}"), ('D', "\u{5d3}\u{5bc}"),
    ('E', "\u{5b6}"), ('F', "\u{5e4}"), ('G', "\u{5d2}"),
    ('H', "\u{5d4}"), ('I', "\u{5b4}"), ('J', "\u{5d2}\u{5f3}"),
    ('K', "\u{5db}"), ('L', "\u{5dc}"), ('M', "\u{5de}"),
    ('N', "\u{5e0}"), ('O', "\u{5b9}"), ('P', "\u{5e4}"),
    ('Q', "\u{5e7}"), ('R', "\u{5e8}"), ('S', "\u{5e1}"),
    ('T', "\u{5d8}"), ('U', "\u{5bb}"), ('V', "\u{5d1}"),
    ('W', "\u{5d5}"), ('X', "\u{5e9}\u{5c2}\u{5e7}"), ('Y', "\u{5d9}"),
    ('Z', "\u{5d6}"),
];

#[rustfmt::skip]
const LATIN: &[(char, &str)] = &[
    ('a', "à"), ('c', "ç"), ('d', "ð"), ('e', "ë"), ('g', "ğ"),
    ('h', "ĥ"), ('i', "í"), ('j', "ĵ"), ('k', "ķ"), ('l', "ľ"),
    ('n', "ñ"), ('o', "õ"), ('p', "þ"), ('r', "ŕ"), ('s', "š"),
    ('t', "ţ"), ('u', "ü"), ('w', "ŵ"), ('y', "ÿ"), ('z', "ž"),
    ('A', "Ã"), ('B', "ß"), ('C', "Ç"), ('D', "Ð"), ('E', "Ë"),
    ('G', "Ĝ"), ('H', "Ħ"), ('I', "Ï"), ('J', "Ĵ"), ('K', "ĸ"),
    ('L', "Ľ"), ('N', "Ň"), ('O', "Ø"), ('R', "Ŗ"), ('S', "Š"),
    ('T', "Ť"), ('U', "Ú"), ('W', "Ŵ"), ('Y', "Ŷ"), ('Z', "Ż"),
];
