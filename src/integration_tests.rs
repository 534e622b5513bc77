//! End-to-end tests for bundle resolution
//!
//! A small application resource table is shared by every locale: symbolic
//! keys map to integer handles, and each locale stores strings for some of
//! those handles. Bundles are built per locale, the way an application
//! would build them at startup.

use crate::{ContentType, IndexedStrings, MissingPolicy, ResBundle, ScriptTable, parse_locale};

const SIGNING_IN: u32 = 1;
const PALM_SERVICES: u32 = 2;
const OPT_OUT_FAILED: u32 = 3;
const DONE: u32 = 4;
const KEEP_BACKUP_ON: u32 = 5;
const VERIFICATION_SENT: u32 = 6;
const DONT_UPDATE: u32 = 7;
const DONT_UPDATE_EMAIL: u32 = 8;
const EMAIL_SENT: u32 = 9;
const ENGAGEMENT_POINT: u32 = 10;
const INVALID_NETWORK_NAME: u32 = 11;

/// Keys as the extraction tool derives them from the English sources.
const KEYS: &[(&str, u32)] = &[
    ("r479509761", SIGNING_IN),
    ("r429260889", PALM_SERVICES),
    ("r659292829", OPT_OUT_FAILED),
    ("r481239240", DONE),
    ("r573025222", KEEP_BACKUP_ON),
    ("r177793402", VERIFICATION_SENT),
    ("r554153194", DONT_UPDATE),
    ("r841416273", DONT_UPDATE_EMAIL),
    ("r558456571", EMAIL_SENT),
    ("r489364934", ENGAGEMENT_POINT),
    ("r183205570", INVALID_NETWORK_NAME),
];

fn translations(language: &str, region: &str) -> Vec<(u32, &'static str)> {
    match (language, region) {
        ("fr", _) => vec![
            (SIGNING_IN, "Connexion en cours..."),
            (PALM_SERVICES, "Services Palm"),
        ],
        ("de", _) => vec![(DONT_UPDATE, "Nicht aktualisieren")],
        ("es", "MX") => vec![
            (DONE, "Listo"),
            (
                OPT_OUT_FAILED,
                "Falló la opción de no participar. Intenta más tarde",
            ),
            (
                VERIFICATION_SENT,
                "Se ha enviado un mensaje de verificación a {email}.",
            ),
        ],
        ("es", _) => vec![
            (DONE, "Aceptar"),
            (
                OPT_OUT_FAILED,
                "Falló la opción de no participar. Intentarlo más tarde.",
            ),
            (
                VERIFICATION_SENT,
                "Se envió un mensaje de verificación a {email}.",
            ),
        ],
        ("zh", "HK") => vec![(KEEP_BACKUP_ON, "保持備份打開")],
        ("zh", _) => vec![(KEEP_BACKUP_ON, "保持备份打开")],
        _ => Vec::new(),
    }
}

fn resources(tag: &str) -> IndexedStrings {
    let locale = parse_locale(tag).unwrap();
    let language = locale.id.language.as_str().to_string();
    let region = locale
        .id
        .region
        .map(|region| region.as_str().to_string())
        .unwrap_or_default();

    let mut strings = IndexedStrings::new();
    for (key, id) in KEYS {
        strings.with_id(key, *id);
    }
    for (id, text) in translations(&language, &region) {
        strings.with_string(id, text);
    }
    strings
}

fn bundle(tag: &str) -> ResBundle<IndexedStrings> {
    ResBundle::for_locale(resources(tag), tag).unwrap()
}

#[test]
fn test_source_lookup() {
    let bundle = bundle("fr-FR");
    assert_eq!(bundle.get_string("Signing in..."), "Connexion en cours...");
    assert_eq!(bundle.get_string("Palm Services"), "Services Palm");
}

#[test]
fn test_regional_variants() {
    let spain = bundle("es-ES");
    let mexico = bundle("es-MX");

    assert_eq!(
        spain.get_string("Opt out failed. Try later"),
        "Falló la opción de no participar. Intentarlo más tarde."
    );
    assert_eq!(
        mexico.get_string("Opt out failed. Try later"),
        "Falló la opción de no participar. Intenta más tarde"
    );
    assert_eq!(spain.get_string("Done"), "Aceptar");
    assert_eq!(mexico.get_string("Done"), "Listo");
    assert_eq!(bundle("zh-CN").get_string("Keep Backup On"), "保持备份打开");
    assert_eq!(bundle("zh-HK").get_string("Keep Backup On"), "保持備份打開");
}

#[test]
fn test_placeholders_in_translations() {
    assert_eq!(
        bundle("es-ES").get_string("A verification email was sent to {email}."),
        "Se envió un mensaje de verificación a {email}."
    );
    assert_eq!(
        bundle("es-MX").get_string("A verification email was sent to {email}."),
        "Se ha enviado un mensaje de verificación a {email}."
    );
}

#[test]
fn test_wrong_key_falls_back_to_source() {
    let bundle = bundle("de-DE");
    assert_eq!(
        bundle.resolve(Some("Email Sent"), Some("emailsent")),
        Some("Email Sent".to_string())
    );
}

#[test]
fn test_echo_whitespace() {
    let bundle = bundle("es-ES");
    assert_eq!(bundle.get_string("Done"), "Aceptar");
    assert_eq!(bundle.get_string("   Done"), "   Aceptar");
    assert_eq!(bundle.get_string("Done   "), "Aceptar   ");
    assert_eq!(bundle.get_string("  Done   "), "  Aceptar   ");
    assert_eq!(
        bundle.get_string(" \t\n Done  \t\t\n "),
        " \t\n Aceptar  \t\t\n "
    );
}

#[test]
fn test_locale_is_kept() {
    assert_eq!(bundle("de-DE").locale().to_string(), "de-DE");
    assert_eq!(bundle("nl-NL").locale().to_string(), "nl-NL");
    assert_eq!(bundle("en_US").locale().to_string(), "en-US");
}

#[test]
fn test_pseudo_locale() {
    assert_eq!(
        bundle("zxx").get_string("Invalid Network Name"),
        "Ïñvàľíð Ňëţŵõŕķ Ňàmë9876543210"
    );
    assert_eq!(
        bundle("zxx-Cyrl-RU").get_string("Invalid Network Name"),
        "Инвалид Нэтwорк Намэ9876543210"
    );
}

#[test]
fn test_pseudo_locale_by_key() {
    let mut strings = resources("zxx");
    strings.with_string(DONE, "Done");
    let bundle = ResBundle::for_locale(strings, "zxx").unwrap();
    assert_eq!(bundle.resolve(None, Some("r481239240")), Some("Ðõñë10".to_string()));
    assert_eq!(bundle.resolve(None, Some("r558456571")), None);
}

#[test]
fn test_direct_pseudo_localization() {
    let mut bundle = bundle("en-US");
    assert_eq!(
        bundle.pseudo_localize("actual state for Wifi: "),
        "àçţüàľ šţàţë fõŕ Ŵífí: 6543210"
    );

    bundle.set_content_type(ContentType::Java);
    assert_eq!(
        bundle.pseudo_localize("actual state for Wifi: {0}"),
        "àçţüàľ šţàţë fõŕ Ŵífí: {0}76543210"
    );
    assert_eq!(
        bundle.pseudo_localize("actual state for Wifi: \u{a0}"),
        "àçţüàľ šţàţë fõŕ Ŵífí: \u{a0}76543210"
    );
    assert_eq!(
        bundle.pseudo_localize("actual <span class=\"foo\">state</span> for Wifi: {foobar}"),
        "àçţüàľ <šþàñ çľàšš=\"fõõ\">šţàţë</šþàñ> fõŕ Ŵífí: {foobar}09876543210"
    );
    assert_eq!(bundle.pseudo_localize("actual %2$s "), "àçţüàľ %2$s 543210");
}

#[test]
fn test_pseudo_missing_policy() {
    let mut bundle = bundle("de-DE");
    bundle.set_missing(MissingPolicy::Pseudo);
    assert_eq!(bundle.get_string("Don't Update"), "Nicht aktualisieren");
    assert_eq!(
        bundle.get_string("Don't Update an email"),
        "Ðõñ'ţ Úþðàţë àñ ëmàíľ6543210"
    );

    bundle.set_lengthen(false);
    assert_eq!(
        bundle.get_string("Don't Update an email"),
        "Ðõñ'ţ Úþðàţë àñ ëmàíľ"
    );
}

#[test]
fn test_empty_missing_policy() {
    let mut bundle = bundle("de-DE");
    bundle.set_missing(MissingPolicy::Empty);
    assert_eq!(bundle.get_string("Don't Update an email"), "");
}

#[test]
fn test_placeholder_missing_policy() {
    let mut bundle = bundle("de-DE");
    bundle.set_missing(MissingPolicy::Placeholder);
    assert_eq!(bundle.get_string("Don't Update an email"), "????");
    assert_eq!(bundle.get_string("Don't Update"), "Nicht aktualisieren");
}

#[test]
fn test_pseudo_fallback_follows_script() {
    let cases = [
        ("en-GB", ScriptTable::LatinExtended, "Ëñğàğëmëñţ þõíñţ!76543210"),
        ("uk-UA", ScriptTable::Cyrillic, "Энгагэмэнт поинт!76543210"),
        (
            "he-IL",
            ScriptTable::Hebrew,
            "\u{5b6}\u{5e0}\u{5d2}\u{5b7}\u{5d2}\u{5b6}\u{5de}\u{5b6}\u{5e0}\u{5d8} \
             \u{5e4}\u{5b9}\u{5b4}\u{5e0}\u{5d8}!76543210",
        ),
    ];
    for (tag, script, expected) in cases {
        let mut bundle = bundle(tag);
        bundle.set_missing(MissingPolicy::Pseudo);
        assert_eq!(bundle.script(), script, "{}", tag);
        assert_eq!(bundle.get_string("Engagement point!"), expected, "{}", tag);
    }

    let mut bundle = bundle("zh-HK");
    bundle
        .with_missing(MissingPolicy::Pseudo)
        .with_lengthen(false);
    assert_eq!(bundle.script(), ScriptTable::Han);
    assert_eq!(
        bundle.get_string("Engagement point!"),
        "俄尼个阿个俄们俄尼推 琶夥意尼推!"
    );
}

#[test]
fn test_pseudo_fallback_echoes_whitespace() {
    let mut bundle = bundle("en-GB");
    bundle.set_missing(MissingPolicy::Pseudo);
    assert_eq!(
        bundle.get_string("    Engagement point!\n\n"),
        "    Ëñğàğëmëñţ þõíñţ!76543210\n\n"
    );
}

#[test]
fn test_html_bundle_escapes_fallbacks() {
    let mut bundle = bundle("de-DE");
    bundle.set_content_type(ContentType::Html);
    assert_eq!(bundle.get_string("Save & <b>exit</b>"), "Save &amp; &lt;b&gt;exit&lt;/b&gt;");

    bundle.set_missing(MissingPolicy::Pseudo);
    bundle.set_lengthen(false);
    assert_eq!(bundle.get_string("<b>Done</b>"), "&lt;b&gt;Ðõñë&lt;/b&gt;");
}

#[test]
fn test_contains() {
    let bundle = bundle("es-ES");
    assert!(bundle.contains_source("Done"));
    assert!(bundle.contains_source("Email Sent"));
    assert!(!bundle.contains_source("Not a known string"));
    assert!(bundle.contains_key("r481239240"));
    assert_eq!(bundle.keys().len(), KEYS.len());
}
