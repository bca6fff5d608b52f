//! ISO-8859-2 profile: Latin-2 characters survive, the rest falls back to ASCII.

use unidecode_charset::{Charset, Error, Unidecode};

fn latin2() -> Unidecode {
    Unidecode::with_charset("ISO-8859-2").unwrap()
}

fn is_latin2_output(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii() || ('\u{80}'..='\u{2dd}').contains(&c))
}

#[test]
fn latin2_characters_pass_through() {
    let engine = latin2();
    let pangram = "Příliš žluťoučký kůň úpěl ďábelské ódy";
    assert_eq!(engine.decode(pangram), pangram);
    assert_eq!(engine.decode("Zażółć gęślą jaźń"), "Zażółć gęślą jaźń");
    assert_eq!(engine.decode("Árvíztűrő tükörfúrógép"), "Árvíztűrő tükörfúrógép");
}

#[test]
fn c1_controls_pass_through() {
    assert_eq!(latin2().decode("a\u{85}b"), "a\u{85}b");
}

#[test]
fn nearest_latin2_form() {
    let engine = latin2();
    // U+01D8 u with diaeresis and acute keeps its diaeresis.
    assert_eq!(engine.decode("\u{1d8}"), "ü");
    // U+0101 a with macron has no Latin-2 form.
    assert_eq!(engine.decode("\u{101}"), "a");
}

#[test]
fn other_blocks_fall_back_to_ascii() {
    let engine = latin2();
    assert_eq!(engine.decode("南无阿弥陀佛"), "Nan Wu A Mi Tuo Fo");
    assert_eq!(engine.decode("Κνωσός"), "Knosos");
}

#[test]
fn output_stays_in_repertoire() {
    let engine = latin2();
    let text = "déjà vu ţară ŀ Øresund Œuvre ąę ǅ ß";
    let out = engine.decode(text);
    assert!(is_latin2_output(&out), "{out:?}");
    assert!(out.contains("déja"), "{out:?}");
    assert!(out.contains("ţară"));
}

#[test]
fn charset_aliases() {
    assert!(Unidecode::with_charset("LATIN-2").is_ok());
    assert!(Unidecode::with_charset("latin2").is_ok());
    assert_eq!(
        Unidecode::with_charset("KOI8-R").unwrap_err(),
        Error::UnsupportedCharset("KOI8-R".to_owned())
    );
    let engine = Unidecode::new(Charset::Latin2);
    let names: Vec<&str> = engine.store().source_names().collect();
    assert_eq!(names, ["latin2", "ascii"]);
}
