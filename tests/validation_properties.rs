//! Property tests for GB language and script validation.

mod common;

use common::create_test_registry;
use gbbib::{BibError, BibliographicRecord, GbBibliographicItem};
use proptest::prelude::*;

fn gb_language() -> impl Strategy<Value = String> {
    prop_oneof![Just("en".to_string()), Just("zh".to_string())]
}

fn gb_script() -> impl Strategy<Value = String> {
    prop_oneof![Just("Latn".to_string()), Just("Hans".to_string())]
}

fn build(language: Vec<String>, script: Vec<String>) -> gbbib::Result<GbBibliographicItem> {
    let mut builder = GbBibliographicItem::builder();
    for lang in language {
        builder = builder.language(lang);
    }
    for scr in script {
        builder = builder.script(scr);
    }
    builder.build(&create_test_registry())
}

proptest! {
    #[test]
    fn valid_languages_and_scripts_construct(
        language in prop::collection::vec(gb_language(), 0..5),
        script in prop::collection::vec(gb_script(), 0..5),
    ) {
        let item = build(language.clone(), script.clone()).unwrap();
        prop_assert_eq!(item.bibitem().language(), language.as_slice());
        prop_assert_eq!(item.bibitem().script(), script.as_slice());
    }

    #[test]
    fn first_invalid_language_is_reported(
        prefix in prop::collection::vec(gb_language(), 0..4),
        bad in "[a-z]{2,3}".prop_filter("outside GB set", |l| l != "en" && l != "zh"),
        suffix in prop::collection::vec("[a-z]{2}", 0..3),
    ) {
        let mut language = prefix;
        language.push(bad.clone());
        language.extend(suffix);
        match build(language, Vec::new()) {
            Err(BibError::InvalidLanguage(value)) => prop_assert_eq!(value, bad),
            other => prop_assert!(false, "expected InvalidLanguage, got {:?}", other),
        }
    }

    #[test]
    fn invalid_script_is_rejected(
        prefix in prop::collection::vec(gb_script(), 0..4),
        bad in "[A-Z][a-z]{3}".prop_filter("outside GB set", |s| s != "Latn" && s != "Hans"),
    ) {
        let mut script = prefix;
        script.push(bad.clone());
        match build(vec!["zh".to_string()], script) {
            Err(BibError::InvalidScript(value)) => prop_assert_eq!(value, bad),
            other => prop_assert!(false, "expected InvalidScript, got {:?}", other),
        }
    }
}
