//! End-to-end conversions through the public engine API.

use g2p_core::core::engine::split_runs;
use g2p_core::{G2pConfig, G2pEngine, KalScope, Lexicon, VowelSignMode};

fn convert(text: &str) -> String {
    G2pEngine::new().convert_text(text).unwrap()
}

#[test]
fn rakaransaya_and_anusvara() {
    assert_eq!(convert("ශ\u{0dca}\u{200d}රී ලංකා"), "ʃriː laŋkaː");
}

#[test]
fn virama_clusters() {
    assert_eq!(convert("අම්මා"), "ammaː");
    assert_eq!(convert("සමස්ත"), "samast̪ə");
}

#[test]
fn initial_schwa_exceptions() {
    assert_eq!(convert("ද"), "d̪ə");
    assert_eq!(convert("කරලා"), "kərəlaː");
    assert_eq!(convert("ස්වර"), "svərə");
}

#[test]
fn k_schwa_r_u() {
    assert_eq!(convert("කරුණා"), "karunaː");
}

#[test]
fn word_final_rules() {
    assert_eq!(convert("පාසල්"), "paːsal");
    assert_eq!(convert("කතර්"), "kat̪ər");
    assert_eq!(convert("ළමයි"), "ɭamaji");
}

#[test]
fn kal_scope_is_configurable() {
    assert_eq!(convert("කලා"), "kəlaː");
    let config = G2pConfig {
        kal_scope: KalScope::Pattern,
        ..G2pConfig::default()
    };
    let engine = G2pEngine::with_config(config).unwrap();
    assert_eq!(engine.convert_text("කලා").unwrap(), "kalaː");
}

#[test]
fn literals_do_not_end_the_word() {
    assert_eq!(convert("ක."), "ka.");
    assert_eq!(convert("100ක"), "100ka");
    assert_eq!(convert("කමත්."), "kamət̪.");
    assert_eq!(convert("කමත්"), "kamat̪");
    assert_eq!(convert("කම-කම"), "kamə-kəmə");
}

#[test]
fn rakaransaya_without_a_sign_has_no_vowel() {
    let engine = G2pEngine::new();
    let tokens: Vec<String> = engine
        .segment("ප\u{0dca}\u{200d}රම")
        .iter()
        .map(|t| t.to_string())
        .collect();
    assert_eq!(tokens, ["p", "r", "m", "ə"]);
    assert_eq!(engine.convert_text("ප\u{0dca}\u{200d}රම").unwrap(), "prma");
}

#[test]
fn json_lexicon_named_in_config() {
    let dir = tempfile::tempdir().unwrap();
    let lexicon_path = dir.path().join("lexicon.json");
    std::fs::write(&lexicon_path, r#"{"කලා": "kalaː"}"#).unwrap();
    let config = G2pConfig {
        lexicon: Some(lexicon_path),
        ..G2pConfig::default()
    };
    let engine = G2pEngine::with_config(config).unwrap();
    assert_eq!(engine.lexicon.len(), 1);
    assert_eq!(engine.convert_text("කලා කලා.").unwrap(), "kalaː kəlaː.");
}

#[test]
fn vowel_sign_modes() {
    let mut engine = G2pEngine::new();
    assert_eq!(engine.convert_text("\u{0dd9}කම").unwrap(), "kemə");
    engine.set_vowel_sign_mode(VowelSignMode::PostBase);
    assert_eq!(engine.convert_text("ක\u{0dd9}ම").unwrap(), "kemə");
}

#[test]
fn literals_keep_their_place() {
    assert_eq!(convert("අද, (කම) abc 42"), "ad̪ə, (kamə) abc 42");
}

#[test]
fn whitespace_runs_survive() {
    let text = "අද \t කම\n\n\r\nපාසල්  ";
    let out = convert(text);
    let spaces = |s: &str| -> Vec<String> {
        split_runs(s)
            .into_iter()
            .filter_map(|r| match r {
                g2p_core::core::engine::Run::Space(s) => Some(s.to_string()),
                g2p_core::core::engine::Run::Word(_) => None,
            })
            .collect()
    };
    assert_eq!(spaces(&out), spaces(text));
}

#[test]
fn conversion_is_deterministic() {
    let text = "අපරාධ සහ මත්ද්‍රව්‍ය නිවාරණ මෙහෙයුම් යටතේ, ඊයේ (17) දිනයේදී";
    let engine = G2pEngine::new();
    let first = engine.convert_text(text).unwrap();
    for _ in 0..5 {
        assert_eq!(engine.convert_text(text).unwrap(), first);
    }
    assert_eq!(engine.convert_text_parallel(text).unwrap(), first);
}

#[test]
fn config_file_with_lexicon() {
    let dir = tempfile::tempdir().unwrap();
    let lexicon_path = dir.path().join("lexicon.bin");
    let config_path = dir.path().join("g2p.json");

    let mut lexicon = Lexicon::new();
    lexicon.insert("කලා", "kalaː");
    lexicon.save(&lexicon_path).unwrap();

    let config = G2pConfig {
        lexicon: Some(lexicon_path),
        vowel_signs: VowelSignMode::PostBase,
        ..G2pConfig::default()
    };
    std::fs::write(&config_path, serde_json::to_string(&config).unwrap()).unwrap();

    let engine = G2pEngine::from_config_file(&config_path).unwrap();
    assert_eq!(engine.config().vowel_signs, VowelSignMode::PostBase);
    assert_eq!(engine.convert_text("කලා කම").unwrap(), "kalaː kamə");
}

#[test]
fn missing_lexicon_file_is_an_error() {
    let config = G2pConfig {
        lexicon: Some("/nonexistent/lexicon.bin".into()),
        ..G2pConfig::default()
    };
    assert!(G2pEngine::with_config(config).is_err());
}
