// Sample-sentence harness for the converter.
// Run with: cargo run --bin g2p_samples
use crossterm::style::Stylize;
use g2p_core::{G2pEngine, VowelSignMode};

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let samples = [
        "ද",
        "කම",
        "අම්මා",
        "ශ්‍රී ලංකා",
        "ප්‍රසිද්ධයි",
        "කාර්යය",
        "ව්‍යාපාරිකයා",
        "ගෙදර",
        "කුමරු කාර්යං කරලා ගියේ නාගරික මණ්ඩපය.",
        "\"ශ්‍රී ලංකා\" කියන රටේ නාමය ලොව පුරා ප්‍රසිද්ධයි.",
        "අද 2025 දින රත්මලානේ",
    ];

    let mut engine = G2pEngine::new();
    for mode in [VowelSignMode::PreBase, VowelSignMode::PostBase] {
        engine.set_vowel_sign_mode(mode);
        println!("{}", format!("== {mode:?} ==").bold());
        for text in samples.iter() {
            let ipa = engine.convert_text(text)?;
            println!("{} => {}", text, ipa.green());
        }
    }
    Ok(())
}
