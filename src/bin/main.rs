use anyhow::{bail, Context};
use crossterm::style::Stylize;
use g2p_core::core::types::flatten;
use g2p_core::{G2pConfig, G2pEngine, VowelSignMode};
use std::io::{stdin, stdout, Write};
use std::path::PathBuf;

const USAGE: &str = "usage: g2p_engine [--config FILE] [--mode prebase|postbase] [INPUT OUTPUT]";

struct Args {
    config: Option<PathBuf>,
    mode: Option<VowelSignMode>,
    files: Vec<PathBuf>,
}

fn parse_mode(s: &str) -> anyhow::Result<VowelSignMode> {
    match s {
        "prebase" => Ok(VowelSignMode::PreBase),
        "postbase" => Ok(VowelSignMode::PostBase),
        other => bail!("unknown vowel sign mode '{other}' (expected prebase or postbase)"),
    }
}

fn parse_args() -> anyhow::Result<Args> {
    let mut args = Args {
        config: None,
        mode: None,
        files: Vec::new(),
    };
    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--config" => {
                let path = it.next().context("--config needs a file")?;
                args.config = Some(PathBuf::from(path));
            }
            "--mode" => {
                let mode = it.next().context("--mode needs a value")?;
                args.mode = Some(parse_mode(&mode)?);
            }
            "-h" | "--help" => {
                println!("{USAGE}");
                std::process::exit(0);
            }
            _ => args.files.push(PathBuf::from(arg)),
        }
    }
    if !args.files.is_empty() && args.files.len() != 2 {
        bail!("{USAGE}");
    }
    Ok(args)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = parse_args()?;

    let mut engine = match &args.config {
        Some(path) => G2pEngine::from_config_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => G2pEngine::with_config(G2pConfig::default())?,
    };
    if let Some(mode) = args.mode {
        engine.set_vowel_sign_mode(mode);
    }

    if let [input, output] = args.files.as_slice() {
        engine
            .convert_file(input, output)
            .with_context(|| format!("converting {}", input.display()))?;
        println!("[✓] Converted {} → {}", input.display(), output.display());
        return Ok(());
    }

    run_interactive(&mut engine)
}

fn run_interactive(engine: &mut G2pEngine) -> anyhow::Result<()> {
    println!("Sinhala G2P. Type text to convert, 'exit' to quit.");
    println!("Commands: ':mode prebase|postbase', ':tokens <word>'");
    println!("---------------------------------------------------------------");

    loop {
        print!("\n[{:?}] > ", engine.config().vowel_signs);
        stdout().flush()?;

        let mut input = String::new();
        if stdin().read_line(&mut input)? == 0 {
            break;
        }
        let cmd = input.trim_end_matches(['\r', '\n']);

        match cmd.trim() {
            "exit" => break,
            "" => {}
            s if s.starts_with(":mode") => match parse_mode(s[5..].trim()) {
                Ok(mode) => {
                    engine.set_vowel_sign_mode(mode);
                    println!("{}", format!("vowel signs: {mode:?}").dark_grey());
                }
                Err(e) => eprintln!("{}", e.to_string().red()),
            },
            s if s.starts_with(":tokens") => {
                let word = g2p_core::normalize_text(s[7..].trim());
                let segmented = engine.segment(&word);
                println!("segmented: {}", render(&segmented).dark_grey());
                match engine.phonemes(&word) {
                    Ok(tokens) => {
                        println!("rewritten: {}", render(&tokens).cyan());
                        println!("flattened: {}", flatten(&tokens).green());
                    }
                    Err(e) => eprintln!("{}", e.to_string().red()),
                }
            }
            _ => match engine.convert_text(cmd) {
                Ok(ipa) => println!("{}", ipa.green()),
                Err(e) => eprintln!("{}", format!("[ERROR] {e}").red()),
            },
        }
    }
    Ok(())
}

fn render(tokens: &[g2p_core::Token]) -> String {
    let parts: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
    format!("[{}]", parts.join(", "))
}
