use crate::config::{G2pConfig, VowelSignMode};
use crate::core::rules::RuleEngine;
use crate::core::segmenter::Segmenter;
use crate::core::types::{flatten, Token};
use crate::error::Result;
use crate::lexicon::Lexicon;
use crate::persistence::write_atomic;
use rayon::prelude::*;
use std::fs;
use std::path::Path;
use unicode_normalization::UnicodeNormalization;

/// A text-to-text step run before tokenization, e.g. numeral expansion.
pub trait TextPass: Send + Sync {
    fn apply(&self, text: &str) -> String;
}

/// A maximal run of whitespace or of non-whitespace characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Run<'a> {
    Space(&'a str),
    Word(&'a str),
}

pub fn normalize_text(text: &str) -> String {
    text.nfc().collect()
}

pub fn split_runs(text: &str) -> Vec<Run<'_>> {
    let mut runs = Vec::new();
    let mut start = 0;
    let mut in_space = None;
    for (i, c) in text.char_indices() {
        let space = c.is_whitespace();
        match in_space {
            Some(prev) if prev != space => {
                runs.push(make_run(&text[start..i], prev));
                start = i;
            }
            _ => {}
        }
        in_space = Some(space);
    }
    if let Some(prev) = in_space {
        runs.push(make_run(&text[start..], prev));
    }
    runs
}

fn make_run(s: &str, space: bool) -> Run<'_> {
    if space {
        Run::Space(s)
    } else {
        Run::Word(s)
    }
}

// The converter is composed of the two transducer stages plus the lexicon.
pub struct G2pEngine {
    config: G2pConfig,
    segmenter: Segmenter,
    rules: RuleEngine,
    pub lexicon: Lexicon,
    passes: Vec<Box<dyn TextPass>>,
}

impl G2pEngine {
    pub fn new() -> Self {
        let config = G2pConfig::default();
        Self {
            segmenter: Segmenter::new(config.vowel_signs),
            rules: RuleEngine::new(config.kal_scope, config.max_passes),
            lexicon: Lexicon::new(),
            passes: Vec::new(),
            config,
        }
    }

    /// Validates `config` and loads its lexicon file, if one is named.
    pub fn with_config(config: G2pConfig) -> Result<Self> {
        config.validate()?;
        let lexicon = match &config.lexicon {
            Some(path) => Lexicon::load(path)?,
            None => Lexicon::new(),
        };
        log::debug!(
            "g2p engine: vowel signs {:?}, kal scope {:?}, {} lexicon entries",
            config.vowel_signs,
            config.kal_scope,
            lexicon.len()
        );
        Ok(Self {
            segmenter: Segmenter::new(config.vowel_signs),
            rules: RuleEngine::new(config.kal_scope, config.max_passes),
            lexicon,
            passes: Vec::new(),
            config,
        })
    }

    pub fn from_config_file(path: &Path) -> Result<Self> {
        Self::with_config(G2pConfig::from_json_file(path)?)
    }

    pub fn with_pass(mut self, pass: impl TextPass + 'static) -> Self {
        self.passes.push(Box::new(pass));
        self
    }

    pub fn config(&self) -> &G2pConfig {
        &self.config
    }

    pub fn set_vowel_sign_mode(&mut self, mode: VowelSignMode) {
        self.config.vowel_signs = mode;
        self.segmenter = Segmenter::new(mode);
    }

    pub fn segment(&self, word: &str) -> Vec<Token> {
        self.segmenter.segment(word)
    }

    /// Segmenter then rule engine, bypassing the lexicon.
    pub fn phonemes(&self, word: &str) -> Result<Vec<Token>> {
        self.rules.apply(&self.segment(word))
    }

    /// Converts one whitespace-free word. The caller is expected to have
    /// normalized it; `convert_text` does.
    pub fn convert_word(&self, word: &str) -> Result<String> {
        if word.is_empty() {
            return Ok(String::new());
        }
        if let Some(pron) = self.lexicon.lookup(word) {
            log::debug!("lexicon hit: {word} -> {pron}");
            return Ok(pron.to_string());
        }
        Ok(flatten(&self.phonemes(word)?))
    }

    /// NFC, then any registered passes in order.
    pub fn prepare(&self, text: &str) -> String {
        let mut text = normalize_text(text);
        for pass in &self.passes {
            text = pass.apply(&text);
        }
        text
    }

    pub fn convert_text(&self, text: &str) -> Result<String> {
        let text = self.prepare(text);
        let mut out = String::with_capacity(text.len() * 2);
        for run in split_runs(&text) {
            match run {
                Run::Space(s) => out.push_str(s),
                Run::Word(w) => out.push_str(&self.convert_word(w)?),
            }
        }
        Ok(out)
    }

    /// Same output as `convert_text`, with words spread over the rayon pool.
    pub fn convert_text_parallel(&self, text: &str) -> Result<String> {
        let text = self.prepare(text);
        let runs = split_runs(&text);
        let words = runs.iter().filter(|r| matches!(r, Run::Word(_))).count();
        if words < self.config.parallel_min_words {
            let mut out = String::with_capacity(text.len() * 2);
            for run in runs {
                match run {
                    Run::Space(s) => out.push_str(s),
                    Run::Word(w) => out.push_str(&self.convert_word(w)?),
                }
            }
            return Ok(out);
        }

        let pieces: Vec<String> = runs
            .par_iter()
            .map(|run| match run {
                Run::Space(s) => Ok(s.to_string()),
                Run::Word(w) => self.convert_word(w),
            })
            .collect::<Result<Vec<String>>>()?;
        Ok(pieces.concat())
    }

    pub fn convert_file(&self, input: &Path, output: &Path) -> Result<()> {
        let content = fs::read_to_string(input)?;
        let ipa = self.convert_text_parallel(&content)?;
        write_atomic(output, &ipa)?;
        log::info!("converted {} -> {}", input.display(), output.display());
        Ok(())
    }
}

impl Default for G2pEngine {
    fn default() -> Self {
        Self::new()
    }
}
