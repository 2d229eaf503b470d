// File: src/config.rs
use crate::error::{G2pError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_MAX_PASSES: usize = 64;
const DEFAULT_PARALLEL_MIN_WORDS: usize = 256;

/// How dependent vowel signs find their consonant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VowelSignMode {
    /// Kombuva-based signs are buffered and attach to the following consonant.
    #[default]
    PreBase,
    /// Every sign attaches to the consonant before it.
    PostBase,
}

/// Which "kal" triggers rule 8 reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KalScope {
    /// Only `k {a,aː} l {aː,eː,oː} j`, anywhere in the word.
    Pattern,
    /// Only a word-initial `k a l`.
    Prefix,
    #[default]
    Both,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct G2pConfig {
    pub vowel_signs: VowelSignMode,
    pub kal_scope: KalScope,
    /// Hard cap on passes over the iterated rule group.
    pub max_passes: usize,
    pub lexicon: Option<PathBuf>,
    /// Below this many words `convert_text_parallel` stays on the calling thread.
    pub parallel_min_words: usize,
}

impl Default for G2pConfig {
    fn default() -> Self {
        Self {
            vowel_signs: VowelSignMode::default(),
            kal_scope: KalScope::default(),
            max_passes: DEFAULT_MAX_PASSES,
            lexicon: None,
            parallel_min_words: DEFAULT_PARALLEL_MIN_WORDS,
        }
    }
}

impl G2pConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_passes == 0 {
            return Err(G2pError::InvalidConfig(
                "max_passes must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
