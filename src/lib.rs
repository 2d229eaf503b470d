// src/lib.rs

pub mod config;
pub mod core;
pub mod error;
pub mod lexicon;
pub mod persistence;
pub use crate::config::{G2pConfig, KalScope, VowelSignMode};
pub use crate::core::engine::{normalize_text, G2pEngine, TextPass};
pub use crate::core::types::{Phoneme, Token};
pub use crate::error::{G2pError, Result};
pub use crate::lexicon::Lexicon;
