pub mod engine;
pub mod rules;
pub mod segmenter;
pub mod tables;
pub mod types;
