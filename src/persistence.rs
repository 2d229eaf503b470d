// File: src/persistence.rs
use crate::error::Result;
use crate::lexicon::Lexicon;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// On-disk layout of a lexicon file.
#[derive(Clone, serde::Serialize, serde::Deserialize)]
struct SerializableLexicon {
    lexicon: Lexicon,
}

fn temp_beside(path: &Path) -> Result<NamedTempFile> {
    let parent_dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;
    Ok(NamedTempFile::new_in(parent_dir)?)
}

pub fn save_to_disk(lexicon: &Lexicon, path: &Path) -> Result<()> {
    let state = SerializableLexicon {
        lexicon: lexicon.clone(),
    };

    let temp_file = temp_beside(path)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        bincode::serialize_into(&mut writer, &state)?;
        writer.flush()?;
    }

    temp_file.persist(path)?;
    Ok(())
}

pub fn load_from_disk(path: &Path) -> Result<Lexicon> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let state: SerializableLexicon = bincode::deserialize_from(reader)?;
    Ok(state.lexicon)
}

/// Writes `contents` to a temp file next to `path`, then renames it into place.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let mut temp_file = temp_beside(path)?;
    temp_file.write_all(contents.as_bytes())?;
    temp_file.flush()?;
    temp_file.persist(path)?;
    Ok(())
}
