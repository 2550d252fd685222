//! The line-oriented progress file.
//!
//! Line 1 is `True` when the chemistry catalog was active and `False`
//! otherwise. Every following line is one discovered element's canonical
//! name, in ledger order:
//!
//! ```text
//! False
//! water
//! earth
//! mud
//! ```

use crate::config::CatalogMode;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Errors that can occur while reading or writing progress.
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("save file is empty")]
    Empty,

    #[error("invalid mode flag '{value}' (expected True or False)")]
    InvalidModeFlag { value: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Saved progress: the catalog mode and the discovered names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveFile {
    pub mode: CatalogMode,
    pub discovered: Vec<String>,
}

/// Write progress in the line format.
pub fn write_progress<W: Write>(mut writer: W, save: &SaveFile) -> Result<(), SaveError> {
    let flag = if save.mode.is_chemistry() { "True" } else { "False" };
    writeln!(writer, "{flag}")?;
    for name in &save.discovered {
        writeln!(writer, "{name}")?;
    }
    writer.flush()?;
    Ok(())
}

/// Read progress in the line format. Blank lines are ignored.
pub fn read_progress<R: BufRead>(reader: R) -> Result<SaveFile, SaveError> {
    let mut lines = reader.lines();
    let flag = lines.next().ok_or(SaveError::Empty)??;
    let mode = match flag.trim().to_ascii_lowercase().as_str() {
        "true" => CatalogMode::Chemistry,
        "false" => CatalogMode::Default,
        _ => {
            return Err(SaveError::InvalidModeFlag {
                value: flag.trim().to_string(),
            });
        }
    };

    let mut discovered = Vec::new();
    for line in lines {
        let line = line?;
        let name = line.trim();
        if !name.is_empty() {
            discovered.push(name.to_string());
        }
    }
    Ok(SaveFile { mode, discovered })
}

/// Write progress to a file, creating parent directories as needed.
pub fn save_to_path(path: &Path, save: &SaveFile) -> Result<(), SaveError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = std::fs::File::create(path)?;
    write_progress(BufWriter::new(file), save)?;
    tracing::info!(file = %path.display(), entries = save.discovered.len(), "progress saved");
    Ok(())
}

/// Read progress from a file.
pub fn load_from_path(path: &Path) -> Result<SaveFile, SaveError> {
    let file = std::fs::File::open(path)?;
    let save = read_progress(BufReader::new(file))?;
    tracing::info!(file = %path.display(), entries = save.discovered.len(), "progress loaded");
    Ok(save)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SaveFile {
        SaveFile {
            mode: CatalogMode::Default,
            discovered: vec!["water".into(), "earth".into(), "mud".into()],
        }
    }

    #[test]
    fn write_uses_flag_then_names() {
        let mut out = Vec::new();
        write_progress(&mut out, &sample()).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "False\nwater\nearth\nmud\n");

        let mut out = Vec::new();
        let chem = SaveFile {
            mode: CatalogMode::Chemistry,
            discovered: vec![],
        };
        write_progress(&mut out, &chem).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "True\n");
    }

    #[test]
    fn read_back_what_was_written() {
        let mut out = Vec::new();
        write_progress(&mut out, &sample()).unwrap();
        assert_eq!(read_progress(out.as_slice()).unwrap(), sample());
    }

    #[test]
    fn read_tolerates_case_whitespace_and_blank_lines() {
        let input = " true \r\n hydrogen\n\noxygen  \n";
        let save = read_progress(input.as_bytes()).unwrap();
        assert_eq!(save.mode, CatalogMode::Chemistry);
        assert_eq!(save.discovered, vec!["hydrogen", "oxygen"]);
    }

    #[test]
    fn read_empty_is_an_error() {
        assert!(matches!(read_progress("".as_bytes()), Err(SaveError::Empty)));
    }

    #[test]
    fn read_bad_flag_is_an_error() {
        let err = read_progress("maybe\nwater\n".as_bytes()).unwrap_err();
        assert!(matches!(err, SaveError::InvalidModeFlag { ref value } if value == "maybe"));
        assert!(err.to_string().contains("maybe"));
    }

    #[test]
    fn path_round_trip_creates_directories() {
        let dir = std::env::temp_dir().join(format!("alchemy_save_test_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        let path = dir.join("savefile").join("save.csv");

        save_to_path(&path, &sample()).unwrap();
        assert_eq!(load_from_path(&path).unwrap(), sample());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn load_missing_file_is_io() {
        let result = load_from_path(Path::new("/nonexistent/alchemy/save.csv"));
        assert!(matches!(result, Err(SaveError::Io(_))));
    }
}
