//! # Dictionary Loading
//!
//! The seed vocabulary is a plain text file of whitespace-delimited words.
//! Order doesn't matter; case does. A word listed twice starts with a
//! count of two.

use log::info;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::core::trie::Trie;

#[derive(Debug)]
pub enum DictionaryError {
    Read { path: PathBuf, source: io::Error },
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DictionaryError::Read { path, source } => {
                write!(f, "cannot read dictionary {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for DictionaryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DictionaryError::Read { source, .. } => Some(source),
        }
    }
}

/// Inserts every whitespace-delimited word of `contents` into `trie`.
/// Returns how many words were inserted.
pub fn seed(trie: &mut Trie, contents: &str) -> usize {
    let mut inserted = 0;
    for word in contents.split_whitespace() {
        trie.insert(word);
        inserted += 1;
    }
    inserted
}

/// Reads the dictionary at `path` and builds a trie from it.
pub fn load(path: &Path) -> Result<Trie, DictionaryError> {
    let contents = fs::read_to_string(path).map_err(|source| DictionaryError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let mut trie = Trie::new();
    let inserted = seed(&mut trie, &contents);
    info!(
        "Seeded {} words ({} distinct) from {}",
        inserted,
        trie.len(),
        path.display()
    );
    Ok(trie)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_seed_splits_on_any_whitespace() {
        let mut trie = Trie::new();
        let inserted = seed(&mut trie, "alpha beta\ngamma\t\tbeta\r\n  ");
        assert_eq!(inserted, 4);
        assert_eq!(trie.len(), 3);
        assert_eq!(trie.count("beta"), 2);
    }

    #[test]
    fn test_seed_is_case_sensitive() {
        let mut trie = Trie::new();
        seed(&mut trie, "Rust rust");
        assert_eq!(trie.count("Rust"), 1);
        assert_eq!(trie.count("rust"), 1);
    }

    #[test]
    fn test_load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "test tester\ntesting").unwrap();

        let trie = load(file.path()).unwrap();
        assert_eq!(trie.len(), 3);
        assert_eq!(trie.query("tes").len(), 3);
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.txt");
        let err = load(&path).unwrap_err();
        assert!(err.to_string().contains("nope.txt"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
