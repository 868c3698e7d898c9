//! Word list loading utilities
//!
//! Turns line-oriented word lists into a `Corpus` of per-word letter sets.

use crate::core::Corpus;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Load a corpus from a word list file
///
/// One word per line, any case; blank lines are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or read. Nothing is
/// returned for a partially read file.
///
/// # Examples
/// ```no_run
/// use letter_tree::wordlists::loader::load_from_file;
///
/// let corpus = load_from_file("wordlist.txt").unwrap();
/// println!("Loaded {} words", corpus.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Corpus> {
    let file = File::open(path)?;
    load_from_reader(BufReader::new(file))
}

/// Load a corpus from any buffered line source
///
/// # Errors
///
/// Returns the first I/O error raised while reading lines, including invalid
/// UTF-8.
pub fn load_from_reader<R: BufRead>(reader: R) -> io::Result<Corpus> {
    let lines = reader.lines().collect::<io::Result<Vec<String>>>()?;
    Ok(Corpus::from_words(lines))
}

/// Convert an in-memory word slice to a corpus
///
/// # Examples
/// ```
/// use letter_tree::wordlists::loader::corpus_from_slice;
///
/// let corpus = corpus_from_slice(&["cat", "car", "can"]);
/// assert_eq!(corpus.len(), 3);
/// ```
#[must_use]
pub fn corpus_from_slice(slice: &[&str]) -> Corpus {
    Corpus::from_words(slice)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterSet;
    use std::io::{Cursor, Write};

    #[test]
    fn corpus_from_slice_converts_words() {
        let corpus = corpus_from_slice(&["crane", "slate", "irate"]);
        assert_eq!(corpus.len(), 3);
        assert_eq!(corpus.support(&LetterSet::from_word("ae")), 3);
    }

    #[test]
    fn corpus_from_slice_empty() {
        let corpus = corpus_from_slice(&[]);
        assert!(corpus.is_empty());
    }

    #[test]
    fn reader_skips_blank_lines() {
        let input = "cat\n\n   \nCar\r\ncan\n";
        let corpus = load_from_reader(Cursor::new(input)).unwrap();

        assert_eq!(corpus.len(), 3);
        assert_eq!(corpus.support(&LetterSet::from_word("ac")), 3);
    }

    #[test]
    fn reader_rejects_invalid_utf8() {
        let input: &[u8] = &[b'c', b'a', 0xFF, b'\n'];
        assert!(load_from_reader(Cursor::new(input)).is_err());
    }

    #[test]
    fn load_from_file_reads_words() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Apple").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "banana").unwrap();

        let corpus = load_from_file(file.path()).unwrap();
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.support(&LetterSet::from_word("a")), 2);
        assert_eq!(corpus.support(&LetterSet::from_word("p")), 1);
    }

    #[test]
    fn load_from_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_from_file(dir.path().join("missing.txt"));
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::NotFound);
    }
}
