//! Tree artifact persistence
//!
//! The artifact is pretty-printed JSON with two-space indentation. Writes go
//! through a temporary file in the destination directory and are persisted in
//! one rename, so a failed run never leaves a partial artifact behind.

use super::{LetterTree, is_canonical};
use std::fmt;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Error type for reading and writing tree artifacts
#[derive(Debug)]
pub enum TreeIoError {
    Io(io::Error),
    Json(serde_json::Error),
    /// The artifact parsed but its children are not in canonical order
    NonCanonical,
}

impl fmt::Display for TreeIoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Json(e) => write!(f, "Invalid tree JSON: {e}"),
            Self::NonCanonical => write!(
                f,
                "Tree children are not unique and in ascending letter order"
            ),
        }
    }
}

impl std::error::Error for TreeIoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::NonCanonical => None,
        }
    }
}

impl From<io::Error> for TreeIoError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for TreeIoError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

/// Serialize a tree to the artifact format
///
/// # Errors
///
/// Returns a JSON error if serialization fails.
pub fn to_json_string(tree: &LetterTree) -> Result<String, TreeIoError> {
    Ok(serde_json::to_string_pretty(tree)?)
}

/// Parse a tree from the artifact format, checking its ordering
///
/// # Errors
///
/// Returns `TreeIoError::Json` for malformed input and
/// `TreeIoError::NonCanonical` when children are out of order.
pub fn from_json_str(json: &str) -> Result<LetterTree, TreeIoError> {
    let tree: LetterTree = serde_json::from_str(json)?;
    ensure_canonical(tree)
}

/// Write a tree artifact atomically
///
/// # Errors
///
/// Returns an error if the temporary file cannot be created, written, or
/// renamed into place.
pub fn write_json<P: AsRef<Path>>(tree: &LetterTree, path: P) -> Result<(), TreeIoError> {
    let path = path.as_ref();
    let parent_dir = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(temp_file.as_file_mut());
        serde_json::to_writer_pretty(&mut writer, tree)?;
        writer.flush()?;
    }

    temp_file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Read a tree artifact, checking its ordering
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not a valid tree, or is
/// not in canonical order.
pub fn read_json<P: AsRef<Path>>(path: P) -> Result<LetterTree, TreeIoError> {
    let file = File::open(path)?;
    let tree: LetterTree = serde_json::from_reader(BufReader::new(file))?;
    ensure_canonical(tree)
}

fn ensure_canonical(tree: LetterTree) -> Result<LetterTree, TreeIoError> {
    if is_canonical(&tree) {
        Ok(tree)
    } else {
        Err(TreeIoError::NonCanonical)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterSet;
    use crate::tree::build_tree;

    fn sample_tree() -> LetterTree {
        build_tree(&[LetterSet::from_word("ca")])
    }

    #[test]
    fn pretty_output_uses_two_space_indent() {
        let json = to_json_string(&sample_tree()).unwrap();
        let expected = r#"{
  "letter": "root",
  "children": [
    {
      "letter": "a",
      "children": [
        {
          "letter": "c",
          "children": []
        }
      ]
    }
  ]
}"#;
        assert_eq!(json, expected);
    }

    #[test]
    fn empty_tree_output() {
        let json = to_json_string(&LetterTree::new()).unwrap();
        assert_eq!(json, "{\n  \"letter\": \"root\",\n  \"children\": []\n}");
    }

    #[test]
    fn write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("letter_tree.json");
        let tree = sample_tree();

        write_json(&tree, &path).unwrap();
        assert_eq!(read_json(&path).unwrap(), tree);

        let on_disk = std::fs::read_to_string(&path).unwrap();
        assert_eq!(on_disk, to_json_string(&tree).unwrap());
    }

    #[test]
    fn write_replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tree.json");
        std::fs::write(&path, "stale").unwrap();

        write_json(&LetterTree::new(), &path).unwrap();
        assert!(read_json(&path).unwrap().is_empty());
    }

    #[test]
    fn write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("tree.json");

        assert!(matches!(
            write_json(&LetterTree::new(), &path),
            Err(TreeIoError::Io(_))
        ));
        assert!(!path.exists());
    }

    #[test]
    fn read_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            read_json(dir.path().join("nope.json")),
            Err(TreeIoError::Io(_))
        ));
    }

    #[test]
    fn malformed_json_rejected() {
        assert!(matches!(
            from_json_str(r#"{"letter": "root"}"#),
            Err(TreeIoError::Json(_))
        ));
    }

    #[test]
    fn non_canonical_rejected() {
        let json = r#"{"letter":"root","children":[
            {"letter":"b","children":[]},
            {"letter":"a","children":[]}
        ]}"#;
        assert!(matches!(
            from_json_str(json),
            Err(TreeIoError::NonCanonical)
        ));
    }
}
