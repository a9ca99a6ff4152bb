//! Add command - bookmark a directory

use crate::store::Store;
use crate::ui::{OutputWriter, UserInput};
use crate::{BkError, Bookmark};
use std::env;
use std::path::{Component, Path, PathBuf};

type Result<T> = std::result::Result<T, BkError>;

/// What the add command did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new bookmark was appended and saved
    Added(Bookmark),
    /// The path was already bookmarked; nothing was written
    AlreadyExists,
}

/// Resolve the directory to bookmark
///
/// Defaults to the current working directory. Relative paths are joined onto
/// it and `.`/`..` are removed lexically; symlinks are not resolved.
///
/// # Errors
/// Returns an error if the working directory cannot be determined, or the
/// path is not an existing directory or is not valid UTF-8.
pub fn resolve_dir(path: Option<PathBuf>) -> Result<String> {
    let cwd = env::current_dir()?;
    let dir = match path {
        Some(p) if p.is_absolute() => p,
        Some(p) => cwd.join(p),
        None => cwd,
    };
    let dir = normalize(&dir);

    if !dir.is_dir() {
        return Err(BkError::InvalidInput(format!(
            "Not a directory: {}",
            dir.display()
        )));
    }

    dir.to_str()
        .map(str::to_string)
        .ok_or_else(|| BkError::InvalidInput(format!("Path is not valid UTF-8: {}", dir.display())))
}

/// Drop `.` components and apply `..` without touching the filesystem
fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    normalized
}

/// Execute the add command
///
/// Duplicates are detected by exact path string. When `name` is `None` the
/// user is prompted for an optional alias.
///
/// # Errors
/// Returns an error if prompting fails or the store cannot be written
pub fn execute<S: Store + ?Sized>(
    store: &S,
    dir: &str,
    name: Option<&str>,
    input: &dyn UserInput,
    output: &dyn OutputWriter,
) -> Result<AddOutcome> {
    let mut bookmarks = store.load();

    if bookmarks.iter().any(|b| b.path == dir) {
        tracing::debug!(path = dir, "bookmark already exists");
        output.write(&format!("Bookmark already exists: {dir}"));
        return Ok(AddOutcome::AlreadyExists);
    }

    let alias = match name {
        Some(name) => name.trim().to_string(),
        None => {
            output.write(&format!("Adding: {dir}"));
            input
                .prompt_text("Alias (enter to skip)", None, true)?
                .unwrap_or_default()
                .trim()
                .to_string()
        }
    };

    let bookmark = Bookmark::new(dir, alias);
    bookmarks.push(bookmark.clone());
    store.save(&bookmarks)?;
    tracing::info!(path = dir, name = %bookmark.name, "bookmark added");

    if bookmark.name.is_empty() {
        output.success(&format!("Added bookmark: {dir}"));
    } else {
        output.success(&format!("Added bookmark: {} ({dir})", bookmark.name));
    }

    Ok(AddOutcome::Added(bookmark))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use crate::ui::{BufferedWriter, MessageLevel, MockInput};

    #[test]
    fn test_add_with_prompted_alias() {
        let store = MemoryStore::new(vec![Bookmark::new("/a", "")]);
        let input = MockInput::new(["  work  "]);
        let output = BufferedWriter::new();

        let outcome = execute(&store, "/home/u/work", None, &input, &output).unwrap();
        assert_eq!(outcome, AddOutcome::Added(Bookmark::new("/home/u/work", "work")));
        assert_eq!(
            store.snapshot(),
            vec![Bookmark::new("/a", ""), Bookmark::new("/home/u/work", "work")]
        );
        assert_eq!(input.prompts(), vec!["Alias (enter to skip)".to_string()]);
        assert_eq!(
            output.latest_message(),
            Some((
                MessageLevel::Success,
                "Added bookmark: work (/home/u/work)".to_string()
            ))
        );
    }

    #[test]
    fn test_add_without_alias() {
        let store = MemoryStore::default();
        let input = MockInput::new([""]);
        let output = BufferedWriter::new();

        execute(&store, "/tmp/play", None, &input, &output).unwrap();
        assert_eq!(store.snapshot(), vec![Bookmark::new("/tmp/play", "")]);
        assert_eq!(
            output.latest_message().unwrap().1,
            "Added bookmark: /tmp/play"
        );
    }

    #[test]
    fn test_add_with_name_skips_prompt() {
        let store = MemoryStore::default();
        let input = MockInput::new(Vec::<String>::new());
        let output = BufferedWriter::new();

        execute(&store, "/srv", Some("srv"), &input, &output).unwrap();
        assert!(input.prompts().is_empty());
        assert_eq!(store.snapshot(), vec![Bookmark::new("/srv", "srv")]);
    }

    #[test]
    fn test_add_at_end_of_input() {
        let store = MemoryStore::default();
        let input = MockInput::new(Vec::<String>::new());
        let output = BufferedWriter::new();

        execute(&store, "/srv", None, &input, &output).unwrap();
        assert_eq!(store.snapshot(), vec![Bookmark::new("/srv", "")]);
    }

    #[test]
    fn test_duplicate_is_not_written() {
        let store = MemoryStore::new(vec![Bookmark::new("/a", "a").with_count(3)]);
        let input = MockInput::new(["ignored"]);
        let output = BufferedWriter::new();

        let outcome = execute(&store, "/a", None, &input, &output).unwrap();
        assert_eq!(outcome, AddOutcome::AlreadyExists);
        assert_eq!(store.save_count(), 0);
        assert!(input.prompts().is_empty());
        assert_eq!(
            output.latest_message(),
            Some((MessageLevel::Normal, "Bookmark already exists: /a".to_string()))
        );
    }

    #[test]
    fn test_duplicate_check_is_literal() {
        let store = MemoryStore::new(vec![Bookmark::new("/home/u/Work", "")]);
        let output = BufferedWriter::new();

        let outcome =
            execute(&store, "/home/u/Work/", Some(""), &MockInput::default(), &output).unwrap();
        assert!(matches!(outcome, AddOutcome::Added(_)));
        assert_eq!(store.snapshot().len(), 2);
    }

    #[test]
    fn test_save_failure_is_returned() {
        let store = MemoryStore::default();
        store.set_fail_writes(true);
        let input = MockInput::new(["x"]);
        let output = BufferedWriter::new();

        let err = execute(&store, "/a", None, &input, &output).unwrap_err();
        assert!(matches!(err, BkError::StoreError(_)));
    }

    #[test]
    fn test_normalize_is_lexical() {
        assert_eq!(normalize(Path::new("/a/./b/")), PathBuf::from("/a/b"));
        assert_eq!(normalize(Path::new("/a/b/../c")), PathBuf::from("/a/c"));
        assert_eq!(normalize(Path::new("/..")), PathBuf::from("/"));
    }

    #[test]
    fn test_resolve_dir_normalizes_dot() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        let expected = dir.path().to_str().unwrap().to_string();

        assert_eq!(resolve_dir(Some(dir.path().join("."))).unwrap(), expected);
        assert_eq!(
            resolve_dir(Some(dir.path().join("sub").join(".."))).unwrap(),
            expected
        );
        assert_eq!(
            resolve_dir(Some(dir.path().join("sub").join("..").join("sub"))).unwrap(),
            format!("{expected}/sub")
        );

        let store = MemoryStore::new(vec![Bookmark::new(expected.clone(), "")]);
        let again = resolve_dir(Some(dir.path().join("."))).unwrap();
        let output = BufferedWriter::new();
        let outcome = execute(&store, &again, Some(""), &MockInput::default(), &output).unwrap();
        assert_eq!(outcome, AddOutcome::AlreadyExists);
        assert_eq!(store.snapshot().len(), 1);
    }

    #[test]
    fn test_resolve_dir_rejects_files() {
        let dir = tempfile::TempDir::new().unwrap();
        let file = dir.path().join("file.txt");
        std::fs::write(&file, "").unwrap();

        assert!(matches!(
            resolve_dir(Some(file)),
            Err(BkError::InvalidInput(_))
        ));
        let resolved = resolve_dir(Some(dir.path().to_path_buf())).unwrap();
        assert_eq!(Some(resolved.as_str()), dir.path().to_str());
    }
}
