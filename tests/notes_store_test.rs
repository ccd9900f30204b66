//! Notes store behavior tests
//!
//! Test cases for the note log operations:
//! 1. Empty-log sentinels
//! 2. Append then read back (latest, all, prompt)
//! 3. Idempotent initialization
//! 4. Embedded line terminators split into separate notes

use ainotes::store::{
    NotesStore, APPEND_CONFIRMATION, EMPTY_LATEST_SENTINEL, EMPTY_NOTES_SENTINEL,
    EMPTY_PROMPT_SENTINEL,
};
use std::fs;
use tempfile::TempDir;

fn create_store(temp_dir: &TempDir) -> NotesStore {
    NotesStore::open(temp_dir.path().join("notes.txt")).unwrap()
}

#[test]
fn test_fresh_log_sentinels() {
    let temp_dir = TempDir::new().unwrap();
    let store = create_store(&temp_dir);

    assert_eq!(store.read_all().unwrap(), "no content yet");
    assert_eq!(store.read_latest().unwrap(), "no otes yet");
    assert_eq!(store.build_summary_prompt().unwrap(), "there is no content yet");
}

#[test]
fn test_existing_empty_file_gives_sentinel() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("notes.txt");
    fs::write(&path, "").unwrap();

    let store = NotesStore::open(&path).unwrap();
    assert_eq!(store.read_all().unwrap(), EMPTY_NOTES_SENTINEL);
    assert_eq!(store.read_latest().unwrap(), EMPTY_LATEST_SENTINEL);
    assert_eq!(store.build_summary_prompt().unwrap(), EMPTY_PROMPT_SENTINEL);
}

#[test]
fn test_operations_create_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("notes.txt");
    let store = NotesStore::new(&path);

    assert!(!path.exists());
    assert_eq!(store.read_all().unwrap(), EMPTY_NOTES_SENTINEL);
    assert!(path.exists());
}

#[test]
fn test_buy_milk_call_alice_scenario() {
    let temp_dir = TempDir::new().unwrap();
    let store = create_store(&temp_dir);

    assert_eq!(store.append_note("Buy milk").unwrap(), APPEND_CONFIRMATION);
    assert_eq!(store.append_note("Call Alice").unwrap(), APPEND_CONFIRMATION);

    assert_eq!(store.read_latest().unwrap(), "Call Alice");
    assert_eq!(store.read_all().unwrap(), "Buy milk\nCall Alice");
    assert_eq!(
        store.build_summary_prompt().unwrap(),
        "Summarize the current note Buy milk\nCall Alice"
    );
}

#[test]
fn test_latest_is_last_appended() {
    let temp_dir = TempDir::new().unwrap();
    let store = create_store(&temp_dir);

    for note in ["first", "  second with spaces ", "third: ünïcödé ✓", ""] {
        store.ensure_initialized().unwrap();
        store.append_note(note).unwrap();
        assert_eq!(store.read_latest().unwrap(), note.trim());
    }
}

#[test]
fn test_read_all_preserves_append_order() {
    let temp_dir = TempDir::new().unwrap();
    let store = create_store(&temp_dir);
    let notes: Vec<String> = (1..=20).map(|i| format!("note {}", i)).collect();

    for note in &notes {
        store.append_note(note).unwrap();
    }

    assert_eq!(store.read_all().unwrap(), notes.join("\n"));
}

#[test]
fn test_read_all_contains_appended_note() {
    let temp_dir = TempDir::new().unwrap();
    let store = create_store(&temp_dir);
    store.append_note("remember the keys").unwrap();
    store.append_note("water the plants").unwrap();

    let all = store.read_all().unwrap();
    assert!(all.contains("remember the keys"));
    assert!(all.contains("water the plants"));
}

#[test]
fn test_ensure_initialized_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let store = create_store(&temp_dir);
    store.append_note("keep me").unwrap();
    let before = fs::read_to_string(store.path()).unwrap();

    for _ in 0..3 {
        store.ensure_initialized().unwrap();
    }
    let reopened = NotesStore::open(store.path()).unwrap();

    assert_eq!(fs::read_to_string(reopened.path()).unwrap(), before);
}

#[test]
fn test_notes_persist_across_store_instances() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("notes.txt");

    NotesStore::open(&path).unwrap().append_note("from before").unwrap();
    let store = NotesStore::open(&path).unwrap();

    assert_eq!(store.read_latest().unwrap(), "from before");
}

#[test]
fn test_embedded_newline_splits_into_notes() {
    let temp_dir = TempDir::new().unwrap();
    let store = create_store(&temp_dir);

    store.append_note("line one\nline two").unwrap();

    assert_eq!(store.read_latest().unwrap(), "line two");
    assert_eq!(store.read_all().unwrap(), "line one\nline two");
}

#[cfg(unix)]
#[test]
fn test_read_only_file_rejects_append() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = TempDir::new().unwrap();
    let store = create_store(&temp_dir);
    fs::set_permissions(store.path(), fs::Permissions::from_mode(0o444)).unwrap();

    // Root ignores file permissions
    if fs::OpenOptions::new().append(true).open(store.path()).is_ok() {
        return;
    }

    let err = store.append_note("blocked").unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::PermissionDenied);
    assert_eq!(store.read_all().unwrap(), EMPTY_NOTES_SENTINEL);
}

#[test]
fn test_carriage_returns_read_as_line_breaks() {
    let temp_dir = TempDir::new().unwrap();
    let store = create_store(&temp_dir);
    fs::write(store.path(), "Buy milk\r\n").unwrap();

    store.append_note("first\rsecond").unwrap();

    assert_eq!(store.read_latest().unwrap(), "second");
    assert_eq!(store.read_all().unwrap(), "Buy milk\nfirst\nsecond");
}
