//! Common test utilities

#![allow(dead_code)]

use kubo::runner::{App, SharedBuffer, Streams};
use kubo::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temporary directory with a kubo.yml file
pub fn create_test_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("kubo.yml");
    fs::write(&config_path, content).unwrap();
    (temp_dir, config_path)
}

/// Create a test config with an empty subdirectory next to it
pub fn create_test_config_in_subdir(content: &str) -> (TempDir, PathBuf, PathBuf) {
    let (temp_dir, config_path) = create_test_config(content);
    let sub_dir = temp_dir.path().join("subdir");
    fs::create_dir(&sub_dir).unwrap();
    (temp_dir, config_path, sub_dir)
}

/// An app whose stdout and stderr are captured
pub fn captured_app(root: Command) -> (App, SharedBuffer, SharedBuffer) {
    let out = SharedBuffer::new();
    let err = SharedBuffer::new();
    let streams = Streams::default()
        .with_stdout(out.clone())
        .with_stderr(err.clone());
    let app = App::with_streams(root, streams).unwrap();
    (app, out, err)
}
