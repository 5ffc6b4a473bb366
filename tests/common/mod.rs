//! Common test helpers for CLI tests.

#![allow(dead_code)] // Functions used across different test binaries

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::time::{Duration, SystemTime};
use tempfile::TempDir;

/// Header with one request per escape mode
pub const HEADER: &str = r#"#ifndef EMBEDDED_H
#define EMBEDDED_H

/* Declarations below are turned into definitions by embedgen. */
#define EMBEDDED(filename_, escape_mode_) extern
#define TEXT
#define BINARY
#define SIZE

EMBEDDED("../assets/greeting.txt", TEXT) char const g_greeting[];

EMBEDDED("../assets/blob.bin", BINARY) unsigned char const g_blob[];
EMBEDDED("../assets/blob.bin", SIZE) unsigned int const g_blob_size;

#endif
"#;

/// Generated file expected for `HEADER` with the assets of `init_project`
pub const EXPECTED_OUTPUT: &str = concat!(
    "/* This file may be overwritten or removed by embedgen.\n",
    " * Do not modify, see \"src/embedded.h\" or \"embed.toml\" instead. */\n",
    "\n",
    "/* Content of \"src/../assets/greeting.txt\". */\n",
    "char const g_greeting[] = \"a\\\"b\\\\c\\n\\t\";\n",
    "\n",
    "/* Content of \"src/../assets/blob.bin\". */\n",
    "unsigned char const g_blob[] = {0x0, 0xff, 0x10};\n",
    "\n",
    "/* Size in bytes of \"src/../assets/blob.bin\". */\n",
    "unsigned int const g_blob_size = 3;\n",
);

/// Normalize output for stable assertions:
/// - Replace temp directory paths with `<TEMPDIR>`
pub fn normalize_output(output: &str, dir: &Path) -> String {
    let dir_str = dir.display().to_string();
    output.replace(&dir_str, "<TEMPDIR>")
}

/// Run a single embedgen command in a directory
pub fn embedgen(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_embedgen"))
        .args(args)
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .output()
        .expect("failed to run embedgen")
}

/// Run embedgen commands in a directory and capture output.
pub fn run_commands(dir: &Path, commands: &[&[&str]]) -> String {
    let mut output = String::new();

    for args in commands {
        output.push_str(&format!("$ embedgen {}\n", args.join(" ")));

        let result = embedgen(dir, args);

        let stdout = String::from_utf8_lossy(&result.stdout);
        let stderr = String::from_utf8_lossy(&result.stderr);

        if !stdout.is_empty() {
            output.push_str(&stdout);
            if !stdout.ends_with('\n') {
                output.push('\n');
            }
        }
        if !stderr.is_empty() {
            output.push_str(&stderr);
            if !stderr.ends_with('\n') {
                output.push('\n');
            }
        }

        output.push_str(&format!("exit: {}\n\n", result.status.code().unwrap_or(-1)));
    }

    normalize_output(&output, dir)
}

/// Write a file relative to the project, creating parent directories
pub fn write_project_file(dir: &Path, rel: &str, content: impl AsRef<[u8]>) -> PathBuf {
    let path = dir.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

/// Initialize an embedgen project with `HEADER` and its assets in a temp directory
pub fn init_project() -> TempDir {
    let temp_dir = TempDir::new().expect("failed to create temp dir");
    let result = embedgen(temp_dir.path(), &["init"]);
    assert!(result.status.success(), "embedgen init failed");

    write_project_file(temp_dir.path(), "src/embedded.h", HEADER);
    write_project_file(temp_dir.path(), "assets/greeting.txt", "a\"b\\c\n\t");
    write_project_file(temp_dir.path(), "assets/blob.bin", [0x00u8, 0xFF, 0x10]);
    temp_dir
}

pub fn set_mtime(path: &Path, time: SystemTime) {
    fs::File::options()
        .write(true)
        .open(path)
        .unwrap()
        .set_modified(time)
        .unwrap();
}

pub fn mtime(path: &Path) -> SystemTime {
    fs::metadata(path).unwrap().modified().unwrap()
}

/// Age every input and make the output the newest file, as after a clean build
pub fn settle(dir: &Path) {
    let past = SystemTime::now() - Duration::from_secs(3600);
    for rel in ["src/embedded.h", "assets/greeting.txt", "assets/blob.bin"] {
        let path = dir.join(rel);
        if path.exists() {
            set_mtime(&path, past);
        }
    }
    set_mtime(&dir.join("src/embedded.c"), past + Duration::from_secs(60));
}

/// A time clearly after anything `settle` produced
pub fn later() -> SystemTime {
    SystemTime::now() + Duration::from_secs(60)
}
