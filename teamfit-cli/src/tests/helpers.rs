//! Test helpers for staging CLI input files and capturing output.

use super::*;
use camino::{Utf8Path, Utf8PathBuf};
use std::cell::RefCell;
use std::fs;
use teamfit_core::MemoryProfileStore;
use tempfile::TempDir;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path.as_std_path(), contents).expect("write test input");
}

pub(super) fn utf8_tempdir() -> (TempDir, Utf8PathBuf) {
    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
    (tmp, root)
}

/// Scenario state shared by the command step definitions.
#[derive(Debug)]
pub(super) struct CliWorld {
    _tmp: TempDir,
    pub(super) root: Utf8PathBuf,
    pub(super) store: MemoryProfileStore,
    pub(super) stdout: RefCell<Vec<u8>>,
    pub(super) result: RefCell<Option<Result<(), CliError>>>,
}

impl CliWorld {
    pub(super) fn new() -> Self {
        let (tmp, root) = utf8_tempdir();
        Self {
            _tmp: tmp,
            root,
            store: MemoryProfileStore::new(),
            stdout: RefCell::new(Vec::new()),
            result: RefCell::new(None),
        }
    }

    pub(super) fn input(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    /// Parse `argv` as a full command line, panicking on clap errors.
    pub(super) fn parse(argv: &[&str]) -> Command {
        let mut full = vec!["teamfit"];
        full.extend_from_slice(argv);
        Cli::try_parse_from(full)
            .expect("command line should parse")
            .command
    }

    pub(super) fn record(&self, outcome: Result<(), CliError>) {
        self.result.replace(Some(outcome));
    }

    pub(super) fn stdout_json<T: serde::de::DeserializeOwned>(&self) -> T {
        let borrowed = self.result.borrow();
        let result = borrowed.as_ref().expect("result recorded");
        if let Err(err) = result {
            panic!("expected success, found {err:?}");
        }
        let stdout = String::from_utf8(self.stdout.borrow().clone()).expect("stdout utf-8");
        serde_json::from_str(&stdout).expect("output should be JSON")
    }

    pub(super) fn error<R>(&self, inspect: impl FnOnce(&CliError) -> R) -> R {
        let borrowed = self.result.borrow();
        let error = borrowed
            .as_ref()
            .expect("result recorded")
            .as_ref()
            .expect_err("expected error");
        inspect(error)
    }
}
