//! Loading JSON input documents and writing JSON output.

use std::borrow::Cow;
use std::io::Write;

use camino::Utf8Path;
use serde::{Serialize, de::DeserializeOwned};
use teamfit_core::Quiz;

use crate::{ARG_QUIZ, CliError};

/// Fail unless `path` names an existing regular file.
pub(crate) fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match teamfit_fs::file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Decode the JSON document at `path`.
pub(crate) fn load_json<T: DeserializeOwned>(
    path: &Utf8Path,
    field: &'static str,
) -> Result<T, CliError> {
    require_existing(path, field)?;
    let contents = teamfit_fs::read_utf8_file(path).map_err(|source| CliError::ReadInput {
        field,
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| CliError::ParseInput {
        field,
        path: path.to_path_buf(),
        source,
    })
}

/// The quiz at `path`, or the built-in quiz when no path is configured.
///
/// Custom quizzes are validated while decoding.
pub(crate) fn load_quiz(path: Option<&Utf8Path>) -> Result<Cow<'static, Quiz>, CliError> {
    match path {
        Some(custom) => {
            log::debug!("loading quiz from {custom}");
            load_json(custom, ARG_QUIZ).map(Cow::Owned)
        }
        None => Ok(Cow::Borrowed(Quiz::standard())),
    }
}

/// Pretty-print `value` as JSON followed by a newline.
pub(crate) fn write_json<T: Serialize>(writer: &mut dyn Write, value: &T) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerializeOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}
