use std::path::Path;
use std::process;

use serde::de::DeserializeOwned;

use crate::{report_error, OutputFormat};

/// Read and deserialize a JSON input file.
///
/// `what` names the input in error messages ("service line", "scenario").
pub(crate) fn read_json<T: DeserializeOwned>(path: &Path, what: &str) -> Result<T, String> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        format!(
            "error: could not read {} file '{}': {}",
            what,
            path.display(),
            e
        )
    })?;
    serde_json::from_str(&text)
        .map_err(|e| format!("error: invalid JSON in {}: {}", path.display(), e))
}

/// [`read_json`], reporting the failure and exiting with status 1.
pub(crate) fn load_or_exit<T: DeserializeOwned>(
    path: &Path,
    what: &str,
    output: OutputFormat,
    quiet: bool,
) -> T {
    match read_json(path, what) {
        Ok(value) => value,
        Err(msg) => {
            report_error(&msg, output, quiet);
            process::exit(1);
        }
    }
}
