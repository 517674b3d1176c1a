//! Shift dataset loading.
//!
//! Reads the punch-clock export, a JSON array of shift objects, from disk.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::ShiftRecord;

/// Default location of the shift dataset, relative to the working directory.
pub const DEFAULT_DATASET_PATH: &str = "./data/dataset.json";

/// Loads a shift dataset from a JSON file.
///
/// # Errors
///
/// - [`EngineError::SourceNotFound`] if the file does not exist or cannot be read
/// - [`EngineError::SourceParseError`] if it is not a JSON array of shifts
///
/// # Example
///
/// ```no_run
/// use shift_payroll::source::load_shifts;
///
/// let shifts = load_shifts("./data/dataset.json")?;
/// println!("Loaded {} shifts", shifts.len());
/// # Ok::<(), shift_payroll::error::EngineError>(())
/// ```
pub fn load_shifts<P: AsRef<Path>>(path: P) -> EngineResult<Vec<ShiftRecord>> {
    let path = path.as_ref();
    let path_str = path.display().to_string();

    let content = fs::read_to_string(path).map_err(|_| EngineError::SourceNotFound {
        path: path_str.clone(),
    })?;

    let shifts: Vec<ShiftRecord> =
        serde_json::from_str(&content).map_err(|e| EngineError::SourceParseError {
            path: path_str.clone(),
            message: e.to_string(),
        })?;

    debug!(path = %path_str, shifts = shifts.len(), "Loaded shift dataset");
    Ok(shifts)
}
