use std::fs;
use std::io;
use std::path::Path;

use crate::engine::EngineError;
use crate::model::Reservation;

/// Load seed reservations from a JSON file. A missing file is not an
/// error: the service simply starts empty.
pub fn load_reservations(path: &Path) -> Result<Vec<Reservation>, EngineError> {
    let data = match fs::read(path) {
        Ok(data) => data,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => {
            return Err(EngineError::Storage(format!(
                "read {}: {e}",
                path.display()
            )));
        }
    };
    serde_json::from_slice(&data)
        .map_err(|e| EngineError::Storage(format!("parse {}: {e}", path.display())))
}
