//! Local persistence of reviewed face data.
//!
//! Saves a session's face list as a standalone JSON document so an operator
//! can keep a copy of a decision. Only the face data is written; image bytes
//! stay inside the notification.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::face::FaceData;

/// On-disk document: `{"faces_data": [...]}`.
#[derive(Debug, Serialize, Deserialize)]
struct FaceDataFile {
    faces_data: Vec<FaceData>,
}

/// Write a face list to `path` as pretty-printed JSON.
///
/// Refuses to overwrite an existing file.
pub fn save_faces(path: &Path, faces_data: &[FaceData]) -> Result<(), CoreError> {
    if path.exists() {
        return Err(CoreError::Validation(format!(
            "refusing to overwrite existing file {}",
            path.display()
        )));
    }

    let file = File::create(path)?;
    let doc = FaceDataFile {
        faces_data: faces_data.to_vec(),
    };
    serde_json::to_writer_pretty(file, &doc)?;
    Ok(())
}

/// Read a face list previously written by [`save_faces`].
pub fn load_faces(path: &Path) -> Result<Vec<FaceData>, CoreError> {
    let file = File::open(path)?;
    let doc: FaceDataFile = serde_json::from_reader(BufReader::new(file))?;
    Ok(doc.faces_data)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
