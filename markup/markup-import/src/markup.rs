//! Markup JSON parsing.

use std::fs;
use std::path::Path;

use mesh_core::Point3;
use serde::Deserialize;

use crate::error::{ImportError, ImportResult};

#[derive(Debug, Deserialize)]
struct MarkupFile {
    #[serde(default)]
    markups: Vec<Markup>,
}

#[derive(Debug, Deserialize)]
struct Markup {
    #[serde(rename = "controlPoints", default)]
    control_points: Vec<ControlPoint>,
}

#[derive(Debug, Deserialize)]
struct ControlPoint {
    position: [f64; 3],
}

/// Read the ordered control-point positions of one markup file.
///
/// Only the first markup entry of the file is consumed, and of each control
/// point only its `position`; everything else in the export (orientation,
/// visibility, labels) is ignored.
///
/// # Errors
///
/// Returns an error when the file cannot be read, is not valid markup JSON,
/// or carries no markup entries.
pub fn read_markup_points<P: AsRef<Path>>(path: P) -> ImportResult<Vec<Point3<f64>>> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| ImportError::io(path, e))?;

    let file: MarkupFile = serde_json::from_slice(&bytes).map_err(|source| ImportError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    let markup = file.markups.first().ok_or_else(|| ImportError::NoMarkups {
        path: path.to_path_buf(),
    })?;

    Ok(markup
        .control_points
        .iter()
        .map(|cp| Point3::new(cp.position[0], cp.position[1], cp.position[2]))
        .collect())
}
