//! STL reading with format auto-detection.

use std::fs;
use std::path::Path;

use mesh_core::{TriMesh, Vertex};
use tracing::debug;

use crate::error::{StlError, StlResult};

/// Binary STL: header bytes before the triangle count.
const BINARY_HEADER: usize = 80;
/// Binary STL: bytes per facet record.
const FACET_BYTES: usize = 50;

/// Read an STL file, auto-detecting binary vs ASCII.
///
/// ASCII files start with `solid` and contain no NUL bytes in their first 80
/// bytes; everything else is treated as binary.
///
/// # Errors
///
/// Returns an error when the file is missing, unreadable, or not valid STL.
///
/// # Example
///
/// ```no_run
/// let mesh = mesh_stl::read_stl("output/sub-01_Cord.stl").unwrap();
/// println!("cord surface: {} faces", mesh.face_count());
/// ```
pub fn read_stl<P: AsRef<Path>>(path: P) -> StlResult<TriMesh> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| StlError::io(path, e))?;

    if bytes.len() < 6 {
        return Err(StlError::malformed(path, "file too small to be STL"));
    }

    let looks_ascii = bytes.starts_with(b"solid")
        && !bytes[..bytes.len().min(BINARY_HEADER)].contains(&0);

    let mesh = if looks_ascii {
        parse_ascii(path, &bytes)?
    } else {
        parse_binary(path, &bytes)?
    };

    debug!(
        path = %path.display(),
        faces = mesh.face_count(),
        ascii = looks_ascii,
        "read STL"
    );
    Ok(mesh)
}

fn parse_binary(path: &Path, bytes: &[u8]) -> StlResult<TriMesh> {
    if bytes.len() < BINARY_HEADER + 4 {
        return Err(StlError::malformed(path, "truncated binary header"));
    }

    let count = u32::from_le_bytes([
        bytes[BINARY_HEADER],
        bytes[BINARY_HEADER + 1],
        bytes[BINARY_HEADER + 2],
        bytes[BINARY_HEADER + 3],
    ]) as usize;

    let body = &bytes[BINARY_HEADER + 4..];
    if body.len() < count * FACET_BYTES {
        return Err(StlError::malformed(
            path,
            format!(
                "expected {count} facets but payload holds only {}",
                body.len() / FACET_BYTES
            ),
        ));
    }

    let mut mesh = TriMesh::with_capacity(count * 3, count);
    for facet in body.chunks_exact(FACET_BYTES).take(count) {
        // Skip the 12-byte stored normal; it is recomputed on write.
        push_facet(
            &mut mesh,
            read_f32_triple(&facet[12..24]),
            read_f32_triple(&facet[24..36]),
            read_f32_triple(&facet[36..48]),
        );
    }

    Ok(mesh)
}

fn parse_ascii(path: &Path, bytes: &[u8]) -> StlResult<TriMesh> {
    let text = std::str::from_utf8(bytes)
        .map_err(|_| StlError::malformed(path, "ASCII STL is not UTF-8"))?;

    let mut mesh = TriMesh::new();
    let mut pending: Vec<[f64; 3]> = Vec::with_capacity(3);

    for (line_no, line) in text.lines().enumerate() {
        let mut tokens = line.split_whitespace();
        match tokens.next() {
            Some("vertex") => {
                let mut coord = [0.0f64; 3];
                for c in &mut coord {
                    *c = tokens
                        .next()
                        .and_then(|t| t.parse().ok())
                        .ok_or_else(|| {
                            StlError::malformed(
                                path,
                                format!("bad vertex on line {}", line_no + 1),
                            )
                        })?;
                }
                pending.push(coord);
            }
            Some("endfacet") => {
                if pending.len() != 3 {
                    return Err(StlError::malformed(
                        path,
                        format!(
                            "facet ending on line {} has {} vertices",
                            line_no + 1,
                            pending.len()
                        ),
                    ));
                }
                push_facet(&mut mesh, pending[0], pending[1], pending[2]);
                pending.clear();
            }
            Some("endsolid") => break,
            _ => {}
        }
    }

    Ok(mesh)
}

fn read_f32_triple(buf: &[u8]) -> [f64; 3] {
    let f = |i: usize| {
        f64::from(f32::from_le_bytes([
            buf[i],
            buf[i + 1],
            buf[i + 2],
            buf[i + 3],
        ]))
    };
    [f(0), f(4), f(8)]
}

#[allow(clippy::cast_possible_truncation)]
// Mesh indices are u32; STL facet counts are u32 by format
fn push_facet(mesh: &mut TriMesh, a: [f64; 3], b: [f64; 3], c: [f64; 3]) {
    let base = mesh.vertices.len() as u32;
    mesh.vertices.push(Vertex::from_coords(a[0], a[1], a[2]));
    mesh.vertices.push(Vertex::from_coords(b[0], b[1], b[2]));
    mesh.vertices.push(Vertex::from_coords(c[0], c[1], c[2]));
    mesh.faces.push([base, base + 1, base + 2]);
}
