//! STL writing.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use mesh_core::{TriMesh, Triangle};
use tracing::debug;

use crate::error::{StlError, StlResult};

/// Output encoding for [`write_stl`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StlFormat {
    /// Compact binary STL (the pipeline default).
    #[default]
    Binary,
    /// Human-readable ASCII STL.
    Ascii,
}

/// Write `mesh` to `path` under the given solid `name`.
///
/// The name lands in the binary header / the `solid` line, giving every
/// exported surface a deterministic identity (`Dura_Loops`, `Cord_Loops`,
/// `{participant}_Nerveroots`). Facet normals are recomputed from the
/// winding; degenerate triangles get a zero normal.
///
/// # Errors
///
/// Returns an error when the file cannot be created or written.
///
/// # Example
///
/// ```no_run
/// use mesh_core::TriMesh;
/// use mesh_stl::{write_stl, StlFormat};
///
/// let mesh = TriMesh::new();
/// write_stl(&mesh, "output/sub-01_Dura.stl", "Dura_Loops", StlFormat::Binary).unwrap();
/// ```
pub fn write_stl<P: AsRef<Path>>(
    mesh: &TriMesh,
    path: P,
    name: &str,
    format: StlFormat,
) -> StlResult<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| StlError::io(path, e))?;
    let mut writer = BufWriter::new(file);

    let result = match format {
        StlFormat::Binary => write_binary(&mut writer, mesh, name),
        StlFormat::Ascii => write_ascii(&mut writer, mesh, name),
    };
    result
        .and_then(|()| writer.flush())
        .map_err(|e| StlError::io(path, e))?;

    debug!(
        path = %path.display(),
        name,
        faces = mesh.face_count(),
        "wrote STL"
    );
    Ok(())
}

#[allow(clippy::cast_possible_truncation)]
// f64 -> f32 narrowing is the STL format; face counts are u32 by format
fn write_binary<W: Write>(writer: &mut W, mesh: &TriMesh, name: &str) -> std::io::Result<()> {
    let mut header = [b' '; 80];
    let tag = name.as_bytes();
    let n = tag.len().min(header.len());
    header[..n].copy_from_slice(&tag[..n]);
    writer.write_all(&header)?;

    writer.write_all(&(mesh.faces.len() as u32).to_le_bytes())?;

    for tri in mesh.triangles() {
        let normal = facet_normal(&tri);
        for c in normal {
            writer.write_all(&(c as f32).to_le_bytes())?;
        }
        for corner in [tri.a, tri.b, tri.c] {
            for c in [corner.x, corner.y, corner.z] {
                writer.write_all(&(c as f32).to_le_bytes())?;
            }
        }
        writer.write_all(&0u16.to_le_bytes())?;
    }

    Ok(())
}

fn write_ascii<W: Write>(writer: &mut W, mesh: &TriMesh, name: &str) -> std::io::Result<()> {
    writeln!(writer, "solid {name}")?;

    for tri in mesh.triangles() {
        let [nx, ny, nz] = facet_normal(&tri);
        writeln!(writer, "  facet normal {nx:.6e} {ny:.6e} {nz:.6e}")?;
        writeln!(writer, "    outer loop")?;
        for corner in [tri.a, tri.b, tri.c] {
            writeln!(
                writer,
                "      vertex {:.6e} {:.6e} {:.6e}",
                corner.x, corner.y, corner.z
            )?;
        }
        writeln!(writer, "    endloop")?;
        writeln!(writer, "  endfacet")?;
    }

    writeln!(writer, "endsolid {name}")?;
    Ok(())
}

fn facet_normal(tri: &Triangle) -> [f64; 3] {
    tri.normal()
        .map_or([0.0, 0.0, 0.0], |n| [n.x, n.y, n.z])
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::read::read_stl;
    use mesh_core::Vertex;

    fn sample_mesh() -> TriMesh {
        let mut mesh = TriMesh::new();
        mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
        mesh.vertices.push(Vertex::from_coords(10.0, 0.0, 0.0));
        mesh.vertices.push(Vertex::from_coords(0.0, 10.0, 0.0));
        mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 10.0));
        mesh.faces.push([0, 1, 2]);
        mesh.faces.push([0, 3, 1]);
        mesh
    }

    #[test]
    fn binary_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("mesh.stl");
        let original = sample_mesh();

        write_stl(&original, &path, "Cord_Loops", StlFormat::Binary).expect("write");
        let loaded = read_stl(&path).expect("read");

        assert_eq!(loaded.face_count(), original.face_count());
        // STL flattens shared vertices: 3 per face.
        assert_eq!(loaded.vertex_count(), original.face_count() * 3);
        assert!((loaded.vertices[1].position.x - 10.0).abs() < 1e-5);
    }

    #[test]
    fn ascii_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("mesh_ascii.stl");
        let original = sample_mesh();

        write_stl(&original, &path, "Dura_Loops", StlFormat::Ascii).expect("write");
        let loaded = read_stl(&path).expect("read");

        assert_eq!(loaded.face_count(), original.face_count());
        for (a, b) in loaded.triangles().zip(original.triangles()) {
            assert!((a.a - b.a).norm() < 1e-5);
            assert!((a.b - b.b).norm() < 1e-5);
            assert!((a.c - b.c).norm() < 1e-5);
        }
    }

    #[test]
    fn solid_name_lands_in_ascii_output() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("named.stl");

        write_stl(&sample_mesh(), &path, "sub-01_Nerveroots", StlFormat::Ascii).expect("write");
        let text = std::fs::read_to_string(&path).expect("read back");

        assert!(text.starts_with("solid sub-01_Nerveroots"));
        assert!(text.trim_end().ends_with("endsolid sub-01_Nerveroots"));
    }

    #[test]
    fn solid_name_lands_in_binary_header() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("named_bin.stl");

        write_stl(&sample_mesh(), &path, "Cord_Loops", StlFormat::Binary).expect("write");
        let bytes = std::fs::read(&path).expect("read back");

        assert!(bytes.starts_with(b"Cord_Loops"));
        // Header + count + 2 facets.
        assert_eq!(bytes.len(), 80 + 4 + 2 * 50);
    }

    #[test]
    fn empty_mesh_writes_zero_facets() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("empty.stl");

        write_stl(&TriMesh::new(), &path, "empty", StlFormat::Binary).expect("write");
        let loaded = read_stl(&path).expect("read");
        assert!(loaded.is_empty());
    }
}
