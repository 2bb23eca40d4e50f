//! Entry-point relocation against the cord surface.

use std::path::Path;

use markup_types::{RootLine, RootLineSet};
use mesh_core::Point3;
use mesh_query::{Axis, SurfaceProbe};
use mesh_stl::read_stl;
use tracing::{debug, info};

use crate::error::{AnchorError, AnchorResult};

/// Upsampling depth applied to the cord surface before querying.
pub const CORD_SUBDIVISION_DEPTH: usize = 3;

/// How far the inner point sits along closest -> centroid.
pub const INNER_POINT_FRACTION: f64 = 0.75;

/// Anchor every nerve line of `roots` onto the cord surface exported at
/// `cord_stl`.
///
/// Order and tags of the set are preserved; each returned line carries
/// `[inner, closest]` prepended to its original points.
///
/// # Errors
///
/// Fails when the cord STL cannot be read, the surface is degenerate, or
/// any line cannot be relocated (empty line, slice missing the cord).
pub fn anchor_lines(
    cord_stl: &Path,
    roots: &RootLineSet,
    subdivision_depth: usize,
) -> AnchorResult<RootLineSet> {
    let cord = read_stl(cord_stl)?;
    let probe = SurfaceProbe::from_mesh(&cord, subdivision_depth)?;
    info!(
        cord = %cord_stl.display(),
        vertices = probe.mesh().vertex_count(),
        "anchoring nerve roots to cord surface"
    );

    let mut anchored = RootLineSet::new();
    for pair in roots.lines().chunks_exact(2) {
        let left = anchor_line(&probe, &pair[0])?;
        let right = anchor_line(&probe, &pair[1])?;
        anchored.push_pair(left, right);
    }
    Ok(anchored)
}

/// Anchor a single nerve line against a prepared surface probe.
///
/// # Errors
///
/// Fails when the line is empty or the axial slice through its closest
/// surface point misses the cord.
pub fn anchor_line(probe: &SurfaceProbe, line: &RootLine) -> AnchorResult<RootLine> {
    let entry = line.entry_point().ok_or_else(|| AnchorError::EmptyLine {
        line: line.label(),
    })?;

    let closest = probe.nearest_vertex(entry);
    let slice = probe
        .axis_slice(Axis::Z, closest)
        .map_err(|source| AnchorError::Relocate {
            line: line.label(),
            source,
        })?;
    let centroid = slice.centroid();

    let inner = inner_point(&closest, &centroid);
    debug!(
        line = %line.label(),
        ?closest,
        ?centroid,
        "relocated entry point"
    );

    let mut points = Vec::with_capacity(line.len() + 2);
    points.push(inner);
    points.push(closest);
    points.extend_from_slice(&line.points);

    Ok(line.with_points(points))
}

/// The transitional point between the surface and the section center.
fn inner_point(closest: &Point3<f64>, centroid: &Point3<f64>) -> Point3<f64> {
    closest + (centroid - closest) * INNER_POINT_FRACTION
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::cast_precision_loss)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use markup_types::Side;
    use mesh_loft::{loft_loop_stack, LoftParams};
    use mesh_stl::{write_stl, StlFormat};

    fn circle(n: usize, radius: f64, z: f64) -> Vec<Point3<f64>> {
        (0..n)
            .map(|k| {
                let theta = 2.0 * std::f64::consts::PI * k as f64 / n as f64;
                Point3::new(radius * theta.cos(), radius * theta.sin(), z)
            })
            .collect()
    }

    /// Export a cord-like cylinder (radius 5, z in [0, 40]) to STL.
    fn cord_fixture(dir: &tempfile::TempDir) -> std::path::PathBuf {
        let loops: Vec<_> = (0..5).map(|i| circle(24, 5.0, 40.0 - 10.0 * i as f64)).collect();
        let cord = loft_loop_stack(&loops, &LoftParams::default()).expect("loft");

        let path = dir.path().join("sub-01_Cord.stl");
        write_stl(&cord, &path, "Cord_Loops", StlFormat::Binary).expect("write");
        path
    }

    fn root_pair(z: f64) -> (RootLine, RootLine) {
        let mk = |side: Side, sign: f64| {
            RootLine::new(
                "L1",
                side,
                vec![
                    Point3::new(sign * 7.0, 0.5, z),
                    Point3::new(sign * 10.0, 1.0, z - 3.0),
                    Point3::new(sign * 13.0, 2.0, z - 6.0),
                    Point3::new(sign * 15.0, 3.0, z - 9.0),
                ],
            )
        };
        (mk(Side::Left, -1.0), mk(Side::Right, 1.0))
    }

    #[test]
    fn anchored_line_grows_by_two_points() {
        let dir = tempfile::tempdir().expect("tempdir");
        let cord_path = cord_fixture(&dir);

        let mut roots = RootLineSet::new();
        let (left, right) = root_pair(20.0);
        roots.push_pair(left.clone(), right);

        let anchored = anchor_lines(&cord_path, &roots, 2).expect("anchor");
        assert_eq!(anchored.len(), roots.len());
        assert!(anchored.is_interleaved());

        let anchored_left = anchored.line(0, Side::Left).expect("left");
        assert_eq!(anchored_left.len(), left.len() + 2);
        // Original points are untouched, shifted by two.
        assert_eq!(&anchored_left.points[2..], &left.points[..]);
    }

    #[test]
    fn closest_point_lies_on_the_cord_wall() {
        let dir = tempfile::tempdir().expect("tempdir");
        let cord_path = cord_fixture(&dir);

        let mut roots = RootLineSet::new();
        let (left, right) = root_pair(20.0);
        roots.push_pair(left, right);

        let anchored = anchor_lines(&cord_path, &roots, 3).expect("anchor");
        let line = anchored.line(0, Side::Right).expect("right");

        // Second point is the surface projection: radius ~= 5.
        let closest = line.points[1];
        let r = (closest.x.powi(2) + closest.y.powi(2)).sqrt();
        assert!((r - 5.0).abs() < 0.4, "closest point radius {r}");
    }

    #[test]
    fn inner_point_is_three_quarters_toward_the_centroid() {
        let dir = tempfile::tempdir().expect("tempdir");
        let cord_path = cord_fixture(&dir);

        let mut roots = RootLineSet::new();
        let (left, right) = root_pair(20.0);
        roots.push_pair(left, right);

        let anchored = anchor_lines(&cord_path, &roots, 2).expect("anchor");
        let line = anchored.line(0, Side::Left).expect("left");

        let inner = line.points[0];
        let closest = line.points[1];

        // The cylinder axis is x = y = 0, so the slice centroid sits on it:
        // inner = closest + 0.75 * (centroid - closest) = 0.25 * closest
        // in x and y.
        assert_relative_eq!(inner.x, closest.x * 0.25, epsilon = 0.15);
        assert_relative_eq!(inner.y, closest.y * 0.25, epsilon = 0.15);
        assert_relative_eq!(inner.z, closest.z, epsilon = 0.15);
    }

    #[test]
    fn empty_line_is_rejected_with_its_label() {
        let dir = tempfile::tempdir().expect("tempdir");
        let cord_path = cord_fixture(&dir);
        let cord = read_stl(&cord_path).expect("read");
        let probe = SurfaceProbe::from_mesh(&cord, 0).expect("probe");

        let empty = RootLine::new("S2", Side::Left, Vec::new());
        let err = anchor_line(&probe, &empty).expect_err("empty line");
        assert!(err.to_string().contains("S2_L"));
    }

    #[test]
    fn missing_cord_file_fails() {
        let roots = RootLineSet::new();
        let result = anchor_lines(Path::new("missing_cord.stl"), &roots, 1);
        assert!(matches!(result, Err(AnchorError::Surface(_))));
    }
}
