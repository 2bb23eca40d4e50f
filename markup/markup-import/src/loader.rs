//! Participant annotation loading.

use std::fs;
use std::path::{Path, PathBuf};

use markup_types::{LoopStack, RootLine, RootLineSet, SectionLoop, Side};
use mesh_core::Point3;
use tracing::{debug, error, info};

use crate::error::{ImportError, ImportResult};
use crate::markup::read_markup_points;

/// One participant's fully loaded annotation set.
#[derive(Debug, Clone)]
pub struct ParticipantAnnotations {
    /// Dura cross-sections, stacked by descending height.
    pub dura: LoopStack,
    /// Cord cross-sections, stacked by descending height.
    pub cord: LoopStack,
    /// Nerve-root centerlines, interleaved left/right per segment.
    pub roots: RootLineSet,
}

/// Load a participant's annotations from the annotation base directory.
///
/// The participant's directory is the first one whose *name equals* the
/// participant id, searching each directory's immediate children (sorted by
/// name) before descending, depth-first. Within it:
///
/// - files with `cord` in their name become cord loops, files with `dura`
///   become dura loops, anything else is ignored,
/// - for every segment and side, `{participant}_nerveroots_{seg}_{side}.json`
///   provides the root points (sorted descending by `(z, y, x)`) and
///   `{participant}_ganglions_{seg}_{side}.json` the exit point (its leading
///   marker dropped when two or more points are present).
///
/// # Errors
///
/// Fails with a diagnostic when the base path is missing, the participant
/// directory cannot be found, any markup file is unreadable, or a ganglion
/// file does not reduce to exactly one exit point.
pub fn load_participant(
    base: &Path,
    participant: &str,
    segments: &[String],
) -> ImportResult<ParticipantAnnotations> {
    if !base.exists() {
        error!(path = %base.display(), "annotation base path does not exist");
        return Err(ImportError::BasePathMissing {
            path: base.to_path_buf(),
        });
    }

    let annotation_dir =
        find_participant_dir(base, participant)?.ok_or_else(|| ImportError::ParticipantNotFound {
            participant: participant.to_string(),
            base: base.to_path_buf(),
        })?;
    debug!(dir = %annotation_dir.display(), "found participant annotation directory");

    let (dura, cord) = load_loop_stacks(&annotation_dir)?;
    let roots = load_root_lines(&annotation_dir, participant, segments)?;

    info!(
        participant,
        dura_loops = dura.len(),
        cord_loops = cord.len(),
        root_lines = roots.len(),
        "loaded annotations"
    );

    Ok(ParticipantAnnotations { dura, cord, roots })
}

/// First directory named `participant`: each level's children are checked
/// (sorted by name) before recursing into them.
fn find_participant_dir(dir: &Path, participant: &str) -> ImportResult<Option<PathBuf>> {
    let subdirs = sorted_subdirs(dir)?;

    for sub in &subdirs {
        if sub.file_name().is_some_and(|n| n == participant) {
            return Ok(Some(sub.clone()));
        }
    }
    for sub in &subdirs {
        if let Some(found) = find_participant_dir(sub, participant)? {
            return Ok(Some(found));
        }
    }
    Ok(None)
}

fn sorted_subdirs(dir: &Path) -> ImportResult<Vec<PathBuf>> {
    let mut subdirs = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| ImportError::io(dir, e))? {
        let entry = entry.map_err(|e| ImportError::io(dir, e))?;
        let path = entry.path();
        if path.is_dir() {
            subdirs.push(path);
        }
    }
    subdirs.sort();
    Ok(subdirs)
}

/// Partition the directory's curve files into cord and dura stacks.
fn load_loop_stacks(dir: &Path) -> ImportResult<(LoopStack, LoopStack)> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| ImportError::io(dir, e))? {
        let entry = entry.map_err(|e| ImportError::io(dir, e))?;
        let path = entry.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();

    let mut dura = LoopStack::new();
    let mut cord = LoopStack::new();
    for path in files {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        if name.contains("cord") {
            cord.push(SectionLoop::new(read_markup_points(&path)?));
        } else if name.contains("dura") {
            dura.push(SectionLoop::new(read_markup_points(&path)?));
        } else {
            debug!(file = %path.display(), "ignoring non-loop annotation file");
        }
    }

    dura.sort_descending();
    cord.sort_descending();
    Ok((dura, cord))
}

/// Build the interleaved left/right root line set.
fn load_root_lines(
    dir: &Path,
    participant: &str,
    segments: &[String],
) -> ImportResult<RootLineSet> {
    let mut roots = RootLineSet::new();

    for segment in segments {
        let left = load_root_line(dir, participant, segment, Side::Left)?;
        let right = load_root_line(dir, participant, segment, Side::Right)?;
        roots.push_pair(left, right);
    }

    Ok(roots)
}

fn load_root_line(
    dir: &Path,
    participant: &str,
    segment: &str,
    side: Side,
) -> ImportResult<RootLine> {
    let root_path = dir.join(format!(
        "{participant}_nerveroots_{segment}_{}.json",
        side.letter()
    ));
    let mut points = read_markup_points(&root_path)?;
    sort_descending_zyx(&mut points);

    let ganglion_path = dir.join(format!(
        "{participant}_ganglions_{segment}_{}.json",
        side.letter()
    ));
    points.push(exit_point(&ganglion_path)?);

    Ok(RootLine::new(segment, side, points))
}

/// The single ganglion exit point of a ganglion markup file.
///
/// Exports with two or more points carry a leading reference marker that is
/// dropped; exactly one point must remain.
fn exit_point(path: &Path) -> ImportResult<Point3<f64>> {
    let mut points = read_markup_points(path)?;
    if points.len() >= 2 {
        points.remove(0);
    }

    if points.len() != 1 {
        return Err(ImportError::MalformedGanglion {
            path: path.to_path_buf(),
            count: points.len(),
        });
    }
    Ok(points[0])
}

/// Sort descending by z, then y, then x.
fn sort_descending_zyx(points: &mut [Point3<f64>]) {
    points.sort_by(|a, b| {
        b.z.total_cmp(&a.z)
            .then(b.y.total_cmp(&a.y))
            .then(b.x.total_cmp(&a.x))
    });
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn markup_json(points: &[[f64; 3]]) -> String {
        let control_points: Vec<String> = points
            .iter()
            .map(|p| format!(r#"{{"position": [{}, {}, {}]}}"#, p[0], p[1], p[2]))
            .collect();
        format!(
            r#"{{"markups": [{{"controlPoints": [{}]}}]}}"#,
            control_points.join(",")
        )
    }

    fn segment_labels(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|s| (*s).to_string()).collect()
    }

    /// Lay out a minimal annotation tree for one participant.
    fn write_participant(base: &Path, participant: &str, segments: &[&str]) {
        let dir = base.join("study").join(participant);
        fs::create_dir_all(&dir).expect("mkdir");

        // Two cord and two dura loops, written lowest first to exercise the
        // descending sort.
        for (i, z) in [(0, 10.0), (1, 50.0)] {
            fs::write(
                dir.join(format!("{participant}_cord_{i}.json")),
                markup_json(&[[0.0, 0.0, z], [1.0, 0.0, z], [0.0, 1.0, z]]),
            )
            .expect("write cord");
            fs::write(
                dir.join(format!("{participant}_dura_{i}.json")),
                markup_json(&[[0.0, 0.0, z + 1.0], [2.0, 0.0, z + 1.0], [0.0, 2.0, z + 1.0]]),
            )
            .expect("write dura");
        }

        // A stray file that matches neither pattern.
        fs::write(dir.join("notes.txt"), "sculpting notes").expect("write notes");

        for (i, seg) in segments.iter().enumerate() {
            let z = 100.0 - 10.0 * f64::from(u8::try_from(i).unwrap_or(0));
            for side in ["L", "R"] {
                fs::write(
                    dir.join(format!("{participant}_nerveroots_{seg}_{side}.json")),
                    // Unsorted on purpose: loader must sort by descending z.
                    markup_json(&[[1.0, 0.0, z - 2.0], [0.0, 0.0, z], [0.5, 0.0, z - 1.0]]),
                )
                .expect("write roots");
                fs::write(
                    dir.join(format!("{participant}_ganglions_{seg}_{side}.json")),
                    // Two points: reference marker plus the exit point.
                    markup_json(&[[9.0, 9.0, 9.0], [3.0, 1.0, z - 5.0]]),
                )
                .expect("write ganglion");
            }
        }
    }

    #[test]
    fn missing_base_path_is_a_typed_error() {
        let result = load_participant(
            Path::new("/nonexistent/annotations"),
            "sub-01",
            &segment_labels(&["L1"]),
        );
        assert!(matches!(result, Err(ImportError::BasePathMissing { .. })));
    }

    #[test]
    fn unknown_participant_is_a_typed_error() {
        let tmp = tempfile::tempdir().expect("tempdir");
        write_participant(tmp.path(), "sub-01", &["L1"]);

        let result = load_participant(tmp.path(), "sub-99", &segment_labels(&["L1"]));
        assert!(matches!(result, Err(ImportError::ParticipantNotFound { .. })));
    }

    #[test]
    fn loads_and_orders_a_participant() {
        let tmp = tempfile::tempdir().expect("tempdir");
        write_participant(tmp.path(), "sub-01", &["L1", "L2"]);

        let annotations = load_participant(
            tmp.path(),
            "sub-01",
            &segment_labels(&["L1", "L2"]),
        )
        .expect("load");

        // Loops sorted by descending first-point height.
        assert_eq!(annotations.cord.len(), 2);
        assert_eq!(annotations.dura.len(), 2);
        assert!(annotations.cord.is_descending());
        assert!(annotations.dura.is_descending());
        assert_eq!(annotations.cord.loops()[0].height(), Some(50.0));

        // 2 segments -> 4 lines, interleaved left/right.
        assert_eq!(annotations.roots.len(), 4);
        assert!(annotations.roots.is_interleaved());

        let l1_left = annotations.roots.line(0, Side::Left).expect("L1 left");
        assert_eq!(l1_left.segment, "L1");
        // Root points sorted descending by z, exit point appended last.
        assert_eq!(l1_left.points[0].z, 100.0);
        assert_eq!(l1_left.points[1].z, 99.0);
        assert_eq!(l1_left.points[2].z, 98.0);
        assert_eq!(*l1_left.exit_point().expect("exit"), Point3::new(3.0, 1.0, 95.0));
    }

    #[test]
    fn ganglion_with_single_point_is_kept_as_is() {
        let tmp = tempfile::tempdir().expect("tempdir");
        write_participant(tmp.path(), "sub-02", &["L1"]);

        let dir = tmp.path().join("study").join("sub-02");
        fs::write(
            dir.join("sub-02_ganglions_L1_L.json"),
            markup_json(&[[7.0, 7.0, 7.0]]),
        )
        .expect("rewrite ganglion");

        let annotations =
            load_participant(tmp.path(), "sub-02", &segment_labels(&["L1"])).expect("load");
        let exit = *annotations
            .roots
            .line(0, Side::Left)
            .and_then(RootLine::exit_point)
            .expect("exit");
        assert_eq!(exit, Point3::new(7.0, 7.0, 7.0));
    }

    #[test]
    fn oversized_ganglion_is_rejected() {
        let tmp = tempfile::tempdir().expect("tempdir");
        write_participant(tmp.path(), "sub-03", &["L1"]);

        let dir = tmp.path().join("study").join("sub-03");
        fs::write(
            dir.join("sub-03_ganglions_L1_R.json"),
            markup_json(&[[0.0; 3], [1.0, 1.0, 1.0], [2.0, 2.0, 2.0]]),
        )
        .expect("rewrite ganglion");

        let result = load_participant(tmp.path(), "sub-03", &segment_labels(&["L1"]));
        assert!(matches!(
            result,
            Err(ImportError::MalformedGanglion { count: 2, .. })
        ));
    }

    #[test]
    fn missing_root_file_names_the_path() {
        let tmp = tempfile::tempdir().expect("tempdir");
        write_participant(tmp.path(), "sub-04", &["L1"]);

        let result = load_participant(
            tmp.path(),
            "sub-04",
            &segment_labels(&["L1", "S2"]), // S2 files were never written
        );
        let err = result.expect_err("missing segment files");
        assert!(err.to_string().contains("nerveroots_S2"));
    }
}
