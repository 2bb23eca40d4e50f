//! Nerve-root centerlines.

use mesh_core::Point3;

use crate::side::Side;

/// One nerve-root centerline, from root attachment to ganglion exit.
///
/// Points run from the attachment near the cord (sorted descending by
/// height) to the single ganglion exit point, which is always last.
#[derive(Debug, Clone, PartialEq)]
pub struct RootLine {
    /// Anatomical segment label (`L1` .. `S2`).
    pub segment: String,
    /// Exit side of the canal.
    pub side: Side,
    /// Centerline points, exit point last.
    pub points: Vec<Point3<f64>>,
}

impl RootLine {
    /// Create a tagged centerline.
    #[must_use]
    pub fn new(segment: impl Into<String>, side: Side, points: Vec<Point3<f64>>) -> Self {
        Self {
            segment: segment.into(),
            side,
            points,
        }
    }

    /// The proximal entry point (first point, nearest the cord).
    #[must_use]
    pub fn entry_point(&self) -> Option<&Point3<f64>> {
        self.points.first()
    }

    /// The ganglion exit point (always the last point).
    #[must_use]
    pub fn exit_point(&self) -> Option<&Point3<f64>> {
        self.points.last()
    }

    /// Number of centerline points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when the line has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Display label, e.g. `L5_R`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}_{}", self.segment, self.side)
    }

    /// Replace the points, keeping the segment and side tags.
    #[must_use]
    pub fn with_points(&self, points: Vec<Point3<f64>>) -> Self {
        Self {
            segment: self.segment.clone(),
            side: self.side,
            points,
        }
    }
}

/// All nerve-root lines of one participant.
///
/// Holds exactly two lines per segment, interleaved left/right, so the line
/// for `(segment_index, side)` sits at flattened position
/// `2 * segment_index + side.offset()`. Downstream consumers (the tube
/// builder pairing radii to segments) iterate in this order.
#[derive(Debug, Clone, Default)]
pub struct RootLineSet {
    lines: Vec<RootLine>,
}

impl RootLineSet {
    /// Create an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Append one segment's left/right pair.
    ///
    /// Ignores the pair and returns `false` when the sides are not a
    /// left/right pair in that order.
    pub fn push_pair(&mut self, left: RootLine, right: RootLine) -> bool {
        if left.side != Side::Left || right.side != Side::Right {
            return false;
        }
        self.lines.push(left);
        self.lines.push(right);
        true
    }

    /// Lines in flattened order.
    #[must_use]
    pub fn lines(&self) -> &[RootLine] {
        &self.lines
    }

    /// Total number of lines (`2 *` segment count).
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// True when the set holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of segments represented.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.lines.len() / 2
    }

    /// Line for `(segment_index, side)` via the flattening invariant.
    #[must_use]
    pub fn line(&self, segment_index: usize, side: Side) -> Option<&RootLine> {
        self.lines.get(2 * segment_index + side.offset())
    }

    /// Verify the interleaving invariant over the whole set.
    #[must_use]
    pub fn is_interleaved(&self) -> bool {
        self.lines.len() % 2 == 0
            && self.lines.chunks_exact(2).all(|pair| {
                pair[0].side == Side::Left
                    && pair[1].side == Side::Right
                    && pair[0].segment == pair[1].segment
            })
    }

    /// Map every line's points, keeping tags and ordering.
    #[must_use]
    pub fn map_points<F>(&self, mut f: F) -> Self
    where
        F: FnMut(&RootLine) -> Vec<Point3<f64>>,
    {
        Self {
            lines: self
                .lines
                .iter()
                .map(|line| line.with_points(f(line)))
                .collect(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::cast_precision_loss)]
mod tests {
    use super::*;

    fn line(segment: &str, side: Side, z0: f64) -> RootLine {
        RootLine::new(
            segment,
            side,
            vec![
                Point3::new(0.0, 0.0, z0),
                Point3::new(1.0, 0.0, z0 - 1.0),
                Point3::new(2.0, 0.0, z0 - 2.0),
            ],
        )
    }

    fn sample_set(segments: &[&str]) -> RootLineSet {
        let mut set = RootLineSet::new();
        for (i, seg) in segments.iter().enumerate() {
            let z = 100.0 - 10.0 * i as f64;
            assert!(set.push_pair(line(seg, Side::Left, z), line(seg, Side::Right, z)));
        }
        set
    }

    #[test]
    fn flattening_invariant_holds() {
        let segments = ["L1", "L2", "L3", "L4", "L5", "S1", "S2"];
        let set = sample_set(&segments);

        assert_eq!(set.len(), 2 * segments.len());
        assert_eq!(set.segment_count(), segments.len());
        assert!(set.is_interleaved());

        for (i, seg) in segments.iter().enumerate() {
            let left = set.line(i, Side::Left).unwrap();
            let right = set.line(i, Side::Right).unwrap();
            assert_eq!(left.segment, *seg);
            assert_eq!(right.segment, *seg);
            // Tags agree with raw flattened positions.
            assert_eq!(set.lines()[2 * i].side, Side::Left);
            assert_eq!(set.lines()[2 * i + 1].side, Side::Right);
        }
    }

    #[test]
    fn push_pair_rejects_swapped_sides() {
        let mut set = RootLineSet::new();
        assert!(!set.push_pair(line("L1", Side::Right, 0.0), line("L1", Side::Left, 0.0)));
        assert!(set.is_empty());
    }

    #[test]
    fn entry_and_exit_points() {
        let l = line("S1", Side::Left, 30.0);
        assert_eq!(l.entry_point().unwrap().z, 30.0);
        assert_eq!(l.exit_point().unwrap().z, 28.0);
        assert_eq!(l.label(), "S1_L");
    }

    #[test]
    fn map_points_keeps_tags() {
        let set = sample_set(&["L1", "L2"]);
        let doubled = set.map_points(|l| {
            l.points
                .iter()
                .map(|p| Point3::new(p.x * 2.0, p.y, p.z))
                .collect()
        });

        assert!(doubled.is_interleaved());
        assert_eq!(doubled.len(), set.len());
        assert_eq!(
            doubled.line(1, Side::Right).unwrap().points[2].x,
            set.line(1, Side::Right).unwrap().points[2].x * 2.0
        );
    }
}
