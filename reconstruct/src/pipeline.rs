//! Stage orchestration.

use anyhow::Context;
use curve_smooth::smooth_line;
use markup_import::{load_participant, ParticipantAnnotations};
use markup_types::{LoopStack, RootLine, RootLineSet};
use mesh_core::TriMesh;
use mesh_loft::{loft_loop_stack, LoftParams};
use mesh_seal::seal_boundaries;
use mesh_stl::{write_stl, StlFormat};
use mesh_tube::sweep_tube;
use root_anchor::anchor_lines;
use tracing::info;

use crate::config::Config;
use crate::output::OutputGuard;

/// Intermediate cross-sections inserted between consecutive loops.
const BRIDGE_CUTS: usize = 6;
/// Cord upsampling depth for nearest-point queries.
const SUBDIVISION_DEPTH: usize = 3;
/// Sides of each nerve-root tube ring.
const BEVEL_SEGMENTS: usize = 16;

/// Run the full reconstruction for the configured participant.
///
/// Stages run strictly in sequence; the cord surface is handed to the
/// anchoring stage through its exported STL file. On any failure, files
/// already written by this run are removed before the error propagates.
///
/// # Errors
///
/// Fails on the first stage error: unreadable annotations, incompatible
/// loop stacks, degenerate geometry, or an export failure.
pub fn run(config: &Config) -> anyhow::Result<()> {
    config.validate()?;

    let annotations = load_participant(
        &config.annotation_base,
        &config.participant,
        &config.segments,
    )
    .context("loading annotations")?;

    std::fs::create_dir_all(&config.output_dir)
        .with_context(|| format!("creating output dir {}", config.output_dir.display()))?;

    let mut guard = OutputGuard::new();
    let result = run_stages(config, &annotations, &mut guard);
    if result.is_err() {
        guard.discard();
    }
    result
}

fn run_stages(
    config: &Config,
    annotations: &ParticipantAnnotations,
    guard: &mut OutputGuard,
) -> anyhow::Result<()> {
    let loft_params = LoftParams::default()
        .with_samples_per_point(config.samples_per_point)
        .with_bridge_cuts(BRIDGE_CUTS);

    export_loop_surface(config, guard, &annotations.dura, "Dura", &loft_params)?;
    let cord_path = export_loop_surface(config, guard, &annotations.cord, "Cord", &loft_params)?;

    // The cord surface is read back from disk: anchoring must see exactly
    // the exported geometry.
    let anchored = anchor_lines(&cord_path, &annotations.roots, SUBDIVISION_DEPTH)
        .context("anchoring nerve roots")?;

    let smoothed = smooth_roots(config, &anchored)?;
    let tubes = loft_root_tubes(config, &smoothed)?;

    let roots_path = config.output_path("Nerveroots");
    let solid = format!("{}_Nerveroots", config.participant);
    write_stl(&tubes, &roots_path, &solid, StlFormat::Binary)
        .context("exporting nerve-root tubes")?;
    guard.track(&roots_path);

    info!(
        dura = %config.output_path("Dura").display(),
        cord = %cord_path.display(),
        nerveroots = %roots_path.display(),
        "reconstruction complete; meshes are ready for manual sculpting"
    );
    Ok(())
}

/// Loft one loop stack and export it as `output/{participant}_{label}.stl`.
fn export_loop_surface(
    config: &Config,
    guard: &mut OutputGuard,
    stack: &LoopStack,
    label: &str,
    params: &LoftParams,
) -> anyhow::Result<std::path::PathBuf> {
    let mesh = loft_loop_stack(stack.loops(), params)
        .with_context(|| format!("lofting {label} loops"))?;
    info!(
        label,
        loops = stack.len(),
        vertices = mesh.vertex_count(),
        faces = mesh.face_count(),
        "lofted surface"
    );

    let path = config.output_path(label);
    write_stl(&mesh, &path, &format!("{label}_Loops"), StlFormat::Binary)
        .with_context(|| format!("exporting {label} surface"))?;
    guard.track(&path);
    Ok(path)
}

/// Smooth and resample every anchored line, keeping the set's order.
fn smooth_roots(config: &Config, anchored: &RootLineSet) -> anyhow::Result<RootLineSet> {
    let mut smoothed = RootLineSet::new();
    for pair in anchored.lines().chunks_exact(2) {
        let left = smooth_root(config, &pair[0])?;
        let right = smooth_root(config, &pair[1])?;
        smoothed.push_pair(left, right);
    }
    Ok(smoothed)
}

fn smooth_root(config: &Config, line: &RootLine) -> anyhow::Result<RootLine> {
    let points = smooth_line(&line.points, config.n_interpolate, config.smoothing)
        .with_context(|| format!("smoothing nerve line {}", line.label()))?;
    Ok(line.with_points(points))
}

/// Sweep, cap and merge all nerve-root tubes into one mesh.
fn loft_root_tubes(config: &Config, roots: &RootLineSet) -> anyhow::Result<TriMesh> {
    let mut merged = TriMesh::new();

    for (index, line) in roots.lines().iter().enumerate() {
        // Flattened ordering: both sides of segment i share radii[i].
        let radius = config.radii[index / 2];

        let mut tube = sweep_tube(&line.points, radius, BEVEL_SEGMENTS)
            .with_context(|| format!("lofting tube for {}", line.label()))?;
        seal_boundaries(&mut tube)
            .with_context(|| format!("capping tube for {}", line.label()))?;
        merged.merge(&tube);
    }

    info!(
        tubes = roots.len(),
        vertices = merged.vertex_count(),
        "lofted nerve-root tubes"
    );
    Ok(merged)
}
