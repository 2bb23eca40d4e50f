//! STL import and export.
//!
//! The pipeline hands reconstructed surfaces to the manual sculpting stage
//! as STL files, and reads the exported cord surface back for the
//! nerve-root relocation step. Both directions live here:
//!
//! - [`write_stl`] - binary or ASCII, with a deterministic solid name
//! - [`read_stl`] - auto-detects binary vs ASCII
//!
//! Binary layout: 80-byte header, `u32` triangle count, then 50 bytes per
//! facet (normal, three vertices as `f32` triples, attribute word). ASCII is
//! the `solid`/`facet`/`vertex` line format.
//!
//! STL stores raw triangles, so a read mesh has three vertices per face and
//! no connectivity; that is sufficient for the vertex queries made against
//! it.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod read;
mod write;

pub use error::{StlError, StlResult};
pub use read::read_stl;
pub use write::{write_stl, StlFormat};
