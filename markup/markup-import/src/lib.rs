//! Annotation markup parsing and participant loading.
//!
//! Annotations arrive as one JSON markup file per curve: each dura or cord
//! cross-section, each nerve-root centerline, and each ganglion marking is
//! its own point-list export (`markups[0].controlPoints[*].position`). This
//! crate reads those files and assembles one participant's complete
//! annotation set:
//!
//! - [`read_markup_points`] - the ordered point list of one file
//! - [`load_participant`] - locate the participant's directory under the
//!   annotation base, classify its curve files, and build the
//!   [`ParticipantAnnotations`] consumed by the reconstruction pipeline
//!
//! Curve files are classified by filename substring (`cord` / `dura`), the
//! convention the annotation tooling exports; anything else in the
//! directory is ignored with a debug note.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod loader;
mod markup;

pub use error::{ImportError, ImportResult};
pub use loader::{load_participant, ParticipantAnnotations};
pub use markup::read_markup_points;
