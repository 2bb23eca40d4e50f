//! The spinal anatomy reconstruction pipeline.
//!
//! Orchestrates the full run for one participant, strictly sequentially:
//!
//! 1. load the participant's annotations,
//! 2. loft and export the dura surface,
//! 3. loft and export the cord surface,
//! 4. anchor nerve-root lines onto the exported cord (read back from disk),
//! 5. smooth and resample each line,
//! 6. loft, cap and merge the nerve-root tubes, and export them.
//!
//! Every stage works on explicit mesh values; the only filesystem writes
//! are the three STL exports, and a failed run removes whatever it already
//! wrote so no partial output survives.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
mod output;
pub mod pipeline;
