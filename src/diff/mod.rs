//! Structural diffing over path-indexed values
//!
//! Each side is flattened into a [`DiffIndex`] (path to leaf value). Two
//! structures differ exactly where their indexes disagree, so the engine
//! never has to walk both trees in lockstep.

mod engine;
mod index;

pub use engine::diff;
pub use index::{build_diff_index, DiffIndex};
