//! Candidate filtering
//!
//! Derives letter constraints from a guess history and walks the trie index,
//! skipping every branch the constraints rule out.

mod constraints;
mod engine;

pub use constraints::Constraints;
pub use engine::{Solver, Suggestion};
