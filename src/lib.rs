//! Stepscene renders step-by-step visual explanations of small algorithmic
//! exercises next to their reference solutions.
//!
//! A walkthrough runs its algorithm once and, in the same loop, drives a
//! [`Stage`] so the on-screen bookkeeping (dictionary lines, highlight
//! outlines, running aggregates) stays synchronized with the logical state.
//!
//! # Pipeline overview
//!
//! 1. **Solve + narrate**: `explain_*(stage, input) -> result`, recording ops
//! 2. **Batch**: ops accumulate until `play` commits one synchronized [`Step`]
//! 3. **Script**: the run's output is a [`SceneScript`], an ephemeral
//!    in-memory scene graph a renderer can execute (or a test can inspect)
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: a given input always records the same script.
//! - **One authoritative state**: each walkthrough owns exactly one
//!   counter/map/set per run; the result and the visuals both read it.
//! - **Fail fast**: stale handles and unregistered keys are precondition
//!   violations, never silently ignored.
//!
//! For a standalone walkthrough of the architecture, see [`crate::guide`].
#![forbid(unsafe_code)]

mod foundation;
mod scene;
mod structures;
mod sync;
mod walkthroughs;

/// High-level, standalone documentation of stepscene's concepts.
pub mod guide;

pub use foundation::core::{
    Direction, ElementId, OutlineStyle, Point, Tint, Vec2, digit_sum, non_negative,
};
pub use foundation::error::{StepsceneError, StepsceneResult};
pub use scene::layout::{CELL_PITCH, CELL_SIDE, Cell, grid_of_cells, row_of_cells};
pub use scene::ops::{ElementKind, ElementRecord, SceneOp, SceneScript, ShapeKind, Step};
pub use scene::stage::{RecordingStage, Stage};
pub use structures::trie::{NodeId, Trie};
pub use sync::binder::{Binder, HighlightSlot, ValueReadout};
pub use walkthroughs::{Outcome, TrieOp, WalkthroughInput, run, sample_inputs};
pub use walkthroughs::{
    anagrams::{explain_group_anagrams, group_anagrams, sorted_form},
    digit_pairs::{explain_max_digit_sum_pair, max_digit_sum_pair},
    grid_pairs::{equal_pairs, explain_equal_pairs},
    jewels::{explain_jewel_count, jewel_count},
    ransom_note::{can_construct, explain_can_construct},
    repeat_distance::{explain_min_repeat_distance, min_repeat_distance},
    trie_ops::{apply_trie_ops, explain_trie_ops},
};
