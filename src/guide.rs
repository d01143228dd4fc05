//! # Stepscene guide
//!
//! This module is a standalone walkthrough of stepscene's architecture and
//! public API. If you are looking for copy/paste commands, start with the
//! repository `README.md`. If you are implementing new walkthroughs, start
//! here.
//!
//! ---
//!
//! ## Core concepts
//!
//! - [`Stage`](crate::Stage): the rendering collaborator. It creates shapes
//!   and labels, morphs content in place, draws and removes outlines, and
//!   commits batches with `play`
//! - [`RecordingStage`](crate::RecordingStage): the in-memory implementation;
//!   its product is a [`SceneScript`](crate::SceneScript)
//! - [`Binder`](crate::Binder): the state-to-visual map. One live handle per
//!   logical key, created on first sight, morphed on update, faded on removal
//! - [`HighlightSlot`](crate::HighlightSlot): one transient outline at a
//!   time, cleared before its replacement appears
//! - [`ValueReadout`](crate::ValueReadout): a running aggregate display that
//!   morphs in place
//!
//! ---
//!
//! ## One authoritative state
//!
//! Every walkthrough owns exactly one logical structure per run: a last-seen
//! map, a bucket map, two frequency tables, an arena [`Trie`](crate::Trie), a
//! remaining-count map, a jewel set. The returned result and every visual
//! update read that same structure, so the picture cannot drift from the
//! answer.
//!
//! ---
//!
//! ## The binder contract
//!
//! [`Binder::upsert`](crate::Binder::upsert) guarantees exactly one live
//! handle per key afterwards:
//!
//! - a new key creates a label, stacked after the previously inserted entry
//!   (or an explicit anchor for the first), in insertion order;
//! - an existing key creates the replacement at the old handle's position and
//!   morphs the old into it; the old handle is superseded, never duplicated.
//!
//! [`Binder::remove`](crate::Binder::remove) is a no-op for absent keys.
//! [`Binder::highlight`](crate::Binder::highlight) outlines a single entry or
//! a contiguous group; the caller clears it before drawing the next one in
//! the same slot. Unregistered keys and stale element ids fail fast as
//! [`StepsceneError::Precondition`](crate::StepsceneError); there is no
//! recovery path. Expected algorithmic misses (trie search, ransom-note
//! infeasibility) are plain `bool` results, never errors.
//!
//! ---
//!
//! ## Driving a stage
//!
//! ```rust
//! use stepscene::{RecordingStage, explain_min_repeat_distance};
//!
//! # fn main() -> stepscene::StepsceneResult<()> {
//! let mut stage = RecordingStage::new();
//! let result = explain_min_repeat_distance(&mut stage, &[3, 4, 2, 3, 4, 7])?;
//! assert_eq!(result, 4);
//!
//! let script = stage.into_script();
//! assert!(!script.is_empty());
//! # Ok(())
//! # }
//! ```
//!
//! The script is ephemeral: serialize it with `serde_json` if you want to
//! keep it (`stepscene play --out scene.json` does exactly that), otherwise
//! it is dropped at the end of the run. Nothing persists between runs.
//!
//! ---
//!
//! ## Coordinates and layout
//!
//! Positions are `kurbo::Point` in scene units, +x right and +y down. Layout
//! here is deliberately minimal: rows and grids of labeled cells
//! ([`row_of_cells`](crate::row_of_cells) /
//! [`grid_of_cells`](crate::grid_of_cells)) plus relative placement along a
//! [`Direction`](crate::Direction). Easing, timing, colors, and rasterization
//! belong to whatever executes the script; a [`Tint`](crate::Tint) or
//! [`OutlineStyle`](crate::OutlineStyle) names intent, not pixels.
