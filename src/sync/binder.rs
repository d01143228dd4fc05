use std::collections::HashMap;
use std::hash::Hash;

use crate::{
    foundation::core::{Direction, ElementId, OutlineStyle, Point},
    foundation::error::{StepsceneError, StepsceneResult},
    scene::stage::Stage,
};

/// Keeps a 1:1 correspondence between logical state entries and the visual
/// elements representing them.
///
/// A binder owns the mapping from a logical key (array value, digit sum,
/// row tuple, trie node, ...) to the handle of the label currently showing
/// that entry, and sequences the minimal visual work per state transition:
/// create on first sight, morph in place on update, fade out on removal.
///
/// Invariants:
/// - at most one live handle exists per key;
/// - the handle count equals the number of distinct keys upserted and not
///   since removed;
/// - stacking order is insertion order: a new entry is placed relative to the
///   previously inserted one (or an explicit anchor for the first).
///
/// The binder is exclusively owned by the traversal loop driving it and is
/// discarded when the traversal ends.
pub struct Binder<K> {
    entries: HashMap<K, ElementId>,
    order: Vec<K>,
    stack_dir: Direction,
    stack_gap: f64,
    live_outlines: Vec<ElementId>,
}

impl<K> Binder<K>
where
    K: Eq + Hash + Clone + std::fmt::Debug,
{
    /// Binder stacking new entries half a unit below the previous one.
    pub fn new() -> Self {
        Self::stacking(Direction::Below, 0.5)
    }

    pub fn stacking(stack_dir: Direction, stack_gap: f64) -> Self {
        Self {
            entries: HashMap::new(),
            order: Vec::new(),
            stack_dir,
            stack_gap,
            live_outlines: Vec::new(),
        }
    }

    /// Create or update the entry for `key`, showing `content`.
    ///
    /// First sight of a key creates a new label placed along the binder's
    /// stacking direction from `anchor` when one is given, else from the
    /// previously inserted entry (the first upsert therefore requires an
    /// anchor). A repeat upsert morphs the existing label into the new
    /// content at its current position; the old handle is superseded. Either
    /// way exactly one live handle exists for `key` afterwards, and it is
    /// returned.
    pub fn upsert(
        &mut self,
        stage: &mut dyn Stage,
        key: K,
        content: &str,
        anchor: Option<ElementId>,
    ) -> StepsceneResult<ElementId> {
        if let Some(&old) = self.entries.get(&key) {
            let at = stage.position_of(old)?;
            let new = stage.create_label(content, at);
            stage.animate_transition(old, new)?;
            self.entries.insert(key.clone(), new);
            tracing::debug!(?key, old = old.0, new = new.0, "binder replace");
            return Ok(new);
        }

        let stack_after = match (anchor, self.order.last()) {
            (Some(a), _) => a,
            (None, Some(prev)) => self.entries[prev],
            (None, None) => {
                return Err(StepsceneError::precondition(format!(
                    "first upsert (key {key:?}) requires an explicit anchor"
                )));
            }
        };

        let id = stage.create_label(content, Point::ORIGIN);
        stage.position_relative_to(id, stack_after, self.stack_dir, self.stack_gap)?;
        self.entries.insert(key.clone(), id);
        self.order.push(key);
        Ok(id)
    }

    /// Detach and discard the handle for `key`; no-op if absent.
    pub fn remove(&mut self, stage: &mut dyn Stage, key: &K) -> StepsceneResult<()> {
        let Some(id) = self.entries.remove(key) else {
            return Ok(());
        };
        self.order.retain(|k| k != key);
        stage.fade_out(id)?;
        tracing::debug!(?key, id = id.0, "binder remove");
        Ok(())
    }

    /// Outline the entries for `keys` (a single key or a contiguous group).
    ///
    /// Every key must be registered; an unknown key is a precondition
    /// violation. The caller owns the returned outline and must `clear` it
    /// before drawing the next one in the same visual slot.
    pub fn highlight(
        &mut self,
        stage: &mut dyn Stage,
        keys: &[K],
        style: OutlineStyle,
    ) -> StepsceneResult<ElementId> {
        let mut targets = Vec::with_capacity(keys.len());
        for key in keys {
            let id = self.entries.get(key).ok_or_else(|| {
                StepsceneError::precondition(format!("highlight of unregistered key {key:?}"))
            })?;
            targets.push(*id);
        }
        let outline = stage.create_outline(&targets, style)?;
        self.live_outlines.push(outline);
        Ok(outline)
    }

    /// Remove a transient outline; no-op if already cleared.
    pub fn clear(&mut self, stage: &mut dyn Stage, outline: ElementId) -> StepsceneResult<()> {
        let Some(pos) = self.live_outlines.iter().position(|&o| o == outline) else {
            return Ok(());
        };
        self.live_outlines.swap_remove(pos);
        stage.fade_out(outline)?;
        Ok(())
    }

    /// Current handle for `key`, if registered.
    pub fn handle(&self, key: &K) -> Option<ElementId> {
        self.entries.get(key).copied()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of live handles, equal to the number of distinct keys bound.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K> Default for Binder<K>
where
    K: Eq + Hash + Clone + std::fmt::Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

/// The one-highlight-at-a-time cursor pattern: fading out the previous
/// outline before (or while) creating the next one in the same slot.
#[derive(Debug, Default)]
pub struct HighlightSlot {
    current: Option<ElementId>,
}

impl HighlightSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear whatever this slot holds, then outline `around`.
    pub fn replace(
        &mut self,
        stage: &mut dyn Stage,
        around: &[ElementId],
        style: OutlineStyle,
    ) -> StepsceneResult<ElementId> {
        self.clear(stage)?;
        let outline = stage.create_outline(around, style)?;
        self.current = Some(outline);
        Ok(outline)
    }

    /// Fade out the held outline, if any.
    pub fn clear(&mut self, stage: &mut dyn Stage) -> StepsceneResult<()> {
        if let Some(outline) = self.current.take() {
            stage.fade_out(outline)?;
        }
        Ok(())
    }
}

/// A single running-aggregate display (min so far, max so far, count) that
/// morphs in place each time the aggregate changes.
#[derive(Debug)]
pub struct ValueReadout {
    handle: ElementId,
}

impl ValueReadout {
    /// Create the readout showing `initial`, placed `gap` units along `dir`
    /// from `anchor`.
    pub fn anchored(
        stage: &mut dyn Stage,
        anchor: ElementId,
        dir: Direction,
        gap: f64,
        initial: &str,
    ) -> StepsceneResult<Self> {
        let handle = stage.create_label(initial, Point::ORIGIN);
        stage.position_relative_to(handle, anchor, dir, gap)?;
        Ok(Self { handle })
    }

    /// Morph the displayed value into `text`.
    pub fn set(&mut self, stage: &mut dyn Stage, text: &str) -> StepsceneResult<()> {
        let at = stage.position_of(self.handle)?;
        let new = stage.create_label(text, at);
        stage.animate_transition(self.handle, new)?;
        self.handle = new;
        Ok(())
    }

    pub fn handle(&self) -> ElementId {
        self.handle
    }
}
