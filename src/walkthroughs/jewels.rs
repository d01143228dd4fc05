//! Jewel/stone counting: a precomputed jewel set, one membership test per stone.

use std::collections::HashSet;

use crate::{
    foundation::core::{Direction, OutlineStyle, Point, Tint},
    foundation::error::StepsceneResult,
    scene::layout::row_of_cells,
    scene::stage::Stage,
    sync::binder::{HighlightSlot, ValueReadout},
};

/// Number of stones that are jewels. `("aA", "aAAbbbb")` → 3.
pub fn jewel_count(jewels: &str, stones: &str) -> u64 {
    let jewel_set: HashSet<char> = jewels.chars().collect();
    stones.chars().filter(|ch| jewel_set.contains(ch)).count() as u64
}

/// Narrated version of [`jewel_count`]: one jewel set decides membership for
/// both the tally and each stone's hit/miss tint.
#[tracing::instrument(skip(stage))]
pub fn explain_jewel_count(
    stage: &mut dyn Stage,
    jewels: &str,
    stones: &str,
) -> StepsceneResult<u64> {
    stage.create_label("Jewels and Stones", Point::new(0.0, -3.2));
    stage.play();

    stage.create_label(&format!("Jewels: {jewels}"), Point::new(-6.0, -2.0));
    stage.create_label(&format!("Stones: {stones}"), Point::new(-6.0, -1.4));
    stage.play();

    let jewel_set: HashSet<char> = jewels.chars().collect();
    let mut sorted_jewels: Vec<char> = jewel_set.iter().copied().collect();
    sorted_jewels.sort_unstable();
    let shown = sorted_jewels
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    stage.create_label(&format!("Jewels Set: {{{shown}}}"), Point::new(-6.0, -0.4));
    stage.play();

    let stone_chars: Vec<char> = stones.chars().collect();
    let stone_cells = row_of_cells(stage, &stone_chars, Point::new(-2.0, -0.4), 1.0)?;
    stage.play();

    let count_header = stage.create_label("Count:", Point::new(-2.0, 1.0));
    stage.play();
    let mut readout = ValueReadout::anchored(stage, count_header, Direction::RightOf, 0.9, "0")?;
    stage.play();

    let mut cursor = HighlightSlot::new();
    let mut count = 0u64;

    for (i, &ch) in stone_chars.iter().enumerate() {
        cursor.replace(stage, &[stone_cells[i].shape], OutlineStyle::Cursor)?;
        stage.play();

        let tint = if jewel_set.contains(&ch) {
            count += 1;
            Tint::Success
        } else {
            Tint::Failure
        };
        stage.recolor(stone_cells[i].shape, tint)?;
        stage.play();

        cursor.clear(stage)?;
        readout.set(stage, &count.to_string())?;
        stage.play();
    }

    stage.create_label(&format!("Result: {count}"), Point::new(-2.0, 2.2));
    stage.play();

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::stage::RecordingStage;

    #[test]
    fn worked_example() {
        assert_eq!(jewel_count("aA", "aAAbbbb"), 3);
    }

    #[test]
    fn membership_is_case_sensitive() {
        assert_eq!(jewel_count("z", "ZZ"), 0);
        assert_eq!(jewel_count("zZ", "ZZz"), 3);
    }

    #[test]
    fn empty_inputs() {
        assert_eq!(jewel_count("", "abc"), 0);
        assert_eq!(jewel_count("abc", ""), 0);
    }

    #[test]
    fn explain_matches_reference_and_tints_every_stone() {
        let mut stage = RecordingStage::new();
        let count = explain_jewel_count(&mut stage, "aA", "aAAbbbb").unwrap();
        assert_eq!(count, jewel_count("aA", "aAAbbbb"));

        let script = stage.into_script();
        let recolors = script
            .steps
            .iter()
            .flat_map(|s| &s.ops)
            .filter(|op| matches!(op, crate::scene::ops::SceneOp::Recolor { .. }))
            .count();
        assert_eq!(recolors, "aAAbbbb".len());
    }
}
