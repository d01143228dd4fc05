//! Minimum consecutive repeat distance: scan once, remember each value's last
//! index, and on a repeat measure the window `current − last + 1`.

use std::collections::HashMap;

use crate::{
    foundation::core::{Direction, OutlineStyle, Point},
    foundation::error::StepsceneResult,
    scene::layout::{CELL_PITCH, row_of_cells},
    scene::stage::Stage,
    sync::binder::{Binder, HighlightSlot, ValueReadout},
};

/// Length of the shortest window containing two equal values, or −1 when no
/// value repeats. `[3,4,2,3,4,7]` → 4.
pub fn min_repeat_distance(cards: &[i64]) -> i64 {
    let mut last_seen: HashMap<i64, usize> = HashMap::new();
    let mut best: Option<usize> = None;

    for (i, &card) in cards.iter().enumerate() {
        if let Some(&prev) = last_seen.get(&card) {
            let window = i - prev + 1;
            best = Some(best.map_or(window, |b| b.min(window)));
        }
        last_seen.insert(card, i);
    }

    best.map_or(-1, |b| b as i64)
}

/// Narrated version of [`min_repeat_distance`]: one last-seen map drives both
/// the result and the on-screen dictionary.
#[tracing::instrument(skip(stage))]
pub fn explain_min_repeat_distance(
    stage: &mut dyn Stage,
    cards: &[i64],
) -> StepsceneResult<i64> {
    stage.create_label(
        "Minimum Consecutive Cards to Pick Up for a Matching Pair",
        Point::new(0.0, -3.2),
    );
    stage.play();

    let cells = row_of_cells(stage, cards, Point::new(-3.0, -1.0), CELL_PITCH)?;
    stage.play();

    let dict_header = stage.create_label("last seen (card: last index)", Point::new(-6.0, 0.5));
    let readout_header = stage.create_label("min window:", Point::new(5.0, -1.0));
    stage.play();
    let mut readout =
        ValueReadout::anchored(stage, readout_header, Direction::Below, 0.4, "inf")?;
    stage.play();

    let mut last_seen: HashMap<i64, usize> = HashMap::new();
    let mut entries: Binder<i64> = Binder::new();
    let mut cursor = HighlightSlot::new();
    let mut window_mark = HighlightSlot::new();
    let mut best: Option<usize> = None;

    for (i, &card) in cards.iter().enumerate() {
        cursor.replace(stage, &[cells[i].shape], OutlineStyle::Cursor)?;
        stage.play();

        if let Some(&prev) = last_seen.get(&card) {
            let window = i - prev + 1;
            let shapes: Vec<_> = cells[prev..=i].iter().map(|c| c.shape).collect();
            window_mark.replace(stage, &shapes, OutlineStyle::Window)?;

            if best.is_none_or(|b| window < b) {
                best = Some(window);
                readout.set(stage, &window.to_string())?;
            }
            stage.play();
        }

        last_seen.insert(card, i);
        let anchor = entries.is_empty().then_some(dict_header);
        entries.upsert(stage, card, &format!("{card}: {i}"), anchor)?;
        stage.play();
    }

    cursor.clear(stage)?;
    window_mark.clear(stage)?;

    let result = best.map_or(-1, |b| b as i64);
    let verdict = match best {
        Some(b) => format!("Minimum window length = {b}"),
        None => "No matching cards found. (-1)".to_string(),
    };
    stage.create_label(&verdict, Point::new(0.0, 1.8));
    stage.play();

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::stage::RecordingStage;

    #[test]
    fn worked_example() {
        assert_eq!(min_repeat_distance(&[3, 4, 2, 3, 4, 7]), 4);
    }

    #[test]
    fn no_repeat_is_minus_one() {
        assert_eq!(min_repeat_distance(&[1, 2, 3]), -1);
        assert_eq!(min_repeat_distance(&[]), -1);
        assert_eq!(min_repeat_distance(&[7]), -1);
    }

    #[test]
    fn adjacent_repeat_wins() {
        assert_eq!(min_repeat_distance(&[1, 5, 5, 1]), 2);
        assert_eq!(min_repeat_distance(&[1, 0, 1, 1]), 2);
    }

    #[test]
    fn closest_pair_per_value_is_used() {
        // 2s at 0, 4, 5: the 4-5 pair beats 0-4
        assert_eq!(min_repeat_distance(&[2, 8, 9, 7, 2, 2]), 2);
    }

    #[test]
    fn explain_matches_reference_and_binds_distinct_values() {
        let cards = [3, 4, 2, 3, 4, 7];
        let mut stage = RecordingStage::new();
        let result = explain_min_repeat_distance(&mut stage, &cards).unwrap();
        assert_eq!(result, min_repeat_distance(&cards));

        let script = stage.into_script();
        assert!(!script.is_empty());
        // no transient outline survives the run
        let live_outlines = script
            .elements
            .iter()
            .filter(|e| e.alive && matches!(e.kind, crate::scene::ops::ElementKind::Outline(_)))
            .count();
        assert_eq!(live_outlines, 0);
    }
}
