//! Max pair sum by digit-sum bucket: scan once, each bucket keeps the largest
//! value seen with that digit sum, and a bucket hit proposes `stored + current`.

use std::collections::HashMap;

use crate::{
    foundation::core::{Direction, OutlineStyle, Point, digit_sum, non_negative},
    foundation::error::StepsceneResult,
    scene::layout::{CELL_PITCH, row_of_cells},
    scene::stage::Stage,
    sync::binder::{Binder, HighlightSlot, ValueReadout},
};

/// Maximum sum over all pairs sharing a digit sum, or −1 when no such pair
/// exists. `[51,71,17,42]` → 88 (71+17, both digit-sum 8). Negative input is
/// a validation error: digit sums are defined on non-negative integers only.
pub fn max_digit_sum_pair(nums: &[i64]) -> StepsceneResult<i64> {
    let mut buckets: HashMap<u32, i64> = HashMap::new();
    let mut max_sum = -1i64;

    for &num in nums {
        let ds = digit_sum(non_negative(num)?);
        if let Some(&stored) = buckets.get(&ds) {
            max_sum = max_sum.max(stored + num);
            buckets.insert(ds, stored.max(num));
        } else {
            buckets.insert(ds, num);
        }
    }

    Ok(max_sum)
}

/// Narrated version of [`max_digit_sum_pair`]: one bucket map drives both the
/// result and the on-screen `digit_sum -> largest` dictionary.
#[tracing::instrument(skip(stage))]
pub fn explain_max_digit_sum_pair(stage: &mut dyn Stage, nums: &[i64]) -> StepsceneResult<i64> {
    stage.create_label(
        "Maximum Sum of Two Numbers With Equal Digit Sum",
        Point::new(0.0, -3.2),
    );
    stage.play();

    let input_header = stage.create_label("Input:", Point::new(-6.0, -2.0));
    let cells = row_of_cells(stage, nums, Point::new(-4.0, -2.0), CELL_PITCH)?;
    stage.play();

    let dict_header = stage.create_label("Map: digit_sum -> largest number", Point::new(-6.0, 0.0));
    let readout_header = stage.create_label("max_sum:", Point::new(5.0, -2.0));
    stage.play();
    let mut readout = ValueReadout::anchored(stage, readout_header, Direction::Below, 0.4, "-1")?;
    stage.play();

    let mut buckets: HashMap<u32, i64> = HashMap::new();
    let mut entries: Binder<u32> = Binder::new();
    let mut cursor = HighlightSlot::new();
    let mut max_sum = -1i64;

    for (i, &num) in nums.iter().enumerate() {
        cursor.replace(stage, &[cells[i].shape], OutlineStyle::Cursor)?;
        stage.play();

        let ds = digit_sum(non_negative(num)?);

        // transient digit-sum callout under the current cell
        let callout = stage.create_label(&format!("digit_sum({num}) = {ds}"), Point::ORIGIN);
        stage.position_relative_to(callout, cells[i].shape, Direction::Below, 0.7)?;
        stage.play();
        stage.fade_out(callout)?;
        stage.play();

        match buckets.get(&ds).copied() {
            Some(stored) => {
                let candidate = stored + num;
                if candidate > max_sum {
                    max_sum = candidate;
                    readout.set(stage, &max_sum.to_string())?;
                }
                if num > stored {
                    buckets.insert(ds, num);
                    entries.upsert(stage, ds, &format!("{ds} -> {num}"), None)?;
                }
                stage.play();
            }
            None => {
                buckets.insert(ds, num);
                let anchor = entries.is_empty().then_some(dict_header);
                entries.upsert(stage, ds, &format!("{ds} -> {num}"), anchor)?;
                stage.play();
            }
        }
    }

    cursor.clear(stage)?;
    let verdict = if max_sum > -1 {
        format!("Final max_sum = {max_sum}")
    } else {
        "No valid pairs found.".to_string()
    };
    let verdict_label = stage.create_label(&verdict, Point::ORIGIN);
    stage.position_relative_to(verdict_label, input_header, Direction::Below, 4.0)?;
    stage.play();

    Ok(max_sum)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::stage::RecordingStage;

    #[test]
    fn worked_example() {
        assert_eq!(max_digit_sum_pair(&[51, 71, 17, 42]).unwrap(), 88);
    }

    #[test]
    fn no_shared_bucket_is_minus_one() {
        assert_eq!(max_digit_sum_pair(&[1, 2, 3]).unwrap(), -1);
        assert_eq!(max_digit_sum_pair(&[]).unwrap(), -1);
    }

    #[test]
    fn bucket_keeps_the_larger_value() {
        // digit sum 1: 10, 100, 1000 -> best pair is 100 + 1000
        assert_eq!(max_digit_sum_pair(&[10, 100, 1000]).unwrap(), 1100);
    }

    #[test]
    fn negative_input_is_rejected() {
        assert!(max_digit_sum_pair(&[5, -3]).is_err());
    }

    #[test]
    fn explain_matches_reference() {
        let nums = [51, 71, 17, 42];
        let mut stage = RecordingStage::new();
        let result = explain_max_digit_sum_pair(&mut stage, &nums).unwrap();
        assert_eq!(result, max_digit_sum_pair(&nums).unwrap());
        assert!(!stage.into_script().is_empty());
    }

    #[test]
    fn explain_propagates_validation_errors() {
        let mut stage = RecordingStage::new();
        assert!(explain_max_digit_sum_pair(&mut stage, &[-7]).is_err());
    }
}
