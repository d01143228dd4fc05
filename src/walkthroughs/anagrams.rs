//! Anagram grouping: bucket each string under its sorted character sequence.
//! Groups come out in first-seen order, members in input order.

use std::collections::HashMap;

use crate::{
    foundation::core::{Direction, ElementId, OutlineStyle, Point, Vec2},
    foundation::error::StepsceneResult,
    scene::stage::Stage,
    sync::binder::{Binder, HighlightSlot},
};

/// Sorted character sequence of `s` (the anagram class key).
pub fn sorted_form(s: &str) -> String {
    let mut chars: Vec<char> = s.chars().collect();
    chars.sort_unstable();
    chars.into_iter().collect()
}

/// Partition `words` into anagram groups. Every input string appears in
/// exactly one group; two strings share a group iff their sorted forms are
/// equal.
pub fn group_anagrams(words: &[String]) -> Vec<Vec<String>> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<Vec<String>> = Vec::new();

    for word in words {
        let key = sorted_form(word);
        let slot = *index.entry(key).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        groups[slot].push(word.clone());
    }

    groups
}

fn group_line(key: &str, members: &[String]) -> String {
    format!("{key}: [{}]", members.join(", "))
}

/// Narrated version of [`group_anagrams`]: one bucket map drives both the
/// returned groups and the on-screen dictionary lines.
#[tracing::instrument(skip(stage))]
pub fn explain_group_anagrams(
    stage: &mut dyn Stage,
    words: &[String],
) -> StepsceneResult<Vec<Vec<String>>> {
    stage.create_label("Group Anagrams Algorithm", Point::new(0.0, -3.2));
    stage.play();

    let input_header = stage.create_label("Input:", Point::new(-6.0, -2.0));
    let word_labels: Vec<ElementId> = words
        .iter()
        .enumerate()
        .map(|(i, word)| {
            stage.create_label(word, Point::new(-4.5, -2.0) + Vec2::new(i as f64 * 1.2, 0.0))
        })
        .collect();
    stage.play();

    let dict_header = stage.create_label("Dictionary (sorted -> group)", Point::new(-6.0, -0.1));
    stage.play();

    let mut buckets: HashMap<String, Vec<String>> = HashMap::new();
    let mut key_order: Vec<String> = Vec::new();
    let mut lines: Binder<String> = Binder::new();
    let mut cursor = HighlightSlot::new();

    for (i, word) in words.iter().enumerate() {
        cursor.replace(stage, &[word_labels[i]], OutlineStyle::Cursor)?;
        stage.play();

        let key = sorted_form(word);

        // transient sorted-form callout under the current word
        let callout = stage.create_label(&format!("Sorted: {key}"), Point::ORIGIN);
        stage.position_relative_to(callout, word_labels[i], Direction::Below, 0.6)?;
        stage.play();
        stage.fade_out(callout)?;
        stage.play();

        let members = buckets.entry(key.clone()).or_default();
        if members.is_empty() {
            key_order.push(key.clone());
        }
        members.push(word.clone());

        let anchor = lines.is_empty().then_some(dict_header);
        lines.upsert(stage, key.clone(), &group_line(&key, members), anchor)?;
        stage.play();
    }

    cursor.clear(stage)?;

    let groups: Vec<Vec<String>> = key_order
        .iter()
        .map(|key| buckets[key].clone())
        .collect();

    let summary = groups
        .iter()
        .map(|group| format!("[{}]", group.join(", ")))
        .collect::<Vec<_>>()
        .join(", ");
    let footer = stage.create_label("Final Groups:", Point::new(-6.0, 2.2));
    let summary_label = stage.create_label(&format!("[{summary}]"), Point::ORIGIN);
    stage.position_relative_to(summary_label, footer, Direction::RightOf, 3.0)?;
    stage.play();

    Ok(groups)
}
