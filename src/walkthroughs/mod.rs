//! One module per traversal. Each pairs a pure reference solver with an
//! `explain_*` driver that replays the same logic against a [`Stage`],
//! keeping the on-screen bookkeeping synchronized through a [`Binder`].
//!
//! [`Stage`]: crate::scene::stage::Stage
//! [`Binder`]: crate::sync::binder::Binder

pub mod anagrams;
pub mod digit_pairs;
pub mod grid_pairs;
pub mod jewels;
pub mod ransom_note;
pub mod repeat_distance;
pub mod trie_ops;

use crate::{foundation::error::StepsceneResult, scene::stage::Stage};

pub use trie_ops::TrieOp;

/// Input for one walkthrough run, JSON-addressable for the CLI.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(tag = "walkthrough", rename_all = "snake_case")]
pub enum WalkthroughInput {
    RepeatDistance { cards: Vec<i64> },
    DigitPairs { nums: Vec<i64> },
    GridPairs { grid: Vec<Vec<i64>> },
    Anagrams { words: Vec<String> },
    TrieOps { ops: Vec<TrieOp> },
    RansomNote { note: String, magazine: String },
    Jewels { jewels: String, stones: String },
}

/// The reference result of a walkthrough, echoed alongside the scene script.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    /// −1-able scalar results (repeat distance, max pair sum).
    Value { value: i64 },
    /// Non-negative counts (equal pairs, jewel count).
    Count { count: u64 },
    /// Feasibility verdict (ransom note).
    Feasible { feasible: bool },
    /// Anagram groups, first-seen order, members in input order.
    Groups { groups: Vec<Vec<String>> },
    /// Per-op trie verdicts; `None` for inserts.
    Verdicts { verdicts: Vec<Option<bool>> },
}

/// Run the walkthrough described by `input` against `stage`.
pub fn run(stage: &mut dyn Stage, input: &WalkthroughInput) -> StepsceneResult<Outcome> {
    match input {
        WalkthroughInput::RepeatDistance { cards } => {
            let value = repeat_distance::explain_min_repeat_distance(stage, cards)?;
            Ok(Outcome::Value { value })
        }
        WalkthroughInput::DigitPairs { nums } => {
            let value = digit_pairs::explain_max_digit_sum_pair(stage, nums)?;
            Ok(Outcome::Value { value })
        }
        WalkthroughInput::GridPairs { grid } => {
            let count = grid_pairs::explain_equal_pairs(stage, grid)?;
            Ok(Outcome::Count { count })
        }
        WalkthroughInput::Anagrams { words } => {
            let groups = anagrams::explain_group_anagrams(stage, words)?;
            Ok(Outcome::Groups { groups })
        }
        WalkthroughInput::TrieOps { ops } => {
            let verdicts = trie_ops::explain_trie_ops(stage, ops)?;
            Ok(Outcome::Verdicts { verdicts })
        }
        WalkthroughInput::RansomNote { note, magazine } => {
            let feasible = ransom_note::explain_can_construct(stage, note, magazine)?;
            Ok(Outcome::Feasible { feasible })
        }
        WalkthroughInput::Jewels { jewels, stones } => {
            let count = jewels::explain_jewel_count(stage, jewels, stones)?;
            Ok(Outcome::Count { count })
        }
    }
}

/// Built-in sample inputs, one per walkthrough.
pub fn sample_inputs() -> Vec<WalkthroughInput> {
    vec![
        WalkthroughInput::RepeatDistance {
            cards: vec![3, 4, 2, 3, 4, 7],
        },
        WalkthroughInput::DigitPairs {
            nums: vec![51, 71, 17, 42],
        },
        WalkthroughInput::GridPairs {
            grid: vec![vec![1, 2, 3], vec![2, 2, 2], vec![1, 2, 3]],
        },
        WalkthroughInput::Anagrams {
            words: ["eat", "tea", "tan", "ate", "nat", "bat"]
                .map(String::from)
                .to_vec(),
        },
        WalkthroughInput::TrieOps {
            ops: vec![
                TrieOp::Insert("dog".to_string()),
                TrieOp::Search("do".to_string()),
                TrieOp::StartsWith("do".to_string()),
                TrieOp::Search("dog".to_string()),
            ],
        },
        WalkthroughInput::RansomNote {
            note: "bg".to_string(),
            magazine: "efjbdfbdgfjhhaiigfhbaeja".to_string(),
        },
        WalkthroughInput::Jewels {
            jewels: "aA".to_string(),
            stones: "aAAbbbb".to_string(),
        },
    ]
}
