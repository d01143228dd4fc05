use stepscene::{RecordingStage, SceneScript, WalkthroughInput, run};

#[test]
fn recorded_script_roundtrips_through_json() {
    let input = WalkthroughInput::RepeatDistance {
        cards: vec![3, 4, 2, 3, 4, 7],
    };
    let mut stage = RecordingStage::new();
    run(&mut stage, &input).unwrap();
    let script = stage.into_script();

    let json = serde_json::to_string_pretty(&script).unwrap();
    let de: SceneScript = serde_json::from_str(&json).unwrap();
    assert_eq!(de, script);
}

#[test]
fn walkthrough_input_json_shape_is_stable() {
    let json = r#"{
        "walkthrough": "ransom_note",
        "note": "bg",
        "magazine": "efjbdfbdgfjhhaiigfhbaeja"
    }"#;
    let input: WalkthroughInput = serde_json::from_str(json).unwrap();
    let WalkthroughInput::RansomNote { note, magazine } = &input else {
        panic!("parsed the wrong variant");
    };
    assert_eq!(note, "bg");
    assert_eq!(magazine.len(), 24);

    let back = serde_json::to_value(&input).unwrap();
    assert_eq!(back["walkthrough"], "ransom_note");
}

#[test]
fn trie_ops_input_parses_from_json() {
    let json = r#"{
        "walkthrough": "trie_ops",
        "ops": [
            {"insert": "dog"},
            {"search": "do"},
            {"starts_with": "do"}
        ]
    }"#;
    let input: WalkthroughInput = serde_json::from_str(json).unwrap();
    let mut stage = RecordingStage::new();
    let outcome = run(&mut stage, &input).unwrap();
    assert_eq!(
        serde_json::to_value(&outcome).unwrap()["verdicts"],
        serde_json::json!([null, false, true])
    );
}
