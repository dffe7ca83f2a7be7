use super::*;

#[test]
fn display_text_precedence() {
    let both = Scene::with_text("A").prompt("B");
    assert_eq!(both.display_text("P"), "A");

    let prompt_only = Scene::narration_only("n").prompt("B");
    assert_eq!(prompt_only.display_text("P"), "B");

    let neither = Scene::narration_only("n");
    assert_eq!(neither.display_text("P"), "P");
}

#[test]
fn blank_text_counts_as_missing() {
    let s = Scene::with_text("   ").prompt("B");
    assert_eq!(s.display_text("P"), "B");
    let s = Scene::with_text("").prompt("\n");
    assert_eq!(s.display_text("P"), "P");
}

#[test]
fn accepts_camel_case_fields() {
    let s: Scene = serde_json::from_str(
        r#"{"narration":"hi","visualText":"ONE","visualPrompt":"city","durationFrames":30}"#,
    )
    .unwrap();
    assert_eq!(s.visual_text.as_deref(), Some("ONE"));
    assert_eq!(s.visual_prompt.as_deref(), Some("city"));
    assert_eq!(s.duration_frames, Some(30));

    let s: Scene = serde_json::from_str(r#"{"visual_text":"X"}"#).unwrap();
    assert_eq!(s.narration, "");
    assert_eq!(s.duration_frames, None);
}
