use lesson_core::{CodingLevel, LessonMachine, MathLevel, UserContext};

use super::test_harness::{
    ScriptedGenerator, generating_machine, reading_machine, setup_flow_harness,
    setup_screen_harness,
};

#[tokio::test(flavor = "current_thread")]
async fn onboarding_smoke_lists_every_level() {
    let mut harness = setup_screen_harness(LessonMachine::new());
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("QuantMind Academy"), "missing title in {html}");
    for level in MathLevel::ALL {
        let name = level.label().split(" (").next().unwrap_or_default();
        assert!(html.contains(name), "missing {level} in {html}");
    }
    for level in CodingLevel::ALL {
        let name = level.label().split(" (").next().unwrap_or_default();
        assert!(html.contains(name), "missing {level} in {html}");
    }
    assert!(html.contains("choice choice--selected"), "missing default selection in {html}");
    assert!(html.contains("Specific Focus (Optional)"), "missing interest field in {html}");
    assert!(html.contains("Start Lesson"), "missing submit in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn reader_smoke_renders_streaming_state() {
    let mut harness = setup_screen_harness(generating_machine(&["# Intro\n", "Hedge funds use AI..."]));
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("<h1>Intro</h1>"), "missing heading in {html}");
    assert!(html.contains("Hedge funds use AI..."), "missing text in {html}");
    assert!(html.contains("Generating curriculum..."), "missing status in {html}");
    assert!(html.contains("STREAMING_DATA..."), "missing badge in {html}");
    assert!(html.contains("Processing next token..."), "missing footer in {html}");
    assert!(!html.contains("Start Over"), "restart offered mid-stream in {html}");
    assert!(!html.contains("Initializing Neural Network"), "overlay left up in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn reader_smoke_shows_overlay_before_first_fragment() {
    let mut harness = setup_screen_harness(generating_machine(&[]));
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Initializing Neural Network..."), "missing overlay in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn reader_smoke_renders_completed_lesson() {
    let mut harness = setup_screen_harness(reading_machine(&["## Portfolio optimization\n"]));
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("<h2>Portfolio optimization</h2>"), "missing heading in {html}");
    assert!(html.contains("Lesson Complete"), "missing status in {html}");
    assert!(html.contains("Start Over"), "missing restart in {html}");
    assert!(!html.contains("STREAMING_DATA"), "badge left up in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn flow_smoke_submit_streams_through_every_phase() {
    let (generator, tx) = ScriptedGenerator::channel();
    let (mut harness, handles) = setup_flow_harness(generator.clone());
    harness.rebuild();
    assert!(harness.render().contains("Start Lesson"));

    let context = UserContext::new(MathLevel::Advanced, CodingLevel::Basic, "Sentiment Analysis");
    handles.actions().on_submit.call(context);
    let html = harness.drive_until("Initializing Neural Network...").await;
    assert!(html.contains("Initializing Neural Network..."), "missing overlay in {html}");
    assert!(!html.contains("Start Lesson"), "form left mounted in {html}");

    tx.unbounded_send(Ok("# Intro\n".to_string())).unwrap();
    let html = harness.drive_until("<h1>Intro</h1>").await;
    assert!(html.contains("<h1>Intro</h1>"), "missing heading in {html}");
    assert!(html.contains("Generating curriculum..."), "missing status in {html}");
    assert!(html.contains("STREAMING_DATA..."), "missing badge in {html}");

    tx.unbounded_send(Ok("Hedge funds use AI...".to_string())).unwrap();
    drop(tx);
    let html = harness.drive_until("Lesson Complete").await;
    assert!(html.contains("Lesson Complete"), "lesson never settled in {html}");
    assert!(html.contains("Hedge funds use AI..."), "missing text in {html}");
    assert!(html.contains("Start Over"), "missing restart in {html}");

    let requests = generator.requests();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].system_instruction.contains("- Specific Interest: Sentiment Analysis"));

    handles.actions().on_restart.call(());
    let html = harness.drive_until("Start Lesson").await;
    assert!(html.contains("Start Lesson"), "restart did not return to onboarding in {html}");
    assert!(!html.contains("Hedge funds use AI..."), "lesson text survived restart in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn flow_smoke_shows_error_notice_inline() {
    let (mut harness, handles) = setup_flow_harness(ScriptedGenerator::failing());
    harness.rebuild();

    handles.actions().on_submit.call(UserContext::default());
    let html = harness.drive_until("Lesson Complete").await;

    assert!(html.contains("Lesson Complete"), "lesson never settled in {html}");
    assert!(html.contains("<strong>Error:</strong>"), "missing notice in {html}");
    assert!(
        html.contains("Please check your API key and try again."),
        "missing notice text in {html}"
    );
}
