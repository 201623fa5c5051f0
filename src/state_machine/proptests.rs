//! Property-based tests for the state machine
//!
//! These tests verify key invariants hold across all possible inputs.

use super::testing::*;
use super::*;
use crate::dialog::{Flow, Question};
use proptest::prelude::*;
use std::collections::BTreeMap;

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_question(id: String) -> impl Strategy<Value = Question> {
    prop_oneof![
        "[a-zA-Z ?]{1,20}".prop_map({
            let id = id.clone();
            move |prompt| Question::text(id.clone(), prompt)
        }),
        ("[a-zA-Z ?]{1,20}", proptest::collection::vec("[A-Za-z]{1,8}", 1..5)).prop_map(
            move |(prompt, options)| Question::multiple_choice(id.clone(), prompt, options)
        ),
    ]
}

/// Flows with unique ids `q0`, `q1`, ...
fn arb_flow() -> impl Strategy<Value = Flow> {
    (0usize..6)
        .prop_flat_map(|len| (0..len).map(|i| arb_question(format!("q{i}"))).collect::<Vec<_>>())
        .prop_map(|questions| Flow::new(questions).expect("generated ids are unique"))
}

/// A reply `question` will accept
fn valid_answer(question: &Question, seed: &str) -> String {
    match question {
        Question::Text { .. } => format!("answer {seed}"),
        Question::MultipleChoice { options, .. } => options[seed.len() % options.len()].clone(),
    }
}

/// Drive `flow` through its first `steps` questions with valid answers
fn progress_after(engine: &DialogEngine, steps: usize) -> Progress {
    let mut progress = engine.initial_state();
    for question in engine.flow().questions().iter().take(steps) {
        let answer = valid_answer(question, question.id());
        progress = engine.on_action(&Action::answer(question.id(), answer), &progress);
    }
    progress
}

fn arb_flow_and_progress() -> impl Strategy<Value = (Flow, usize)> {
    arb_flow().prop_flat_map(|flow| {
        let len = flow.len();
        (Just(flow), 0..=len)
    })
}

fn arb_action() -> impl Strategy<Value = Action> {
    let id = prop_oneof![Just("q0".to_string()), Just("q1".to_string()), "[a-z0-9]{1,4}"];
    let text = "[ A-Za-z/]{0,16}";
    prop_oneof![
        (id.clone(), text).prop_map(|(id, text)| Action::answer(id, text)),
        text.prop_map(Action::change_context),
        (id, text, text).prop_map(|(id, text, data)| Action::answer_and_change_context(id, text, data)),
    ]
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    // Invariant 1: N valid in-order answers complete the dialog
    #[test]
    fn prop_valid_answers_complete(flow in arb_flow()) {
        let engine = DialogEngine::new(flow);
        let progress = progress_after(&engine, engine.flow().len());
        prop_assert_eq!(progress.position, engine.flow().len());
        prop_assert!(engine.render(&standard_user(), &progress).is_completed());
        prop_assert_eq!(progress.answers.len(), engine.flow().len());
    }

    // Invariant 2: an action either advances by exactly one or changes nothing
    #[test]
    fn prop_action_advances_or_is_noop(
        (flow, steps) in arb_flow_and_progress(),
        action in arb_action()
    ) {
        let engine = DialogEngine::new(flow);
        let before = progress_after(&engine, steps);
        let after = engine.on_action(&action, &before);

        if after == before {
            prop_assert!(engine.try_action(&action, &before).map_or(true, |p| p == before));
        } else {
            prop_assert_eq!(after.position, before.position + 1);
            prop_assert!(after.is_consistent_with(engine.flow()));
            let question = &engine.flow().questions()[before.position];
            let targets_current = matches!(
                &action,
                Action::Answer { question_id, .. } | Action::AnswerAndChangeContext { question_id, .. }
                    if question_id == question.id()
            );
            prop_assert!(targets_current, "only an answer to the current question advances");
        }
    }

    // Invariant 3: answers for any question other than the current one are ignored
    #[test]
    fn prop_mismatched_question_is_noop(
        (flow, steps) in arb_flow_and_progress(),
        text in "[A-Za-z]{1,8}"
    ) {
        let engine = DialogEngine::new(flow);
        let before = progress_after(&engine, steps);
        for (index, question) in engine.flow().questions().iter().enumerate() {
            if index != before.position {
                let action = Action::answer(question.id(), text.clone());
                prop_assert_eq!(engine.on_action(&action, &before), before.clone());
            }
        }
    }

    // Invariant 4: rejected answers are idempotent
    #[test]
    fn prop_invalid_answer_is_idempotent((flow, steps) in arb_flow_and_progress()) {
        let engine = DialogEngine::new(flow);
        let before = progress_after(&engine, steps);
        if let Some(question) = engine.flow().question(before.position) {
            let invalid = match question {
                Question::Text { .. } => "   ".to_string(),
                Question::MultipleChoice { options, .. } => format!("{}!", options.concat()),
            };
            let action = Action::answer(question.id(), invalid);
            let once = engine.on_action(&action, &before);
            let twice = engine.on_action(&action, &before);
            prop_assert_eq!(&once, &before);
            prop_assert_eq!(&twice, &before);
        }
    }

    // Invariant 5: snapshots round-trip for reachable progress
    #[test]
    fn prop_snapshot_round_trip((flow, steps) in arb_flow_and_progress()) {
        let engine = DialogEngine::new(flow);
        let progress = progress_after(&engine, steps);
        let bytes = engine.snapshot_state(&progress);
        prop_assert_eq!(engine.restore_state(&bytes), progress);
    }

    // Invariant 6: garbage never fails to restore
    #[test]
    fn prop_garbage_restores_initial(
        flow in arb_flow(),
        bytes in proptest::collection::vec(any::<u8>(), 0..64)
    ) {
        let engine = DialogEngine::new(flow);
        let restored = engine.restore_state(&bytes);
        // Random bytes can only decode if they happen to spell a valid record
        prop_assert!(restored.is_consistent_with(engine.flow()));
        if serde_json::from_slice::<serde_json::Value>(&bytes).is_err() {
            prop_assert_eq!(restored, engine.initial_state());
        }
    }

    // Invariant 7: context changes never move progress
    #[test]
    fn prop_context_change_never_moves(
        (flow, steps) in arb_flow_and_progress(),
        data in "[ a-z_]{0,16}"
    ) {
        let engine = DialogEngine::new(flow);
        let before = progress_after(&engine, steps);
        let (after, intention) = engine.on_response(&format!("/context {data}"), &before);
        prop_assert_eq!(after, before);
        prop_assert_eq!(intention, Intention::ChangeContext { data: data.trim().to_string() });
    }

    // Invariant 8: plain text with no command prefix parses to itself, trimmed
    #[test]
    fn prop_plain_text_is_answer(text in "[A-Za-z0-9 ,.!?]{0,40}") {
        let intention = IntentionDetector.parse_intention(&text);
        prop_assert_eq!(intention, Intention::Answer { text: text.trim().to_string() });
    }

    // Invariant 9: render echoes the context it was given while in progress
    #[test]
    fn prop_render_passes_context_through(
        (flow, steps) in arb_flow_and_progress(),
        key in "[a-z]{1,6}",
        value in "[a-z]{0,6}"
    ) {
        let engine = DialogEngine::new(flow);
        let progress = progress_after(&engine, steps);
        let context = standard_user().with_data(key, value);
        match engine.render(&context, &progress) {
            Rendering::QuestionPrompt { question, context: rendered } => {
                prop_assert_eq!(rendered, context);
                prop_assert_eq!(&question, &engine.flow().questions()[progress.position]);
            }
            Rendering::Completed { answers } => {
                prop_assert_eq!(progress.position, engine.flow().len());
                prop_assert_eq!(answers, progress.answers);
            }
        }
    }
}

#[test]
fn test_restore_rejects_answers_beyond_position() {
    let engine = DialogEngine::new(onboarding_flow());
    let mut answers = BTreeMap::new();
    answers.insert("name".to_string(), "John".to_string());
    let forged = Progress { position: 0, answers };
    let bytes = serde_json::to_vec(&forged).unwrap();
    assert_eq!(engine.restore_state(&bytes), engine.initial_state());
}
