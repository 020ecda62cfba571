//! End-to-end survey flow through the handler stack.
//!
//! Exercises the full path the console runner takes: start a session with a
//! validated age, answer and navigate through the built-in SleepFit catalog
//! with conditional questions appearing and disappearing along the way, and
//! verify the completed answer set reaches the results collaborator and the
//! session is discarded. Uses the in-memory adapters only.

use std::sync::Arc;

use sleepfit::adapters::{InMemoryResultsSink, InMemoryWizardRepository};
use sleepfit::application::handlers::{
    AdvanceCommand, AdvanceHandler, AdvanceResult, GetSurveyViewHandler, GetSurveyViewQuery,
    RetreatCommand, RetreatHandler, RetreatResult, StartSessionCommand, StartSessionError,
    StartSessionHandler, SubmitAnswerCommand, SubmitAnswerHandler,
};
use sleepfit::domain::answers::{
    AnswerValue, DurationSpan, DurationUnit, Frequency, Meridiem, PerPeriod, TimeOfDay, YesNo,
};
use sleepfit::domain::catalog::sleepfit_catalog;
use sleepfit::domain::foundation::SessionId;
use sleepfit::ports::{ResultsSink, WizardRepository};

struct Stack {
    start: StartSessionHandler,
    submit: SubmitAnswerHandler,
    advance: AdvanceHandler,
    retreat: RetreatHandler,
    view: GetSurveyViewHandler,
    repository: Arc<InMemoryWizardRepository>,
    results: Arc<InMemoryResultsSink>,
}

fn stack() -> Stack {
    let repository = Arc::new(InMemoryWizardRepository::new());
    let results = Arc::new(InMemoryResultsSink::new());
    Stack {
        start: StartSessionHandler::new(
            Arc::new(sleepfit_catalog().clone()),
            Arc::clone(&repository) as Arc<dyn WizardRepository>,
        ),
        submit: SubmitAnswerHandler::new(Arc::clone(&repository) as Arc<dyn WizardRepository>),
        advance: AdvanceHandler::new(
            Arc::clone(&repository) as Arc<dyn WizardRepository>,
            Arc::clone(&results) as Arc<dyn ResultsSink>,
        ),
        retreat: RetreatHandler::new(Arc::clone(&repository) as Arc<dyn WizardRepository>),
        view: GetSurveyViewHandler::new(Arc::clone(&repository) as Arc<dyn WizardRepository>),
        repository,
        results,
    }
}

async fn answer_and_advance(
    stack: &Stack,
    session_id: SessionId,
    question_id: &str,
    value: AnswerValue,
) -> AdvanceResult {
    stack
        .submit
        .handle(SubmitAnswerCommand {
            session_id,
            question_id: question_id.into(),
            value,
        })
        .await
        .expect("submit");
    stack
        .advance
        .handle(AdvanceCommand { session_id })
        .await
        .expect("advance")
}

fn time(h: &str, m: &str, meridiem: Meridiem) -> AnswerValue {
    AnswerValue::time(TimeOfDay::new(h, m, meridiem))
}

#[tokio::test]
async fn non_worker_with_weekend_difference_walks_the_full_catalog() {
    let stack = stack();
    let started = stack
        .start
        .handle(StartSessionCommand { age: 23 })
        .await
        .unwrap();
    let session_id = started.session_id;

    // work=No reveals sleep_weekend_diff as the next question.
    let result = answer_and_advance(&stack, session_id, "work", AnswerValue::yes_no(YesNo::No)).await;
    match result {
        AdvanceResult::Moved { view } => {
            assert_eq!(view.question.unwrap().id.as_str(), "sleep_weekend_diff")
        }
        other => panic!("expected moved, got {:?}", other),
    }

    // diff=Yes keeps the weekend questions in the sequence.
    answer_and_advance(&stack, session_id, "sleep_weekend_diff", AnswerValue::yes_no(YesNo::Yes)).await;
    answer_and_advance(&stack, session_id, "sleep_weekday_bedtime", time("11", "00", Meridiem::Pm)).await;
    answer_and_advance(&stack, session_id, "sleep_weekday_wake", time("7", "00", Meridiem::Am)).await;
    answer_and_advance(&stack, session_id, "sleep_weekend_bedtime", time("12", "30", Meridiem::Am)).await;
    answer_and_advance(&stack, session_id, "sleep_weekend_wake", time("9", "15", Meridiem::Am)).await;

    // Answering the frequency question makes its duration follow-up appear
    // at the next position.
    let result = answer_and_advance(
        &stack,
        session_id,
        "moderate_min_week",
        AnswerValue::frequency(Frequency::new("3", PerPeriod::Week)),
    )
    .await;
    match result {
        AdvanceResult::Moved { view } => {
            assert_eq!(view.question.unwrap().id.as_str(), "moderate_duration_each")
        }
        other => panic!("expected moved, got {:?}", other),
    }

    answer_and_advance(
        &stack,
        session_id,
        "moderate_duration_each",
        AnswerValue::duration(DurationSpan::new("30", DurationUnit::Minutes)),
    )
    .await;
    answer_and_advance(
        &stack,
        session_id,
        "vigorous_min_week",
        AnswerValue::frequency(Frequency::new("1", PerPeriod::Week)),
    )
    .await;
    answer_and_advance(
        &stack,
        session_id,
        "vigorous_duration_each",
        AnswerValue::duration(DurationSpan::new("20", DurationUnit::Minutes)),
    )
    .await;

    let result = answer_and_advance(
        &stack,
        session_id,
        "sedentary_hours_day",
        AnswerValue::duration(DurationSpan::new("6", DurationUnit::Hours)),
    )
    .await;
    let survey = match result {
        AdvanceResult::Completed { survey } => survey,
        other => panic!("expected completed, got {:?}", other),
    };

    assert_eq!(survey.age.years(), 23);
    assert_eq!(survey.answers.len(), 11);
    assert!(stack.repository.is_empty().await);

    let delivered = stack.results.last().await.unwrap();
    assert_eq!(delivered.session_id, session_id);

    // The hand-off payload serializes with the age and every captured answer.
    let json = serde_json::to_value(&delivered).unwrap();
    assert_eq!(json["age"], 23);
    assert_eq!(json["answers"]["answers"]["work"]["kind"], "yes_no");
}

#[tokio::test]
async fn no_weekend_difference_skips_the_weekend_questions() {
    let stack = stack();
    let session_id = stack
        .start
        .handle(StartSessionCommand { age: 40 })
        .await
        .unwrap()
        .session_id;

    answer_and_advance(&stack, session_id, "work", AnswerValue::yes_no(YesNo::No)).await;
    answer_and_advance(&stack, session_id, "sleep_weekend_diff", AnswerValue::yes_no(YesNo::No)).await;
    answer_and_advance(&stack, session_id, "sleep_weekday_bedtime", time("10", "45", Meridiem::Pm)).await;

    // With diff=No the optional_if questions are skipped outright: the next
    // stop after the weekday wake time is the activity section.
    let result =
        answer_and_advance(&stack, session_id, "sleep_weekday_wake", time("6", "30", Meridiem::Am)).await;
    match result {
        AdvanceResult::Moved { view } => {
            let q = view.question.unwrap();
            assert_eq!(q.id.as_str(), "moderate_min_week");
            assert_eq!(q.section, "Physical Activity Screening");
        }
        other => panic!("expected moved, got {:?}", other),
    }

    answer_and_advance(
        &stack,
        session_id,
        "moderate_min_week",
        AnswerValue::frequency(Frequency::new("2", PerPeriod::Day)),
    )
    .await;
    answer_and_advance(
        &stack,
        session_id,
        "moderate_duration_each",
        AnswerValue::duration(DurationSpan::new("15", DurationUnit::Minutes)),
    )
    .await;
    answer_and_advance(
        &stack,
        session_id,
        "vigorous_min_week",
        AnswerValue::frequency(Frequency::new("52", PerPeriod::Year)),
    )
    .await;
    answer_and_advance(
        &stack,
        session_id,
        "vigorous_duration_each",
        AnswerValue::duration(DurationSpan::new("1", DurationUnit::Hours)),
    )
    .await;
    let result = answer_and_advance(
        &stack,
        session_id,
        "sedentary_hours_day",
        AnswerValue::duration(DurationSpan::new("8", DurationUnit::Hours)),
    )
    .await;

    let survey = match result {
        AdvanceResult::Completed { survey } => survey,
        other => panic!("expected completed, got {:?}", other),
    };

    // The skipped questions were never answered and are absent from the
    // payload; everything reachable has a complete value.
    assert!(!survey.answers.contains(&"sleep_weekend_bedtime".into()));
    assert!(!survey.answers.contains(&"sleep_weekend_wake".into()));
    assert!(survey.answers.contains(&"sedentary_hours_day".into()));
}

#[tokio::test]
async fn blocked_advance_leaves_the_session_re_presentable() {
    let stack = stack();
    let session_id = stack
        .start
        .handle(StartSessionCommand { age: 30 })
        .await
        .unwrap()
        .session_id;

    // Partial time answer: hour and meridiem filled, minute empty.
    stack
        .submit
        .handle(SubmitAnswerCommand {
            session_id,
            question_id: "work".into(),
            value: AnswerValue::yes_no(YesNo::Yes),
        })
        .await
        .unwrap();
    stack.advance.handle(AdvanceCommand { session_id }).await.unwrap();

    let partial = TimeOfDay {
        hour: "10".into(),
        minute: "".into(),
        meridiem: Some(Meridiem::Pm),
    };
    stack
        .submit
        .handle(SubmitAnswerCommand {
            session_id,
            question_id: "sleep_weekday_bedtime".into(),
            value: AnswerValue::time(partial.clone()),
        })
        .await
        .unwrap();

    let result = stack.advance.handle(AdvanceCommand { session_id }).await.unwrap();
    match result {
        AdvanceResult::Blocked { view } => {
            // Same step re-presented, partial value intact.
            let q = view.question.unwrap();
            assert_eq!(q.id.as_str(), "sleep_weekday_bedtime");
            assert_eq!(q.answer, Some(AnswerValue::time(partial)));
        }
        other => panic!("expected blocked, got {:?}", other),
    }

    // The view handler sees the same state.
    let view = stack
        .view
        .handle(GetSurveyViewQuery { session_id })
        .await
        .unwrap();
    assert_eq!(view.question.unwrap().id.as_str(), "sleep_weekday_bedtime");
}

#[tokio::test]
async fn editing_an_earlier_answer_shrinks_the_sequence_and_clamps() {
    let stack = stack();
    let session_id = stack
        .start
        .handle(StartSessionCommand { age: 35 })
        .await
        .unwrap()
        .session_id;

    answer_and_advance(&stack, session_id, "work", AnswerValue::yes_no(YesNo::No)).await;
    answer_and_advance(&stack, session_id, "sleep_weekend_diff", AnswerValue::yes_no(YesNo::Yes)).await;

    // Go back to the first question and flip work to Yes:
    // sleep_weekend_diff leaves the sequence.
    stack.retreat.handle(RetreatCommand { session_id }).await.unwrap();
    let result = stack.retreat.handle(RetreatCommand { session_id }).await.unwrap();
    match result {
        RetreatResult::Moved { view } => assert_eq!(view.current_index, 0),
        other => panic!("expected moved, got {:?}", other),
    }

    let before = stack
        .view
        .handle(GetSurveyViewQuery { session_id })
        .await
        .unwrap()
        .total_visible;

    let after = stack
        .submit
        .handle(SubmitAnswerCommand {
            session_id,
            question_id: "work".into(),
            value: AnswerValue::yes_no(YesNo::Yes),
        })
        .await
        .unwrap()
        .view
        .total_visible;

    assert_eq!(after, before - 1);
}

#[tokio::test]
async fn exit_from_the_first_question_discards_the_session() {
    let stack = stack();
    let session_id = stack
        .start
        .handle(StartSessionCommand { age: 60 })
        .await
        .unwrap()
        .session_id;

    let result = stack.retreat.handle(RetreatCommand { session_id }).await.unwrap();
    assert!(matches!(result, RetreatResult::Exited));
    assert!(stack.repository.is_empty().await);

    // The session is gone; further reads report it missing.
    assert!(stack
        .view
        .handle(GetSurveyViewQuery { session_id })
        .await
        .is_err());
}

#[tokio::test]
async fn age_is_validated_before_any_session_exists() {
    let stack = stack();
    let err = stack
        .start
        .handle(StartSessionCommand { age: 105 })
        .await
        .unwrap_err();
    assert!(matches!(err, StartSessionError::InvalidAge(_)));
    assert!(stack.repository.is_empty().await);
}
