//! SleepFit console runner.
//!
//! Drives a survey session over stdin: the landing prompt collects the
//! subject's age, the survey loop steps through the visible questions, and
//! the results view echoes the captured answers.

use std::error::Error;
use std::io::{self, BufRead, Write};
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use sleepfit::adapters::{InMemoryResultsSink, InMemoryWizardRepository};
use sleepfit::application::handlers::{
    AdvanceCommand, AdvanceHandler, AdvanceResult, GetSurveyViewHandler, GetSurveyViewQuery,
    RetreatCommand, RetreatHandler, RetreatResult, StartSessionCommand, StartSessionError,
    StartSessionHandler, SubmitAnswerCommand, SubmitAnswerHandler,
};
use sleepfit::application::{QuestionView, SurveyView};
use sleepfit::domain::answers::{
    AnswerValue, DurationSpan, DurationUnit, Frequency, Meridiem, PerPeriod, TimeOfDay, YesNo,
};
use sleepfit::domain::catalog::{sleepfit_catalog, QuestionType};
use sleepfit::domain::foundation::SessionId;
use sleepfit::domain::survey::{CompletedSurvey, WizardStatus};
use sleepfit::ports::{ResultsSink, WizardRepository};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let repository: Arc<InMemoryWizardRepository> = Arc::new(InMemoryWizardRepository::new());
    let results: Arc<InMemoryResultsSink> = Arc::new(InMemoryResultsSink::new());

    let catalog = Arc::new(sleepfit_catalog().clone());
    let start = StartSessionHandler::new(
        catalog,
        Arc::clone(&repository) as Arc<dyn WizardRepository>,
    );
    let submit = SubmitAnswerHandler::new(Arc::clone(&repository) as Arc<dyn WizardRepository>);
    let advance = AdvanceHandler::new(
        Arc::clone(&repository) as Arc<dyn WizardRepository>,
        Arc::clone(&results) as Arc<dyn ResultsSink>,
    );
    let retreat = RetreatHandler::new(Arc::clone(&repository) as Arc<dyn WizardRepository>);
    let view = GetSurveyViewHandler::new(Arc::clone(&repository) as Arc<dyn WizardRepository>);

    println!("SleepFit");
    println!("Check your sleep health.\n");

    let session_id = loop {
        let input = read_line("Your age (10-100): ")?;
        match start.handle(StartSessionCommand { age: input.trim().parse().unwrap_or(-1) }).await {
            Ok(result) => break result.session_id,
            Err(StartSessionError::InvalidAge(err)) => println!("{}", err),
            Err(err) => return Err(Box::new(err) as Box<dyn Error>),
        }
    };

    let completed = run_survey(session_id, &submit, &advance, &retreat, &view).await?;
    if let Some(survey) = completed {
        print_results(&survey);
    }
    Ok(())
}

async fn run_survey(
    session_id: SessionId,
    submit: &SubmitAnswerHandler,
    advance: &AdvanceHandler,
    retreat: &RetreatHandler,
    view: &GetSurveyViewHandler,
) -> Result<Option<CompletedSurvey>, Box<dyn Error>> {
    let mut last_section = String::new();

    loop {
        let current: SurveyView = view.handle(GetSurveyViewQuery { session_id }).await?;

        if current.status == WizardStatus::NoQuestions {
            println!("No questions to ask right now.");
            return Ok(None);
        }
        let Some(ref question) = current.question else {
            return Ok(None);
        };

        if question.section != last_section {
            last_section = question.section.clone();
            println!("\n=== {} ===", last_section);
        }
        print_question(&current, &question);

        let input = read_line("> ")?;
        let input = input.trim();

        if input.eq_ignore_ascii_case("back") {
            match retreat.handle(RetreatCommand { session_id }).await? {
                RetreatResult::Exited => {
                    println!("Leaving the survey.");
                    return Ok(None);
                }
                RetreatResult::Moved { .. } => continue,
            }
        }

        if !input.is_empty() {
            let value = parse_answer(question.question_type, input);
            submit
                .handle(SubmitAnswerCommand {
                    session_id,
                    question_id: question.id.clone(),
                    value,
                })
                .await?;
        }

        match advance.handle(AdvanceCommand { session_id }).await? {
            AdvanceResult::Completed { survey } => return Ok(Some(survey)),
            AdvanceResult::Blocked { .. } => {
                println!("(answer is incomplete; type 'back' to go back)");
            }
            AdvanceResult::Moved { .. } => {}
        }
    }
}

fn print_question(view: &SurveyView, question: &QuestionView) {
    println!(
        "\n[{}/{}] {}",
        view.current_index + 1,
        view.total_visible,
        question.question
    );
    if let Some(sublabel) = &question.sublabel {
        println!("  {}", sublabel);
    }
    if let Some(info) = &question.info {
        println!("  ({})", info);
    }
    let hint = match question.question_type {
        QuestionType::YesNo => "yes/no",
        QuestionType::Time12 => "e.g. 10:30 pm",
        QuestionType::Frequency => "e.g. 3 per week (day/week/year)",
        QuestionType::Duration => "e.g. 45 minutes or 1.5 hours",
        QuestionType::Text => "free text",
    };
    println!("  [{}]", hint);
}

/// Maps raw console input onto an answer value. Unparseable structured
/// input is stored as partially filled fields, the same way a half-filled
/// form would be, and blocks advancing until corrected.
fn parse_answer(question_type: QuestionType, input: &str) -> AnswerValue {
    match question_type {
        QuestionType::YesNo => match input.to_ascii_lowercase().as_str() {
            "y" | "yes" => AnswerValue::yes_no(YesNo::Yes),
            _ => AnswerValue::yes_no(YesNo::No),
        },
        QuestionType::Time12 => AnswerValue::time(parse_time(input)),
        QuestionType::Frequency => AnswerValue::frequency(parse_frequency(input)),
        QuestionType::Duration => AnswerValue::duration(parse_duration(input)),
        QuestionType::Text => AnswerValue::text(input),
    }
}

fn parse_time(input: &str) -> TimeOfDay {
    let lower = input.to_ascii_lowercase();
    let meridiem = if lower.contains("pm") {
        Some(Meridiem::Pm)
    } else if lower.contains("am") {
        Some(Meridiem::Am)
    } else {
        None
    };
    let digits = lower.replace("am", "").replace("pm", "");
    let mut parts = digits.trim().splitn(2, ':');
    let hour = parts.next().unwrap_or("").trim().to_string();
    let minute = parts.next().unwrap_or("").trim().to_string();
    TimeOfDay { hour, minute, meridiem }
}

fn parse_frequency(input: &str) -> Frequency {
    let lower = input.to_ascii_lowercase();
    let per = if lower.contains("day") {
        Some(PerPeriod::Day)
    } else if lower.contains("week") {
        Some(PerPeriod::Week)
    } else if lower.contains("year") {
        Some(PerPeriod::Year)
    } else {
        None
    };
    let count = lower
        .split_whitespace()
        .find(|part| part.parse::<f64>().is_ok())
        .unwrap_or("")
        .to_string();
    Frequency { count, per }
}

fn parse_duration(input: &str) -> DurationSpan {
    let lower = input.to_ascii_lowercase();
    let unit = if lower.contains("min") {
        Some(DurationUnit::Minutes)
    } else if lower.contains("hour") || lower.contains("hr") {
        Some(DurationUnit::Hours)
    } else {
        None
    };
    let value = lower
        .split_whitespace()
        .find(|part| part.parse::<f64>().is_ok())
        .unwrap_or("")
        .to_string();
    DurationSpan { value, unit }
}

fn print_results(survey: &CompletedSurvey) {
    println!("\n=== Results ===");
    println!("age: {}", survey.age);
    for (id, value) in survey.answers.iter() {
        println!("{}: {}", id, format_answer(value));
    }
    println!("\nThank you for completing the survey.");
}

fn format_answer(value: &AnswerValue) -> String {
    match value {
        AnswerValue::YesNo { value } => value.to_string(),
        AnswerValue::Time12 { value } => {
            let meridiem = value
                .meridiem
                .map(|m| m.to_string())
                .unwrap_or_default();
            format!("{}:{} {}", value.hour, value.minute, meridiem)
        }
        AnswerValue::Frequency { value } => {
            let per = value.per.map(|p| p.to_string()).unwrap_or_default();
            format!("{} per {}", value.count, per)
        }
        AnswerValue::Duration { value } => {
            let unit = value.unit.map(|u| u.to_string()).unwrap_or_default();
            format!("{} {}", value.value, unit)
        }
        AnswerValue::Text { value } => value.clone(),
    }
}

fn read_line(prompt: &str) -> io::Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}
