//! The built-in SleepFit screening catalog.
//!
//! Two sections: sleep screening (work schedule and bed/wake times) and
//! physical activity screening (moderate/vigorous activity and sedentary
//! time). Weekend sleep questions are skipped entirely for respondents whose
//! weekend schedule does not differ.

use once_cell::sync::Lazy;

use super::{Catalog, QuestionDef, QuestionType};

const SLEEP: &str = "Sleep Screening";
const ACTIVITY: &str = "Physical Activity Screening";

static CATALOG: Lazy<Catalog> = Lazy::new(|| {
    Catalog::new(vec![
        QuestionDef::new("work", SLEEP, QuestionType::YesNo, "Do you work?"),
        QuestionDef::new(
            "sleep_weekend_diff",
            SLEEP,
            QuestionType::YesNo,
            "Do you fall asleep at different times on the weekends versus the weekdays?",
        )
        // only ask if they do not work
        .depends_on("work", "No"),
        QuestionDef::new(
            "sleep_weekday_bedtime",
            SLEEP,
            QuestionType::Time12,
            "What time do you usually fall asleep on weekdays or workdays?",
        ),
        QuestionDef::new(
            "sleep_weekday_wake",
            SLEEP,
            QuestionType::Time12,
            "What time do you usually wake up on weekdays or workdays?",
        ),
        QuestionDef::new(
            "sleep_weekend_bedtime",
            SLEEP,
            QuestionType::Time12,
            "What time do you usually fall asleep on weekends or non-workdays?",
        )
        .optional_if("sleep_weekend_diff", "No"),
        QuestionDef::new(
            "sleep_weekend_wake",
            SLEEP,
            QuestionType::Time12,
            "What time do you usually wake up on weekends or non-workdays?",
        )
        .optional_if("sleep_weekend_diff", "No"),
        QuestionDef::new(
            "moderate_min_week",
            ACTIVITY,
            QuestionType::Frequency,
            "How often do you do moderate-intensity leisure-time physical activities?",
        )
        .sublabel("a. Number of times (per day, week, or year)"),
        QuestionDef::new(
            "moderate_duration_each",
            ACTIVITY,
            QuestionType::Duration,
            "About how long do you do these moderate leisure-time physical activities each time?",
        )
        .sublabel("a. Time in minutes/hours")
        .depends_on_answered("moderate_min_week"),
        QuestionDef::new(
            "vigorous_min_week",
            ACTIVITY,
            QuestionType::Frequency,
            "How often do you do vigorous-intensity leisure-time physical activities?",
        )
        .sublabel("a. Number of times (per day, week, or year)"),
        QuestionDef::new(
            "vigorous_duration_each",
            ACTIVITY,
            QuestionType::Duration,
            "About how long do you do these vigorous leisure-time physical activities each time?",
        )
        .sublabel("a. Time in minutes/hours")
        .depends_on_answered("vigorous_min_week"),
        QuestionDef::new(
            "sedentary_hours_day",
            ACTIVITY,
            QuestionType::Duration,
            "How much time do you usually spend sitting on a typical day?",
        )
        .sublabel("a. Time in minutes/hours")
        .info(
            "This includes sitting at school, at home, getting to and from places, or with \
             friends including time spent sitting at a desk, traveling in a car or bus, reading, \
             playing cards, watching television, or using a computer. Do not include time spent \
             sleeping.",
        ),
    ])
    .expect("built-in catalog is well-formed")
});

/// Returns the built-in SleepFit catalog.
pub fn sleepfit_catalog() -> &'static Catalog {
    &CATALOG
}
