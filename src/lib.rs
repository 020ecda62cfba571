//! SleepFit - Sleep and Physical Activity Screening Questionnaire
//!
//! This crate implements a linear questionnaire whose question set is
//! dynamically computed from prior answers: visibility predicates on the
//! question catalog decide, at every step, which ordered subset of questions
//! is live, and per-type validation decides whether the current answer is
//! complete enough to advance.

pub mod adapters;
pub mod application;
pub mod domain;
pub mod ports;
