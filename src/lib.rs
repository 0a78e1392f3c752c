//! Automanic Project Setup
//!
//! A terminal questionnaire that walks through five single-choice questions
//! about a new project (type, language, framework, build system, database)
//! and hands the collected answers to a pluggable completion consumer.

pub mod catalog;
pub mod form;
pub mod plan;
pub mod wizard;
