//! Form Module
//!
//! Terminal presentation for the setup questionnaire: banner, progress
//! rendering, and the interactive runner that drives the wizard.

pub mod banner;
pub mod render;
pub mod runner;
