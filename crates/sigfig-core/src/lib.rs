//! Problem generation and answer checking for scientific notation and
//! significant-figure practice.
//!
//! The [`generator`] builds randomized problems per [`model::Category`],
//! the [`checker`] grades free-text answers against them, and
//! [`practice`] and [`quiz`] hold the session state the CLI drives.

pub mod checker;
pub mod config;
pub mod error;
pub mod format;
pub mod generator;
pub mod model;
pub mod practice;
pub mod quiz;
pub mod rules;

pub use checker::{check, Verdict};
pub use generator::{generate, generate_with};
pub use model::{Answer, AnswerType, Category, Comparison, Problem};
