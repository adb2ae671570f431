//! Intent-matching engine.
//!
//! Maps one line of input text to exactly one canned response:
//! ordered rules, case-insensitive whole-word matching, first-match-wins,
//! fixed fallback policy, independent exit-command detection.

pub mod error;
pub mod matcher;
pub mod rules;

pub use error::ConfigError;
pub use matcher::{IntentMatcher, MatchResult};
pub use rules::Rule;
