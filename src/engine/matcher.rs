//! Deterministic intent matcher.

use regex::{Regex, RegexBuilder};

use crate::engine::error::ConfigError;
use crate::engine::rules::{self, Rule};

/// Fixed reply for empty or whitespace-only input.
pub const EMPTY_INPUT_PROMPT: &str = "Please say something! I'm here to help.";

/// Whole-word alternatives that flag an input as an exit command.
///
/// Deliberately independent of the response rule table: "end" triggers exit
/// detection even though no rule responds to it, and an input that matches a
/// greeting rule but also contains "bye" is still flagged.
const EXIT_PATTERN: &str = r"\b(bye|goodbye|exit|quit|end)\b";

/// Result of matching one line of input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchResult {
    /// The canned response to surface.
    pub response: String,
    /// Whether the input asked to end the session.
    pub is_exit: bool,
}

/// A rule with its pattern compiled.
struct CompiledRule {
    regex: Regex,
    responses: Vec<String>,
}

/// Deterministic text-to-response matcher.
///
/// Read-only after construction, so a single instance can be shared by
/// reference across unlimited concurrent callers.
pub struct IntentMatcher {
    rules: Vec<CompiledRule>,
    fallbacks: Vec<String>,
    exit_regex: Regex,
}

impl IntentMatcher {
    /// Build a matcher from an ordered rule table and a fallback list.
    ///
    /// Rule order is part of the contract: the first rule whose pattern
    /// matches wins, even if later rules would also match.
    ///
    /// # Errors
    /// Returns an error if any rule has an empty response list, the fallback
    /// list is empty, or a pattern fails to compile.
    pub fn new(rules: Vec<Rule>, fallbacks: Vec<String>) -> Result<Self, ConfigError> {
        if fallbacks.is_empty() {
            return Err(ConfigError::EmptyFallbacks);
        }

        let mut compiled = Vec::with_capacity(rules.len());
        for rule in rules {
            if rule.responses.is_empty() {
                return Err(ConfigError::EmptyResponses(rule.pattern));
            }
            let regex = RegexBuilder::new(&rule.pattern)
                .case_insensitive(true)
                .build()?;
            compiled.push(CompiledRule {
                regex,
                responses: rule.responses,
            });
        }

        let exit_regex = RegexBuilder::new(EXIT_PATTERN)
            .case_insensitive(true)
            .build()?;

        Ok(Self {
            rules: compiled,
            fallbacks,
            exit_regex,
        })
    }

    /// Build a matcher over the stock rule table and fallbacks.
    ///
    /// # Errors
    /// Returns an error if the stock table fails to compile.
    pub fn with_defaults() -> Result<Self, ConfigError> {
        Self::new(rules::default_rules(), rules::default_fallbacks())
    }

    /// Map input text to a response and exit flag.
    ///
    /// Total over all inputs: blank input gets the fixed prompt, unmatched
    /// input gets the first fallback, and nothing here ever fails. The exit
    /// flag is computed in a second, independent pass over the trimmed input.
    #[must_use]
    pub fn respond(&self, input: &str) -> MatchResult {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return MatchResult {
                response: EMPTY_INPUT_PROMPT.to_string(),
                is_exit: false,
            };
        }

        let is_exit = self.exit_regex.is_match(trimmed);

        for rule in &self.rules {
            if !rule.regex.is_match(trimmed) {
                continue;
            }
            // Always index 0: selection is deterministic by contract.
            if let Some(first) = rule.responses.first() {
                return MatchResult {
                    response: first.clone(),
                    is_exit,
                };
            }
        }

        MatchResult {
            response: self.fallbacks.first().cloned().unwrap_or_default(),
            is_exit,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn greeting_only_matcher() -> IntentMatcher {
        let rules = vec![Rule::new(
            r"\b(hello|hi)\b",
            &["Hi there! How can I assist you today?"],
        )];
        let fallbacks = vec!["Sorry, I didn't understand that.".to_string()];
        IntentMatcher::new(rules, fallbacks).unwrap()
    }

    #[test]
    fn test_blank_input_gets_fixed_prompt() {
        let matcher = IntentMatcher::with_defaults().unwrap();
        for input in ["", "   ", "\t\n", "  \r\n  "] {
            let result = matcher.respond(input);
            assert_eq!(result.response, EMPTY_INPUT_PROMPT);
            assert!(!result.is_exit);
        }
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let matcher = IntentMatcher::with_defaults().unwrap();
        let lower = matcher.respond("hello there");
        let upper = matcher.respond("HELLO");
        assert_eq!(lower.response, "Hi there! How can I assist you today?");
        assert_eq!(upper.response, lower.response);
    }

    #[test]
    fn test_no_match_inside_larger_word() {
        let matcher = greeting_only_matcher();
        let result = matcher.respond("archive");
        assert_eq!(result.response, "Sorry, I didn't understand that.");
        let result = matcher.respond("hive");
        assert_eq!(result.response, "Sorry, I didn't understand that.");
    }

    #[test]
    fn test_first_match_wins() {
        let rules = vec![
            Rule::new(r"\bhello\b", &["first"]),
            Rule::new(r"\bhello\b", &["second"]),
        ];
        let matcher = IntentMatcher::new(rules, vec!["fallback".to_string()]).unwrap();
        assert_eq!(matcher.respond("hello").response, "first");
    }

    #[test]
    fn test_bye_is_farewell_and_exit() {
        let matcher = IntentMatcher::with_defaults().unwrap();
        let result = matcher.respond("bye");
        assert_eq!(result.response, "Goodbye! It was nice chatting with you!");
        assert!(result.is_exit);
    }

    #[test]
    fn test_exit_flag_is_independent_of_matched_rule() {
        let matcher = IntentMatcher::with_defaults().unwrap();
        let result = matcher.respond("hello, gotta run, bye");
        // Greeting rule wins the response, the exit check still fires.
        assert_eq!(result.response, "Hi there! How can I assist you today?");
        assert!(result.is_exit);
    }

    #[test]
    fn test_unmatched_input_gets_first_fallback() {
        let matcher = IntentMatcher::with_defaults().unwrap();
        let result = matcher.respond("asdkjasd");
        assert_eq!(
            result.response,
            "Sorry, I didn't understand that. Could you rephrase your question?"
        );
        assert!(!result.is_exit);
    }

    #[test]
    fn test_respond_is_deterministic() {
        let matcher = IntentMatcher::with_defaults().unwrap();
        let first = matcher.respond("how are you today?");
        let second = matcher.respond("how are you today?");
        assert_eq!(first, second);
    }

    #[test]
    fn test_greeting_only_scenario() {
        let matcher = greeting_only_matcher();

        let result = matcher.respond("hi");
        assert_eq!(result.response, "Hi there! How can I assist you today?");
        assert!(!result.is_exit);

        // "quit" matches no rule but still trips exit detection.
        let result = matcher.respond("quit");
        assert_eq!(result.response, "Sorry, I didn't understand that.");
        assert!(result.is_exit);
    }

    #[test]
    fn test_construction_rejects_empty_fallbacks() {
        let result = IntentMatcher::new(vec![], vec![]);
        assert!(matches!(result, Err(ConfigError::EmptyFallbacks)));
    }

    #[test]
    fn test_construction_rejects_empty_response_list() {
        let rules = vec![Rule {
            pattern: r"\bhello\b".to_string(),
            responses: vec![],
        }];
        let result = IntentMatcher::new(rules, vec!["fallback".to_string()]);
        assert!(matches!(result, Err(ConfigError::EmptyResponses(_))));
    }

    #[test]
    fn test_construction_rejects_invalid_pattern() {
        let rules = vec![Rule::new(r"(unclosed", &["oops"])];
        let result = IntentMatcher::new(rules, vec!["fallback".to_string()]);
        assert!(matches!(result, Err(ConfigError::InvalidPattern(_))));
    }
}
