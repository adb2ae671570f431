//! Response rules and the stock rule table.

use serde::{Deserialize, Serialize};

/// A single response rule.
///
/// Rules are evaluated in the order they were handed to the matcher; earlier
/// rules take priority, and the first response in the list is always the one
/// served. The list still carries the alternates so a different selection
/// strategy can be layered on top without touching the table.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Rule {
    /// Regex source, matched case-insensitively anywhere in the input.
    /// Patterns are expected to use `\b` word boundaries so keywords never
    /// match inside a larger word.
    pub pattern: String,
    /// Ordered response candidates; must not be empty.
    pub responses: Vec<String>,
}

impl Rule {
    /// Build a rule from a pattern and its response list.
    #[must_use]
    pub fn new(pattern: impl Into<String>, responses: &[&str]) -> Self {
        Self {
            pattern: pattern.into(),
            responses: responses.iter().map(|r| (*r).to_string()).collect(),
        }
    }
}

/// The stock rule table, ordered by priority.
#[must_use]
pub fn default_rules() -> Vec<Rule> {
    vec![
        // Greetings
        Rule::new(
            r"\b(hello|hi|hey|greetings)\b",
            &[
                "Hi there! How can I assist you today?",
                "Hello! What can I help you with?",
                "Hey! Nice to meet you. How can I help?",
            ],
        ),
        // How are you
        Rule::new(
            r"\b(how are you|how's it going|how do you do)\b",
            &[
                "I'm doing great, thank you for asking! How are you?",
                "I'm functioning perfectly! How can I help you today?",
                "All systems running smoothly! What can I do for you?",
            ],
        ),
        // Name questions
        Rule::new(
            r"\b(what's your name|who are you|your name)\b",
            &[
                "I'm Parley, your friendly assistant!",
                "You can call me Parley. I'm here to help!",
                "I'm Parley, nice to meet you!",
            ],
        ),
        // Help requests
        Rule::new(
            r"\b(help|assist|support|can you help)\b",
            &[
                "I'm here to help! I can answer questions, have conversations, and assist with various topics.",
                "Of course! I can help with information, answer questions, or just chat. What do you need?",
                "I'd be happy to help! What would you like to know or discuss?",
            ],
        ),
        // Time and date
        Rule::new(
            r"\b(time|date|what time|current time)\b",
            &[
                "I don't carry a clock of my own, but your device surely does!",
                "Time flies when you're chatting! Check your system clock for the details.",
            ],
        ),
        // Weather
        Rule::new(
            r"\b(weather|temperature|climate)\b",
            &[
                "I don't have access to real-time weather data, but I hope it's nice where you are!",
                "For accurate weather information, I'd recommend checking a weather app or website.",
                "I wish I could tell you about the weather, but I don't have that capability yet!",
            ],
        ),
        // Goodbye
        Rule::new(
            r"\b(bye|goodbye|see you|farewell|exit|quit)\b",
            &[
                "Goodbye! It was nice chatting with you!",
                "See you later! Have a great day!",
                "Farewell! Come back anytime you want to chat!",
            ],
        ),
        // Thank you
        Rule::new(
            r"\b(thank you|thanks|appreciate)\b",
            &[
                "You're welcome! Happy to help!",
                "No problem at all! Glad I could assist!",
                "You're very welcome! Anything else I can help with?",
            ],
        ),
    ]
}

/// The stock fallback responses for inputs no rule matches.
#[must_use]
pub fn default_fallbacks() -> Vec<String> {
    [
        "Sorry, I didn't understand that. Could you rephrase your question?",
        "I'm not sure what you mean. Can you try asking in a different way?",
        "Hmm, I don't have a response for that. Could you be more specific?",
        "I'm still learning! Could you ask me something else?",
        "That's interesting, but I'm not sure how to respond. What else would you like to know?",
    ]
    .iter()
    .map(|r| (*r).to_string())
    .collect()
}
