//! crates/athletic_spirit_core/src/responder.rs
//!
//! The scripted responder behind the chat widget. It classifies user text
//! against an ordered list of case-insensitive patterns and picks a canned reply.

use regex::{Regex, RegexBuilder};

pub const ATHLETE_REPLY: &str = "Great! How can I help you with your training today?";
pub const COACH_REPLY: &str = "Hello Coach! What do you need assistance with?";
pub const FALLBACK_REPLY: &str = "Tell me more about your goals or questions.";

/// Raised when a rule's pattern does not compile.
#[derive(Debug, thiserror::Error)]
#[error("Invalid responder pattern '{pattern}': {source}")]
pub struct ResponderError {
    pub pattern: String,
    #[source]
    pub source: regex::Error,
}

#[derive(Debug, Clone)]
struct Rule {
    pattern: Regex,
    reply: String,
}

/// Maps free text to a reply. The first matching rule wins.
#[derive(Debug, Clone)]
pub struct Responder {
    rules: Vec<Rule>,
    fallback: String,
}

impl Responder {
    /// Builds the default sports script: athlete, then coach, then the fallback.
    pub fn new() -> Result<Self, ResponderError> {
        Self::with_rules(
            [("athlete", ATHLETE_REPLY), ("coach", COACH_REPLY)],
            FALLBACK_REPLY,
        )
    }

    /// Builds a responder from `(pattern, reply)` pairs, evaluated in order.
    pub fn with_rules<I, P, R>(rules: I, fallback: impl Into<String>) -> Result<Self, ResponderError>
    where
        I: IntoIterator<Item = (P, R)>,
        P: AsRef<str>,
        R: Into<String>,
    {
        let rules = rules
            .into_iter()
            .map(|(pattern, reply)| {
                let pattern = pattern.as_ref();
                RegexBuilder::new(pattern)
                    .case_insensitive(true)
                    .build()
                    .map(|regex| Rule {
                        pattern: regex,
                        reply: reply.into(),
                    })
                    .map_err(|source| ResponderError {
                        pattern: pattern.to_string(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            rules,
            fallback: fallback.into(),
        })
    }

    pub fn reply_to(&self, text: &str) -> &str {
        self.rules
            .iter()
            .find(|rule| rule.pattern.is_match(text))
            .map(|rule| rule.reply.as_str())
            .unwrap_or(&self.fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn responder() -> Responder {
        Responder::new().unwrap()
    }

    #[test]
    fn athlete_in_any_case_gets_training_reply() {
        let r = responder();
        assert_eq!(r.reply_to("I am an athlete"), ATHLETE_REPLY);
        assert_eq!(r.reply_to("ATHLETE here"), ATHLETE_REPLY);
        assert_eq!(r.reply_to("former AtHlEtEs unite"), ATHLETE_REPLY);
    }

    #[test]
    fn coach_gets_coach_reply() {
        let r = responder();
        assert_eq!(r.reply_to("I'm a Coach"), COACH_REPLY);
        assert_eq!(r.reply_to("coaching tips?"), COACH_REPLY);
    }

    #[test]
    fn athlete_wins_over_coach() {
        let r = responder();
        assert_eq!(r.reply_to("coach and athlete"), ATHLETE_REPLY);
    }

    #[test]
    fn anything_else_falls_back() {
        let r = responder();
        assert_eq!(r.reply_to("hello there"), FALLBACK_REPLY);
        assert_eq!(r.reply_to("athl ete"), FALLBACK_REPLY);
    }

    #[test]
    fn custom_rules_are_ordered() {
        let r = Responder::with_rules([("run", "Go run."), ("swim", "Go swim.")], "Rest.").unwrap();
        assert_eq!(r.reply_to("I swim and run"), "Go run.");
        assert_eq!(r.reply_to("SWIM"), "Go swim.");
        assert_eq!(r.reply_to("nap"), "Rest.");
    }

    #[test]
    fn invalid_pattern_is_rejected_at_construction() {
        let err = Responder::with_rules([("(unclosed", "x")], "y").unwrap_err();
        assert_eq!(err.pattern, "(unclosed");
    }
}
