//! Reflection tone selection
//!
//! An ordered decision list; the first matching rule picks the tone.

use moodlog_core::{Error, Label, Result, Tone};
use regex::Regex;

const DISTRESS_PATTERN: &str = "ağrı|hasta|düştüm|üzg|mutsuz|stres|kayg|ateş";
const GOAL_PATTERN: &str = "hedef|plan|çalış|ödev|iş";

/// Condition part of a tone rule
enum Condition {
    Always,
    MinScore(f64),
    Matches(Regex),
    Either(Box<Condition>, Box<Condition>),
}

impl Condition {
    fn holds(&self, score: f64, text: &str) -> bool {
        match self {
            Self::Always => true,
            Self::MinScore(min) => score >= *min,
            Self::Matches(pattern) => pattern.is_match(text),
            Self::Either(a, b) => a.holds(score, text) || b.holds(score, text),
        }
    }
}

struct ToneRule {
    label: Label,
    condition: Condition,
    tone: Tone,
}

/// Picks a tone from label, score, and note text
pub struct ToneSelector {
    rules: Vec<ToneRule>,
}

impl ToneSelector {
    pub fn new() -> Result<Self> {
        let distress = compile(DISTRESS_PATTERN)?;
        let goal = compile(GOAL_PATTERN)?;

        let rules = vec![
            ToneRule {
                label: Label::Negative,
                condition: Condition::Either(
                    Box::new(Condition::MinScore(0.45)),
                    Box::new(Condition::Matches(distress)),
                ),
                tone: Tone::Empath,
            },
            ToneRule {
                label: Label::Positive,
                condition: Condition::MinScore(0.75),
                tone: Tone::Funny,
            },
            ToneRule {
                label: Label::Neutral,
                condition: Condition::Matches(goal),
                tone: Tone::Coach,
            },
            ToneRule {
                label: Label::Negative,
                condition: Condition::Always,
                tone: Tone::Empath,
            },
        ];

        Ok(Self { rules })
    }

    pub fn select(&self, label: Label, score: f64, text: &str) -> Tone {
        let text = text.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.label == label && rule.condition.holds(score, &text))
            .map(|rule| rule.tone)
            .unwrap_or(Tone::Coach)
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| Error::config(format!("invalid tone pattern: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_is_always_empath() {
        let selector = ToneSelector::new().unwrap();
        assert_eq!(selector.select(Label::Negative, 0.9, "kötü"), Tone::Empath);
        assert_eq!(selector.select(Label::Negative, 0.1, "kötü"), Tone::Empath);
        assert_eq!(selector.select(Label::Negative, 0.1, "Stres"), Tone::Empath);
    }

    #[test]
    fn test_confident_positive_is_funny() {
        let selector = ToneSelector::new().unwrap();
        assert_eq!(selector.select(Label::Positive, 0.75, "süper"), Tone::Funny);
        assert_eq!(selector.select(Label::Positive, 0.74, "süper"), Tone::Coach);
    }

    #[test]
    fn test_neutral_with_plans_is_coach() {
        let selector = ToneSelector::new().unwrap();
        assert_eq!(
            selector.select(Label::Neutral, 0.5, "Yarın için PLAN yaptım"),
            Tone::Coach
        );
        assert_eq!(selector.select(Label::Neutral, 0.5, "sıradan"), Tone::Coach);
    }

    #[test]
    fn test_rules_only_apply_to_their_label() {
        let selector = ToneSelector::new().unwrap();
        // Distress words only matter for negative notes
        assert_eq!(selector.select(Label::Positive, 0.5, "stres"), Tone::Coach);
        assert_eq!(selector.select(Label::Neutral, 0.9, "stres"), Tone::Coach);
    }
}
