//! Deterministic local reflection messages

use moodlog_core::{Error, Label, Result};
use regex::Regex;

pub const POSITIVE_MESSAGE: &str =
    "Bugünkü duygu tonun pozitif; bu enerjiyi küçük ama anlamlı bir adım için kullanabilirsin.";
pub const HEALTH_MESSAGE: &str =
    "Bugün zorlayıcı görünüyorsun; kendine nazik ol, dinlen, gerekirse bir sağlık profesyoneline danış.";
pub const FATIGUE_MESSAGE: &str =
    "Yorgunluk öne çıkıyor; temponu hafiflet, kısa bir mola ver ve su içmeyi ihmal etme.";
pub const NEGATIVE_MESSAGE: &str =
    "Duygusal olarak ağır bir gün; kendine anlayış gösterip yükünü biraz hafifletmen iyi gelebilir.";
pub const NEUTRAL_MESSAGE: &str =
    "Duygu tonun daha nötr; küçük, net bir hedefle güne hafif bir ivme katabilirsin.";

const HEALTH_SYMPTOMS: &str = "ağrı|sızı|düştüm|ateş|hasta|grip|migren|sakat|kan";
const FATIGUE: &str = "yorgun|uyku|bitkin";

struct Template {
    label: Label,
    pattern: Option<Regex>,
    message: &'static str,
}

/// Ordered template table; the first template whose label and pattern match wins
pub struct LocalTemplates {
    templates: Vec<Template>,
}

impl LocalTemplates {
    pub fn new() -> Result<Self> {
        let templates = vec![
            Template {
                label: Label::Positive,
                pattern: None,
                message: POSITIVE_MESSAGE,
            },
            Template {
                label: Label::Negative,
                pattern: Some(compile(HEALTH_SYMPTOMS)?),
                message: HEALTH_MESSAGE,
            },
            Template {
                label: Label::Negative,
                pattern: Some(compile(FATIGUE)?),
                message: FATIGUE_MESSAGE,
            },
            Template {
                label: Label::Negative,
                pattern: None,
                message: NEGATIVE_MESSAGE,
            },
        ];
        Ok(Self { templates })
    }

    /// Message for a note, keyed by its localized label
    pub fn render(&self, text: &str, localized_label: &str) -> &'static str {
        let label = Label::from_localized(localized_label);
        let text = text.to_lowercase();

        self.templates
            .iter()
            .find(|t| {
                t.label == label && t.pattern.as_ref().map_or(true, |p| p.is_match(&text))
            })
            .map(|t| t.message)
            .unwrap_or(NEUTRAL_MESSAGE)
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| Error::config(format!("invalid template pattern: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_ignores_keywords() {
        let templates = LocalTemplates::new().unwrap();
        assert_eq!(templates.render("başım ağrıyor ama mutluyum", "pozitif"), POSITIVE_MESSAGE);
    }

    #[test]
    fn test_negative_branches() {
        let templates = LocalTemplates::new().unwrap();
        assert_eq!(templates.render("Migren yüzünden berbatım", "negatif"), HEALTH_MESSAGE);
        assert_eq!(templates.render("Çok yorgunum", "negatif"), FATIGUE_MESSAGE);
        assert_eq!(templates.render("Her şey kötü", "negatif"), NEGATIVE_MESSAGE);
    }

    #[test]
    fn test_health_beats_fatigue() {
        let templates = LocalTemplates::new().unwrap();
        assert_eq!(templates.render("hasta ve yorgunum", "negatif"), HEALTH_MESSAGE);
    }

    #[test]
    fn test_neutral_and_unknown_labels() {
        let templates = LocalTemplates::new().unwrap();
        assert_eq!(templates.render("yorgunum", "nötr"), NEUTRAL_MESSAGE);
        assert_eq!(templates.render("yorgunum", "???"), NEUTRAL_MESSAGE);
    }
}
