//! Topic detection by keyword groups
//!
//! Keywords are matched as lowercase substrings, so stems like `kayg` also
//! hit `kaygılıyım`. Each group contributes its tag at most once and tags
//! come out in table order, not in the order they appear in the text.

use aho_corasick::{AhoCorasick, MatchKind};
use moodlog_core::{Error, Result};

/// Tag of the health group; it drives the health disclaimer tip
pub const HEALTH_TOPIC: &str = "sağlık";

/// Keyword groups in evaluation order
pub const TOPIC_RULES: &[(&str, &[&str])] = &[
    ("akademik/iş", &["ders", "sınav", "ödev", "çalış", "proje"]),
    ("enerji/uyku", &["yorgun", "enerji", "uyku", "uykusuz", "bitkin"]),
    ("duygusal stres", &["üzg", "mutsuz", "stres", "kayg", "anksiyete"]),
    ("sosyal", &["arkadaş", "aile", "ilişki", "sevgili"]),
    ("finans", &["para", "bütçe", "fatura"]),
    (HEALTH_TOPIC, &["ağrı", "hasta", "düştüm", "sakat", "grip", "ateş"]),
];

/// Multi-group keyword matcher
pub struct TopicExtractor {
    matcher: AhoCorasick,
    /// Group index for every pattern in `matcher`
    pattern_groups: Vec<usize>,
    tags: Vec<String>,
}

impl TopicExtractor {
    /// Build the extractor with the built-in keyword groups
    pub fn new() -> Result<Self> {
        Self::with_rules(TOPIC_RULES)
    }

    pub fn with_rules(rules: &[(&str, &[&str])]) -> Result<Self> {
        let mut patterns = Vec::new();
        let mut pattern_groups = Vec::new();
        for (group, (_, keywords)) in rules.iter().enumerate() {
            for keyword in keywords.iter() {
                patterns.push(keyword.to_lowercase());
                pattern_groups.push(group);
            }
        }

        let matcher = AhoCorasick::builder()
            .match_kind(MatchKind::Standard)
            .build(&patterns)
            .map_err(|e| Error::config(format!("Failed to build topic matcher: {e}")))?;

        Ok(Self {
            matcher,
            pattern_groups,
            tags: rules.iter().map(|(tag, _)| tag.to_string()).collect(),
        })
    }

    /// Topic tags found in `text`
    pub fn extract(&self, text: &str) -> Vec<String> {
        let text = text.to_lowercase();
        let mut hit = vec![false; self.tags.len()];

        for found in self.matcher.find_overlapping_iter(&text) {
            hit[self.pattern_groups[found.pattern().as_usize()]] = true;
        }

        self.tags
            .iter()
            .zip(hit)
            .filter_map(|(tag, matched)| matched.then(|| tag.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_keywords_yields_nothing() {
        let extractor = TopicExtractor::new().unwrap();
        assert!(extractor.extract("Bugün güzel bir gündü").is_empty());
        assert!(extractor.extract("").is_empty());
    }

    #[test]
    fn test_tags_follow_table_order() {
        let extractor = TopicExtractor::new().unwrap();
        let topics = extractor.extract("Başım ağrıyor, sınav var ve çok yorgunum");
        assert_eq!(topics, vec!["akademik/iş", "enerji/uyku", "sağlık"]);
    }

    #[test]
    fn test_group_contributes_once() {
        let extractor = TopicExtractor::new().unwrap();
        let topics = extractor.extract("uykusuz kaldım, uyku düzenim bozuk, yorgunum");
        assert_eq!(topics, vec!["enerji/uyku"]);
    }

    #[test]
    fn test_case_insensitive_turkish_letters() {
        let extractor = TopicExtractor::new().unwrap();
        assert_eq!(extractor.extract("ARKADAŞLARIMLA buluştum"), vec!["sosyal"]);
        assert_eq!(extractor.extract("Fatura ödedim"), vec!["finans"]);
    }

    #[test]
    fn test_stems_match_inside_words() {
        let extractor = TopicExtractor::new().unwrap();
        assert_eq!(
            extractor.extract("çok kaygılıyım ve üzgünüm"),
            vec!["duygusal stres"]
        );
    }
}
