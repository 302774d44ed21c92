//! Plain-text rendering for terminal output

use moodlog_core::{JournalEntry, Label};
use moodlog_journal::WeeklySummary;
use std::fmt::{self, Write};

const BAR_WIDTH: usize = 20;

/// Result card for a freshly analyzed note
pub fn entry_card(entry: &JournalEntry) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(
        out,
        "Duygu durumu: {}  {}",
        entry.tr_label,
        entry.label.emoji()
    )?;
    writeln!(out, "{}", entry.message)?;
    push_tips(&mut out, &entry.tips)?;
    Ok(out)
}

/// History listing, most recent first
pub fn history(entries: &[JournalEntry]) -> Result<String, fmt::Error> {
    if entries.is_empty() {
        return Ok("Henüz kayıt yok.\n".to_string());
    }

    let mut out = String::new();
    for entry in entries {
        writeln!(
            out,
            "{}  {}  (Duygu: {})",
            entry.date.format("%Y-%m-%d %H:%M"),
            entry.label.emoji(),
            entry.label
        )?;
        if !entry.text.is_empty() {
            writeln!(out, "Girdi: {}", entry.text)?;
        }
        writeln!(out, "{}", entry.message)?;
        push_tips(&mut out, &entry.tips)?;
        out.push('\n');
    }
    Ok(out)
}

/// Seven-day summary with a proportional bar per label
pub fn weekly(summary: &WeeklySummary) -> Result<String, fmt::Error> {
    let mut out = String::from("Son 7 Gün Özeti\n");
    writeln!(out, "Toplam giriş: {}", summary.total)?;
    if summary.total == 0 {
        out.push_str("Son 7 günde kayıt yok.\n");
        return Ok(out);
    }

    for (name, label) in [
        ("Pozitif", Label::Positive),
        ("Nötr", Label::Neutral),
        ("Negatif", Label::Negative),
    ] {
        let filled = (summary.ratio(label) * BAR_WIDTH as f64).round() as usize;
        writeln!(
            out,
            "{:<8} {:>3}  {}{}",
            name,
            summary.counts.get(label),
            "█".repeat(filled.min(BAR_WIDTH)),
            "░".repeat(BAR_WIDTH - filled.min(BAR_WIDTH)),
        )?;
    }
    Ok(out)
}

fn push_tips(out: &mut String, tips: &[String]) -> fmt::Result {
    if tips.is_empty() {
        return Ok(());
    }
    out.push_str("Sana tavsiyem:\n");
    for tip in tips {
        writeln!(out, "• {tip}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use moodlog_core::{GenerationResult, SentimentResult, Tone};
    use moodlog_journal::LabelCounts;

    fn entry() -> JournalEntry {
        JournalEntry::new(
            "1",
            Utc::now(),
            "Bugün harika",
            SentimentResult::from_prediction(Label::Positive, 0.9),
            GenerationResult {
                message: "Güzel!".to_string(),
                topics: Vec::new(),
                tone: Tone::Funny,
            },
            vec!["Gün ışığına 5 dk çık.".to_string()],
        )
    }

    #[test]
    fn test_entry_card() {
        let card = entry_card(&entry()).unwrap();
        assert!(card.starts_with("Duygu durumu: pozitif  🙂"));
        assert!(card.contains("Sana tavsiyem:\n• Gün ışığına 5 dk çık."));
    }

    #[test]
    fn test_empty_history() {
        assert_eq!(history(&[]).unwrap(), "Henüz kayıt yok.\n");
        assert!(history(&[entry()]).unwrap().contains("Girdi: Bugün harika"));
    }

    #[test]
    fn test_weekly_bars() {
        let summary = WeeklySummary {
            total: 2,
            counts: LabelCounts {
                positive: 1,
                neutral: 0,
                negative: 1,
            },
        };
        let text = weekly(&summary).unwrap();
        assert!(text.contains("Toplam giriş: 2"));
        assert!(text.contains(&format!("{}{}", "█".repeat(10), "░".repeat(10))));
    }

    #[test]
    fn test_empty_week_says_so() {
        let text = weekly(&WeeklySummary {
            total: 0,
            counts: LabelCounts::default(),
        })
        .unwrap();
        assert!(text.contains("Toplam giriş: 0"));
        assert!(text.ends_with("Son 7 günde kayıt yok.\n"));
        assert!(!text.contains('█'));
    }
}
