//! Advice selection
//!
//! Tips are always taken from the head of the label's pool, never shuffled.

use crate::signals::HEALTH_TOPIC;
use moodlog_core::Label;

/// Maximum number of tips attached to an entry
pub const MAX_TIPS: usize = 2;

/// Scores at or above this get two tips instead of one
pub const TWO_TIP_THRESHOLD: f64 = 0.70;

pub const HEALTH_DISCLAIMER: &str = "Belirtiler sürerse bir hekime danışmanı öneririm.";

pub const POSITIVE_TIPS: [&str; 10] = [
    "Bugünkü enerjini 10 dakikalık tempolu yürüyüşe ayır.",
    "Şükran notu yaz: bugün iyi giden 3 şeyi listele.",
    "Kısa sosyal temas: bir arkadaşına “nasılsın?” yaz.",
    "Odak molası: 25 dk derin çalışma + 5 dk ara yap.",
    "Uyku hijyeni: yatmadan 1 saat önce ekranı bırak.",
    "Hafif esneme veya 5 dk 4-7-8 nefesi yap.",
    "Bir bardak su iç ve esne.",
    "Mikro hedef: 15 dakikada bitecek tek işi seç.",
    "Gün ışığına 5 dk çık.",
    "Sevdiğin müzikle kısa ritüel yap.",
];

pub const NEGATIVE_TIPS: [&str; 10] = [
    "4-7-8 nefes tekniğiyle 10 nefes al.",
    "Duyguyu adlandır: “Şu an … hissediyorum” de ve kabul et.",
    "Bir bardak su iç ve 3 dk esneme yap.",
    "Kısa yürüyüş: 7–10 dakika.",
    "10 dk mikro görev + 2 dk ara yap.",
    "Düşünceyi sorgula: “Kanıtım ne?” diye yaz.",
    "Omuz-boyun 1 dk gevşetme yap.",
    "Günlük: 3 cümleyle içinden geçenleri yaz.",
    "Şeker/kafein yerine hafif atıştırmalık seç.",
    "Uyku hedef saatini belirle ve ekranı azalt.",
];

pub const NEUTRAL_TIPS: [&str; 10] = [
    "Bugün için tek küçük hedef belirle ve tamamla.",
    "5 dk derin nefes + omuz esnetme yap.",
    "Bir bardak su iç.",
    "Güneş ışığına kısa çık.",
    "25 dk odak + 5 dk mola uygula.",
    "2 dakikalık meditasyon başlat.",
    "Birine minik teşekkür yaz.",
    "Akşam ekran süresini azalt.",
    "Odanı 2 dakikalık mini toparla.",
    "Yarın için tek cümlelik niyet yaz.",
];

/// Advice pool for a label
pub fn pool(label: Label) -> &'static [&'static str] {
    match label {
        Label::Positive => &POSITIVE_TIPS,
        Label::Negative => &NEGATIVE_TIPS,
        Label::Neutral => &NEUTRAL_TIPS,
    }
}

/// Pick up to two tips for a classified note
pub fn select_tips(label: Label, score: f64, topics: &[String]) -> Vec<String> {
    let count = if score >= TWO_TIP_THRESHOLD { 2 } else { 1 };
    let mut tips: Vec<String> = pool(label)
        .iter()
        .take(count)
        .map(|tip| tip.to_string())
        .collect();

    let health_concern = label == Label::Negative && topics.iter().any(|t| t == HEALTH_TOPIC);
    if health_concern && tips.len() < MAX_TIPS {
        tips.push(HEALTH_DISCLAIMER.to_string());
    }

    tips.truncate(MAX_TIPS);
    tips
}
