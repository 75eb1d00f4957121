//! Built-in educational content.

use super::category::{Category, Pair};
use crate::core::Difficulty;

pub(crate) fn difficulties() -> Vec<Difficulty> {
    vec![
        Difficulty::new("easy", "Easy", 6, 120, 1.0).with_icon("😊"),
        Difficulty::new("medium", "Medium", 8, 180, 1.5).with_icon("😎"),
        Difficulty::new("hard", "Hard", 10, 240, 2.0).with_icon("🔥"),
        Difficulty::new("expert", "Expert", 12, 300, 3.0).with_icon("💎"),
    ]
}

pub(crate) fn categories() -> Vec<Category> {
    vec![emoji(), math(), english(), science(), history()]
}

fn emoji() -> Category {
    const SYMBOLS: [&str; 14] = [
        "🎮", "🎯", "🎨", "🎭", "🎪", "🎵", "🎸", "⚽", "🚀", "🌈", "🍉", "🐙", "🦊", "🌵",
    ];
    Category::new("emoji", "Emoji")
        .with_icon("😊")
        .with_pairs(SYMBOLS.iter().map(|s| Pair::symmetric(*s)))
}

fn math() -> Category {
    const FACTS: [(&str, &str); 14] = [
        ("2 + 3", "5"),
        ("7 × 8", "56"),
        ("9 × 6", "54"),
        ("15 − 7", "8"),
        ("12 ÷ 4", "3"),
        ("√81", "9"),
        ("3³", "27"),
        ("100 ÷ 25", "4"),
        ("½ + ¼", "¾"),
        ("25%", "¼"),
        ("11 × 11", "121"),
        ("2⁵", "32"),
        ("π ≈", "3.14"),
        ("0.5 × 0.5", "0.25"),
    ];
    Category::new("math", "Math")
        .with_icon("🔢")
        .with_pairs(FACTS.iter().map(|(q, a)| Pair::new(*q, *a)))
}

fn english() -> Category {
    const WORDS: [(&str, &str); 14] = [
        ("apple", "사과"),
        ("book", "책"),
        ("water", "물"),
        ("friend", "친구"),
        ("school", "학교"),
        ("happy", "행복한"),
        ("tree", "나무"),
        ("sky", "하늘"),
        ("dog", "개"),
        ("house", "집"),
        ("star", "별"),
        ("flower", "꽃"),
        ("river", "강"),
        ("music", "음악"),
    ];
    Category::new("english", "English")
        .with_icon("🔤")
        .with_pairs(WORDS.iter().map(|(w, m)| Pair::new(*w, *m)))
}

fn science() -> Category {
    const TERMS: [(&str, &str); 14] = [
        ("H₂O", "Water"),
        ("NaCl", "Salt"),
        ("CO₂", "Carbon dioxide"),
        ("O₂", "Oxygen"),
        ("Fe", "Iron"),
        ("Au", "Gold"),
        ("Photosynthesis", "Plants make sugar from light"),
        ("Mitochondria", "Powerhouse of the cell"),
        ("Gravity", "9.8 m/s²"),
        ("Speed of light", "300,000 km/s"),
        ("Red planet", "Mars"),
        ("Largest planet", "Jupiter"),
        ("Boiling point", "100 °C"),
        ("Freezing point", "0 °C"),
    ];
    Category::new("science", "Science")
        .with_icon("🔬")
        .with_pairs(TERMS.iter().map(|(t, d)| Pair::new(*t, *d)))
}

fn history() -> Category {
    const EVENTS: [(&str, &str); 14] = [
        ("Hangul created", "1443"),
        ("Liberation of Korea", "1945"),
        ("Moon landing", "1969"),
        ("Fall of the Berlin Wall", "1989"),
        ("French Revolution", "1789"),
        ("Magna Carta", "1215"),
        ("Columbus reaches America", "1492"),
        ("World War I begins", "1914"),
        ("Korean War armistice", "1953"),
        ("Printing press", "Gutenberg"),
        ("Hunminjeongeum", "King Sejong"),
        ("Turtle ships", "Yi Sun-sin"),
        ("Seoul Olympics", "1988"),
        ("First powered flight", "1903"),
    ];
    Category::new("history", "History")
        .with_icon("📚")
        .with_pairs(EVENTS.iter().map(|(e, y)| Pair::new(*e, *y)))
}
