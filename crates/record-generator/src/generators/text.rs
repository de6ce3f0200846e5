//! Text generators: words, sentences, names and random strings.

use super::pick;
use rand::Rng;

const WORDS: &[&str] = &[
    "account", "action", "across", "agent", "agreement", "answer", "area", "article", "author",
    "available", "base", "become", "behavior", "budget", "building", "career", "center", "chance",
    "character", "choice", "citizen", "collection", "common", "company", "concern", "control",
    "country", "culture", "data", "decade", "defense", "design", "detail", "develop", "direction",
    "discussion", "economy", "effect", "energy", "environment", "evening", "evidence", "example",
    "experience", "factor", "family", "field", "figure", "finally", "focus", "force", "future",
    "general", "ground", "growth", "history", "image", "impact", "industry", "interest", "issue",
    "language", "leader", "level", "library", "machine", "manager", "market", "material", "measure",
    "media", "memory", "method", "minute", "model", "moment", "movement", "network", "number",
    "office", "option", "order", "output", "owner", "paper", "pattern", "period", "picture",
    "policy", "position", "power", "practice", "process", "product", "program", "project",
    "quality", "question", "range", "reason", "record", "region", "report", "research", "resource",
    "result", "return", "sample", "schema", "science", "season", "series", "service", "shadow",
    "signal", "source", "space", "speech", "station", "strategy", "structure", "student", "system",
    "table", "theory", "thought", "value", "version", "window", "worker",
];

const FIRST_NAMES: &[&str] = &[
    "Alice", "Ananya", "Bruno", "Carmen", "Chen", "Dmitri", "Elena", "Farah", "Gustavo", "Hana",
    "Ivan", "Jamal", "Keiko", "Lars", "Maya", "Nikhil", "Olga", "Pablo", "Quinn", "Rosa", "Samir",
    "Tomas", "Uma", "Victor", "Wen", "Yusuf", "Zoe",
];

const LAST_NAMES: &[&str] = &[
    "Anderson", "Bauer", "Costa", "Dubois", "Eriksen", "Fischer", "Garcia", "Hoffman", "Ito",
    "Jensen", "Kowalski", "Lopez", "Moreau", "Nakamura", "Okafor", "Petrov", "Rossi", "Schmidt",
    "Tanaka", "Usman", "Valdez", "Walsh", "Young", "Zhang",
];

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Length of strings produced by [`random_string`].
pub const RANDOM_STRING_LEN: usize = 20;

/// Default upper bound for [`text`].
pub const DEFAULT_TEXT_CHARS: usize = 200;

pub fn word<R: Rng>(rng: &mut R) -> &'static str {
    *pick(rng, WORDS)
}

/// A capitalized sentence of 4 to 10 words ending with a period.
pub fn sentence<R: Rng>(rng: &mut R) -> String {
    let count = rng.random_range(4..=10);
    let words: Vec<&str> = (0..count).map(|_| word(rng)).collect();
    let mut sentence = words.join(" ");
    if let Some(first) = sentence.get_mut(0..1) {
        first.make_ascii_uppercase();
    }
    sentence.push('.');
    sentence
}

/// Sentences joined by spaces, never longer than `max_chars` (at least one sentence).
pub fn text<R: Rng>(rng: &mut R, max_chars: usize) -> String {
    let mut out = sentence(rng);
    loop {
        let next = sentence(rng);
        if out.len() + 1 + next.len() > max_chars {
            break;
        }
        out.push(' ');
        out.push_str(&next);
    }
    out
}

/// Random ASCII letters.
pub fn random_string<R: Rng>(rng: &mut R) -> String {
    (0..RANDOM_STRING_LEN)
        .map(|_| *pick(rng, ALPHABET) as char)
        .collect()
}

/// "First Last" person name.
pub fn person_name<R: Rng>(rng: &mut R) -> String {
    format!("{} {}", pick(rng, FIRST_NAMES), pick(rng, LAST_NAMES))
}
