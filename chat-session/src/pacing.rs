//! Sentence-splitting emission with human-like typing cadence.
//!
//! A finished reply is split into sentences and emitted as separate chat
//! messages, a few seconds apart, so long answers land the way a person
//! types them. Sentences that read happy, excited, grateful, or
//! affectionate get a matching emoticon. Purely cosmetic; correctness of
//! the reply text is untouched.

use std::time::Duration;

use rand::Rng;

/// Inter-message delay range in milliseconds.
const DELAY_RANGE_MS: std::ops::RangeInclusive<u64> = 3000..=5000;

struct EmoticonFamily {
    triggers: &'static [&'static str],
    emoticons: &'static [&'static str],
}

/// Trigger-phrase families scanned per sentence, first match wins.
const FAMILIES: &[EmoticonFamily] = &[
    // greetings
    EmoticonFamily {
        triggers: &[
            "hello", "hey", "welcome", "greetings", "good morning", "good afternoon",
            "good evening",
        ],
        emoticons: &["😊", "😄", "🙂"],
    },
    // superlatives
    EmoticonFamily {
        triggers: &[
            "amazing", "awesome", "fantastic", "wonderful", "perfect", "best", "delicious",
        ],
        emoticons: &["🤩", "🎉", "✨"],
    },
    // gratitude
    EmoticonFamily {
        triggers: &["thank", "thanks", "appreciate", "grateful"],
        emoticons: &["🙏", "😊", "💕"],
    },
    // affection
    EmoticonFamily {
        triggers: &["love", "adore", "favorite"],
        emoticons: &["❤️", "🥰", "💖"],
    },
];

/// Split text into sentences on `.`, `!`, `?`, keeping the punctuation.
/// Fragments are trimmed; empty ones are dropped. Text with no terminal
/// punctuation comes back as a single fragment.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut fragments = Vec::new();
    let mut current = String::new();

    for ch in text.chars() {
        current.push(ch);
        if matches!(ch, '.' | '!' | '?') {
            let trimmed = current.trim();
            if !trimmed.is_empty() {
                fragments.push(trimmed.to_string());
            }
            current.clear();
        }
    }

    let trailing = current.trim();
    if !trailing.is_empty() {
        fragments.push(trailing.to_string());
    }
    fragments
}

/// Append an emoticon from the first matching family, if any.
pub fn decorate(sentence: &str, rng: &mut impl Rng) -> String {
    let lower = sentence.to_lowercase();
    for family in FAMILIES {
        if family.triggers.iter().any(|t| lower.contains(t)) {
            let emoticon = family.emoticons[rng.gen_range(0..family.emoticons.len())];
            return format!("{sentence} {emoticon}");
        }
    }
    sentence.to_string()
}

/// Emit `text` through `emit` with typing cadence: a single-sentence reply
/// goes out whole; a multi-sentence reply goes out one sentence at a time
/// with a randomized 3–5 s pause before each subsequent message (none
/// before the first).
pub async fn pace(text: &str, mut emit: impl FnMut(String)) {
    let fragments = split_sentences(text);

    if fragments.len() <= 1 {
        let whole = fragments
            .into_iter()
            .next()
            .unwrap_or_else(|| text.trim().to_string());
        let decorated = {
            let mut rng = rand::thread_rng();
            decorate(&whole, &mut rng)
        };
        emit(decorated);
        return;
    }

    for (i, sentence) in fragments.iter().enumerate() {
        if i > 0 {
            // thread_rng is not held across the await
            let delay_ms = {
                let mut rng = rand::thread_rng();
                rng.gen_range(DELAY_RANGE_MS)
            };
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
        }
        let decorated = {
            let mut rng = rand::thread_rng();
            decorate(sentence, &mut rng)
        };
        emit(decorated);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn splits_on_terminal_punctuation_keeping_it() {
        let fragments = split_sentences("Hello there! How are you? I am fine.");
        assert_eq!(fragments, vec!["Hello there!", "How are you?", "I am fine."]);
    }

    #[test]
    fn unpunctuated_text_is_one_fragment() {
        let fragments = split_sentences("  just a plain line  ");
        assert_eq!(fragments, vec!["just a plain line"]);
    }

    #[test]
    fn empty_text_yields_no_fragments() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   ").is_empty());
    }

    #[test]
    fn greeting_sentences_get_a_happy_emoticon() {
        let mut rng = StdRng::seed_from_u64(7);
        let decorated = decorate("Hello and welcome to Cupcake Lab!", &mut rng);
        assert!(decorated.len() > "Hello and welcome to Cupcake Lab!".len());
        let suffix = decorated
            .strip_prefix("Hello and welcome to Cupcake Lab! ")
            .unwrap();
        assert!(["😊", "😄", "🙂"].contains(&suffix));
    }

    #[test]
    fn neutral_sentences_stay_plain() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(
            decorate("The 6\" cake serves 8-10 people", &mut rng),
            "The 6\" cake serves 8-10 people"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn multi_sentence_replies_emit_one_message_per_sentence() {
        let mut emitted = Vec::new();
        pace("One. Two! Three?", |m| emitted.push(m)).await;
        assert_eq!(emitted.len(), 3);
        assert!(emitted[0].starts_with("One."));
        assert!(emitted[1].starts_with("Two!"));
        assert!(emitted[2].starts_with("Three?"));
    }

    #[tokio::test(start_paused = true)]
    async fn single_sentence_replies_emit_once() {
        let mut emitted = Vec::new();
        pace("Just the one sentence.", |m| emitted.push(m)).await;
        assert_eq!(emitted.len(), 1);
    }
}
