//! The response selector — maps customer text to a scripted reply.
//!
//! A pure, ordered, first-match-wins cascade. The only randomness (opening
//! line and quick-fact choice) comes from the caller-supplied generator, so
//! tests seed it and the selector stays fully deterministic.

use rand::Rng;

use crate::script::*;

/// Produce the agent's reply for the latest customer text.
///
/// `agent_turns` is how many agent messages already exist in the transcript.
/// Turn 0 is the cold open: the customer's text is ignored and a random
/// opening line plus the closing pitch goes out.
pub fn respond(input: &str, agent_turns: usize, rng: &mut impl Rng) -> String {
    if agent_turns == 0 {
        return opening(rng);
    }

    if input.trim().is_empty() {
        return CLARIFICATION.to_string();
    }

    let normalized = input.to_lowercase();

    if matches_group(&normalized, PRICE_KEYWORDS) {
        return format!("{}\n\n{}", PRICE_REBUTTAL, PRICE_FOLLOW_UP);
    }

    if matches_group(&normalized, DELIVERY_KEYWORDS) {
        return format!("{}\n\n{}", DELIVERY_REBUTTAL, DELIVERY_FOLLOW_UP);
    }

    if matches_group(&normalized, TASTE_KEYWORDS) {
        return format!("{}\n\n{}", TASTE_REBUTTAL, TASTE_FOLLOW_UP);
    }

    if matches_group(&normalized, TRIAL_KEYWORDS) {
        return format!("{}\n\n{}", TRIAL_REBUTTAL, TRIAL_FOLLOW_UP);
    }

    if matches_group(&normalized, BUSY_KEYWORDS) {
        return format!("{}\n\n{}", BUSY_REBUTTAL, BUSY_FOLLOW_UP);
    }

    if matches_group(&normalized, DECLINE_KEYWORDS) {
        return SOFT_DECLINE.to_string();
    }

    if matches_group(&normalized, AFFIRMATIVE_KEYWORDS) {
        return BOOKING_CONFIRMATION.to_string();
    }

    format!(
        "{}\n\nA quick reminder: {}.",
        FOLLOW_UP_PROMPTS[agent_turns % FOLLOW_UP_PROMPTS.len()],
        pick(rng, QUICK_FACTS)
    )
}

/// The cold-open line: random opener plus the closing pitch. Also used for
/// the transcript's seed message.
pub fn opening(rng: &mut impl Rng) -> String {
    format!("{}\n\n{}", pick(rng, OPENING_LINES), CLOSING_PITCH)
}

fn pick<'a>(rng: &mut impl Rng, items: &[&'a str]) -> &'a str {
    items[rng.gen_range(0..items.len())]
}

fn matches_group(normalized: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| keyword_hit(normalized, k))
}

/// Substring containment, except short all-alphabetic tokens ("no", "rs",
/// "yes") which must land on word boundaries — otherwise "nothing" or "know"
/// would fire the decline script. "₹" and multi-word phrases stay plain
/// substring checks.
fn keyword_hit(haystack: &str, keyword: &str) -> bool {
    if keyword.len() <= 3 && keyword.chars().all(|c| c.is_ascii_alphabetic()) {
        contains_word(haystack, keyword)
    } else {
        haystack.contains(keyword)
    }
}

/// True if `word` (ASCII) occurs in `haystack` with non-alphanumeric or
/// string-edge characters on both sides.
fn contains_word(haystack: &str, word: &str) -> bool {
    let mut from = 0;
    while let Some(pos) = haystack[from..].find(word) {
        let begin = from + pos;
        let end = begin + word.len();
        let clear_before = haystack[..begin]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric());
        let clear_after = haystack[end..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_alphanumeric());
        if clear_before && clear_after {
            return true;
        }
        from = end;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn test_turn_zero_is_opening_regardless_of_input() {
        for input in ["", "what's the price?", "delivery please"] {
            let reply = respond(input, 0, &mut rng());
            assert!(OPENING_LINES.iter().any(|line| reply.contains(line)));
            assert!(reply.contains(CLOSING_PITCH));
        }
    }

    #[test]
    fn test_seeded_rng_is_deterministic() {
        let a = respond("", 0, &mut rng());
        let b = respond("", 0, &mut rng());
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_input_asks_for_clarification() {
        assert_eq!(respond("", 1, &mut rng()), CLARIFICATION);
        assert_eq!(respond("   \t ", 3, &mut rng()), CLARIFICATION);
    }

    #[test]
    fn test_price_keywords() {
        let expected = format!("{}\n\n{}", PRICE_REBUTTAL, PRICE_FOLLOW_UP);
        assert_eq!(respond("What's your pricing?", 1, &mut rng()), expected);
        assert_eq!(respond("is ₹89 the real cost?", 2, &mut rng()), expected);
        assert_eq!(respond("how many rs per month", 1, &mut rng()), expected);
    }

    #[test]
    fn test_pricing_reply_quotes_the_rate() {
        let reply = respond("What's your pricing?", 1, &mut rng());
        assert!(reply.contains("₹89 per liter"));
    }

    #[test]
    fn test_first_matching_group_wins() {
        // Both price and delivery terms present; price is checked first.
        let reply = respond("price and delivery both worry me", 1, &mut rng());
        assert!(reply.starts_with(PRICE_REBUTTAL));
    }

    #[test]
    fn test_delivery_taste_trial_busy_groups() {
        assert!(respond("will it come late?", 1, &mut rng()).starts_with(DELIVERY_REBUTTAL));
        assert!(respond("how's the flavor?", 1, &mut rng()).starts_with(TASTE_REBUTTAL));
        assert!(respond("can I get a sample?", 1, &mut rng()).starts_with(TRIAL_REBUTTAL));
        assert!(respond("I'm busy right now", 1, &mut rng()).starts_with(BUSY_REBUTTAL));
    }

    #[test]
    fn test_decline_requires_word_boundary() {
        assert_eq!(respond("no thanks", 1, &mut rng()), SOFT_DECLINE);
        assert_eq!(respond("I'm not interested", 1, &mut rng()), SOFT_DECLINE);
        // "nothing" and "know" contain "no" but must not decline.
        let reply = respond("I know nothing about you", 1, &mut rng());
        assert_ne!(reply, SOFT_DECLINE);
        assert!(reply.starts_with(FOLLOW_UP_PROMPTS[1]));
    }

    #[test]
    fn test_affirmative_books_the_trial() {
        assert_eq!(respond("yes", 1, &mut rng()), BOOKING_CONFIRMATION);
        assert_eq!(respond("okay go ahead", 4, &mut rng()), BOOKING_CONFIRMATION);
        // "yesterday" must not read as a yes.
        assert_ne!(respond("yesterday's milk", 1, &mut rng()), BOOKING_CONFIRMATION);
    }

    #[test]
    fn test_fallback_rotates_by_turn_count() {
        for turns in 1..=6 {
            let reply = respond("hmm", turns, &mut rng());
            let expected_prompt = FOLLOW_UP_PROMPTS[turns % FOLLOW_UP_PROMPTS.len()];
            assert!(reply.starts_with(expected_prompt));
            assert!(QUICK_FACTS.iter().any(|fact| reply.contains(fact)));
        }
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let expected = format!("{}\n\n{}", PRICE_REBUTTAL, PRICE_FOLLOW_UP);
        assert_eq!(respond("PRICE?!", 1, &mut rng()), expected);
    }

    #[test]
    fn test_contains_word_edges() {
        assert!(contains_word("no", "no"));
        assert!(contains_word("say no!", "no"));
        assert!(!contains_word("nope", "no"));
        assert!(!contains_word("ano", "no"));
    }
}
