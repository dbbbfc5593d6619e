//! One-shot scoring and filtering commands

use crate::core::{ScoringRule, Verdict, Word};
use crate::solver::filter_candidates;
use anyhow::{Context, Result, anyhow};

/// Score `guess` against `secret`
///
/// # Errors
///
/// Returns an error if either word is invalid or their lengths differ.
pub fn score_words(guess: &str, secret: &str, rule: ScoringRule) -> Result<(Word, Verdict)> {
    let guess = Word::new(guess).with_context(|| format!("Invalid guess '{guess}'"))?;
    let secret = Word::new(secret).with_context(|| format!("Invalid secret '{secret}'"))?;
    let verdict = Verdict::score_with(rule, &guess, &secret)?;
    Ok((guess, verdict))
}

/// Narrow `words` with a guess and a verdict string such as "GYBBB"
///
/// # Errors
///
/// Returns an error if the guess or verdict cannot be parsed, or if their
/// lengths differ.
pub fn filter_words(words: &[Word], guess: &str, verdict: &str) -> Result<(Word, Verdict, Vec<Word>)> {
    let guess = Word::new(guess).with_context(|| format!("Invalid guess '{guess}'"))?;
    let verdict = Verdict::parse(verdict)
        .ok_or_else(|| anyhow!("Invalid verdict '{verdict}' (use G/Y/B per letter)"))?;
    if verdict.len() != guess.len() {
        return Err(anyhow!(
            "Verdict has {} tags but '{guess}' has {} letters",
            verdict.len(),
            guess.len()
        ));
    }

    let remaining = filter_candidates(words, &guess, &verdict);
    Ok((guess, verdict, remaining))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::NORMAL;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn score_naive_and_wordle() {
        let (_, naive) = score_words("eerie", "reedy", ScoringRule::Naive).unwrap();
        assert_eq!(naive.to_string(), "YGYBY");

        let (_, counted) = score_words("eerie", "reedy", ScoringRule::Wordle).unwrap();
        assert_eq!(counted.to_string(), "YGYBB");
    }

    #[test]
    fn score_length_mismatch_fails() {
        let err = score_words("plum", "grape", ScoringRule::Naive).unwrap_err();
        assert!(err.to_string().contains("4 letters"));
    }

    #[test]
    fn score_invalid_word_fails() {
        assert!(score_words("pl0m", "plum", ScoringRule::Naive).is_err());
    }

    #[test]
    fn filter_embedded_list() {
        let words = words_from_slice(NORMAL, 5);
        let (_, _, remaining) = filter_words(&words, "lemon", "YGYGG").unwrap();
        let texts: Vec<&str> = remaining.iter().map(Word::text).collect();
        assert_eq!(texts, ["melon"]);
    }

    #[test]
    fn filter_rejects_bad_verdicts() {
        let words = words_from_slice(NORMAL, 5);
        assert!(filter_words(&words, "lemon", "GGXGG").is_err());
        assert!(filter_words(&words, "lemon", "GGG").is_err());
    }
}
