//! Formatting utilities for terminal output

use crate::core::{Tag, Verdict, Word};
use colored::{ColoredString, Colorize};

/// Color a single letter according to its tag
#[must_use]
pub fn color_letter(letter: char, tag: Tag) -> ColoredString {
    let text = letter.to_string();
    match tag {
        Tag::Green => text.green(),
        Tag::Yellow => text.yellow(),
        Tag::Black => text.red(),
    }
}

/// Render a guess with each letter colored by its verdict tag
#[must_use]
pub fn colorize_guess(guess: &Word, verdict: &Verdict) -> String {
    guess
        .text()
        .chars()
        .zip(verdict.tags())
        .map(|(letter, &tag)| color_letter(letter, tag).to_string())
        .collect()
}

/// One line of game feedback, e.g. "Feedback: mango" with colored letters
#[must_use]
pub fn feedback_line(guess: &Word, verdict: &Verdict) -> String {
    format!("Feedback: {}", colorize_guess(guess, verdict))
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn feedback_line_without_color() {
        plain();
        let guess = Word::new("grape").unwrap();
        let verdict = Verdict::score(&guess, &Word::new("mango").unwrap()).unwrap();
        assert_eq!(feedback_line(&guess, &verdict), "Feedback: grape");
    }

    #[test]
    fn colorize_keeps_letter_order() {
        plain();
        let guess = Word::new("kiwi").unwrap();
        let verdict = Verdict::parse("GGGB").unwrap();
        assert_eq!(colorize_guess(&guess, &verdict), "kiwi");
    }

    #[test]
    fn progress_bar_bounds() {
        assert_eq!(create_progress_bar(0.0, 10.0, 4), "░░░░");
        assert_eq!(create_progress_bar(10.0, 10.0, 4), "████");
        assert_eq!(create_progress_bar(5.0, 10.0, 4), "██░░");
        assert_eq!(create_progress_bar(50.0, 10.0, 4), "████");
        assert_eq!(create_progress_bar(1.0, 0.0, 4), "░░░░");
    }
}
