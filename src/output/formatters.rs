//! Formatting utilities for terminal output

/// Uppercase a word and separate its letters with spaces
///
/// # Examples
/// ```
/// use unscramble::output::formatters::spaced_letters;
///
/// assert_eq!(spaced_letters("tca"), "T C A");
/// ```
#[must_use]
pub fn spaced_letters(word: &str) -> String {
    let mut result = String::with_capacity(word.len() * 2);
    for (i, c) in word.chars().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        result.push(c.to_ascii_uppercase());
    }
    result
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Score as a bar relative to the best reachable score
#[must_use]
pub fn score_bar(score: u32, max_score: u64, width: usize) -> String {
    create_progress_bar(f64::from(score), max_score as f64, width)
}

/// Short verdict on a final score
#[must_use]
pub fn score_verdict(score: u32, max_score: u64) -> &'static str {
    if max_score == 0 {
        return "Done!";
    }
    let ratio = f64::from(score) / max_score as f64;
    if ratio >= 1.0 {
        "🏆 Perfect!"
    } else if ratio >= 0.8 {
        "⭐ Excellent!"
    } else if ratio >= 0.5 {
        "✨ Good!"
    } else if ratio > 0.0 {
        "👍 Keep practicing!"
    } else {
        "🙈 Better luck next time!"
    }
}
