//! Password generation and strength rules

use rand::Rng;
use thiserror::Error;

/// Default length of generated passwords
pub const DEFAULT_LENGTH: usize = 12;

/// Minimum length accepted by [`check_strength`]
pub const MIN_LENGTH: usize = 8;

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()_+[]{}|;:,.<>?";

/// Characters that satisfy the special-character rule
const SPECIALS: &str = "!@#$%^&*(),.?\\\":{}|<>";

/// Generate a random password drawn uniformly from letters, digits and symbols
pub fn generate_password(length: usize) -> String {
    let charset: Vec<char> = [LOWERCASE, UPPERCASE, DIGITS, SYMBOLS]
        .concat()
        .chars()
        .collect();

    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| charset[rng.gen_range(0..charset.len())])
        .collect()
}

/// A strength rule the password does not meet
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthIssue {
    #[error("Password must be at least 8 characters long")]
    TooShort,

    #[error("Password must contain an uppercase letter")]
    NoUppercase,

    #[error("Password must contain a number")]
    NoDigit,

    #[error("Password must not contain spaces")]
    ContainsWhitespace,

    #[error("Password must contain a special character")]
    NoSpecial,
}

/// Check a password against the strength rules; empty means it passes
pub fn check_strength(password: &str) -> Vec<StrengthIssue> {
    let mut issues = Vec::new();

    if password.chars().count() < MIN_LENGTH {
        issues.push(StrengthIssue::TooShort);
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        issues.push(StrengthIssue::NoUppercase);
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        issues.push(StrengthIssue::NoDigit);
    }
    if password.chars().any(char::is_whitespace) {
        issues.push(StrengthIssue::ContainsWhitespace);
    }
    if !password.chars().any(|c| SPECIALS.contains(c)) {
        issues.push(StrengthIssue::NoSpecial);
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_length_and_charset() {
        let password = generate_password(DEFAULT_LENGTH);
        assert_eq!(password.chars().count(), 12);

        let allowed = [LOWERCASE, UPPERCASE, DIGITS, SYMBOLS].concat();
        assert!(password.chars().all(|c| allowed.contains(c)));
    }

    #[test]
    fn test_generate_is_random() {
        assert_ne!(generate_password(32), generate_password(32));
    }

    #[test]
    fn test_generate_zero_length() {
        assert!(generate_password(0).is_empty());
    }

    #[test]
    fn test_strong_password_passes() {
        assert!(check_strength("Secret123!").is_empty());
    }

    #[test]
    fn test_weak_password_issues() {
        assert_eq!(
            check_strength("abc"),
            vec![
                StrengthIssue::TooShort,
                StrengthIssue::NoUppercase,
                StrengthIssue::NoDigit,
                StrengthIssue::NoSpecial,
            ]
        );
    }

    #[test]
    fn test_whitespace_rejected() {
        assert_eq!(
            check_strength("Pass word1!"),
            vec![StrengthIssue::ContainsWhitespace]
        );
        assert_eq!(
            check_strength("Password1!\t"),
            vec![StrengthIssue::ContainsWhitespace]
        );
    }

    #[test]
    fn test_lowercase_not_required() {
        assert!(check_strength("PASSWORD1!").is_empty());
    }

    #[test]
    fn test_special_character_set() {
        assert!(check_strength("Password1\\").is_empty());
        assert!(check_strength("Password1\"").is_empty());
        assert!(check_strength("Password1:").is_empty());

        for c in ['_', '+', '[', ']', ';'] {
            let password = format!("Password1{}", c);
            assert_eq!(check_strength(&password), vec![StrengthIssue::NoSpecial]);
        }
    }
}
