//! Password strength scoring
//!
//! Heuristic scoring for UI feedback: length milestones at 8/12/16 characters
//! and one point per character class present, for a maximum score of 7. This
//! is advice for humans, not a security boundary - nothing in the crypto path
//! consults it.

/// Coarse strength band derived from the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Strength {
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

/// Result of assessing a password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthReport {
    /// 0 to 7.
    pub score: u8,
    /// Human-readable suggestions for the checks that failed.
    pub feedback: Vec<&'static str>,
    pub strength: Strength,
}

/// Assess a password's strength.
pub fn assess(password: &str) -> StrengthReport {
    let mut score = 0u8;
    let mut feedback = Vec::new();

    let len = password.chars().count();
    if len >= 8 {
        score += 1;
    } else {
        feedback.push("Password should be at least 8 characters");
    }
    if len >= 12 {
        score += 1;
    }
    if len >= 16 {
        score += 1;
    }

    if password.chars().any(|c| c.is_ascii_lowercase()) {
        score += 1;
    } else {
        feedback.push("Include lowercase letters");
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        score += 1;
    } else {
        feedback.push("Include uppercase letters");
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 1;
    } else {
        feedback.push("Include numbers");
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        score += 1;
    } else {
        feedback.push("Include special characters");
    }

    let strength = match score {
        0..=2 => Strength::Weak,
        3..=4 => Strength::Medium,
        5..=6 => Strength::Strong,
        _ => Strength::VeryStrong,
    };

    StrengthReport {
        score,
        feedback,
        strength,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_password() {
        let report = assess("");
        assert_eq!(report.score, 0);
        assert_eq!(report.strength, Strength::Weak);
        assert_eq!(report.feedback.len(), 5);
    }

    #[test]
    fn test_short_lowercase_only() {
        let report = assess("abc");
        assert_eq!(report.score, 1);
        assert_eq!(report.strength, Strength::Weak);
        assert!(report.feedback.contains(&"Password should be at least 8 characters"));
        assert!(report.feedback.contains(&"Include uppercase letters"));
    }

    #[test]
    fn test_medium_band() {
        // 8+ chars, lowercase, digits: score 3
        let report = assess("abcdef12");
        assert_eq!(report.score, 3);
        assert_eq!(report.strength, Strength::Medium);
    }

    #[test]
    fn test_strong_band() {
        // 12+ chars, three classes: score 5
        let report = assess("abcdefgh1234X");
        assert_eq!(report.score, 5);
        assert_eq!(report.strength, Strength::Strong);
    }

    #[test]
    fn test_maximum_score() {
        let report = assess("Correct-Horse-Battery-1");
        assert_eq!(report.score, 7);
        assert_eq!(report.strength, Strength::VeryStrong);
        assert!(report.feedback.is_empty());
    }

    #[test]
    fn test_non_ascii_counts_as_special() {
        // Matches the spirit of the character-diversity check: anything
        // outside ASCII alphanumerics counts toward the special class.
        let report = assess("ünïcödé");
        assert!(!report.feedback.contains(&"Include special characters"));
    }
}
