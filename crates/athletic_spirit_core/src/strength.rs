//! crates/athletic_spirit_core/src/strength.rs
//!
//! Password strength scoring for the signup and reset-password forms.

/// Strength buckets shown next to the password field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthTier {
    VeryWeak,
    Weak,
    Moderate,
    Strong,
    VeryStrong,
}

impl StrengthTier {
    pub fn from_score(score: u8) -> Self {
        match score {
            0 | 1 => Self::VeryWeak,
            2 => Self::Weak,
            3 => Self::Moderate,
            4 => Self::Strong,
            _ => Self::VeryStrong,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::VeryWeak => "Very Weak",
            Self::Weak => "Weak",
            Self::Moderate => "Moderate",
            Self::Strong => "Strong",
            Self::VeryStrong => "Very Strong",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Self::VeryWeak => "#ff4d4d",
            Self::Weak => "#ff944d",
            Self::Moderate => "#ffd11a",
            Self::Strong => "#99e600",
            Self::VeryStrong => "#00ffaa",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthReport {
    pub score: u8,
    pub tier: StrengthTier,
}

impl StrengthReport {
    /// The indicator text, e.g. `Strength: Moderate`.
    pub fn text(&self) -> String {
        format!("Strength: {}", self.tier.label())
    }

    pub fn color(&self) -> &'static str {
        self.tier.color()
    }
}

/// Counts how many of the five criteria the password meets.
pub fn score(password: &str) -> u8 {
    let criteria = [
        password.chars().count() >= 8,
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_lowercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| !c.is_ascii_alphanumeric()),
    ];
    criteria.iter().filter(|met| **met).count() as u8
}

/// Returns `None` for an empty password, which clears the indicator.
pub fn evaluate(password: &str) -> Option<StrengthReport> {
    if password.is_empty() {
        return None;
    }
    let score = score(password);
    Some(StrengthReport {
        score,
        tier: StrengthTier::from_score(score),
    })
}
