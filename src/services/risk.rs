// src/services/risk.rs

/// Risk score above which a disclaimer is prepended to the reply.
/// Comparison is strict, so two default phrases (0.6) do not trigger it.
pub const DISCLAIMER_THRESHOLD: f64 = 0.6;

pub const DISCLAIMER: &str = "⚠️ **Disclaimer**: I am an AI assistant and cannot provide professional advice. Please consult qualified professionals for specific guidance.";

#[derive(Debug, Clone)]
pub struct RiskPhrase {
    pub phrase: String,
    pub weight: f64,
}

impl RiskPhrase {
    pub fn new(phrase: impl Into<String>, weight: f64) -> Self {
        Self { phrase: phrase.into(), weight }
    }
}

/// Fixed phrase table scanned once per message. Each listed phrase
/// contributes its weight at most once, no matter how often it occurs.
#[derive(Debug, Clone)]
pub struct RiskFilter {
    phrases: Vec<RiskPhrase>,
}

impl Default for RiskFilter {
    fn default() -> Self {
        Self::new(vec![
            RiskPhrase::new("legal advice", 0.3),
            RiskPhrase::new("medical diagnosis", 0.3),
            RiskPhrase::new("financial advice", 0.3),
        ])
    }
}

impl RiskFilter {
    pub fn new(phrases: Vec<RiskPhrase>) -> Self {
        Self { phrases }
    }

    /// Saturating sum of the weights of all matched phrases, capped at 1.0.
    /// Matching is case-insensitive substring containment.
    pub fn score(&self, message: &str) -> f64 {
        let lowered = message.to_lowercase();
        let total: f64 = self
            .phrases
            .iter()
            .filter(|p| lowered.contains(&p.phrase))
            .map(|p| p.weight)
            .sum();
        total.min(1.0)
    }

    pub fn needs_disclaimer(&self, score: f64) -> bool {
        score > DISCLAIMER_THRESHOLD
    }
}
