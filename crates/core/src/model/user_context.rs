use crate::model::levels::{CodingLevel, MathLevel};

/// Learner background collected by the onboarding form.
///
/// Built once per lesson attempt and never mutated afterwards. The interest is
/// free text and is kept verbatim, including an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserContext {
    math_level: MathLevel,
    coding_level: CodingLevel,
    specific_interest: String,
}

impl UserContext {
    #[must_use]
    pub fn new(
        math_level: MathLevel,
        coding_level: CodingLevel,
        specific_interest: impl Into<String>,
    ) -> Self {
        Self {
            math_level,
            coding_level,
            specific_interest: specific_interest.into(),
        }
    }

    #[must_use]
    pub fn math_level(&self) -> MathLevel {
        self.math_level
    }

    #[must_use]
    pub fn coding_level(&self) -> CodingLevel {
        self.coding_level
    }

    #[must_use]
    pub fn specific_interest(&self) -> &str {
        &self.specific_interest
    }
}
