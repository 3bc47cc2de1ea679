use lesson_core::{CodingLevel, MathLevel, UserContext};

/// In-progress onboarding selections. Nothing is committed until `submit`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OnboardingDraft {
    pub math_level: MathLevel,
    pub coding_level: CodingLevel,
    pub specific_interest: String,
}

impl OnboardingDraft {
    pub fn select_math(&mut self, level: MathLevel) {
        self.math_level = level;
    }

    pub fn select_coding(&mut self, level: CodingLevel) {
        self.coding_level = level;
    }

    pub fn set_interest(&mut self, value: String) {
        self.specific_interest = value;
    }

    /// Package the selections into an immutable context. The interest is
    /// passed through untouched; the prompt builder handles a blank one.
    #[must_use]
    pub fn submit(&self) -> UserContext {
        UserContext::new(
            self.math_level,
            self.coding_level,
            self.specific_interest.clone(),
        )
    }
}
