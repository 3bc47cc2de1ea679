use std::fmt;

//
// ─── MATH LEVEL ───────────────────────────────────────────────────────────────
//

/// Self-reported comfort with mathematics.
///
/// The onboarding form renders one choice per entry of [`MathLevel::ALL`], so a
/// new variant only needs to be added here and to `label`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MathLevel {
    /// No formal background.
    #[default]
    Beginner,
    /// Comfortable with basic statistics.
    Intermediate,
    /// Calculus and linear algebra.
    Advanced,
}

impl MathLevel {
    /// Every level, in the order the form presents them.
    pub const ALL: [Self; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    /// Human-readable label shown in the form and embedded in the lesson prompt.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Beginner => "No formal background",
            Self::Intermediate => "Comfortable with basic Statistics",
            Self::Advanced => "Advanced (Calculus, Linear Algebra)",
        }
    }
}

impl fmt::Display for MathLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

//
// ─── CODING LEVEL ─────────────────────────────────────────────────────────────
//

/// Self-reported programming experience.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CodingLevel {
    #[default]
    None,
    Basic,
    Advanced,
}

impl CodingLevel {
    /// Every level, in the order the form presents them.
    pub const ALL: [Self; 3] = [Self::None, Self::Basic, Self::Advanced];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "No coding experience",
            Self::Basic => "Basic (Python/Scripting)",
            Self::Advanced => "Advanced (Software Engineering/ML)",
        }
    }
}

impl fmt::Display for CodingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
