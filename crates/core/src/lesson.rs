use thiserror::Error;

use crate::model::UserContext;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

/// Rejected phase transitions. A rejected call never touches the buffer.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum LessonError {
    #[error("a lesson is already being generated")]
    AlreadyGenerating,
    #[error("cannot start a lesson from the {from:?} phase")]
    InvalidTransition { from: LessonPhase },
}

//
// ─── PHASE ────────────────────────────────────────────────────────────────────
//

/// The three screens of the app.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LessonPhase {
    /// Collecting the learner's background.
    #[default]
    Onboarding,
    /// A stream is in flight and fragments are being appended.
    Generating,
    /// The stream settled; the lesson is static until restart.
    Reading,
}

//
// ─── CONTENT BUFFER ───────────────────────────────────────────────────────────
//

/// Append-only lesson text.
///
/// Fragments are concatenated in the order they are appended. Nothing is
/// reordered, merged away or truncated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentBuffer {
    text: String,
    fragments: usize,
}

impl ContentBuffer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, fragment: &str) {
        self.text.push_str(fragment);
        self.fragments += 1;
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.fragments = 0;
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Number of fragments appended since the last clear.
    #[must_use]
    pub fn fragment_count(&self) -> usize {
        self.fragments
    }
}

//
// ─── MACHINE ──────────────────────────────────────────────────────────────────
//

/// Handle for one submitted lesson.
///
/// Carries the generation it was issued for; the machine ignores fragments and
/// completion from any ticket that is no longer current.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonTicket {
    generation: u64,
    context: UserContext,
}

impl LessonTicket {
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn context(&self) -> &UserContext {
        &self.context
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppendOutcome {
    Appended,
    /// The ticket belongs to an earlier lesson or the lesson already finished.
    Stale,
}

/// Owns the current phase and lesson text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LessonMachine {
    phase: LessonPhase,
    buffer: ContentBuffer,
    generation: u64,
}

impl LessonMachine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> LessonPhase {
        self.phase
    }

    #[must_use]
    pub fn is_generating(&self) -> bool {
        self.phase == LessonPhase::Generating
    }

    #[must_use]
    pub fn content(&self) -> &str {
        self.buffer.as_str()
    }

    #[must_use]
    pub fn buffer(&self) -> &ContentBuffer {
        &self.buffer
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Start a lesson for `context`.
    ///
    /// Clears the buffer and enters `Generating`. The returned ticket is the
    /// only way to append to this lesson.
    ///
    /// # Errors
    ///
    /// Returns `LessonError::AlreadyGenerating` while a lesson is in flight and
    /// `LessonError::InvalidTransition` from `Reading`.
    pub fn submit(&mut self, context: UserContext) -> Result<LessonTicket, LessonError> {
        match self.phase {
            LessonPhase::Onboarding => {}
            LessonPhase::Generating => return Err(LessonError::AlreadyGenerating),
            from @ LessonPhase::Reading => return Err(LessonError::InvalidTransition { from }),
        }

        self.buffer.clear();
        self.generation += 1;
        self.phase = LessonPhase::Generating;
        Ok(LessonTicket {
            generation: self.generation,
            context,
        })
    }

    pub fn append(&mut self, ticket: &LessonTicket, fragment: &str) -> AppendOutcome {
        if !self.is_current(ticket) {
            return AppendOutcome::Stale;
        }
        self.buffer.append(fragment);
        AppendOutcome::Appended
    }

    /// Move a current lesson to `Reading`. Returns `false` for stale tickets.
    pub fn finish(&mut self, ticket: &LessonTicket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.phase = LessonPhase::Reading;
        true
    }

    /// Back to onboarding from any phase.
    ///
    /// Bumps the generation so an in-flight stream can no longer write here.
    pub fn restart(&mut self) {
        self.buffer.clear();
        self.generation += 1;
        self.phase = LessonPhase::Onboarding;
    }

    fn is_current(&self, ticket: &LessonTicket) -> bool {
        self.phase == LessonPhase::Generating && ticket.generation == self.generation
    }
}
