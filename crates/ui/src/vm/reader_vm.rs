use lesson_core::{LessonMachine, LessonPhase};

use crate::vm::markdown_vm::markdown_to_html;

pub const LESSON_TITLE: &str = "AI in Algorithmic Trading";

/// Everything the reader renders for one machine snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReaderVm {
    pub html: String,
    pub is_generating: bool,
    pub status_label: &'static str,
    /// Shown only once the stream settled; restart is not offered mid-stream.
    pub show_restart: bool,
    /// Full-screen placeholder until the first fragment lands.
    pub show_initializing: bool,
}

impl ReaderVm {
    #[must_use]
    pub fn from_machine(machine: &LessonMachine) -> Self {
        let is_generating = machine.phase() == LessonPhase::Generating;
        Self {
            html: markdown_to_html(machine.content()),
            is_generating,
            status_label: if is_generating {
                "Generating curriculum..."
            } else {
                "Lesson Complete"
            },
            show_restart: !is_generating,
            show_initializing: is_generating && machine.buffer().is_empty(),
        }
    }
}

/// Coalesces auto-scroll requests so at most one measure-and-scroll round
/// trip is in flight. Requests that land while one runs collapse into a
/// single follow-up round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FollowGate {
    running: bool,
    pending: bool,
}

impl FollowGate {
    /// Returns `true` if the caller should start a follower.
    pub fn request(&mut self) -> bool {
        if self.running {
            self.pending = true;
            false
        } else {
            self.running = true;
            true
        }
    }

    /// Called when a round finishes. Returns `true` if another round is owed.
    pub fn settle(&mut self) -> bool {
        if self.pending {
            self.pending = false;
            true
        } else {
            self.running = false;
            false
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }
}
