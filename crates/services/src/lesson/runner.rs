use std::cell::RefCell;
use std::rc::Rc;

use lesson_core::{AppendOutcome, LessonError, LessonMachine, UserContext};
use tracing::debug;

use crate::lesson::content::{LessonContentService, LessonStreamOutcome};

/// Access to the lesson machine between awaits.
///
/// The driver only touches the machine inside `update`, so no borrow is held
/// while the stream is suspended and a restart can run in between fragments.
pub trait LessonState {
    fn update<R>(&mut self, f: impl FnOnce(&mut LessonMachine) -> R) -> R;
}

impl LessonState for Rc<RefCell<LessonMachine>> {
    fn update<R>(&mut self, f: impl FnOnce(&mut LessonMachine) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LessonReport {
    pub outcome: LessonStreamOutcome,
    /// Fragments that arrived after the lesson was restarted.
    pub dropped_fragments: usize,
    /// `false` when the lesson was restarted before the stream settled.
    pub finished: bool,
}

/// Run one lesson: submit, stream every fragment into the buffer, then move to
/// `Reading` once the stream settles.
///
/// # Errors
///
/// Returns `LessonError` if the machine is not in `Onboarding`. Nothing is
/// streamed in that case.
pub async fn submit_lesson<S: LessonState>(
    mut state: S,
    content: &LessonContentService,
    context: UserContext,
) -> Result<LessonReport, LessonError> {
    let ticket = state.update(|machine| machine.submit(context))?;
    debug!(generation = ticket.generation(), "lesson submitted");

    let mut dropped_fragments = 0usize;
    let outcome = content
        .stream_lesson_content(ticket.context(), &mut |fragment| {
            let appended = state.update(|machine| machine.append(&ticket, fragment));
            if appended == AppendOutcome::Stale {
                dropped_fragments += 1;
            }
        })
        .await;

    let finished = state.update(|machine| machine.finish(&ticket));
    if !finished {
        debug!(
            generation = ticket.generation(),
            dropped_fragments, "lesson restarted before stream settled"
        );
    }

    Ok(LessonReport {
        outcome,
        dropped_fragments,
        finished,
    })
}
