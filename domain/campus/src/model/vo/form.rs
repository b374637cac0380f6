use std::fmt::{self, Display};

use crate::exception::{CampusException, CampusResult};

/// State of a screen's inline create form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormState {
    #[default]
    Idle,
    Editing,
    Submitting,
}

impl Display for FormState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FormState::Idle => "idle",
            FormState::Editing => "editing",
            FormState::Submitting => "submitting",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    Open,
    Edit,
    Submit,
    Finish,
}

impl Display for FormAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FormAction::Open => "open",
            FormAction::Edit => "edit",
            FormAction::Submit => "submit",
            FormAction::Finish => "finish submitting",
        })
    }
}

/// Draft form of a list screen.
///
/// `Idle -> Editing` on open, `Editing -> Submitting` when the draft is handed
/// to the store, `Submitting -> Idle` once stored. Cancel goes back to `Idle`
/// from anywhere and drops the draft. The draft never aliases a stored record.
#[derive(Debug, Clone)]
pub struct FormSession<D> {
    state: FormState,
    draft: Option<D>,
}

impl<D> Default for FormSession<D> {
    fn default() -> Self {
        Self {
            state: FormState::Idle,
            draft: None,
        }
    }
}

impl<D: Default> FormSession<D> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    /// Whether the form is shown.
    pub fn is_visible(&self) -> bool {
        self.state != FormState::Idle
    }

    pub fn draft(&self) -> Option<&D> {
        self.draft.as_ref()
    }

    /// Show the form. Opening an already open form keeps its draft.
    pub fn open(&mut self) -> CampusResult<()> {
        match self.state {
            FormState::Idle => {
                self.state = FormState::Editing;
                self.draft = Some(D::default());
                Ok(())
            }
            FormState::Editing => Ok(()),
            FormState::Submitting => Err(self.illegal(FormAction::Open)),
        }
    }

    pub fn edit(&mut self, f: impl FnOnce(&mut D)) -> CampusResult<()> {
        match (self.state, self.draft.as_mut()) {
            (FormState::Editing, Some(draft)) => {
                f(draft);
                Ok(())
            }
            _ => Err(self.illegal(FormAction::Edit)),
        }
    }

    pub fn begin_submit(&mut self) -> CampusResult<D> {
        if self.state != FormState::Editing {
            return Err(self.illegal(FormAction::Submit));
        }
        self.state = FormState::Submitting;
        Ok(self.draft.take().unwrap_or_default())
    }

    pub fn finish_submit(&mut self) -> CampusResult<()> {
        if self.state != FormState::Submitting {
            return Err(self.illegal(FormAction::Finish));
        }
        self.state = FormState::Idle;
        self.draft = None;
        Ok(())
    }

    pub fn cancel(&mut self) {
        self.state = FormState::Idle;
        self.draft = None;
    }

    fn illegal(&self, action: FormAction) -> CampusException {
        CampusException::IllegalFormTransition {
            state: self.state,
            action,
        }
    }
}
