//! Form model behind `PostForm`: draft, previews, inline message and the
//! submission lifecycle. Contains no Dioxus types so it can be driven from tests.

use api::{ApiError, ListingPayload};

use super::draft::{Category, ImageFile, ImageSlot, ListingDraft, ValidationError, VALIDATION_MESSAGE};
use super::previews::PreviewSet;

pub const SUCCESS_MESSAGE: &str = "Post created successfully!";

/// Prefix of every remote failure notice; the transport error follows verbatim.
pub const ERROR_PREFIX: &str = "Error creating post: ";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(String),
}

/// A submit attempt that never reached the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitRejected {
    Invalid(ValidationError),
    /// A previous submission is still awaiting its response.
    InFlight,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Carries the preview URIs dropped by the reset.
    Posted { released_previews: Vec<String> },
    Failed { message: String },
}

impl SubmitOutcome {
    pub fn message(&self) -> &str {
        match self {
            SubmitOutcome::Posted { .. } => SUCCESS_MESSAGE,
            SubmitOutcome::Failed { message } => message,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SubmitOutcome::Posted { .. })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostFormState {
    pub draft: ListingDraft,
    pub previews: PreviewSet,
    pub message: Option<String>,
    pub state: SubmissionState,
}

impl PostFormState {
    pub fn set_category(&mut self, raw: &str) {
        self.draft.category = Category::parse(raw);
    }

    pub fn set_description(&mut self, text: String) {
        self.draft.description = text;
    }

    pub fn set_price(&mut self, text: String) {
        self.draft.price = text;
    }

    /// Attach `file` to `slot`, returning the preview URI it displaces.
    /// Without a new preview the slot falls back to the upload hint.
    pub fn attach_image(
        &mut self,
        slot: ImageSlot,
        file: ImageFile,
        preview: Option<String>,
    ) -> Option<String> {
        self.draft.set_image(slot, file);
        match preview {
            Some(uri) => self.previews.set(slot, uri),
            None => self.previews.take(slot),
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    /// Classes for the inline message; green only right after a post went through.
    pub fn message_class(&self) -> &'static str {
        match self.state {
            SubmissionState::Succeeded => "post-form__message post-form__message--success",
            _ => "post-form__message post-form__message--error",
        }
    }

    /// Button modifier: warn while no image is attached. Purely cosmetic.
    pub fn submit_style(&self) -> &'static str {
        if self.draft.has_images() {
            "button--primary"
        } else {
            "button--warning"
        }
    }

    /// Validate and enter `Submitting`. On rejection nothing is sent and the
    /// draft is left untouched.
    pub fn begin_submit(&mut self) -> Result<ListingPayload, SubmitRejected> {
        if self.is_submitting() {
            return Err(SubmitRejected::InFlight);
        }
        match self.draft.to_payload() {
            Ok(payload) => {
                self.state = SubmissionState::Submitting;
                self.message = None;
                Ok(payload)
            }
            Err(err) => {
                self.state = SubmissionState::Idle;
                self.message = Some(VALIDATION_MESSAGE.to_string());
                Err(SubmitRejected::Invalid(err))
            }
        }
    }

    /// Apply the transport result of the submission started by [`Self::begin_submit`].
    pub fn finish(&mut self, result: Result<(), ApiError>) -> SubmitOutcome {
        match result {
            Ok(()) => {
                let released_previews = self.reset();
                self.state = SubmissionState::Succeeded;
                self.message = Some(SUCCESS_MESSAGE.to_string());
                SubmitOutcome::Posted { released_previews }
            }
            Err(err) => {
                let message = format!("{ERROR_PREFIX}{err}");
                self.state = SubmissionState::Failed(err.to_string());
                self.message = Some(message.clone());
                SubmitOutcome::Failed { message }
            }
        }
    }

    /// Clear draft and previews, returning the previews to release.
    pub fn reset(&mut self) -> Vec<String> {
        self.draft = ListingDraft::default();
        self.previews.clear()
    }

    /// The form is going away: hand back every preview still on screen.
    pub fn discard(&mut self) -> Vec<String> {
        self.reset()
    }
}
