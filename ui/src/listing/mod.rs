//! Rental listing submission: draft model, previews, form lifecycle and the
//! `PostForm` component.

pub mod draft;
pub mod form;
pub mod previews;
mod view;

pub use draft::{Category, ImageFile, ImageSlot, ListingDraft, ValidationError, VALIDATION_MESSAGE};
pub use form::{PostFormState, SubmissionState, SubmitOutcome, SubmitRejected};
pub use view::PostForm;
