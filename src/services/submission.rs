//! Submission form controller.
//!
//! Holds the draft hotspot being edited, mediates field edits, the one-shot
//! image-upload completion and submission to the creation collaborator.
//! Every operation is a discrete reaction to a single event; nothing here
//! runs concurrently with anything else.

use std::collections::HashMap;
use thiserror::Error;

use crate::domain::hotspot::{Hotspot, NewHotspot};
use crate::domain::types::{HotspotId, ImageUrl};
use crate::forms::hotspots::{FormField, HotspotDraft, SpendInput};

/// Failure reported by the creation collaborator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CreateHotspotError {
    /// The collaborator supplied a human-readable message.
    #[error("{0}")]
    Message(String),
    /// No usable message was supplied; a generic one is shown instead.
    #[error("Failed to create hotspot. Please try again.")]
    Unknown,
}

/// Creation collaborator: persists a finished draft and returns the created
/// record.
pub trait CreateHotspot {
    fn create_hotspot(&self, draft: &NewHotspot) -> Result<Hotspot, CreateHotspotError>;
}

/// Navigation collaborator: transitions the user to a record's detail view.
pub trait Navigator {
    fn show_hotspot(&self, id: HotspotId);
}

/// State machine behind the "add a hotspot" form.
#[derive(Debug, Default)]
pub struct SubmissionForm {
    draft: HotspotDraft,
    errors: HashMap<FormField, String>,
    submitting: bool,
    submit_error: Option<String>,
    image_preview: Option<ImageUrl>,
}

impl SubmissionForm {
    /// Fresh form with an empty draft and `added_by` defaulted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current draft contents.
    pub fn draft(&self) -> &HotspotDraft {
        &self.draft
    }

    /// Field-level validation errors from the last failed submit.
    pub fn errors(&self) -> &HashMap<FormField, String> {
        &self.errors
    }

    /// True while a submission is in flight. Advisory only; callers disable
    /// the submit trigger, this is not a lock.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Top-level message from the last failed submission, if any.
    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    /// Locally cached preview of the uploaded image.
    pub fn image_preview(&self) -> Option<&ImageUrl> {
        self.image_preview.as_ref()
    }

    /// Apply a raw edit to one field and clear that field's error.
    ///
    /// The average-spend field is parsed explicitly into a [`SpendInput`];
    /// all other fields store the raw text verbatim.
    pub fn edit_field(&mut self, field: FormField, value: &str) {
        match field {
            FormField::Name => self.draft.name = value.to_string(),
            FormField::Location => self.draft.location = value.to_string(),
            FormField::Category => self.draft.category = value.to_string(),
            FormField::Description => self.draft.description = value.to_string(),
            FormField::AverageSpend => self.draft.average_spend = SpendInput::parse(value),
            FormField::Image => self.draft.image = value.to_string(),
            FormField::AddedBy => self.draft.added_by = value.to_string(),
        }

        self.errors.remove(&field);
    }

    /// One-shot completion callback from the upload collaborator.
    ///
    /// Sets the draft's image and the local preview, clearing any pending
    /// image error. The controller never initiates or polls the upload.
    pub fn image_upload_complete(&mut self, url: ImageUrl) {
        self.draft.image = url.as_str().to_string();
        self.image_preview = Some(url);
        self.errors.remove(&FormField::Image);
    }

    /// Validate and submit the draft.
    ///
    /// On validation errors the collaborators are not called at all. On a
    /// creation failure the collaborator's message is captured for display.
    /// The submitting flag is reset on every path before returning.
    pub fn submit<C, N>(&mut self, creator: &C, navigator: &N)
    where
        C: CreateHotspot,
        N: Navigator,
    {
        if self.submitting {
            return;
        }

        let errors = self.draft.validate();
        if !errors.is_empty() {
            self.errors = errors;
            return;
        }

        self.submitting = true;
        self.submit_error = None;

        match self
            .draft
            .to_new_hotspot()
            .map_err(|e| CreateHotspotError::Message(e.to_string()))
            .and_then(|new_hotspot| creator.create_hotspot(&new_hotspot))
        {
            Ok(hotspot) => navigator.show_hotspot(hotspot.id),
            Err(e) => self.submit_error = Some(e.to_string()),
        }

        self.submitting = false;
    }
}
