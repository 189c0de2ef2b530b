//! Async wizard driver.
//!
//! Couples a [`WizardSession`] to a [`Generator`] and the platform ports.
//! The session decides what may happen; the driver performs the actual
//! service calls and feeds results back in. Late responses are defused by
//! the session's generation token, so a user who regenerates or navigates
//! while a call is in flight never sees a stale image land.

use reno_core::{
    CoreError, DictationSession, ImagePayload, PrintSink, Resolution, SaveOutcome, Track,
    WizardMode, WizardSession,
};
use reno_export::{render_html, ProposalDocument};
use reno_gen::prompt::generation_prompt;
use reno_gen::{GenResult, Generator};

use crate::context::AppContext;
use crate::error::{AppError, AppResult};

/// Drives one wizard session against a generation service.
#[derive(Debug)]
pub struct WizardDriver<G> {
    session: WizardSession,
    service: G,
}

impl<G: Generator> WizardDriver<G> {
    /// Create a driver for the given session and service.
    #[must_use]
    pub fn new(session: WizardSession, service: G) -> Self {
        Self { session, service }
    }

    /// Read access to the session.
    #[must_use]
    pub fn session(&self) -> &WizardSession {
        &self.session
    }

    /// Mutable access to the session (form bindings, navigation).
    pub fn session_mut(&mut self) -> &mut WizardSession {
        &mut self.session
    }

    /// Analyze the before photo and fill the AI-suggestion track.
    ///
    /// The suggestion text stays freely editable afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::MissingBeforeImage`] without a before photo;
    /// propagates a missing service credential.
    pub async fn auto_analyze(&mut self) -> AppResult<()> {
        let before = self
            .session
            .space
            .before_image
            .clone()
            .ok_or(CoreError::MissingBeforeImage)?;
        let suggestion = self.service.analyze(&before).await?;
        self.session.set_ai_text(suggestion);
        Ok(())
    }

    /// Rewrite the custom track text as a structured scope of work.
    ///
    /// # Errors
    ///
    /// Propagates a missing service credential.
    pub async fn enhance_description(&mut self) -> AppResult<()> {
        let notes = if self.session.custom().has_text() {
            self.session.custom().text.clone()
        } else {
            "Renovation project".to_string()
        };
        let polished = self.service.smart_describe(&notes).await?;
        self.session.set_custom_text(polished);
        Ok(())
    }

    /// Drain a dictation capture into the custom track, appending each
    /// recognized fragment. Returns once the capture finishes or is
    /// cancelled.
    pub async fn dictate(&mut self, capture: &mut dyn DictationSession) {
        while let Some(fragment) = capture.next_fragment().await {
            self.session.append_dictation(&fragment);
        }
    }

    /// Run the preview-entry generation: one call per non-empty track, in
    /// parallel.
    ///
    /// Results apply custom-first so a simultaneous finish prefers the
    /// custom track; a single surviving track proceeds as active. Previous
    /// images are only replaced by successful results.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::MissingDescription`] (before any service call)
    /// when both tracks are empty, and [`AppError::GenerationFailed`] when
    /// every requested track fails.
    pub async fn generate_previews(&mut self) -> AppResult<()> {
        let before = self
            .session
            .space
            .before_image
            .clone()
            .ok_or(CoreError::MissingBeforeImage)?;
        let ticket = self.session.begin_generation()?;

        let materials = self.session.selected_materials().to_vec();
        let resolution = self.session.resolution;
        let custom_prompt = ticket
            .tracks
            .contains(&Track::Custom)
            .then(|| generation_prompt(&self.session.custom().text, &materials));
        let ai_prompt = ticket
            .tracks
            .contains(&Track::Ai)
            .then(|| generation_prompt(&self.session.ai().text, &materials));

        let service = &self.service;
        let (custom_result, ai_result) = tokio::join!(
            run_track(service, &before, custom_prompt, resolution),
            run_track(service, &before, ai_prompt, resolution),
        );

        let mut failures: Vec<String> = Vec::new();
        let mut applied = 0_usize;
        for (track, outcome) in [(Track::Custom, custom_result), (Track::Ai, ai_result)] {
            match outcome {
                None => {}
                Some(Ok(Some(image))) => {
                    if self.session.apply_generated(ticket.token, track, image) {
                        applied += 1;
                    }
                }
                Some(Ok(None)) => {
                    failures.push(format!("{track}: the service returned no image"));
                }
                Some(Err(err)) => failures.push(format!("{track}: {err}")),
            }
        }

        if applied == 0 {
            return Err(AppError::GenerationFailed(failures.join("; ")));
        }
        if !failures.is_empty() {
            tracing::warn!("A generation track failed: {}", failures.join("; "));
        }
        Ok(())
    }

    /// Re-run the preview-entry generation from scratch. The fresh token
    /// makes any still-in-flight earlier round stale.
    ///
    /// # Errors
    ///
    /// Same contract as [`Self::generate_previews`].
    pub async fn regenerate(&mut self) -> AppResult<()> {
        self.generate_previews().await
    }

    /// Refine the active track's image with the pending instruction.
    ///
    /// The target track is captured before the call, so a track switch while
    /// the request is in flight cannot redirect the result. On success the
    /// new image replaces only that track's image and the instruction is
    /// cleared; on failure everything stays as it was.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::TrackEmpty`]/[`CoreError::MissingInstruction`]
    /// before any call; propagates service failures.
    pub async fn refine_active(&mut self) -> AppResult<()> {
        let request = self.session.refinement_request()?;
        let result = self
            .service
            .refine(&request.image, &request.instruction)
            .await?;
        match result {
            Some(image) => self.session.apply_refined(request.track, image),
            None => {
                tracing::warn!("Refinement returned no image; keeping the current one");
                self.session.clear_refinement_instruction();
            }
        }
        Ok(())
    }

    /// Assemble the proposal document for the current state.
    #[must_use]
    pub fn export_document(&self, date_label: &str) -> ProposalDocument {
        ProposalDocument::from_session(&self.session, date_label)
    }

    /// Render the proposal and hand it to the platform print facility.
    ///
    /// Available at any point in the preview step with whatever image and
    /// description are currently active.
    ///
    /// # Errors
    ///
    /// Propagates print-sink failures.
    pub fn print(&self, sink: &dyn PrintSink, date_label: &str) -> AppResult<()> {
        let html = render_html(&self.export_document(date_label));
        sink.print(&html)?;
        Ok(())
    }

    /// Finalize the session and write the outcome through the context.
    ///
    /// New-project sessions add a project; add-space sessions append to the
    /// existing project; edit-space sessions replace the space in place.
    ///
    /// # Errors
    ///
    /// Propagates finalize guards and store lookup failures.
    pub fn save(&mut self, context: &AppContext) -> AppResult<SaveOutcome> {
        let outcome = self.session.finalize()?;
        match &outcome {
            SaveOutcome::NewProject(project) => {
                let id = context.projects.add(project.clone());
                tracing::info!("Created project {id}");
            }
            SaveOutcome::Space { project, space } => match self.session.mode() {
                WizardMode::EditSpace { .. } => {
                    context.projects.replace_space(*project, space.clone())?;
                }
                _ => {
                    context.projects.add_space(*project, space.clone())?;
                }
            },
        }
        Ok(outcome)
    }
}

/// Run one track's generation call, or nothing when the track was not
/// requested.
async fn run_track<G: Generator>(
    service: &G,
    before: &ImagePayload,
    prompt: Option<String>,
    resolution: Resolution,
) -> Option<GenResult<Option<ImagePayload>>> {
    let prompt = prompt?;
    Some(service.generate(before, &prompt, resolution).await)
}
