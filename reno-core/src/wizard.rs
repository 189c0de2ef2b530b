//! Wizard session state machine.
//!
//! A [`WizardSession`] walks one space through six strictly-ordered steps:
//!
//! ```text
//! ProjectInfo -> SpaceCapture -> Description -> Materials -> Preview -> Complete
//!      (1)           (2)            (3)           (4)          (5)        (6)
//! ```
//!
//! Step 1 exists only in new-project mode; add/edit-space sessions start at
//! step 2. Steps 3-5 carry two parallel generation tracks (the user-authored
//! "Your Vision" text and the AI-suggested plan); exactly one track is active
//! at a time and only the active track survives [`WizardSession::finalize`].
//!
//! The session is transient: created on wizard entry, discarded on cancel or
//! after a successful save. It performs no I/O itself; the application driver
//! requests generation tickets and feeds results back in.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::material::Material;
use crate::project::{
    current_timestamp_ms, ImagePayload, Project, ProjectId, ProjectSpace, ProjectStatus, SpaceId,
};

/// Resolution tier for generated imagery. Selects the backing model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resolution {
    /// 1K output, general-purpose model.
    #[default]
    #[serde(rename = "1K")]
    R1k,
    /// 2K output, high-resolution model.
    #[serde(rename = "2K")]
    R2k,
    /// 4K output, high-resolution model.
    #[serde(rename = "4K")]
    R4k,
}

impl Resolution {
    /// Short UI label ("1K", "2K", "4K").
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::R1k => "1K",
            Self::R2k => "2K",
            Self::R4k => "4K",
        }
    }
}

/// Which editor opened the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardMode {
    /// Creating a project together with its first space.
    NewProject,
    /// Adding a space to an existing project.
    AddSpace {
        /// The project receiving the new space.
        project: ProjectId,
    },
    /// Re-opening an existing space.
    EditSpace {
        /// The project owning the space.
        project: ProjectId,
    },
}

/// Wizard steps, strictly ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    /// Collect project name, client, and quote (new-project mode only).
    ProjectInfo,
    /// Name the space and capture the before photo.
    SpaceCapture,
    /// Gather the two description tracks.
    Description,
    /// Filter and select materials.
    Materials,
    /// Generate, compare, and refine after images.
    Preview,
    /// Terminal success state.
    Complete,
}

/// One of the two parallel generation lineages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Track {
    /// User-authored "Your Vision" track.
    Custom,
    /// AI-suggested track.
    Ai,
}

impl std::fmt::Display for Track {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Custom => "custom",
            Self::Ai => "ai",
        })
    }
}

/// Per-track draft state: the text that drives generation plus its result.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrackState {
    /// Description text for this track.
    pub text: String,
    /// Most recent generated image for this track.
    pub image: Option<ImagePayload>,
}

impl TrackState {
    /// Whether this track has any description text.
    #[must_use]
    pub fn has_text(&self) -> bool {
        !self.text.trim().is_empty()
    }
}

/// Scope-of-work flags carried into the proposal checklist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeFlags {
    /// Electrical work is included.
    pub include_electrical: bool,
    /// Plumbing work is included.
    pub include_plumbing: bool,
    /// The contractor pulls the building permit.
    pub pull_permit: bool,
}

/// Draft project fields gathered in step 1.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectDraft {
    /// Project name.
    pub name: String,
    /// Client name.
    pub client_name: String,
    /// Client email.
    pub client_email: String,
    /// Client street address.
    pub client_address: String,
    /// Client phone number.
    pub client_phone: String,
    /// Estimated quote in dollars.
    pub quote_amount: f64,
    /// Initial lifecycle status.
    pub status: ProjectStatus,
}

/// Draft of the space being captured or edited.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpaceDraft {
    /// Existing space ID when editing; `None` for a fresh space.
    pub id: Option<SpaceId>,
    /// Space name.
    pub name: String,
    /// The before photo.
    pub before_image: Option<ImagePayload>,
    /// Selected materials, in selection order.
    pub materials: Vec<Material>,
}

impl Default for SpaceDraft {
    fn default() -> Self {
        Self {
            id: None,
            name: "New Space".to_string(),
            before_image: None,
            materials: Vec::new(),
        }
    }
}

/// One generation round: a staleness token plus the tracks to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationTicket {
    /// Token identifying this round. Results carrying an older token are
    /// ignored.
    pub token: u64,
    /// Tracks with non-empty text, in custom-first order.
    pub tracks: Vec<Track>,
}

/// Everything needed to issue one refinement call.
#[derive(Debug, Clone)]
pub struct RefinementRequest {
    /// The track whose image will be replaced.
    pub track: Track,
    /// The current image of that track.
    pub image: ImagePayload,
    /// The edit instruction.
    pub instruction: String,
}

/// What [`WizardSession::finalize`] produced.
#[derive(Debug, Clone)]
pub enum SaveOutcome {
    /// A new project carrying exactly one space.
    NewProject(Project),
    /// A space to add to or replace within an existing project.
    Space {
        /// The owning project.
        project: ProjectId,
        /// The finalized space.
        space: ProjectSpace,
    },
}

/// The transient wizard session. See the module docs for the step diagram.
#[derive(Debug, Clone)]
pub struct WizardSession {
    mode: WizardMode,
    step: WizardStep,
    /// Draft project fields (step 1).
    pub project: ProjectDraft,
    /// Draft space fields (step 2/4).
    pub space: SpaceDraft,
    custom: TrackState,
    ai: TrackState,
    active: Track,
    /// Scope-of-work flags (step 5).
    pub scope: ScopeFlags,
    /// Requested output resolution tier.
    pub resolution: Resolution,
    refinement_instruction: String,
    generation_token: u64,
    active_assigned_for: Option<u64>,
}

impl WizardSession {
    /// Open a fresh session in the given mode.
    ///
    /// New-project sessions start at [`WizardStep::ProjectInfo`]; add-space
    /// and edit-space sessions start at [`WizardStep::SpaceCapture`].
    #[must_use]
    pub fn new(mode: WizardMode) -> Self {
        let step = match mode {
            WizardMode::NewProject => WizardStep::ProjectInfo,
            WizardMode::AddSpace { .. } | WizardMode::EditSpace { .. } => WizardStep::SpaceCapture,
        };
        Self {
            mode,
            step,
            project: ProjectDraft::default(),
            space: SpaceDraft::default(),
            custom: TrackState::default(),
            ai: TrackState::default(),
            active: Track::Custom,
            scope: ScopeFlags::default(),
            resolution: Resolution::default(),
            refinement_instruction: String::new(),
            generation_token: 0,
            active_assigned_for: None,
        }
    }

    /// Open an edit session seeded from an existing space.
    ///
    /// The space's description and after image seed the custom track so the
    /// previous result stays visible until a new generation replaces it.
    #[must_use]
    pub fn edit_space(project: ProjectId, space: &ProjectSpace) -> Self {
        let mut session = Self::new(WizardMode::EditSpace { project });
        session.space = SpaceDraft {
            id: Some(space.id),
            name: space.name.clone(),
            before_image: space.before_image.clone(),
            materials: space.materials.clone(),
        };
        session.custom = TrackState {
            text: space.description.clone(),
            image: space.after_image.clone(),
        };
        session
    }

    /// The mode this session was opened in.
    #[must_use]
    pub fn mode(&self) -> WizardMode {
        self.mode
    }

    /// The current step.
    #[must_use]
    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// Advance to the next step, enforcing entry guards.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::MissingBeforeImage`] when leaving
    /// [`WizardStep::SpaceCapture`] without a before photo,
    /// [`CoreError::MissingDescription`] when leaving
    /// [`WizardStep::Description`] with both tracks empty, and
    /// [`CoreError::InvalidTransition`] from the preview or terminal steps.
    pub fn advance(&mut self) -> CoreResult<WizardStep> {
        let next = match self.step {
            WizardStep::ProjectInfo => WizardStep::SpaceCapture,
            WizardStep::SpaceCapture => {
                if self.space.before_image.is_none() {
                    return Err(CoreError::MissingBeforeImage);
                }
                WizardStep::Description
            }
            WizardStep::Description => {
                if !self.custom.has_text() && !self.ai.has_text() {
                    return Err(CoreError::MissingDescription);
                }
                WizardStep::Materials
            }
            WizardStep::Materials => WizardStep::Preview,
            WizardStep::Preview => {
                return Err(CoreError::InvalidTransition(
                    "save to finish the wizard".to_string(),
                ));
            }
            WizardStep::Complete => {
                return Err(CoreError::InvalidTransition(
                    "the wizard is complete".to_string(),
                ));
            }
        };
        self.step = next;
        Ok(next)
    }

    /// Go back one step.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidTransition`] from the first reachable step
    /// of the session's mode and from the terminal step.
    pub fn retreat(&mut self) -> CoreResult<WizardStep> {
        let previous = match self.step {
            WizardStep::SpaceCapture if matches!(self.mode, WizardMode::NewProject) => {
                WizardStep::ProjectInfo
            }
            WizardStep::Description => WizardStep::SpaceCapture,
            WizardStep::Materials => WizardStep::Description,
            WizardStep::Preview => WizardStep::Materials,
            _ => {
                return Err(CoreError::InvalidTransition(
                    "cannot go back from here".to_string(),
                ));
            }
        };
        self.step = previous;
        Ok(previous)
    }

    /// Set the space name.
    pub fn set_space_name(&mut self, name: impl Into<String>) {
        self.space.name = name.into();
    }

    /// Set or replace the before photo.
    pub fn set_before_image(&mut self, image: ImagePayload) {
        self.space.before_image = Some(image);
    }

    /// Remove the before photo (blocks advancing past step 2 again).
    pub fn clear_before_image(&mut self) {
        self.space.before_image = None;
    }

    /// Replace the custom ("Your Vision") track text.
    pub fn set_custom_text(&mut self, text: impl Into<String>) {
        self.custom.text = text.into();
    }

    /// Replace the AI-suggestion track text.
    pub fn set_ai_text(&mut self, text: impl Into<String>) {
        self.ai.text = text.into();
    }

    /// Append a dictated fragment to the custom track, space-separated.
    ///
    /// Dictation only ever appends; it never replaces what the user typed.
    pub fn append_dictation(&mut self, fragment: &str) {
        let fragment = fragment.trim();
        if fragment.is_empty() {
            return;
        }
        if !self.custom.text.is_empty() {
            self.custom.text.push(' ');
        }
        self.custom.text.push_str(fragment);
    }

    /// The custom track state.
    #[must_use]
    pub fn custom(&self) -> &TrackState {
        &self.custom
    }

    /// The AI track state.
    #[must_use]
    pub fn ai(&self) -> &TrackState {
        &self.ai
    }

    /// A track's state by selector.
    #[must_use]
    pub fn track(&self, track: Track) -> &TrackState {
        match track {
            Track::Custom => &self.custom,
            Track::Ai => &self.ai,
        }
    }

    fn track_mut(&mut self, track: Track) -> &mut TrackState {
        match track {
            Track::Custom => &mut self.custom,
            Track::Ai => &mut self.ai,
        }
    }

    /// Toggle a material in the selection. Returns `true` when the material
    /// is selected after the call.
    pub fn toggle_material(&mut self, material: &Material) -> bool {
        if let Some(index) = self.space.materials.iter().position(|m| m.id == material.id) {
            self.space.materials.remove(index);
            false
        } else {
            self.space.materials.push(material.clone());
            true
        }
    }

    /// Materials currently selected, in selection order.
    #[must_use]
    pub fn selected_materials(&self) -> &[Material] {
        &self.space.materials
    }

    /// Start a generation round for every track with text.
    ///
    /// Bumps the session's generation token so results from earlier rounds
    /// are recognized as stale, and resets the active-track assignment for
    /// the new round. No network traffic happens here; the caller runs the
    /// listed tracks and feeds results to [`Self::apply_generated`].
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::MissingBeforeImage`] without a before photo and
    /// [`CoreError::NothingToGenerate`] when both track texts are empty; in
    /// both cases no token is consumed.
    pub fn begin_generation(&mut self) -> CoreResult<GenerationTicket> {
        if self.space.before_image.is_none() {
            return Err(CoreError::MissingBeforeImage);
        }
        let mut tracks = Vec::new();
        if self.custom.has_text() {
            tracks.push(Track::Custom);
        }
        if self.ai.has_text() {
            tracks.push(Track::Ai);
        }
        if tracks.is_empty() {
            return Err(CoreError::MissingDescription);
        }
        self.generation_token += 1;
        self.active_assigned_for = None;
        Ok(GenerationTicket {
            token: self.generation_token,
            tracks,
        })
    }

    /// Record a generation result for one track.
    ///
    /// Results from a superseded round (stale token) are dropped and `false`
    /// is returned. The first result of the current round makes its track
    /// active; callers apply the custom track first so a simultaneous finish
    /// prefers custom.
    pub fn apply_generated(&mut self, token: u64, track: Track, image: ImagePayload) -> bool {
        if token != self.generation_token {
            tracing::debug!("Dropping stale generation result for {track} (token {token})");
            return false;
        }
        self.track_mut(track).image = Some(image);
        if self.active_assigned_for != Some(token) {
            self.active = track;
            self.active_assigned_for = Some(token);
        }
        true
    }

    /// The currently active track.
    #[must_use]
    pub fn active_track(&self) -> Track {
        self.active
    }

    /// The active track's state.
    #[must_use]
    pub fn active_state(&self) -> &TrackState {
        self.track(self.active)
    }

    /// Switch the active track. Switching is free and never re-triggers
    /// generation.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::TrackEmpty`] if that track has no image yet.
    pub fn switch_track(&mut self, track: Track) -> CoreResult<()> {
        if self.track(track).image.is_none() {
            return Err(CoreError::TrackEmpty(track));
        }
        self.active = track;
        Ok(())
    }

    /// Set the pending refinement instruction.
    pub fn set_refinement_instruction(&mut self, instruction: impl Into<String>) {
        self.refinement_instruction = instruction.into();
    }

    /// The pending refinement instruction.
    #[must_use]
    pub fn refinement_instruction(&self) -> &str {
        &self.refinement_instruction
    }

    /// Snapshot everything needed for one refinement call against the active
    /// track. The track is captured here so a mid-flight track switch cannot
    /// redirect the result.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::TrackEmpty`] if the active track has no image and
    /// [`CoreError::MissingInstruction`] if the instruction is empty.
    pub fn refinement_request(&self) -> CoreResult<RefinementRequest> {
        let image = self
            .active_state()
            .image
            .clone()
            .ok_or(CoreError::TrackEmpty(self.active))?;
        let instruction = self.refinement_instruction.trim();
        if instruction.is_empty() {
            return Err(CoreError::MissingInstruction);
        }
        Ok(RefinementRequest {
            track: self.active,
            image,
            instruction: instruction.to_string(),
        })
    }

    /// Record a refinement result: replaces exactly the given track's image
    /// and clears the instruction buffer. The other track is never touched.
    pub fn apply_refined(&mut self, track: Track, image: ImagePayload) {
        self.track_mut(track).image = Some(image);
        self.refinement_instruction.clear();
    }

    /// Clear the refinement instruction without applying a result.
    pub fn clear_refinement_instruction(&mut self) {
        self.refinement_instruction.clear();
    }

    /// The token of the current generation round. Mostly useful for tests.
    #[must_use]
    pub fn generation_token(&self) -> u64 {
        self.generation_token
    }

    /// Finish the wizard: pick one lane and build the artifact to persist.
    ///
    /// The active track's image becomes the space's after image and its text
    /// becomes the space's description; the inactive track's draft is
    /// discarded entirely. Moves the session to [`WizardStep::Complete`].
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidTransition`] unless the session is at
    /// [`WizardStep::Preview`].
    pub fn finalize(&mut self) -> CoreResult<SaveOutcome> {
        if self.step != WizardStep::Preview {
            return Err(CoreError::InvalidTransition(
                "finish is only available from the preview step".to_string(),
            ));
        }
        let chosen = self.track(self.active).clone();
        let space = ProjectSpace {
            id: self.space.id.unwrap_or_else(SpaceId::new),
            name: self.space.name.clone(),
            before_image: self.space.before_image.clone(),
            after_image: chosen.image,
            description: chosen.text,
            materials: self.space.materials.clone(),
        };
        self.step = WizardStep::Complete;

        match self.mode {
            WizardMode::NewProject => Ok(SaveOutcome::NewProject(Project {
                id: ProjectId::new(),
                name: self.project.name.clone(),
                cover_photo: None,
                created_at_ms: current_timestamp_ms(),
                status: self.project.status,
                client_name: self.project.client_name.clone(),
                client_email: self.project.client_email.clone(),
                client_address: self.project.client_address.clone(),
                client_phone: self.project.client_phone.clone(),
                quote_amount: self.project.quote_amount,
                spaces: vec![space],
                description: String::new(),
            })),
            WizardMode::AddSpace { project } | WizardMode::EditSpace { project } => {
                Ok(SaveOutcome::Space { project, space })
            }
        }
    }
}
