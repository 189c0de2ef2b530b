//! Proposal document assembly.

use serde::{Deserialize, Serialize};

use reno_core::{ImagePayload, Material, ScopeFlags, WizardSession};

/// One line of the proposal's inclusion checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InclusionItem {
    /// Checklist heading, e.g. "Electrical".
    pub title: String,
    /// Supporting detail line.
    pub detail: String,
}

impl InclusionItem {
    fn new(title: &str, detail: &str) -> Self {
        Self {
            title: title.to_string(),
            detail: detail.to_string(),
        }
    }
}

/// Print-ready proposal assembled from a wizard session.
///
/// Pure data: assembling one reads the session, writes nothing, and renders
/// identically for identical input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProposalDocument {
    /// Project name ("Renovation Project" when unset).
    pub project_name: String,
    /// Client name ("Valued Client" when unset).
    pub client_name: String,
    /// Caller-supplied date label.
    pub date_label: String,
    /// Estimated quote in dollars.
    pub quote_amount: f64,
    /// Space name.
    pub space_name: String,
    /// The before photo.
    pub before_image: Option<ImagePayload>,
    /// The active track's generated after image.
    pub after_image: Option<ImagePayload>,
    /// The active track's scope-of-work text.
    pub scope_text: String,
    /// Conditional inclusion checklist.
    pub inclusions: Vec<InclusionItem>,
}

impl ProposalDocument {
    /// Assemble a proposal from the session's current state.
    ///
    /// Uses whatever track is active right now; the date label is supplied
    /// by the caller so rendering stays deterministic.
    #[must_use]
    pub fn from_session(session: &WizardSession, date_label: impl Into<String>) -> Self {
        let active = session.active_state();
        Self {
            project_name: non_empty_or(&session.project.name, "Renovation Project"),
            client_name: non_empty_or(&session.project.client_name, "Valued Client"),
            date_label: date_label.into(),
            quote_amount: session.project.quote_amount,
            space_name: session.space.name.clone(),
            before_image: session.space.before_image.clone(),
            after_image: active.image.clone(),
            scope_text: active.text.clone(),
            inclusions: build_inclusions(session.scope, session.selected_materials()),
        }
    }
}

fn non_empty_or(value: &str, fallback: &str) -> String {
    if value.trim().is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}

/// Build the inclusion checklist from the scope flags and material picks.
fn build_inclusions(scope: ScopeFlags, materials: &[Material]) -> Vec<InclusionItem> {
    let mut items = Vec::new();
    if scope.include_electrical {
        items.push(InclusionItem::new(
            "Electrical",
            "Rough-in, trim, wiring, and fixture installation per code.",
        ));
    }
    if scope.include_plumbing {
        items.push(InclusionItem::new(
            "Plumbing",
            "Rough-in, supply/waste lines, valves, and fixture installation.",
        ));
    }
    if scope.pull_permit {
        items.push(InclusionItem::new(
            "Permits",
            "Contractor handles all required building permits and inspections.",
        ));
    }
    items.push(InclusionItem::new(
        "Design Concept",
        "Implementation of the proposed aesthetic and layout.",
    ));
    if !materials.is_empty() {
        let names = materials
            .iter()
            .map(|m| m.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        items.push(InclusionItem {
            title: "Selected Materials".to_string(),
            detail: names,
        });
    }
    items
}
