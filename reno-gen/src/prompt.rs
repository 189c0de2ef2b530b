//! Prompt assembly for generation calls.
//!
//! Kept pure so composition rules are testable without the service.

use reno_core::Material;

/// Instruction for the before-photo analysis call. Changes only; the model
/// must never describe the current condition.
pub const ANALYZE_INSTRUCTION: &str = "Suggest a renovation plan for this area to modernize it \
     and increase value. Focus ONLY on the suggested changes (materials, colors, fixtures, \
     style). Do NOT describe the current condition of the room.";

/// Photorealism preamble prepended to every generation prompt.
pub const PHOTOREAL_PREAMBLE: &str =
    "A photorealistic renovation after photo based on the input image.";

/// Prompt for drafting a scope of work from free-text notes.
#[must_use]
pub fn describe_prompt(notes: &str) -> String {
    format!(
        "Draft a professional renovation project scope of work based on these notes: {notes}. \
         Include estimated timelines and trade requirements."
    )
}

/// Prompt for one generation track: description plus the selected materials.
#[must_use]
pub fn generation_prompt(description: &str, materials: &[Material]) -> String {
    let materials_text = materials
        .iter()
        .map(|m| format!("{} ({})", m.name, m.description))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "Renovation details: {description}. Specific Materials: {materials_text}. Ensure high \
         photorealism and correct perspective integration of materials."
    )
}

/// Prompt for an in-place edit of a generated image.
#[must_use]
pub fn refine_prompt(instruction: &str) -> String {
    format!("Edit this image: {instruction}. Maintain photorealism.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_prompt_includes_materials() {
        let materials = vec![
            Material::new("Repose Gray", "Paint", "Sherwin-Williams", "warm gray", ""),
            Material::new("Calacatta Gold", "Countertops", "Quartz", "bold veining", ""),
        ];
        let prompt = generation_prompt("new cabinets", &materials);
        assert!(prompt.contains("Renovation details: new cabinets."));
        assert!(prompt.contains("Repose Gray (warm gray)"));
        assert!(prompt.contains("Calacatta Gold (bold veining)"));
    }

    #[test]
    fn test_generation_prompt_tolerates_no_materials() {
        let prompt = generation_prompt("paint everything white", &[]);
        assert!(prompt.contains("Specific Materials: ."));
    }

    #[test]
    fn test_refine_prompt_keeps_photorealism_clause() {
        let prompt = refine_prompt("make the counters darker");
        assert_eq!(
            prompt,
            "Edit this image: make the counters darker. Maintain photorealism."
        );
    }
}
