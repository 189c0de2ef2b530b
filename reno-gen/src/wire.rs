//! Wire types for the vendor `generateContent` endpoint.
//!
//! Field names mirror the vendor's `camelCase` JSON schema exactly; nothing
//! here is part of this crate's public API.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub(crate) struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none", rename = "generationConfig")]
    pub generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub(crate) struct Part {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub text: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        rename = "inlineData",
        default
    )]
    pub inline_data: Option<InlineData>,
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            inline_data: None,
        }
    }

    pub fn inline(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            text: None,
            inline_data: Some(InlineData {
                mime_type: mime_type.into(),
                data: data.into(),
            }),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct InlineData {
    #[serde(rename = "mimeType")]
    pub mime_type: String,
    pub data: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub(crate) struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none", rename = "thinkingConfig")]
    pub thinking_config: Option<ThinkingConfig>,
    #[serde(skip_serializing_if = "Option::is_none", rename = "imageConfig")]
    pub image_config: Option<ImageConfig>,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct ThinkingConfig {
    #[serde(rename = "thinkingBudget")]
    pub thinking_budget: u32,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct ImageConfig {
    #[serde(rename = "aspectRatio")]
    pub aspect_ratio: String,
    #[serde(skip_serializing_if = "Option::is_none", rename = "imageSize")]
    pub image_size: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// First text part of the first candidate, if any.
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .iter()
            .find_map(|part| part.text.as_deref())
    }

    /// First inline-data part of the first candidate, if any.
    pub fn first_inline(&self) -> Option<&InlineData> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .iter()
            .find_map(|part| part.inline_data.as_ref())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_camel_case() {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part::text("hello"), Part::inline("image/jpeg", "QUJD")],
            }],
            generation_config: Some(GenerationConfig {
                thinking_config: Some(ThinkingConfig {
                    thinking_budget: 1024,
                }),
                image_config: Some(ImageConfig {
                    aspect_ratio: "4:3".to_string(),
                    image_size: Some("2K".to_string()),
                }),
            }),
        };

        let json = serde_json::to_value(&request).expect("serialize");
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(
            json["contents"][0]["parts"][1]["inlineData"]["mimeType"],
            "image/jpeg"
        );
        assert_eq!(
            json["generationConfig"]["thinkingConfig"]["thinkingBudget"],
            1024
        );
        assert_eq!(json["generationConfig"]["imageConfig"]["imageSize"], "2K");
    }

    #[test]
    fn test_response_picks_first_inline_image() {
        let json = serde_json::json!({
            "candidates": [{
                "content": {
                    "parts": [
                        { "text": "Here is your render." },
                        { "inlineData": { "mimeType": "image/png", "data": "QUJD" } },
                        { "inlineData": { "mimeType": "image/png", "data": "WFla" } }
                    ]
                }
            }]
        });

        let response: GenerateContentResponse =
            serde_json::from_value(json).expect("deserialize");
        assert_eq!(response.first_text(), Some("Here is your render."));
        assert_eq!(response.first_inline().expect("inline").data, "QUJD");
    }

    #[test]
    fn test_empty_response_yields_nothing() {
        let response: GenerateContentResponse =
            serde_json::from_value(serde_json::json!({})).expect("deserialize");
        assert!(response.first_text().is_none());
        assert!(response.first_inline().is_none());
    }
}
