use promptly_core::generic::{GenericMessage, GenericRole};
use promptly_core::provider::ChatCompleteParameters;
use serde::{Deserialize, Serialize};

use crate::impl_builder_methods;

use super::common::UsageMetadata;

/// Body of `POST /models/{model}:generateContent`.
///
/// The model is part of the URL, not the body.
#[derive(Debug, Serialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

impl GenerateContentRequest {
    pub fn new(contents: Vec<Content>) -> Self {
        Self {
            contents,
            system_instruction: None,
            generation_config: None,
        }
    }
}

impl_builder_methods!(
    GenerateContentRequest,
    system_instruction: Content,
    generation_config: GenerationConfig
);

impl<M> From<ChatCompleteParameters<M>> for GenerateContentRequest
where
    M: Into<GenericMessage> + Clone,
{
    /// Gemini has no `system` role inside `contents`; system messages are
    /// folded into `systemInstruction`, everything else keeps its order.
    fn from(value: ChatCompleteParameters<M>) -> Self {
        let temperature = value.temperature;
        let mut system_parts = Vec::new();
        let mut contents = Vec::new();

        for message in value.into_messages() {
            let message: GenericMessage = message.into();
            if message.role == GenericRole::System {
                system_parts.push(Part::text(message.text()));
            } else {
                contents.push(Content::from(message));
            }
        }

        let mut request = GenerateContentRequest::new(contents);
        if !system_parts.is_empty() {
            request = request.system_instruction(Content {
                role: None,
                parts: system_parts,
            });
        }
        if let Some(temperature) = temperature {
            request = request.generation_config(GenerationConfig {
                temperature: Some(temperature),
            });
        }
        request
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
}

/// A role-tagged list of parts, used both in requests and in candidates.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Set on "thinking" parts emitted by reasoning models.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thought: Option<bool>,
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            thought: None,
        }
    }
}

impl From<GenericMessage> for Content {
    fn from(value: GenericMessage) -> Self {
        let role = match value.role {
            GenericRole::Assistant => Role::Model,
            GenericRole::User | GenericRole::System => Role::User,
        };
        Self {
            role: Some(role),
            parts: value.content.map(Part::text).into_iter().collect(),
        }
    }
}

impl From<Role> for GenericRole {
    fn from(value: Role) -> Self {
        match value {
            Role::User => GenericRole::User,
            Role::Model => GenericRole::Assistant,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub usage_metadata: Option<UsageMetadata>,
    pub prompt_feedback: Option<PromptFeedback>,
    pub model_version: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first candidate: every non-thought text part, concatenated.
    ///
    /// `None` when there is no candidate at all.
    pub fn text(&self) -> Option<String> {
        let candidate = self.candidates.first()?;
        let text = candidate
            .content
            .iter()
            .flat_map(|content| content.parts.iter())
            .filter(|part| part.thought != Some(true))
            .filter_map(|part| part.text.as_deref())
            .collect::<String>();
        Some(text)
    }

    pub fn finish_reason(&self) -> Option<FinishReason> {
        self.candidates.first()?.finish_reason
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<Content>,
    pub finish_reason: Option<FinishReason>,
    pub index: Option<u32>,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FinishReason {
    Stop,
    MaxTokens,
    Safety,
    Recitation,
    Blocklist,
    ProhibitedContent,
    #[serde(other)]
    Other,
}

impl FinishReason {
    /// Generation was stopped by a content filter rather than by the model.
    pub fn is_block(self) -> bool {
        matches!(
            self,
            Self::Safety | Self::Recitation | Self::Blocklist | Self::ProhibitedContent
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Stop => "STOP",
            Self::MaxTokens => "MAX_TOKENS",
            Self::Safety => "SAFETY",
            Self::Recitation => "RECITATION",
            Self::Blocklist => "BLOCKLIST",
            Self::ProhibitedContent => "PROHIBITED_CONTENT",
            Self::Other => "OTHER",
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    pub block_reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use promptly_core::model::Model;
    use serde_json::json;

    use super::*;

    #[test]
    fn single_user_prompt_serializes_to_wire_shape() {
        let params = ChatCompleteParameters::new(
            vec![GenericMessage::user("Why is Boot.dev such a great place to learn?")],
            Model::Custom("gemini-2.0-flash-001"),
        );

        let request = GenerateContentRequest::from(params);

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "contents": [
                    {
                        "role": "user",
                        "parts": [{ "text": "Why is Boot.dev such a great place to learn?" }]
                    }
                ]
            })
        );
    }

    #[test]
    fn system_messages_become_system_instruction() {
        let params = ChatCompleteParameters::new(
            vec![
                GenericMessage::new("Be brief.".into(), GenericRole::System),
                GenericMessage::user("hi"),
            ],
            Model::Custom("m"),
        )
        .with_temperature(0.5);

        let value = serde_json::to_value(GenerateContentRequest::from(params)).unwrap();

        assert_eq!(value["systemInstruction"], json!({ "parts": [{ "text": "Be brief." }] }));
        assert_eq!(value["contents"].as_array().unwrap().len(), 1);
        assert_eq!(value["generationConfig"], json!({ "temperature": 0.5 }));
    }

    #[test]
    fn response_text_skips_thought_parts() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [
                        { "text": "thinking...", "thought": true },
                        { "text": "Boot.dev " },
                        { "text": "is great." }
                    ]
                },
                "finishReason": "STOP",
                "index": 0
            }],
            "usageMetadata": {
                "promptTokenCount": 19,
                "candidatesTokenCount": 89,
                "totalTokenCount": 108
            },
            "modelVersion": "gemini-2.0-flash-001"
        }))
        .unwrap();

        assert_eq!(response.text().as_deref(), Some("Boot.dev is great."));
        assert_eq!(response.candidates[0].finish_reason, Some(FinishReason::Stop));
        let usage = response.usage_metadata.unwrap();
        assert_eq!(usage.candidates_token_count, 89);
        assert_eq!(usage.total_token_count, 108);
    }

    #[test]
    fn unknown_finish_reason_is_tolerated() {
        let candidate: Candidate =
            serde_json::from_value(json!({ "finishReason": "SPII" })).unwrap();
        assert_eq!(candidate.finish_reason, Some(FinishReason::Other));
        assert!(candidate.content.is_none());
        assert!(!FinishReason::Other.is_block());
    }

    #[test]
    fn filtered_candidate_reports_its_block_reason() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{ "finishReason": "PROHIBITED_CONTENT", "index": 0 }]
        }))
        .unwrap();

        assert_eq!(response.text().as_deref(), Some(""));
        let reason = response.finish_reason().unwrap();
        assert!(reason.is_block());
        assert_eq!(reason.as_str(), "PROHIBITED_CONTENT");
        assert!(!FinishReason::MaxTokens.is_block());
    }

    #[test]
    fn response_without_candidates_has_no_text() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "promptFeedback": { "blockReason": "SAFETY" }
        }))
        .unwrap();

        assert_eq!(response.text(), None);
        assert_eq!(
            response.prompt_feedback.unwrap().block_reason.as_deref(),
            Some("SAFETY")
        );
    }
}
