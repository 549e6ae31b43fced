use std::borrow::Cow;

use promptly_core::model::{GeminiModel, Model};

pub const GEMINI_2_0_FLASH_001: &str = "gemini-2.0-flash-001";
pub const GEMINI_2_0_FLASH: &str = "gemini-2.0-flash";
pub const GEMINI_2_0_FLASH_LITE: &str = "gemini-2.0-flash-lite";
pub const GEMINI_2_5_FLASH: &str = "gemini-2.5-flash";
pub const GEMINI_2_5_PRO: &str = "gemini-2.5-pro";

pub(crate) fn map_model(model: &Model) -> Option<Cow<'static, str>> {
    match model {
        Model::Custom(custom) if custom.trim().is_empty() => None,
        Model::Custom(custom) => Some(Cow::Borrowed(*custom)),
        Model::Gemini(gemini) => Some(
            match gemini {
                GeminiModel::Gemini2_0Flash001 => GEMINI_2_0_FLASH_001,
                GeminiModel::Gemini2_0Flash => GEMINI_2_0_FLASH,
                GeminiModel::Gemini2_0FlashLite => GEMINI_2_0_FLASH_LITE,
                GeminiModel::Gemini2_5Flash => GEMINI_2_5_FLASH,
                GeminiModel::Gemini2_5Pro => GEMINI_2_5_PRO,
            }
            .into(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_models_map_to_api_names() {
        assert_eq!(
            map_model(&GeminiModel::Gemini2_0Flash001.into()).as_deref(),
            Some("gemini-2.0-flash-001")
        );
        assert_eq!(
            map_model(&GeminiModel::Gemini2_5Pro.into()).as_deref(),
            Some("gemini-2.5-pro")
        );
    }

    #[test]
    fn custom_models_pass_through() {
        assert_eq!(
            map_model(&Model::Custom("tunedModels/my-model")).as_deref(),
            Some("tunedModels/my-model")
        );
        assert_eq!(map_model(&Model::Custom("  ")), None);
    }
}
