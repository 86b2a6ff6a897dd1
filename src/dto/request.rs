use crate::config::constant::DEFAULT_MIME_TYPE;
use crate::entity::mockup::{ClothingType, EditRequest, GenerationRequest, InlineImage};
use crate::utils::error::{MockupError, MISSING_EDIT_FIELDS, MISSING_GENERATE_FIELDS};
use garde::Validate;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerateMockupRequest {
    #[garde(required, length(min = 1))]
    pub image_base64: Option<String>,
    #[garde(skip)]
    pub mime_type: Option<String>,
    #[garde(required, length(min = 1))]
    pub style: Option<String>,
    #[garde(required, length(min = 1))]
    pub clothing_type: Option<String>,
    #[garde(skip)]
    pub custom_prompt: Option<String>,
}

impl GenerateMockupRequest {
    pub fn into_generation_request(self) -> Result<GenerationRequest, MockupError> {
        self.validate()
            .map_err(|_| MockupError::Validation(MISSING_GENERATE_FIELDS.to_string()))?;

        let (Some(data), Some(style), Some(clothing_type)) =
            (self.image_base64, self.style, self.clothing_type)
        else {
            return Err(MockupError::Validation(MISSING_GENERATE_FIELDS.to_string()));
        };
        let clothing_type = clothing_type
            .parse::<ClothingType>()
            .map_err(MockupError::Validation)?;
        let mime_type = self
            .mime_type
            .filter(|mime| !mime.is_empty())
            .unwrap_or_else(|| DEFAULT_MIME_TYPE.to_string());

        Ok(GenerationRequest {
            source_image: InlineImage::new(mime_type, data),
            style,
            clothing_type,
            custom_text: self.custom_prompt,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EditImageRequest {
    #[garde(required, length(min = 1))]
    pub base_image: Option<String>,
    #[garde(required, length(min = 1))]
    pub edit_prompt: Option<String>,
}

impl EditImageRequest {
    pub fn into_edit_request(self) -> Result<EditRequest, MockupError> {
        self.validate()
            .map_err(|_| MockupError::Validation(MISSING_EDIT_FIELDS.to_string()))?;

        let (Some(base_image), Some(instruction)) = (self.base_image, self.edit_prompt) else {
            return Err(MockupError::Validation(MISSING_EDIT_FIELDS.to_string()));
        };

        Ok(EditRequest {
            source_image: InlineImage::from_data_uri(&base_image)?,
            instruction,
        })
    }
}
