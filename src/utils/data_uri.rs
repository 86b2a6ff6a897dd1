use crate::config::constant::DEFAULT_MIME_TYPE;
use crate::entity::mockup::InlineImage;
use crate::utils::error::MockupError;
use once_cell::sync::Lazy;
use regex::Regex;

static MEDIA_TYPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^data:(.+);").unwrap());

/// Payload is everything after the first comma; the media type runs up to
/// the last `;` of the header, parameters included.
pub fn decode_data_uri(uri: &str) -> Result<(String, String), MockupError> {
    let (header, payload) = uri
        .split_once(',')
        .ok_or_else(|| MockupError::Validation("baseImage is not a data URI".to_string()))?;

    let media_type = MEDIA_TYPE
        .captures(header)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| DEFAULT_MIME_TYPE.to_string());

    Ok((payload.to_string(), media_type))
}

pub fn encode_data_uri(payload: &str, media_type: &str) -> String {
    format!("data:{};base64,{}", media_type, payload)
}

impl InlineImage {
    pub fn from_data_uri(uri: &str) -> Result<Self, MockupError> {
        let (data, mime_type) = decode_data_uri(uri)?;
        Ok(Self { mime_type, data })
    }

    pub fn to_data_uri(&self) -> String {
        encode_data_uri(&self.data, &self.mime_type)
    }
}
