use crate::config::constant::{MIN_GENERATED_IMAGES, VARIANT_SUFFIX};
use crate::entity::mockup::{EditRequest, GenerationRequest};
use crate::utils::error::MockupError;
use crate::utils::gemini::ImageModel;
use crate::utils::prompt::build_prompt;
use tracing::{error, info};

/// Both calls are in flight at once; results keep call order (base prompt
/// first, variant second).
pub async fn generate_mockup(
    model: &dyn ImageModel,
    request: &GenerationRequest,
) -> Result<Vec<String>, MockupError> {
    let base_prompt = build_prompt(
        &request.style,
        request.clothing_type,
        request.custom_text.as_deref(),
    );
    let variant_prompt = format!("{} {}", base_prompt, VARIANT_SUFFIX);

    info!(
        "Generating '{}' mockups of a {} ({} variants)",
        request.style, request.clothing_type, MIN_GENERATED_IMAGES
    );

    let (first, second) = futures::try_join!(
        model.generate_content(&request.source_image, &base_prompt),
        model.generate_content(&request.source_image, &variant_prompt),
    )
    .map_err(|e| {
        error!("Mockup generation call failed: {}", e);
        e
    })?;

    let images: Vec<String> = first
        .iter()
        .chain(second.iter())
        .map(|image| image.to_data_uri())
        .collect();

    match images.len() {
        0 => Err(MockupError::GenerationFailed),
        produced if produced < MIN_GENERATED_IMAGES => Err(MockupError::InsufficientResults {
            produced,
            expected: MIN_GENERATED_IMAGES,
        }),
        produced => {
            info!("Mockup generation produced {} image(s)", produced);
            Ok(images)
        }
    }
}

pub async fn edit_image(model: &dyn ImageModel, request: &EditRequest) -> Result<String, MockupError> {
    info!(
        "Editing a {} image with a {}-char instruction",
        request.source_image.mime_type,
        request.instruction.len()
    );

    let images = model
        .generate_content(&request.source_image, &request.instruction)
        .await?;

    images
        .first()
        .map(|image| image.to_data_uri())
        .ok_or(MockupError::NoImageProduced)
}
