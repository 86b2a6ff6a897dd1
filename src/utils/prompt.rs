use crate::entity::mockup::{ClothingType, MockupStyle};
use tracing::warn;

fn template(style: MockupStyle, clothing_type: ClothingType) -> String {
    match style {
        MockupStyle::MaleModel => format!(
            "Create a photorealistic fashion mockup. A male model is wearing the exact {clothing_type} from the provided image. The model is in a bright, modern studio setting. The clothing should fit the model naturally, replacing any clothing they were wearing. The focus is on the clothing. High-resolution, detailed."
        ),
        MockupStyle::FemaleModel => format!(
            "Create a photorealistic fashion mockup. A female model is wearing the exact {clothing_type} from the provided image. The model is in a stylish urban outdoor setting with a slightly blurred background. The clothing should fit the model naturally, replacing any clothing they were wearing. The focus is on the clothing. High-resolution, detailed."
        ),
        MockupStyle::FlatLay => format!(
            "Based on the provided image of a {clothing_type}, create a new, professional flat-lay product photograph of that same item. The {clothing_type} should be neatly folded on a clean, light-colored wooden surface. Add some complementary accessories like sunglasses or a small plant nearby. High-resolution, detailed lighting."
        ),
        MockupStyle::Hanging => format!(
            "Based on the provided image of a {clothing_type}, create a new, high-quality product shot of that same item. The {clothing_type} is on a simple wooden hanger against a clean, white brick wall. The lighting should be soft and natural, showing fabric texture. High-resolution, detailed."
        ),
    }
}

pub fn build_prompt(style: &str, clothing_type: ClothingType, custom_text: Option<&str>) -> String {
    let mut prompt = match style.parse::<MockupStyle>() {
        Ok(style) => template(style, clothing_type),
        Err(e) => {
            warn!("{}, falling back to the generic mockup prompt", e);
            format!("Create a professional mockup of this {clothing_type}.")
        }
    };

    if let Some(custom) = custom_text.map(str::trim).filter(|text| !text.is_empty()) {
        prompt.push(' ');
        prompt.push_str(custom);
    }
    prompt
}
