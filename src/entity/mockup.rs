use std::fmt;
use std::str::FromStr;

// `model-male` and `model-female` are accepted as aliases of the wire ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MockupStyle {
    MaleModel,
    FemaleModel,
    FlatLay,
    Hanging,
}

impl MockupStyle {
    pub const ALL: [MockupStyle; 4] = [
        MockupStyle::MaleModel,
        MockupStyle::FemaleModel,
        MockupStyle::FlatLay,
        MockupStyle::Hanging,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MockupStyle::MaleModel => "male-model",
            MockupStyle::FemaleModel => "female-model",
            MockupStyle::FlatLay => "flat-lay",
            MockupStyle::Hanging => "hanging",
        }
    }
}

impl FromStr for MockupStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male-model" | "model-male" => Ok(MockupStyle::MaleModel),
            "female-model" | "model-female" => Ok(MockupStyle::FemaleModel),
            "flat-lay" => Ok(MockupStyle::FlatLay),
            "hanging" => Ok(MockupStyle::Hanging),
            other => Err(format!("Unknown mockup style: {}", other)),
        }
    }
}

impl fmt::Display for MockupStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClothingType {
    TShirt,
    Hoodie,
    Shirt,
}

impl ClothingType {
    pub const ALL: [ClothingType; 3] = [ClothingType::TShirt, ClothingType::Hoodie, ClothingType::Shirt];

    pub fn as_str(&self) -> &'static str {
        match self {
            ClothingType::TShirt => "t-shirt",
            ClothingType::Hoodie => "hoodie",
            ClothingType::Shirt => "shirt",
        }
    }
}

impl FromStr for ClothingType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "t-shirt" => Ok(ClothingType::TShirt),
            "hoodie" => Ok(ClothingType::Hoodie),
            "shirt" => Ok(ClothingType::Shirt),
            other => Err(format!("Unsupported clothing type: {}", other)),
        }
    }
}

impl fmt::Display for ClothingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineImage {
    pub mime_type: String,
    pub data: String,
}

impl InlineImage {
    pub fn new(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data: data.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub source_image: InlineImage,
    // unknown keys fall back to the generic template
    pub style: String,
    pub clothing_type: ClothingType,
    pub custom_text: Option<String>,
}

#[derive(Debug, Clone)]
pub struct EditRequest {
    pub source_image: InlineImage,
    pub instruction: String,
}
