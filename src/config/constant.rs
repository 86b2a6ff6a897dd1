/// Appended to the base prompt for the second generation call.
pub const VARIANT_SUFFIX: &str = "Show a different angle or pose.";

pub const DEFAULT_MIME_TYPE: &str = "image/jpeg";

pub const MIN_GENERATED_IMAGES: usize = 2;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash-image";
pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_GEMINI_TIMEOUT_SECS: u64 = 120;

pub const DEFAULT_BODY_LIMIT_MB: usize = 20;
pub const DEFAULT_LOG_LEVEL: &str = "info";
