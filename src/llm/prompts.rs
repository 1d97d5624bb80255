/// Instruction sent alongside a product photo when no custom prompt is given.
pub const LISTING_PROMPT: &str = "Give a product title and short description for this image.";
