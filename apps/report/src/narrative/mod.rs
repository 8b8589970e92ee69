// Narrative analysis: sentence segmentation, theme classification,
// citation resolution, and the structured breakdown built from them.
// Everything here is pure and synchronous.

pub mod breakdown;
pub mod citations;
pub mod classifier;
pub mod handlers;
pub mod segmenter;
