// Skill extraction and weighted match scoring.
// The engine (normalize → extract → score) is pure and synchronous; ranking
// and the HTTP handler wrap it with caller policy and I/O.

pub mod engine;
pub mod extractor;
pub mod handlers;
pub mod normalize;
pub mod ranking;
pub mod scorer;
pub mod vocabulary;
