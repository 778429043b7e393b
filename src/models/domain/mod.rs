pub mod generation;
pub mod qa_pair;
pub mod segment;

pub use generation::{GenerationOptions, ResponseFormat};
pub use qa_pair::{QaPair, QuestionSet};
pub use segment::Segment;
