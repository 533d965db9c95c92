mod engine;
mod types;
mod writer;

pub use engine::TemplateSource;
pub use types::{TemplateError, WriteOutcome};
pub use writer::TemplateWriter;
