pub mod document;
pub mod output;
pub mod template;

pub use document::{json_kind, ConfigDocument, FieldLookup, ScalarValue};
pub use output::OutputFile;
pub use template::{FieldMapping, TargetKind, TargetTemplate, TemplateRevision};
