//! Framework Module - Decision framework keys, templates and selection.
//!
//! # Components
//!
//! - `FrameworkKey` - The six supported frameworks
//! - `FrameworkTemplate` - Static, ordered section content per framework
//! - `FrameworkOutput` - Ordered section map sent to clients
//! - `KeywordFrameworkSelector` - Keyword heuristic behind "auto" selection

mod key;
mod output;
mod registry;
mod selector;

pub use key::{FrameworkKey, UnknownFramework};
pub use output::FrameworkOutput;
pub use registry::{template_for, FrameworkTemplate, TemplateSection};
pub use selector::{FrameworkSelector, KeywordFrameworkSelector, KEYWORD_TABLE};
