//! Engine Module - Validation and dispatch of decision problems.
//!
//! Both components are pure and stateless: the same input always produces
//! the same response.
//!
//! - `InputValidator` - Length gate returning clarifying questions
//! - `FrameworkDispatcher` - Framework resolution and response assembly

mod dispatcher;
mod request;
mod response;
mod validator;

pub use dispatcher::{FrameworkDispatcher, CONTEXT_SECTION, EXECUTION_PLAN, SOLUTION};
pub use request::{AnalysisRequest, FrameworkSelection};
pub use response::{AnalysisResponse, AnalysisStatus};
pub use validator::{InputValidator, Validation, CLARIFYING_QUESTIONS, MIN_PROBLEM_LENGTH};
