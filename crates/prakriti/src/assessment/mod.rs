pub mod answers;
pub mod domain;
pub mod locale;
pub mod questionnaire;
pub mod report;
pub mod router;
mod scoring;
mod session;

pub use report::AssessmentReport;
pub use scoring::{DoshaShares, DoshaTally, BALANCE_BAND};
pub use session::ResponseSheet;
