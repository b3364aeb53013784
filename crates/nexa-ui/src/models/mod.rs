//! Data models for the landing page
//!
//! - `content`: immutable section content
//! - `header`: header scroll/menu state
//! - `lead`: assessment form draft and lifecycle

pub mod content;
pub mod header;
pub mod lead;

pub use header::HeaderState;
pub use lead::{
    Challenge, FormPhase, LeadDraft, LeadField, LeadForm, LeadFormError, LeadSubmission,
    PortfolioSize,
};
