//! Behavioral tests for the landing page
//!
//! BDD-style tests using given-when-then naming convention.
//! Tests focus on observable behavior rather than implementation details.

pub mod header_behaviors;
pub mod lead_form_behaviors;
