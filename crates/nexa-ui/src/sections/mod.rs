//! Page sections, in page order
//!
//! Each section renders its static content from `models::content`. Only
//! [`Header`] and [`LeadMagnet`] hold local state.

pub mod footer;
pub mod header;
pub mod hero;
pub mod lead_magnet;
pub mod offerings;
pub mod social_proof;

pub use footer::{Footer, MobileCta};
pub use header::Header;
pub use hero::Hero;
pub use lead_magnet::LeadMagnet;
pub use offerings::{CaseStudies, Services, ValueProp};
pub use social_proof::{Testimonials, TrustSection};
