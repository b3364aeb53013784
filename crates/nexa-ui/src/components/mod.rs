//! Presentational atoms shared by the page sections

pub mod button;
pub mod icons;
pub mod logo;
pub mod section_heading;

pub use button::{Button, ButtonVariant};
pub use icons::{Icon, IconSvg};
pub use logo::NexaLogo;
pub use section_heading::SectionHeading;
