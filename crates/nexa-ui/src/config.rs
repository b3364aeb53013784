//! Site-wide configuration
//!
//! A single immutable [`SiteConfig`] is provided through Leptos context at the
//! root of the app. Sections read it with [`use_site_config`], which falls back
//! to the defaults when no context is present (e.g. a section mounted alone).

use leptos::prelude::*;

use crate::error::{Result, UiError};

/// Offset subtracted from anchor targets so the fixed header does not cover them
pub const HEADER_OFFSET_PX: f64 = 85.0;
/// Vertical scroll offset after which the header switches to its solid style
pub const SCROLL_THRESHOLD_PX: f64 = 20.0;
/// Simulated network latency for the assessment form
pub const SUBMIT_DELAY_MS: u32 = 1_000;
/// Contact address shown in the footer and logged on submission
pub const CONTACT_EMAIL: &str = "nexa.advisory9@gmail.com";
/// Company name used in the header, footer and copyright line
pub const COMPANY_NAME: &str = "Nexa Advisory";

/// Immutable configuration shared by every section
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    header_offset_px: f64,
    scroll_threshold_px: f64,
    submit_delay_ms: u32,
    contact_email: String,
    company_name: String,
}

impl SiteConfig {
    /// Creates a configuration with custom values.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::InvalidConfig`] if:
    /// - either pixel value is not finite or is negative
    /// - the contact e-mail has no `@`
    /// - the company name is blank
    ///
    /// # Examples
    ///
    /// ```
    /// use nexa_ui::config::SiteConfig;
    ///
    /// let config = SiteConfig::new(64.0, 10.0, 250, "hello@example.com", "Acme")?;
    /// assert_eq!(config.header_offset_px(), 64.0);
    ///
    /// assert!(SiteConfig::new(-1.0, 10.0, 250, "hello@example.com", "Acme").is_err());
    /// assert!(SiteConfig::new(64.0, 10.0, 250, "nobody", "Acme").is_err());
    /// # Ok::<(), nexa_ui::error::UiError>(())
    /// ```
    pub fn new(
        header_offset_px: f64,
        scroll_threshold_px: f64,
        submit_delay_ms: u32,
        contact_email: impl Into<String>,
        company_name: impl Into<String>,
    ) -> Result<Self> {
        if !header_offset_px.is_finite() || header_offset_px < 0.0 {
            return Err(UiError::InvalidConfig(format!(
                "header offset must be a non-negative number, got {header_offset_px}"
            )));
        }
        if !scroll_threshold_px.is_finite() || scroll_threshold_px < 0.0 {
            return Err(UiError::InvalidConfig(format!(
                "scroll threshold must be a non-negative number, got {scroll_threshold_px}"
            )));
        }

        let contact_email = contact_email.into();
        if !contact_email.contains('@') {
            return Err(UiError::InvalidConfig(format!(
                "contact e-mail is not an address: {contact_email}"
            )));
        }

        let company_name = company_name.into();
        if company_name.trim().is_empty() {
            return Err(UiError::InvalidConfig(
                "company name must not be blank".to_string(),
            ));
        }

        Ok(Self {
            header_offset_px,
            scroll_threshold_px,
            submit_delay_ms,
            contact_email,
            company_name,
        })
    }

    pub fn header_offset_px(&self) -> f64 {
        self.header_offset_px
    }

    pub fn scroll_threshold_px(&self) -> f64 {
        self.scroll_threshold_px
    }

    pub fn submit_delay_ms(&self) -> u32 {
        self.submit_delay_ms
    }

    pub fn contact_email(&self) -> &str {
        &self.contact_email
    }

    pub fn company_name(&self) -> &str {
        &self.company_name
    }

    /// `mailto:` link for the contact address
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.contact_email)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            header_offset_px: HEADER_OFFSET_PX,
            scroll_threshold_px: SCROLL_THRESHOLD_PX,
            submit_delay_ms: SUBMIT_DELAY_MS,
            contact_email: CONTACT_EMAIL.to_string(),
            company_name: COMPANY_NAME.to_string(),
        }
    }
}

/// Makes `config` available to every descendant component
pub fn provide_site_config(config: SiteConfig) {
    provide_context(config);
}

/// Reads the site configuration from context, or the defaults
pub fn use_site_config() -> SiteConfig {
    use_context::<SiteConfig>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;

    #[test]
    fn test_default_values() {
        let config = SiteConfig::default();
        assert_eq!(config.header_offset_px(), 85.0);
        assert_eq!(config.scroll_threshold_px(), 20.0);
        assert_eq!(config.submit_delay_ms(), 1_000);
        assert_eq!(config.contact_email(), "nexa.advisory9@gmail.com");
        assert_eq!(config.company_name(), "Nexa Advisory");
    }

    #[test]
    fn test_mailto() {
        let config = SiteConfig::default();
        assert_eq!(config.mailto(), "mailto:nexa.advisory9@gmail.com");
    }

    #[test]
    fn test_new_accepts_valid_values() -> Result<()> {
        let config = SiteConfig::new(0.0, 0.0, 0, "a@b", "X")?;
        assert_eq!(config.header_offset_px(), 0.0);
        assert_eq!(config.submit_delay_ms(), 0);
        Ok(())
    }

    #[test]
    fn test_new_rejects_non_finite_offset() {
        let result = SiteConfig::new(f64::NAN, 20.0, 1_000, CONTACT_EMAIL, COMPANY_NAME);
        assert!(matches!(result, Err(UiError::InvalidConfig(_))));

        let result = SiteConfig::new(f64::INFINITY, 20.0, 1_000, CONTACT_EMAIL, COMPANY_NAME);
        assert!(matches!(result, Err(UiError::InvalidConfig(_))));
    }

    #[test]
    fn test_new_rejects_negative_threshold() {
        let result = SiteConfig::new(85.0, -5.0, 1_000, CONTACT_EMAIL, COMPANY_NAME);
        assert!(matches!(result, Err(UiError::InvalidConfig(msg)) if msg.contains("scroll threshold")));
    }

    #[test]
    fn test_new_rejects_blank_company() {
        let result = SiteConfig::new(85.0, 20.0, 1_000, CONTACT_EMAIL, "   ");
        assert!(matches!(result, Err(UiError::InvalidConfig(msg)) if msg.contains("company")));
    }

    #[test]
    fn test_use_site_config_without_context_falls_back() {
        let owner = Owner::new();
        owner.with(|| {
            assert_eq!(use_site_config(), SiteConfig::default());
        });
    }

    #[test]
    fn test_use_site_config_reads_context() -> Result<()> {
        let custom = SiteConfig::new(40.0, 5.0, 10, "ops@example.com", "Example")?;
        let owner = Owner::new();
        owner.with(|| {
            provide_site_config(custom.clone());
            assert_eq!(use_site_config(), custom);
        });
        Ok(())
    }
}
