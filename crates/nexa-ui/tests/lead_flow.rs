//! Integration tests for the assessment form through the public API
//!
//! These tests drive the same transitions the form section performs:
//! input events, submit, the delayed completion, then reset.

use nexa_ui::config::SiteConfig;
use nexa_ui::models::{
    Challenge, FormPhase, LeadField, LeadForm, LeadFormError, PortfolioSize,
};

fn visitor_fills_form(form: &mut LeadForm) -> Result<(), LeadFormError> {
    form.update_field(LeadField::Name, "Dana Whitfield")?;
    form.update_field(LeadField::Email, "dana@whitfield-pm.com")?;
    form.update_field(LeadField::Units, PortfolioSize::OneFiftyToThreeHundred.value())?;
    form.update_field(LeadField::Challenge, Challenge::Staffing.value())?;
    Ok(())
}

#[test]
fn test_visitor_journey_end_to_end() -> Result<(), LeadFormError> {
    let mut form = LeadForm::new();

    // Premature submit is blocked by the first empty field
    assert_eq!(
        form.submit(),
        Err(LeadFormError::MissingField(LeadField::Name))
    );

    visitor_fills_form(&mut form)?;
    form.submit()?;
    assert_eq!(form.phase(), FormPhase::Submitting);

    // Timer fires
    form.complete()?;
    assert_eq!(form.phase(), FormPhase::Submitted);
    assert_eq!(form.draft().email, "dana@whitfield-pm.com");
    let submission = form.draft().submission()?;
    assert_eq!(submission.units, PortfolioSize::OneFiftyToThreeHundred);
    assert_eq!(submission.challenge, Challenge::Staffing);

    // Start new assessment
    form.reset()?;
    assert_eq!(form.phase(), FormPhase::Editing);
    assert_eq!(form.draft().name, "Dana Whitfield");
    Ok(())
}

#[test]
fn test_late_completion_after_reset_is_rejected() -> Result<(), LeadFormError> {
    let mut form = LeadForm::new();
    visitor_fills_form(&mut form)?;
    form.submit()?;
    form.complete()?;
    form.reset()?;

    // A stale timer firing now must not flip the form back to submitted
    assert!(form.complete().is_err());
    assert_eq!(form.phase(), FormPhase::Editing);
    Ok(())
}

#[test]
fn test_submission_logged_as_json() -> Result<(), Box<dyn std::error::Error>> {
    let mut form = LeadForm::new();
    visitor_fills_form(&mut form)?;

    let json = serde_json::to_value(form.draft().submission()?)?;
    assert_eq!(json["name"], "Dana Whitfield");
    assert_eq!(json["units"], "150-300");
    assert_eq!(json["challenge"], "Staffing");
    Ok(())
}

#[test]
fn test_default_config_matches_page_constants() {
    let config = SiteConfig::default();
    assert_eq!(config.submit_delay_ms(), 1_000);
    assert_eq!(config.header_offset_px(), 85.0);
    assert_eq!(config.mailto(), "mailto:nexa.advisory9@gmail.com");
}
