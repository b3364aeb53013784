//! Behavioral tests for the assessment form lifecycle

use crate::models::{FormPhase, LeadField, LeadForm, LeadFormError};

fn fill_all(form: &mut LeadForm) -> Result<(), LeadFormError> {
    form.update_field(LeadField::Name, "John Doe")?;
    form.update_field(LeadField::Email, "john@company.com")?;
    form.update_field(LeadField::Units, "150-300")?;
    form.update_field(LeadField::Challenge, "Communication")?;
    Ok(())
}

// ============================================================================
// FIELD UPDATE BEHAVIORS
// ============================================================================

#[test]
fn given_filled_form_when_updating_one_field_then_other_three_unchanged() -> Result<(), LeadFormError>
{
    for field in LeadField::ALL {
        // Given
        let mut form = LeadForm::new();
        fill_all(&mut form)?;
        let before = form.draft().clone();

        // When
        form.update_field(field, "changed")?;

        // Then
        for other in LeadField::ALL {
            if other == field {
                assert_eq!(form.draft().get(other), "changed");
            } else {
                assert_eq!(
                    form.draft().get(other),
                    before.get(other),
                    "updating {field} changed {other}"
                );
            }
        }
    }
    Ok(())
}

#[test]
fn given_new_form_when_mounted_then_draft_is_empty() {
    let form = LeadForm::new();
    for field in LeadField::ALL {
        assert_eq!(form.draft().get(field), "");
    }
    assert_eq!(form.phase(), FormPhase::Editing);
}

// ============================================================================
// SUBMISSION BEHAVIORS
// ============================================================================

#[test]
fn given_any_empty_field_when_submitting_then_stays_editing() -> Result<(), LeadFormError> {
    for missing in LeadField::ALL {
        // Given
        let mut form = LeadForm::new();
        fill_all(&mut form)?;
        form.update_field(missing, "")?;

        // When
        let result = form.submit();

        // Then
        assert_eq!(result, Err(LeadFormError::MissingField(missing)));
        assert_eq!(form.phase(), FormPhase::Editing);
    }
    Ok(())
}

#[test]
fn given_complete_form_when_submitting_then_enters_submitting() -> Result<(), LeadFormError> {
    let mut form = LeadForm::new();
    fill_all(&mut form)?;

    form.submit()?;

    assert_eq!(form.phase(), FormPhase::Submitting);
    assert!(!form.is_submitted(), "Submitted only after the delay");
    Ok(())
}

#[test]
fn given_submitting_when_delay_elapses_then_submitted_with_email_verbatim()
-> Result<(), LeadFormError> {
    let mut form = LeadForm::new();
    fill_all(&mut form)?;
    form.update_field(LeadField::Email, "Ops.Team+nexa@Example.co")?;
    form.submit()?;

    form.complete()?;

    assert!(form.is_submitted());
    assert_eq!(form.draft().email, "Ops.Team+nexa@Example.co");
    Ok(())
}

#[test]
fn given_submitting_when_submitting_again_then_ignored() -> Result<(), LeadFormError> {
    let mut form = LeadForm::new();
    fill_all(&mut form)?;
    form.submit()?;

    assert!(form.submit().is_err());
    assert_eq!(form.phase(), FormPhase::Submitting);
    Ok(())
}

// ============================================================================
// RESET BEHAVIORS
// ============================================================================

#[test]
fn given_submitted_when_reset_then_editing_with_values_retained() -> Result<(), LeadFormError> {
    let mut form = LeadForm::new();
    fill_all(&mut form)?;
    form.submit()?;
    form.complete()?;
    let submitted_draft = form.draft().clone();

    form.reset()?;

    assert_eq!(form.phase(), FormPhase::Editing);
    assert_eq!(form.draft(), &submitted_draft);
    Ok(())
}

#[test]
fn given_reset_form_when_resubmitting_then_cycle_repeats() -> Result<(), LeadFormError> {
    let mut form = LeadForm::new();
    fill_all(&mut form)?;
    form.submit()?;
    form.complete()?;
    form.reset()?;

    form.submit()?;
    form.complete()?;

    assert!(form.is_submitted());
    Ok(())
}

#[test]
fn given_editing_when_reset_then_rejected() {
    let mut form = LeadForm::new();
    assert!(matches!(
        form.reset(),
        Err(LeadFormError::InvalidTransition { action: "reset", .. })
    ));
}
