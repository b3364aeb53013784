//! Lead-capture form model
//!
//! The assessment form owns a [`LeadDraft`] and a [`FormPhase`]:
//!
//! ```text
//! Editing --submit()--> Submitting --complete()--> Submitted --reset()--> Editing
//! ```
//!
//! `submit` is only reachable with all four fields filled and an email-shaped
//! address. Resetting keeps the entered values.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Portfolio size buckets offered by the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PortfolioSize {
    #[serde(rename = "<50")]
    UnderFifty,
    #[serde(rename = "50-150")]
    FiftyToOneFifty,
    #[serde(rename = "150-300")]
    OneFiftyToThreeHundred,
    #[serde(rename = "300+")]
    OverThreeHundred,
}

impl PortfolioSize {
    pub const ALL: [Self; 4] = [
        Self::UnderFifty,
        Self::FiftyToOneFifty,
        Self::OneFiftyToThreeHundred,
        Self::OverThreeHundred,
    ];

    /// Value submitted by the `<option>`
    pub const fn value(self) -> &'static str {
        match self {
            Self::UnderFifty => "<50",
            Self::FiftyToOneFifty => "50-150",
            Self::OneFiftyToThreeHundred => "150-300",
            Self::OverThreeHundred => "300+",
        }
    }

    /// Text shown to the visitor
    pub const fn label(self) -> &'static str {
        match self {
            Self::UnderFifty => "Less than 50 Units",
            Self::FiftyToOneFifty => "50 - 150 Units",
            Self::OneFiftyToThreeHundred => "150 - 300 Units",
            Self::OverThreeHundred => "300+ Units",
        }
    }
}

/// Primary operational challenge offered by the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Challenge {
    Vacancy,
    Communication,
    Maintenance,
    Staffing,
}

impl Challenge {
    pub const ALL: [Self; 4] = [
        Self::Vacancy,
        Self::Communication,
        Self::Maintenance,
        Self::Staffing,
    ];

    pub const fn value(self) -> &'static str {
        match self {
            Self::Vacancy => "Vacancy",
            Self::Communication => "Communication",
            Self::Maintenance => "Maintenance",
            Self::Staffing => "Staffing",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Vacancy => "Vacancy / Turnover Costs",
            Self::Communication => "Communication Overload",
            Self::Maintenance => "Maintenance Coordination",
            Self::Staffing => "Staff Inefficiency",
        }
    }
}

macro_rules! option_from_str {
    ($ty:ty) => {
        impl FromStr for $ty {
            type Err = LeadFormError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .into_iter()
                    .find(|option| option.value() == s)
                    .ok_or_else(|| LeadFormError::UnknownOption(s.to_string()))
            }
        }
    };
}

option_from_str!(PortfolioSize);
option_from_str!(Challenge);

/// The four inputs of the assessment form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeadField {
    Name,
    Email,
    Units,
    Challenge,
}

impl LeadField {
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Units, Self::Challenge];

    /// `name`/`id` attribute of the input element
    pub const fn input_name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Units => "units",
            Self::Challenge => "challenge",
        }
    }
}

impl fmt::Display for LeadField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.input_name())
    }
}

/// In-progress form values
///
/// Select fields hold the raw option value; an empty string means the
/// placeholder option is still selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadDraft {
    pub name: String,
    pub email: String,
    pub units: String,
    pub challenge: String,
}

impl LeadDraft {
    /// Current value of one field
    pub fn get(&self, field: LeadField) -> &str {
        match field {
            LeadField::Name => &self.name,
            LeadField::Email => &self.email,
            LeadField::Units => &self.units,
            LeadField::Challenge => &self.challenge,
        }
    }

    /// Overwrites one field, leaving the other three untouched
    pub fn set(&mut self, field: LeadField, value: impl Into<String>) {
        let value = value.into();
        match field {
            LeadField::Name => self.name = value,
            LeadField::Email => self.email = value,
            LeadField::Units => self.units = value,
            LeadField::Challenge => self.challenge = value,
        }
    }

    /// First required field that is still empty, in form order.
    ///
    /// Matches the browser's `required` check: whitespace counts as a value.
    pub fn first_missing(&self) -> Option<LeadField> {
        LeadField::ALL
            .into_iter()
            .find(|field| self.get(*field).is_empty())
    }

    /// Checks what the browser checks on `required` and `type="email"` inputs.
    ///
    /// # Errors
    ///
    /// Returns [`LeadFormError::MissingField`] for the first empty field, or
    /// [`LeadFormError::InvalidEmail`] if the address has no `local@domain`
    /// shape.
    pub fn validate(&self) -> Result<(), LeadFormError> {
        if let Some(field) = self.first_missing() {
            return Err(LeadFormError::MissingField(field));
        }
        if !is_email_shaped(&self.email) {
            return Err(LeadFormError::InvalidEmail(self.email.clone()));
        }
        Ok(())
    }

    /// Typed record of the draft, as logged on completion.
    ///
    /// # Errors
    ///
    /// Returns [`LeadFormError::UnknownOption`] if a select holds a value
    /// none of its options offer.
    pub fn submission(&self) -> Result<LeadSubmission, LeadFormError> {
        Ok(LeadSubmission {
            name: self.name.clone(),
            email: self.email.clone(),
            units: self.units.parse()?,
            challenge: self.challenge.parse()?,
        })
    }
}

/// A completed assessment request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeadSubmission {
    pub name: String,
    pub email: String,
    pub units: PortfolioSize,
    pub challenge: Challenge,
}

fn is_email_shaped(email: &str) -> bool {
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

/// Where the form is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Editing,
    Submitting,
    Submitted,
}

impl fmt::Display for FormPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Editing => write!(f, "editing"),
            Self::Submitting => write!(f, "submitting"),
            Self::Submitted => write!(f, "submitted"),
        }
    }
}

/// Errors from the lead form state machine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LeadFormError {
    #[error("Required field is empty: {0}")]
    MissingField(LeadField),
    #[error("Not an email address: {0}")]
    InvalidEmail(String),
    #[error("Unknown option: {0}")]
    UnknownOption(String),
    #[error("Cannot {action} while {phase}")]
    InvalidTransition {
        action: &'static str,
        phase: FormPhase,
    },
}

/// Draft plus lifecycle phase, owned by the assessment section
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadForm {
    draft: LeadDraft,
    phase: FormPhase,
}

impl LeadForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &LeadDraft {
        &self.draft
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// True once the simulated submission has completed
    pub fn is_submitted(&self) -> bool {
        self.phase == FormPhase::Submitted
    }

    /// Overwrites one field of the draft.
    ///
    /// # Errors
    ///
    /// Returns [`LeadFormError::InvalidTransition`] once submitted; the draft
    /// is read-only until [`LeadForm::reset`].
    pub fn update_field(
        &mut self,
        field: LeadField,
        value: impl Into<String>,
    ) -> Result<(), LeadFormError> {
        match self.phase {
            FormPhase::Editing | FormPhase::Submitting => {
                self.draft.set(field, value);
                Ok(())
            }
            FormPhase::Submitted => Err(LeadFormError::InvalidTransition {
                action: "edit",
                phase: self.phase,
            }),
        }
    }

    /// Starts the simulated submission.
    ///
    /// # Errors
    ///
    /// Returns an error, leaving the form in `Editing`, if a field is blank or
    /// the email is malformed. Returns [`LeadFormError::InvalidTransition`]
    /// outside `Editing`.
    pub fn submit(&mut self) -> Result<(), LeadFormError> {
        if self.phase != FormPhase::Editing {
            return Err(LeadFormError::InvalidTransition {
                action: "submit",
                phase: self.phase,
            });
        }
        self.draft.validate()?;
        self.phase = FormPhase::Submitting;
        Ok(())
    }

    /// Finishes the simulated submission after the delay elapsed.
    ///
    /// # Errors
    ///
    /// Returns [`LeadFormError::InvalidTransition`] unless `Submitting`.
    pub fn complete(&mut self) -> Result<(), LeadFormError> {
        if self.phase != FormPhase::Submitting {
            return Err(LeadFormError::InvalidTransition {
                action: "complete",
                phase: self.phase,
            });
        }
        self.phase = FormPhase::Submitted;
        Ok(())
    }

    /// Returns to editing with the previous values kept.
    ///
    /// # Errors
    ///
    /// Returns [`LeadFormError::InvalidTransition`] unless `Submitted`.
    pub fn reset(&mut self) -> Result<(), LeadFormError> {
        if self.phase != FormPhase::Submitted {
            return Err(LeadFormError::InvalidTransition {
                action: "reset",
                phase: self.phase,
            });
        }
        self.phase = FormPhase::Editing;
        Ok(())
    }
}
