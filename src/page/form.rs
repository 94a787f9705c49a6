use crate::foundation::core::TimeMs;

/// Fixed latency of the simulated submission request.
pub const SUBMIT_LATENCY_MS: u64 = 1500;

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error, serde::Serialize)]
/// Validation outcomes. These are ordinary machine states surfaced to the
/// user, not failures of the system, so they live in [`FormPhase`] rather
/// than in a `Result`.
pub enum FormError {
    /// At least one field is empty.
    #[error("Please fill in all fields")]
    MissingFields,
    /// The email does not look like `local@domain.tld`.
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// The three user-entered fields.
pub struct FormFields {
    /// Sender name.
    pub name: String,
    /// Sender email address.
    pub email: String,
    /// Message body.
    pub message: String,
}

impl FormFields {
    fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
/// Submission lifecycle of the contact form.
pub enum FormPhase {
    /// Editable, nothing in flight.
    Idle,
    /// Editable; the last submit attempt failed validation.
    Invalid(FormError),
    /// Simulated request in flight; fields locked, resubmission disallowed.
    Submitting {
        /// When the simulated request completes.
        deadline: TimeMs,
    },
    /// Request completed; fields cleared, success view shown.
    Submitted,
}

/// Contact form state machine.
///
/// The submission is a deliberate simulation boundary: a fixed-latency
/// delayed transition that always succeeds. A real backend would map its
/// outcome onto `Submitted` or a failure state reachable from `Submitting`,
/// with retry by explicit resubmission only.
pub struct ContactForm {
    fields: FormFields,
    phase: FormPhase,
}

impl ContactForm {
    /// New form in `Idle` with empty fields.
    pub fn new() -> Self {
        Self {
            fields: FormFields::default(),
            phase: FormPhase::Idle,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Current field values.
    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    /// The validation message to display, if the last attempt was invalid.
    pub fn error_message(&self) -> Option<String> {
        match self.phase {
            FormPhase::Invalid(err) => Some(err.to_string()),
            _ => None,
        }
    }

    fn editable(&self) -> bool {
        matches!(self.phase, FormPhase::Idle | FormPhase::Invalid(_))
    }

    /// Update the name field; ignored while fields are locked.
    pub fn set_name(&mut self, value: impl Into<String>) {
        if self.editable() {
            self.fields.name = value.into();
        }
    }

    /// Update the email field; ignored while fields are locked.
    pub fn set_email(&mut self, value: impl Into<String>) {
        if self.editable() {
            self.fields.email = value.into();
        }
    }

    /// Update the message field; ignored while fields are locked.
    pub fn set_message(&mut self, value: impl Into<String>) {
        if self.editable() {
            self.fields.message = value.into();
        }
    }

    /// Attempt submission at `now`.
    ///
    /// Validation runs synchronously, rules in order, first failure wins;
    /// on failure the fields are retained and the machine stays editable.
    /// On success the machine enters `Submitting` with a fixed deadline.
    /// While `Submitting` (or already `Submitted`) this is a no-op: a second
    /// attempt neither changes state nor starts another timer.
    pub fn submit(&mut self, now: TimeMs) {
        match self.phase {
            FormPhase::Submitting { .. } | FormPhase::Submitted => return,
            FormPhase::Idle | FormPhase::Invalid(_) => {}
        }

        if let Err(err) = validate(&self.fields) {
            tracing::debug!(%err, "form submit rejected");
            self.phase = FormPhase::Invalid(err);
            return;
        }

        tracing::debug!("form submit accepted");
        self.phase = FormPhase::Submitting {
            deadline: now.saturating_add(SUBMIT_LATENCY_MS),
        };
    }

    /// Advance the simulated request.
    ///
    /// In `Submitting`, once `now` reaches the deadline the machine
    /// unconditionally transitions to `Submitted` and clears every field at
    /// that exact transition.
    pub fn tick(&mut self, now: TimeMs) {
        if let FormPhase::Submitting { deadline } = self.phase {
            if now >= deadline {
                self.fields.clear();
                self.phase = FormPhase::Submitted;
                tracing::debug!("form submitted");
            }
        }
    }

    /// The "send another message" action: from `Submitted`, return to `Idle`
    /// with all fields empty. A no-op in any other phase.
    pub fn reset(&mut self) {
        if self.phase == FormPhase::Submitted {
            self.fields.clear();
            self.phase = FormPhase::Idle;
        }
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

fn validate(fields: &FormFields) -> Result<(), FormError> {
    if fields.name.is_empty() || fields.email.is_empty() || fields.message.is_empty() {
        return Err(FormError::MissingFields);
    }
    if !email_shape_ok(&fields.email) {
        return Err(FormError::InvalidEmail);
    }
    Ok(())
}

/// Permissive address-shape check, equivalent to `^[^\s@]+@[^\s@]+\.[^\s@]+$`:
/// no whitespace, exactly one `@` with something before it, and a `.` after
/// the `@` with at least one character on each side.
pub fn email_shape_ok(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

#[cfg(test)]
#[path = "../../tests/unit/page/form.rs"]
mod tests;
