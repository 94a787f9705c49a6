use super::*;

fn filled() -> ContactForm {
    let mut form = ContactForm::new();
    form.set_name("Ada");
    form.set_email("ada@example.com");
    form.set_message("hello");
    form
}

#[test]
fn starts_idle_and_empty() {
    let form = ContactForm::new();
    assert_eq!(form.phase(), FormPhase::Idle);
    assert_eq!(form.fields(), &FormFields::default());
    assert_eq!(form.error_message(), None);
}

#[test]
fn missing_field_wins_over_email_check() {
    let mut form = ContactForm::new();
    form.set_email("a@b.com");
    form.set_message("hi");
    form.submit(TimeMs(0));

    assert_eq!(form.phase(), FormPhase::Invalid(FormError::MissingFields));
    assert_eq!(
        form.error_message().as_deref(),
        Some("Please fill in all fields")
    );
    // Fields are retained for correction.
    assert_eq!(form.fields().email, "a@b.com");
    assert_eq!(form.fields().message, "hi");
}

#[test]
fn malformed_email_is_reported() {
    let mut form = ContactForm::new();
    form.set_name("A");
    form.set_email("not-an-email");
    form.set_message("hi");
    form.submit(TimeMs(0));

    assert_eq!(form.phase(), FormPhase::Invalid(FormError::InvalidEmail));
    assert_eq!(
        form.error_message().as_deref(),
        Some("Please enter a valid email address")
    );
}

#[test]
fn successful_flow_clears_fields_on_submitted() {
    let mut form = filled();
    form.submit(TimeMs(100));
    assert_eq!(
        form.phase(),
        FormPhase::Submitting {
            deadline: TimeMs(100 + SUBMIT_LATENCY_MS)
        }
    );

    // Just before the deadline nothing changes.
    form.tick(TimeMs(100 + SUBMIT_LATENCY_MS - 1));
    assert!(matches!(form.phase(), FormPhase::Submitting { .. }));
    assert_eq!(form.fields().name, "Ada");

    form.tick(TimeMs(100 + SUBMIT_LATENCY_MS));
    assert_eq!(form.phase(), FormPhase::Submitted);
    assert_eq!(form.fields(), &FormFields::default());
}

#[test]
fn resubmit_in_flight_is_a_noop() {
    let mut form = filled();
    form.submit(TimeMs(0));
    let phase = form.phase();

    form.submit(TimeMs(700));
    // Same deadline: no second timer started.
    assert_eq!(form.phase(), phase);
}

#[test]
fn fields_lock_while_submitting() {
    let mut form = filled();
    form.submit(TimeMs(0));
    form.set_name("Mallory");
    form.set_email("m@evil.example");
    form.set_message("intercepted");
    assert_eq!(form.fields().name, "Ada");
    assert_eq!(form.fields().email, "ada@example.com");
    assert_eq!(form.fields().message, "hello");
}

#[test]
fn reset_only_acts_from_submitted() {
    let mut form = filled();
    form.reset();
    assert_eq!(form.phase(), FormPhase::Idle);
    assert_eq!(form.fields().name, "Ada");

    form.submit(TimeMs(0));
    form.tick(TimeMs(SUBMIT_LATENCY_MS));
    assert_eq!(form.phase(), FormPhase::Submitted);

    form.reset();
    assert_eq!(form.phase(), FormPhase::Idle);
    assert_eq!(form.fields(), &FormFields::default());
}

#[test]
fn invalid_attempt_remains_editable() {
    let mut form = ContactForm::new();
    form.submit(TimeMs(0));
    assert_eq!(form.phase(), FormPhase::Invalid(FormError::MissingFields));

    // Correct the fields and resubmit.
    form.set_name("Ada");
    form.set_email("ada@example.com");
    form.set_message("hello");
    form.submit(TimeMs(10));
    assert!(matches!(form.phase(), FormPhase::Submitting { .. }));
}

#[test]
fn email_shape_accepts_permissive_addresses() {
    for ok in ["a@b.com", "a@b.c", "a.b@c.d", "a@b..c", "x@y.z.w"] {
        assert!(email_shape_ok(ok), "{ok}");
    }
}

#[test]
fn email_shape_rejects_malformed_addresses() {
    for bad in [
        "", "a", "a@b", "@b.c", "a@.b", "a@b.", "a@@b.c", "a@b@c.d", "a b@c.d", "a@b .c",
    ] {
        assert!(!email_shape_ok(bad), "{bad}");
    }
}
