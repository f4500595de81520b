use super::*;

fn valid_signup() -> SignupForm {
    SignupForm {
        username: "dev".to_owned(),
        email: "dev@example.com".to_owned(),
        password: "Aa1aaaaa".to_owned(),
        confirm_password: "Aa1aaaaa".to_owned(),
        agreed_to_terms: true,
    }
}

// =============================================================
// Login validation
// =============================================================

#[test]
fn login_validate_always_passes() {
    assert_eq!(LoginForm::default().validate(), Ok(()));

    let form = LoginForm {
        email: "dev@example.com".to_owned(),
        password: "x".to_owned(),
    };
    assert_eq!(form.validate(), Ok(()));
}

// =============================================================
// Signup validation precedence
// =============================================================

#[test]
fn signup_valid_password_passes() {
    assert_eq!(valid_signup().validate(), Ok(()));
}

#[test]
fn signup_mismatch_wins_over_everything() {
    // The confirm field differs AND the password violates every
    // strength rule; mismatch must still be the reported reason.
    let form = SignupForm {
        password: "x".to_owned(),
        confirm_password: "y".to_owned(),
        agreed_to_terms: false,
        ..valid_signup()
    };
    assert_eq!(form.validate(), Err(ValidationReason::PasswordMismatch));
}

#[test]
fn signup_too_short_wins_over_character_classes() {
    let form = SignupForm {
        password: "aaaa".to_owned(),
        confirm_password: "aaaa".to_owned(),
        ..valid_signup()
    };
    assert_eq!(form.validate(), Err(ValidationReason::PasswordTooShort));
}

#[test]
fn signup_missing_uppercase() {
    let form = SignupForm {
        password: "aa1aaaaa".to_owned(),
        confirm_password: "aa1aaaaa".to_owned(),
        ..valid_signup()
    };
    assert_eq!(
        form.validate(),
        Err(ValidationReason::PasswordMissingUppercase)
    );
}

#[test]
fn signup_missing_lowercase() {
    let form = SignupForm {
        password: "AA1AAAAA".to_owned(),
        confirm_password: "AA1AAAAA".to_owned(),
        ..valid_signup()
    };
    assert_eq!(
        form.validate(),
        Err(ValidationReason::PasswordMissingLowercase)
    );
}

#[test]
fn signup_missing_digit() {
    let form = SignupForm {
        password: "Aaaaaaaa".to_owned(),
        confirm_password: "Aaaaaaaa".to_owned(),
        ..valid_signup()
    };
    assert_eq!(form.validate(), Err(ValidationReason::PasswordMissingDigit));
}

#[test]
fn signup_terms_checked_last() {
    let form = SignupForm {
        agreed_to_terms: false,
        ..valid_signup()
    };
    assert_eq!(form.validate(), Err(ValidationReason::TermsNotAccepted));
}

// =============================================================
// Submission gate
// =============================================================

#[test]
fn submission_gate_default_idle() {
    let gate = SubmissionGate::default();
    assert!(!gate.is_pending());
}

#[test]
fn submission_gate_second_begin_while_pending_is_refused() {
    let mut gate = SubmissionGate::default();
    assert!(gate.try_begin());
    assert!(gate.is_pending());

    // A second submit while the first is in flight must not start
    // another request.
    assert!(!gate.try_begin());
    assert!(gate.is_pending());
}

#[test]
fn submission_gate_finish_rearms() {
    let mut gate = SubmissionGate::default();
    assert!(gate.try_begin());
    gate.finish();
    assert!(!gate.is_pending());
    assert!(gate.try_begin());
}

// =============================================================
// Requirement checklist + messages
// =============================================================

#[test]
fn password_requirements_track_each_rule() {
    let mut form = valid_signup();
    assert!(form.password_requirements().iter().all(|(met, _)| *met));

    form.password = "short".to_owned();
    let reqs = form.password_requirements();
    assert!(!reqs[0].0); // length
    assert!(!reqs[1].0); // uppercase
    assert!(reqs[2].0); // lowercase
    assert!(!reqs[3].0); // digit
}

#[test]
fn reasons_map_to_user_facing_messages() {
    assert_eq!(
        ValidationReason::PasswordMismatch.message(),
        "Passwords do not match. Please try again."
    );
    assert_eq!(ValidationReason::PasswordTooShort.title(), "Weak Password");
    assert_eq!(
        ValidationReason::TermsNotAccepted.message(),
        "Please agree to the terms and conditions."
    );
}
