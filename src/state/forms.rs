#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

/// Login form field state.
///
/// Owned by the login page; reset only by navigating away. The server
/// is authoritative for credential checks, so login has no local
/// validation rules.
#[derive(Clone, Debug, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    /// Local validation gate for login. Always passes; the server
    /// decides whether the credentials are valid.
    pub fn validate(&self) -> Result<(), ValidationReason> {
        Ok(())
    }
}

/// Signup form field state, including the terms-acceptance flag.
#[derive(Clone, Debug, Default)]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub agreed_to_terms: bool,
}

impl SignupForm {
    /// Validate the signup form before any network call.
    ///
    /// Rules run in fixed order and the first failure wins, so exactly
    /// one reason is reported per failed attempt:
    /// mismatch, length, uppercase, lowercase, digit, terms.
    pub fn validate(&self) -> Result<(), ValidationReason> {
        if self.password != self.confirm_password {
            return Err(ValidationReason::PasswordMismatch);
        }
        if self.password.chars().count() < 8 {
            return Err(ValidationReason::PasswordTooShort);
        }
        if !self.password.chars().any(|c| c.is_ascii_uppercase()) {
            return Err(ValidationReason::PasswordMissingUppercase);
        }
        if !self.password.chars().any(|c| c.is_ascii_lowercase()) {
            return Err(ValidationReason::PasswordMissingLowercase);
        }
        if !self.password.chars().any(|c| c.is_ascii_digit()) {
            return Err(ValidationReason::PasswordMissingDigit);
        }
        if !self.agreed_to_terms {
            return Err(ValidationReason::TermsNotAccepted);
        }
        Ok(())
    }

    /// Live password checklist rows shown under the password input:
    /// `(met, label)` per requirement.
    pub fn password_requirements(&self) -> [(bool, &'static str); 4] {
        let p = &self.password;
        [
            (p.chars().count() >= 8, "At least 8 characters"),
            (p.chars().any(|c| c.is_ascii_uppercase()), "One uppercase letter"),
            (p.chars().any(|c| c.is_ascii_lowercase()), "One lowercase letter"),
            (p.chars().any(|c| c.is_ascii_digit()), "One number"),
        ]
    }
}

/// Guards a form against duplicate in-flight submissions.
///
/// At most one request may be outstanding per form: `try_begin`
/// succeeds only when idle, and `finish` re-arms the gate on
/// settlement, success or failure.
#[derive(Clone, Copy, Debug, Default)]
pub struct SubmissionGate {
    pending: bool,
}

impl SubmissionGate {
    /// Claim the gate for a new submission. Returns `false` while a
    /// prior submission is still in flight.
    pub fn try_begin(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Release the gate once the submission settles.
    pub fn finish(&mut self) {
        self.pending = false;
    }

    pub fn is_pending(self) -> bool {
        self.pending
    }
}

/// Why a signup attempt was rejected locally, before any network call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationReason {
    PasswordMismatch,
    PasswordTooShort,
    PasswordMissingUppercase,
    PasswordMissingLowercase,
    PasswordMissingDigit,
    TermsNotAccepted,
}

impl ValidationReason {
    /// Toast title for this rejection.
    pub fn title(self) -> &'static str {
        match self {
            Self::PasswordMismatch => "Password Mismatch",
            Self::PasswordTooShort
            | Self::PasswordMissingUppercase
            | Self::PasswordMissingLowercase
            | Self::PasswordMissingDigit => "Weak Password",
            Self::TermsNotAccepted => "Terms Required",
        }
    }

    /// Toast description for this rejection.
    pub fn message(self) -> &'static str {
        match self {
            Self::PasswordMismatch => "Passwords do not match. Please try again.",
            Self::PasswordTooShort => "Password must be at least 8 characters long.",
            Self::PasswordMissingUppercase => {
                "Password must contain at least one uppercase letter."
            }
            Self::PasswordMissingLowercase => {
                "Password must contain at least one lowercase letter."
            }
            Self::PasswordMissingDigit => "Password must contain at least one number.",
            Self::TermsNotAccepted => "Please agree to the terms and conditions.",
        }
    }
}
