//! Input validation for user records.
//!
//! Field constraints are declared with [`garde`] on the input structs
//! ([`Profile`], [`Password`]) and collected, together with the
//! uniqueness checks that need a database, into [`ValidationErrors`].

use std::fmt;

use garde::Validate;

/// Maximum length of a display name, in characters.
pub const NAME_MAX_CHARS: usize = 127;
/// Maximum length of an email address, in bytes.
pub const EMAIL_MAX_LEN: usize = 255;
/// Maximum length of a handle, in characters.
pub const HANDLE_MAX_CHARS: usize = 15;
/// Minimum length of a password, in characters.
pub const PASSWORD_MIN_CHARS: usize = 6;
/// Longest accepted password, in bytes.
pub const PASSWORD_MAX_BYTES: usize = 72;
/// Maximum length of a dweed body, in characters.
pub const DWEED_MAX_CHARS: usize = 140;

/// A single failed constraint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Ordered collection of field-level validation failures.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Append every failure from a `garde` report.
    pub fn extend_report(&mut self, report: garde::Report) {
        for (path, error) in report.iter() {
            self.add(path.to_string(), error.message());
        }
    }

    /// Run the declared constraints of `value` and record any failures.
    pub fn check(&mut self, value: &impl Validate<Context = ()>) {
        if let Err(report) = value.validate() {
            self.extend_report(report);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// Messages recorded against `field`, in the order they were added.
    pub fn on(&self, field: &str) -> Vec<&str> {
        self.errors
            .iter()
            .filter(|e| e.field == field)
            .map(|e| e.message.as_str())
            .collect()
    }

    pub fn has(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    /// `Ok(())` when nothing failed.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{} {}", e.field, e.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// The public, editable attributes of a user.
#[derive(Clone, Debug, Default, PartialEq, Eq, Validate)]
pub struct Profile {
    #[garde(custom(present), length(chars, max = 127))]
    pub name: String,
    #[garde(
        custom(present),
        length(max = 255),
        pattern(r"^[A-Za-z0-9_+\-.]+@[A-Za-z0-9\-.]+\.[A-Za-z]+$")
    )]
    pub email: String,
    #[garde(custom(present), length(chars, max = 15))]
    pub handle: String,
}

impl Profile {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        handle: impl Into<String>,
    ) -> Self {
        Profile {
            name: name.into(),
            email: email.into(),
            handle: handle.into(),
        }
    }

    /// Email in the form it is stored and compared in.
    pub fn normalized_email(&self) -> String {
        normalize_email(&self.email)
    }

    /// Handle in the form it is compared in.
    pub fn handle_key(&self) -> String {
        handle_key(&self.handle)
    }
}

/// A new password together with its confirmation.
#[derive(Clone, PartialEq, Eq, Validate)]
pub struct Password {
    #[garde(custom(present), length(chars, min = 6), custom(within_max_bytes))]
    pub password: String,
    #[garde(matches(password))]
    pub password_confirmation: String,
}

impl Password {
    pub fn new(password: impl Into<String>, confirmation: impl Into<String>) -> Self {
        Password {
            password: password.into(),
            password_confirmation: confirmation.into(),
        }
    }

    /// Interpret a password form where leaving both fields empty means
    /// "keep the current password".
    pub fn from_form(password: &str, confirmation: &str) -> Option<Self> {
        if password.is_empty() && confirmation.is_empty() {
            None
        } else {
            Some(Password::new(password, confirmation))
        }
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Password").finish_non_exhaustive()
    }
}

/// Body of a new dweed.
#[derive(Clone, Debug, PartialEq, Eq, Validate)]
pub struct DweedBody {
    #[garde(custom(present), length(chars, max = 140))]
    pub body: String,
}

pub fn normalize_email(email: &str) -> String {
    email.to_lowercase()
}

pub fn handle_key(handle: &str) -> String {
    handle.to_lowercase()
}

fn present(value: &str, _: &()) -> garde::Result {
    if value.trim().is_empty() {
        return Err(garde::Error::new("can't be blank"));
    }
    Ok(())
}

fn within_max_bytes(value: &str, _: &()) -> garde::Result {
    if value.len() > PASSWORD_MAX_BYTES {
        return Err(garde::Error::new(format!(
            "is too long (maximum is {PASSWORD_MAX_BYTES} bytes)"
        )));
    }
    Ok(())
}
