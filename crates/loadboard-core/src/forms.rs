// crates/loadboard-core/src/forms.rs

//! Client-side validation for the login and signup screens.
//!
//! Nothing here talks to a backend: a valid form raises a success
//! notification and navigates to the loads screen.

use crate::collab::{Navigator, Notifier, Severity};
use crate::routes::Route;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

pub const PHONE_DIGITS: usize = 11;
pub const MIN_PASSWORD_LEN: usize = 6;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Email,
    Phone,
    Password,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Password => "password",
        })
    }
}

/// Validate one field. Returns the user-visible error, or `None` if valid.
///
/// The password minimum is measured in Unicode scalar values, not UTF-16
/// code units: `"ab🚚🚚🚚🚚"` is six characters long.
pub fn validate_field(field: Field, value: &str) -> Option<&'static str> {
    match field {
        Field::Email => {
            if value.is_empty() {
                Some("Email is required.")
            } else if !EMAIL_RE.is_match(value) {
                Some("Invalid email format.")
            } else {
                None
            }
        }
        Field::Phone => {
            if value.is_empty() {
                Some("Phone number is required.")
            } else if value.len() != PHONE_DIGITS || !value.bytes().all(|b| b.is_ascii_digit()) {
                Some("Phone number must be 11 digits.")
            } else {
                None
            }
        }
        Field::Password => {
            if value.is_empty() {
                Some("Password is required.")
            } else if value.chars().count() < MIN_PASSWORD_LEN {
                Some("Password must be at least 6 characters.")
            } else {
                None
            }
        }
    }
}

/// What the phone input keeps of a keystroke: ASCII digits only, at most 11.
pub fn sanitize_phone(input: &str) -> String {
    input
        .chars()
        .filter(char::is_ascii_digit)
        .take(PHONE_DIGITS)
        .collect()
}

/// Per-field error messages currently shown under the inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors(BTreeMap<Field, &'static str>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.0.iter().map(|(f, m)| (*f, *m))
    }

    fn record(&mut self, field: Field, error: Option<&'static str>) {
        match error {
            Some(msg) => {
                self.0.insert(field, msg);
            }
            None => {
                self.0.remove(&field);
            }
        }
    }
}

/// Account role chosen at signup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Shipper,
    Driver,
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "shipper" => Ok(Role::Shipper),
            "driver" => Ok(Role::Driver),
            other => Err(format!("unknown role '{other}' (expected shipper or driver)")),
        }
    }
}

/// Validate `fields`, and on success notify and navigate to the loads screen.
fn submit(
    fields: &[(Field, &str)],
    errors: &mut FieldErrors,
    success: &str,
    notifier: &mut dyn Notifier,
    navigator: &mut dyn Navigator,
) -> Result<(), FieldErrors> {
    let mut found = FieldErrors::default();
    for (field, value) in fields {
        found.record(*field, validate_field(*field, value));
    }
    if !found.is_empty() {
        debug!(errors = found.len(), "form submission blocked");
        *errors = found.clone();
        return Err(found);
    }
    *errors = FieldErrors::default();
    notifier.notify(Severity::Success, success);
    navigator.navigate(Route::Loads);
    Ok(())
}

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    errors: FieldErrors,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        LoginForm {
            email: email.into(),
            password: password.into(),
            errors: FieldErrors::default(),
        }
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// The input lost focus: show (or clear) that field's error right away.
    pub fn blur(&mut self, field: Field) -> Option<&'static str> {
        let error = match field {
            Field::Email => validate_field(field, &self.email),
            Field::Password => validate_field(field, &self.password),
            Field::Phone => None,
        };
        self.errors.record(field, error);
        error
    }

    pub fn submit(
        &mut self,
        notifier: &mut dyn Notifier,
        navigator: &mut dyn Navigator,
    ) -> Result<(), FieldErrors> {
        submit(
            &[
                (Field::Email, self.email.as_str()),
                (Field::Password, self.password.as_str()),
            ],
            &mut self.errors,
            "Logged in successfully!",
            notifier,
            navigator,
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    pub email: String,
    phone: String,
    pub password: String,
    pub role: Role,
    errors: FieldErrors,
}

impl SignupForm {
    pub fn new(
        email: impl Into<String>,
        phone: &str,
        password: impl Into<String>,
        role: Role,
    ) -> Self {
        SignupForm {
            email: email.into(),
            phone: sanitize_phone(phone),
            password: password.into(),
            role,
            errors: FieldErrors::default(),
        }
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Phone keystroke; non-digits are dropped and the value capped at 11.
    pub fn set_phone(&mut self, input: &str) {
        self.phone = sanitize_phone(input);
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn blur(&mut self, field: Field) -> Option<&'static str> {
        let value = match field {
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Password => &self.password,
        };
        let error = validate_field(field, value);
        self.errors.record(field, error);
        error
    }

    pub fn submit(
        &mut self,
        notifier: &mut dyn Notifier,
        navigator: &mut dyn Navigator,
    ) -> Result<(), FieldErrors> {
        submit(
            &[
                (Field::Email, self.email.as_str()),
                (Field::Phone, self.phone.as_str()),
                (Field::Password, self.password.as_str()),
            ],
            &mut self.errors,
            "Signed up successfully!",
            notifier,
            navigator,
        )
    }
}
