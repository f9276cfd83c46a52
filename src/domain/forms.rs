//! Validation of the student and account forms.
//!
//! Every error's `Display` is the message shown back on the form.

use serde::Deserialize;
use thiserror::Error as ThisError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ThisError)]
pub enum FormError {
    #[error("All fields are required")]
    SignupFieldsMissing,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Email already registered")]
    EmailTaken,

    #[error("Email and password required")]
    SigninFieldsMissing,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("All fields required")]
    StudentFieldsMissing,

    #[error("Registration number must be unique")]
    RegNoTaken,
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StudentForm {
    pub name: String,
    pub email: String,
    pub reg_no: String,
    pub department: String,
}

/// Trimmed, normalised student fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    pub name: String,
    pub email: String,
    pub reg_no: String,
    pub department: String,
}

impl StudentForm {
    pub fn validate(&self) -> Result<NewStudent, FormError> {
        let student = NewStudent {
            name: self.name.trim().to_string(),
            email: normalize_email(&self.email),
            reg_no: self.reg_no.trim().to_string(),
            department: self.department.trim().to_string(),
        };
        let any_blank = [
            &student.name,
            &student.email,
            &student.reg_no,
            &student.department,
        ]
        .iter()
        .any(|f| f.is_empty());
        if any_blank {
            return Err(FormError::StudentFieldsMissing);
        }
        Ok(student)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Validated signup; the password is still plaintext here and must be hashed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub email: String,
    pub password: String,
}

impl SignupForm {
    pub fn validate(&self) -> Result<NewAccount, FormError> {
        if self.name.trim().is_empty()
            || self.email.trim().is_empty()
            || self.password.is_empty()
            || self.confirm_password.is_empty()
        {
            return Err(FormError::SignupFieldsMissing);
        }
        if self.password != self.confirm_password {
            return Err(FormError::PasswordMismatch);
        }
        Ok(NewAccount {
            email: normalize_email(&self.email),
            password: self.password.clone(),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SigninForm {
    pub email: String,
    pub password: String,
}

impl SigninForm {
    /// Returns the normalised email and the raw password.
    pub fn validate(&self) -> Result<(String, &str), FormError> {
        if self.email.trim().is_empty() || self.password.is_empty() {
            return Err(FormError::SigninFieldsMissing);
        }
        Ok((normalize_email(&self.email), self.password.as_str()))
    }
}
