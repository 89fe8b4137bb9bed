//! Submitted forms and their validation.
//!
//! Each form keeps the raw values a reader typed (so a page can be re-rendered
//! with them) and exposes `clean()`, a pure function returning either the
//! trimmed, validated fields or the per-field error messages.
//!
//! Missing fields deserialize as empty strings so that an incomplete
//! submission produces field errors instead of a rejected request.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

const REQUIRED: &str = "This field is required.";

/// Validation messages keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn has(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Messages for `field`; empty if the field is valid.
    pub fn get(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    /// Flags `field` as required when `value` is empty.
    fn require(&mut self, field: &str, value: &str) {
        if value.is_empty() {
            self.add(field, REQUIRED);
        }
    }

    /// Adds validator errors for fields that have no error yet.
    fn merge(&mut self, errors: &ValidationErrors) {
        for (field, errs) in errors.field_errors() {
            let field = field.to_string();
            if self.has(&field) {
                continue;
            }
            for err in errs.iter() {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value ({}).", err.code));
                self.add(&field, message);
            }
        }
    }

    fn into_result<T>(self, value: T) -> Result<T, FieldErrors> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

/// Comment form as submitted by a reader.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct CommentForm {
    #[validate(length(max = 80, message = "Ensure this value has at most 80 characters."))]
    pub name: String,

    #[validate(email(message = "Enter a valid email address."))]
    #[validate(length(max = 254, message = "Ensure this value has at most 254 characters."))]
    pub email: String,

    pub body: String,
}

/// Validated comment fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentFields {
    pub name: String,
    pub email: String,
    pub body: String,
}

impl CommentForm {
    /// Validates the form.
    ///
    /// # Rules
    ///
    /// - `name`: required, at most 80 characters
    /// - `email`: required, well-formed address, at most 254 characters
    /// - `body`: required
    ///
    /// Surrounding whitespace is stripped before validation.
    pub fn clean(&self) -> Result<CommentFields, FieldErrors> {
        let form = CommentForm {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            body: self.body.trim().to_string(),
        };

        let mut errors = FieldErrors::default();
        errors.require("name", &form.name);
        errors.require("email", &form.email);
        errors.require("body", &form.body);
        if let Err(e) = form.validate() {
            errors.merge(&e);
        }

        errors.into_result(CommentFields {
            name: form.name,
            email: form.email,
            body: form.body,
        })
    }
}

/// "Recommend this post" form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ShareForm {
    #[validate(length(max = 25, message = "Ensure this value has at most 25 characters."))]
    pub name: String,

    /// Sender address.
    #[validate(email(message = "Enter a valid email address."))]
    #[validate(length(max = 254, message = "Ensure this value has at most 254 characters."))]
    pub email: String,

    /// Recipient address.
    #[validate(email(message = "Enter a valid email address."))]
    #[validate(length(max = 254, message = "Ensure this value has at most 254 characters."))]
    pub to: String,

    pub comments: String,
}

/// Validated share fields. `comments` may be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareFields {
    pub name: String,
    pub email: String,
    pub to: String,
    pub comments: String,
}

impl ShareForm {
    /// Validates the form.
    ///
    /// # Rules
    ///
    /// - `name`: required, at most 25 characters
    /// - `email`, `to`: required, well-formed addresses, at most 254 characters
    /// - `comments`: optional
    pub fn clean(&self) -> Result<ShareFields, FieldErrors> {
        let form = ShareForm {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            to: self.to.trim().to_string(),
            comments: self.comments.trim().to_string(),
        };

        let mut errors = FieldErrors::default();
        errors.require("name", &form.name);
        errors.require("email", &form.email);
        errors.require("to", &form.to);
        if let Err(e) = form.validate() {
            errors.merge(&e);
        }

        errors.into_result(ShareFields {
            name: form.name,
            email: form.email,
            to: form.to,
            comments: form.comments,
        })
    }
}
