//! Request body validation.
//!
//! Handlers deserialize bodies into structs of `Option` fields, then run each
//! field through a `Validator`. Every failing field is reported, not just the
//! first one.

use std::str::FromStr;

use domain::Money;

use crate::error::{ApiError, FieldError};

#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<FieldError>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a "required" error when `value` is absent.
    pub fn required<T>(&mut self, field: &'static str, value: Option<T>) -> Option<T> {
        if value.is_none() {
            self.errors
                .push(FieldError::new(field, format!("{field} is a required field")));
        }
        value
    }

    /// Requires a string of at least `min` characters after trimming.
    pub fn text(
        &mut self,
        field: &'static str,
        value: Option<String>,
        min: usize,
    ) -> Option<String> {
        let value = self.required(field, value)?;
        if value.trim().chars().count() < min {
            self.errors.push(FieldError::new(
                field,
                format!("{field} must be at least {min} characters in length"),
            ));
            return None;
        }
        Some(value)
    }

    /// Requires a well-formed identifier.
    pub fn id<T: FromStr>(&mut self, field: &'static str, value: Option<String>) -> Option<T> {
        let value = self.required(field, value)?;
        match value.parse() {
            Ok(id) => Some(id),
            Err(_) => {
                self.errors
                    .push(FieldError::new(field, format!("{field} must be a valid UUID")));
                None
            }
        }
    }

    /// Requires a value strictly greater than `zero`.
    pub fn positive<T: PartialOrd>(
        &mut self,
        field: &'static str,
        value: Option<T>,
        zero: T,
    ) -> Option<T> {
        let value = self.required(field, value)?;
        if value <= zero {
            self.errors
                .push(FieldError::new(field, format!("{field} must be greater than 0")));
            return None;
        }
        Some(value)
    }

    /// Requires a positive price.
    ///
    /// The amount is rounded to cents first, so anything below half a cent is
    /// reported as not greater than 0.
    pub fn price(&mut self, field: &'static str, value: Option<f64>) -> Option<Money> {
        let value = self.required(field, value)?;
        let Some(money) = Money::from_decimal(value) else {
            self.errors
                .push(FieldError::new(field, format!("{field} is out of range")));
            return None;
        };
        self.positive(field, Some(money), Money::zero())
    }

    /// Returns the validated value, or every error collected so far.
    pub fn finish<T>(self, value: Option<T>) -> Result<T, ApiError> {
        match value {
            Some(value) if self.errors.is_empty() => Ok(value),
            _ => Err(ApiError::Validation(self.errors)),
        }
    }
}
