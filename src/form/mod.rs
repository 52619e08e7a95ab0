//! Validation des champs du formulaire de contact.
//!
//! Chaque champ porte un [`FieldState`] explicite ; le rendu en classes CSS se
//! fait séparément via [`FieldPresentation`].

mod error;
mod rules;
mod types;
mod validator;

pub use error::FormError;
pub use rules::{
    FieldCheck, MIN_TEXT_CHARS, PHONE_DIGITS, check_field, is_email_shaped, normalize_phone,
};
pub use types::{Field, FieldId, FieldPresentation, FieldState, ValidationFailure};
pub use validator::FormValidator;

#[cfg(test)]
mod tests;
