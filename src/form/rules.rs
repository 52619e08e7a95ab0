use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use super::types::{FieldId, ValidationFailure};

pub const MIN_TEXT_CHARS: usize = 8;
/// Règle métier locale : numéro national sans indicatif.
pub const PHONE_DIGITS: usize = 9;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Résultat d'une règle : valeur éventuellement réécrite (téléphone) + échec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldCheck<'a> {
    pub value: Cow<'a, str>,
    pub failure: Option<ValidationFailure>,
}

impl FieldCheck<'_> {
    pub fn is_ok(&self) -> bool {
        self.failure.is_none()
    }
}

/// Applique la règle "requis" puis la règle propre au champ.
///
/// La règle spécifique est toujours évaluée et son message remplace celui du
/// contrôle "requis".
pub fn check_field(id: FieldId, value: &str, required: bool) -> FieldCheck<'_> {
    let mut failure = None;
    let mut value = Cow::Borrowed(value);

    if required && value.trim().is_empty() {
        failure = Some(ValidationFailure::Required);
    }

    match id {
        FieldId::Name | FieldId::Empresa | FieldId::EmpresaGps => {
            if value.trim().chars().count() < MIN_TEXT_CHARS {
                failure = Some(ValidationFailure::TooShort);
            }
        }
        FieldId::Number => {
            let digits = normalize_phone(&value);
            if digits.len() != PHONE_DIGITS {
                failure = Some(ValidationFailure::Phone);
            }
            if digits != value {
                value = Cow::Owned(digits);
            }
        }
        FieldId::Email => {
            if !is_email_shaped(&value) {
                failure = Some(ValidationFailure::Email);
            }
        }
        FieldId::CampoFormulario => {
            if value.trim().is_empty() {
                failure = Some(ValidationFailure::ServiceMissing);
            }
        }
    }

    FieldCheck { value, failure }
}

/// Garde uniquement les chiffres ASCII, tronqués à [`PHONE_DIGITS`].
pub fn normalize_phone(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_digit)
        .take(PHONE_DIGITS)
        .collect()
}

/// `local@domaine.tld` sans espace : au moins un `@` et un `.` après lui.
pub fn is_email_shaped(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}
