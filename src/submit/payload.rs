use std::fmt;

use chrono::{DateTime, TimeZone};

use crate::form::{FieldId, FormValidator};

/// Forme de `Date.toLocaleString()` en pt-BR : `19/10/2026, 14:03:22`.
pub const SUBMISSION_DATE_FORMAT: &str = "%d/%m/%Y, %H:%M:%S";

/// Paramètres du template e-mail, construits au moment de l'envoi.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionPayload {
    pub subject: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub company: String,
    pub location: String,
    pub service: String,
    pub submission_date: String,
}

impl SubmissionPayload {
    pub fn from_form<Tz>(form: &FormValidator, submitted_at: &DateTime<Tz>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let name = form.value(FieldId::Name).to_string();
        Self {
            subject: format!("Novo contato de {name}"),
            phone: form.value(FieldId::Number).to_string(),
            email: form.value(FieldId::Email).to_string(),
            company: form.value(FieldId::Empresa).to_string(),
            location: form.value(FieldId::EmpresaGps).to_string(),
            service: form.value(FieldId::CampoFormulario).to_string(),
            submission_date: format_submission_date(submitted_at),
            name,
        }
    }
}

pub fn format_submission_date<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    at.format(SUBMISSION_DATE_FORMAT).to_string()
}
