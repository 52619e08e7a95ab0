use std::fmt;
use std::str::FromStr;

use phf::phf_map;

use super::error::FormError;
use crate::dom;

/// Identifiants des champs du formulaire de contact (ids DOM).
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Name,
    Number,
    Email,
    Empresa,
    #[cfg_attr(feature = "with-serde", serde(rename = "empresaGPS"))]
    EmpresaGps,
    CampoFormulario,
}

const FIELD_IDS: phf::Map<&'static str, FieldId> = phf_map! {
    "name" => FieldId::Name,
    "number" => FieldId::Number,
    "email" => FieldId::Email,
    "empresa" => FieldId::Empresa,
    "empresaGPS" => FieldId::EmpresaGps,
    "campoFormulario" => FieldId::CampoFormulario,
};

impl FieldId {
    /// Ordre du document.
    pub const ALL: [FieldId; 6] = [
        FieldId::Name,
        FieldId::Number,
        FieldId::Email,
        FieldId::Empresa,
        FieldId::EmpresaGps,
        FieldId::CampoFormulario,
    ];

    pub fn dom_id(self) -> &'static str {
        match self {
            FieldId::Name => "name",
            FieldId::Number => "number",
            FieldId::Email => "email",
            FieldId::Empresa => "empresa",
            FieldId::EmpresaGps => "empresaGPS",
            FieldId::CampoFormulario => "campoFormulario",
        }
    }

    pub fn from_dom_id(id: &str) -> Result<Self, FormError> {
        FIELD_IDS
            .get(id)
            .copied()
            .ok_or_else(|| FormError::UnknownField(id.to_string()))
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl FromStr for FieldId {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_dom_id(s)
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dom_id())
    }
}

/// État visuel d'un champ. `Untouched` n'a aucune des deux classes.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldState {
    #[default]
    Untouched,
    Valid,
    Invalid,
}

/// Raison d'échec d'une règle ; chaque variante porte son message affiché.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationFailure {
    Required,
    TooShort,
    Phone,
    Email,
    ServiceMissing,
}

impl ValidationFailure {
    pub fn message(self) -> &'static str {
        match self {
            ValidationFailure::Required => "Este campo é obrigatório",
            ValidationFailure::TooShort => "Deve ter pelo menos 8 caracteres",
            ValidationFailure::Phone => "O telefone deve ter exatamente 9 dígitos numéricos",
            ValidationFailure::Email => "Por favor, insira um email válido",
            ValidationFailure::ServiceMissing => "Por favor, selecione um pacote",
        }
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Un `<input>` du formulaire et l'élément `.error-message` qui le suit.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub id: FieldId,
    pub value: String,
    pub required: bool,
    pub state: FieldState,
    pub error: Option<ValidationFailure>,
}

impl Field {
    pub fn new(id: FieldId, required: bool) -> Self {
        Self {
            id,
            value: String::new(),
            required,
            state: FieldState::Untouched,
            error: None,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.state == FieldState::Valid
    }

    pub fn presentation(&self) -> FieldPresentation {
        let input_class = match self.state {
            FieldState::Untouched => None,
            FieldState::Valid => Some(dom::CLASS_SUCCESS),
            FieldState::Invalid => Some(dom::CLASS_ERROR),
        };
        FieldPresentation {
            input_class,
            error_text: self.error.map(ValidationFailure::message).unwrap_or(""),
            error_active: self.error.is_some(),
        }
    }
}

/// Attributs à appliquer au DOM pour un champ.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPresentation {
    /// `input-success`, `input-error`, ou aucune classe.
    pub input_class: Option<&'static str>,
    pub error_text: &'static str,
    pub error_active: bool,
}

impl FieldPresentation {
    /// Classes de l'élément `.error-message`.
    pub fn error_classes(&self) -> String {
        if self.error_active {
            format!("{} {}", dom::CLASS_ERROR_MESSAGE, dom::CLASS_ACTIVE)
        } else {
            dom::CLASS_ERROR_MESSAGE.to_string()
        }
    }
}
