use std::borrow::Cow;

use super::rules::check_field;
use super::types::{Field, FieldId, FieldPresentation, FieldState};

/// État des six champs du formulaire `#contact-form`.
///
/// Les champs sont toujours présents, dans l'ordre de [`FieldId::ALL`].
#[cfg_attr(feature = "with-serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormValidator {
    fields: Vec<Field>,
}

impl Default for FormValidator {
    fn default() -> Self {
        Self::contact_form()
    }
}

impl FormValidator {
    /// Tous les champs requis, comme dans le formulaire publié.
    pub fn contact_form() -> Self {
        Self {
            fields: FieldId::ALL
                .iter()
                .map(|&id| Field::new(id, true))
                .collect(),
        }
    }

    pub fn with_required(mut self, id: FieldId, required: bool) -> Self {
        self.field_mut(id).required = required;
        self
    }

    pub fn field(&self, id: FieldId) -> &Field {
        &self.fields[id.index()]
    }

    fn field_mut(&mut self, id: FieldId) -> &mut Field {
        &mut self.fields[id.index()]
    }

    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter()
    }

    pub fn value(&self, id: FieldId) -> &str {
        &self.field(id).value
    }

    /// Écrit la valeur sans valider (équivalent d'une affectation `input.value`).
    pub fn set_value(&mut self, id: FieldId, value: impl Into<String>) {
        self.field_mut(id).value = value.into();
    }

    pub fn on_focus(&mut self, id: FieldId) {
        let field = self.field_mut(id);
        if field.state != FieldState::Valid {
            field.state = FieldState::Invalid;
        }
    }

    pub fn on_input(&mut self, id: FieldId, value: impl Into<String>) -> bool {
        self.set_value(id, value);
        self.validate_field(id)
    }

    pub fn on_blur(&mut self, id: FieldId) -> bool {
        self.validate_field(id)
    }

    pub fn validate_field(&mut self, id: FieldId) -> bool {
        let field = self.field_mut(id);
        field.error = None;

        let check = check_field(id, &field.value, field.required);
        let failure = check.failure;
        if let Some(rewritten) = owned_if_changed(check.value) {
            field.value = rewritten;
        }

        match failure {
            None => field.state = FieldState::Valid,
            Some(failure) => {
                log_event!(debug, "champ '{}' invalide: {}", id, failure);
                field.error = Some(failure);
                field.state = FieldState::Invalid;
            }
        }
        failure.is_none()
    }

    /// Valide tous les champs sans s'arrêter au premier échec.
    pub fn validate_all(&mut self) -> Result<(), Vec<FieldId>> {
        let failing: Vec<FieldId> = FieldId::ALL
            .into_iter()
            .filter(|&id| !self.validate_field(id))
            .collect();
        if failing.is_empty() {
            Ok(())
        } else {
            Err(failing)
        }
    }

    /// Marque le champ valide sans passer par les règles.
    pub fn mark_valid(&mut self, id: FieldId) {
        let field = self.field_mut(id);
        field.state = FieldState::Valid;
        field.error = None;
    }

    /// `form.reset()` + retrait des classes de succès/erreur.
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
            field.state = FieldState::Untouched;
            field.error = None;
        }
    }

    pub fn presentation(&self, id: FieldId) -> FieldPresentation {
        self.field(id).presentation()
    }
}

fn owned_if_changed(value: Cow<'_, str>) -> Option<String> {
    match value {
        Cow::Owned(s) => Some(s),
        Cow::Borrowed(_) => None,
    }
}
