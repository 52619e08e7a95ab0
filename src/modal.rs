//! Fenêtre modale de choix de service, liée au champ `campoFormulario`.

use crate::form::{FieldId, FormError, FormValidator};

/// Un `<li>` de `#listaServicos` ; le libellé vient de son `<p>`.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceItem {
    pub label: Option<String>,
}

impl ServiceItem {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
        }
    }

    /// `<li>` sans paragraphe.
    pub fn unlabeled() -> Self {
        Self { label: None }
    }
}

/// Cible d'un clic sur la fenêtre.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// Le fond de `#modalServicos`, hors de la zone de contenu.
    Overlay,
    ModalContent,
    Elsewhere,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceSelectorModal {
    bound: FieldId,
    items: Vec<ServiceItem>,
    visible: bool,
}

impl ServiceSelectorModal {
    pub fn new(bound: FieldId, items: Vec<ServiceItem>) -> Self {
        Self {
            bound,
            items,
            visible: false,
        }
    }

    pub fn bound_field(&self) -> FieldId {
        self.bound
    }

    pub fn items(&self) -> &[ServiceItem] {
        &self.items
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn on_input_click(&mut self) {
        self.visible = true;
    }

    pub fn on_close_click(&mut self) {
        self.visible = false;
    }

    pub fn on_window_click(&mut self, target: ClickTarget) {
        if target == ClickTarget::Overlay {
            self.visible = false;
        }
    }

    /// Copie le libellé (sans espaces autour) dans le champ lié, ferme la
    /// modale et marque le champ valide sans repasser par ses règles.
    pub fn select(&mut self, index: usize, form: &mut FormValidator) -> Result<(), FormError> {
        let item = self
            .items
            .get(index)
            .ok_or(FormError::UnknownServiceItem(index))?;
        if let Some(label) = &item.label {
            form.set_value(self.bound, label.trim());
        }
        self.visible = false;
        form.mark_valid(self.bound);
        log_event!(debug, "service {} sélectionné", index);
        Ok(())
    }

    /// Valeur de `style.display`.
    pub fn display(&self) -> &'static str {
        if self.visible { "block" } else { "none" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FieldState;

    fn modal() -> ServiceSelectorModal {
        ServiceSelectorModal::new(
            FieldId::CampoFormulario,
            vec![
                ServiceItem::new(" Consultoria Premium "),
                ServiceItem::new("Site institucional"),
                ServiceItem::unlabeled(),
            ],
        )
    }

    #[test]
    fn opens_and_closes() {
        let mut modal = modal();
        assert_eq!(modal.display(), "none");
        modal.on_input_click();
        assert_eq!(modal.display(), "block");
        modal.on_window_click(ClickTarget::ModalContent);
        modal.on_window_click(ClickTarget::Elsewhere);
        assert!(modal.is_visible());
        modal.on_window_click(ClickTarget::Overlay);
        assert!(!modal.is_visible());
        modal.on_input_click();
        modal.on_close_click();
        assert!(!modal.is_visible());
    }

    #[test]
    fn selection_trims_label_and_marks_valid() {
        let mut modal = modal();
        let mut form = FormValidator::contact_form();
        form.on_focus(FieldId::CampoFormulario);
        form.validate_field(FieldId::CampoFormulario);
        modal.on_input_click();

        modal.select(0, &mut form).expect("item exists");
        assert!(!modal.is_visible());
        let field = form.field(FieldId::CampoFormulario);
        assert_eq!(field.value, "Consultoria Premium");
        assert_eq!(field.state, FieldState::Valid);
        assert_eq!(field.error, None);
    }

    #[test]
    fn unlabeled_item_keeps_value_but_still_marks_valid() {
        let mut modal = modal();
        let mut form = FormValidator::contact_form();
        form.set_value(FieldId::CampoFormulario, "Site institucional");
        modal.select(2, &mut form).expect("item exists");
        assert_eq!(form.value(FieldId::CampoFormulario), "Site institucional");
        assert!(form.field(FieldId::CampoFormulario).is_valid());
    }

    #[test]
    fn unknown_index_is_an_error() {
        let mut modal = modal();
        let mut form = FormValidator::contact_form();
        modal.on_input_click();
        assert_eq!(
            modal.select(9, &mut form),
            Err(FormError::UnknownServiceItem(9))
        );
        assert!(modal.is_visible());
    }
}
