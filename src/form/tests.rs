use super::*;
use crate::dom;

fn filled() -> FormValidator {
    let mut form = FormValidator::contact_form();
    form.set_value(FieldId::Name, "Maria Silva");
    form.set_value(FieldId::Number, "912345678");
    form.set_value(FieldId::Email, "maria@empresa.pt");
    form.set_value(FieldId::Empresa, "Empresa Lda");
    form.set_value(FieldId::EmpresaGps, "Rua Central 10, Lisboa");
    form.set_value(FieldId::CampoFormulario, "Consultoria Premium");
    form
}

#[test]
fn dom_ids_round_trip_through_lookup() {
    for id in FieldId::ALL {
        assert_eq!(FieldId::from_dom_id(id.dom_id()), Ok(id));
    }
    let err = "telefone".parse::<FieldId>().expect_err("unknown id");
    assert_eq!(err, FormError::UnknownField("telefone".into()));
}

#[test]
fn focus_marks_error_unless_already_valid() {
    let mut form = filled();
    form.on_focus(FieldId::Email);
    assert_eq!(form.field(FieldId::Email).state, FieldState::Invalid);
    assert_eq!(form.field(FieldId::Email).error, None);

    assert!(form.on_blur(FieldId::Email));
    form.on_focus(FieldId::Email);
    assert_eq!(form.field(FieldId::Email).state, FieldState::Valid);
}

#[test]
fn input_validates_only_that_field() {
    let mut form = FormValidator::contact_form();
    assert!(!form.on_input(FieldId::Name, "Ana"));
    assert_eq!(
        form.field(FieldId::Name).error,
        Some(ValidationFailure::TooShort)
    );
    assert_eq!(form.field(FieldId::Email).state, FieldState::Untouched);
}

#[test]
fn number_input_is_rewritten_in_place() {
    let mut form = FormValidator::contact_form();
    assert!(!form.on_input(FieldId::Number, "abc12-34 56x78"));
    assert_eq!(form.value(FieldId::Number), "12345678");
    assert!(form.on_input(FieldId::Number, "91 234 56 78 99"));
    assert_eq!(form.value(FieldId::Number), "912345678");
}

#[test]
fn optional_email_still_checks_shape() {
    let mut form = FormValidator::contact_form().with_required(FieldId::Email, false);
    assert!(!form.validate_field(FieldId::Email));
    assert_eq!(
        form.field(FieldId::Email).error,
        Some(ValidationFailure::Email)
    );
}

#[test]
fn revalidation_clears_previous_error() {
    let mut form = FormValidator::contact_form();
    form.on_input(FieldId::Empresa, "Lda");
    assert!(form.presentation(FieldId::Empresa).error_active);
    form.on_input(FieldId::Empresa, "Empresa Lda");
    let p = form.presentation(FieldId::Empresa);
    assert!(!p.error_active);
    assert_eq!(p.error_text, "");
    assert_eq!(p.input_class, Some(dom::CLASS_SUCCESS));
}

#[test]
fn validate_all_reports_every_failure() {
    let mut form = filled();
    form.set_value(FieldId::Email, "maria@empresa");
    form.set_value(FieldId::CampoFormulario, " ");
    assert_eq!(
        form.validate_all(),
        Err(vec![FieldId::Email, FieldId::CampoFormulario])
    );
    assert!(form.field(FieldId::Name).is_valid());

    form.set_value(FieldId::Email, "maria@empresa.pt");
    form.set_value(FieldId::CampoFormulario, "Site institucional");
    assert_eq!(form.validate_all(), Ok(()));
}

#[test]
fn mark_valid_skips_rules() {
    let mut form = FormValidator::contact_form();
    form.validate_field(FieldId::CampoFormulario);
    form.mark_valid(FieldId::CampoFormulario);
    let field = form.field(FieldId::CampoFormulario);
    assert_eq!(field.state, FieldState::Valid);
    assert_eq!(field.error, None);
}

#[test]
fn reset_clears_values_and_classes() {
    let mut form = filled();
    form.validate_all().expect("filled form is valid");
    form.on_input(FieldId::Name, "x");
    form.reset();
    for field in form.fields() {
        assert!(field.value.is_empty());
        assert_eq!(field.presentation().input_class, None);
        assert!(!field.presentation().error_active);
    }
}

#[test]
fn error_element_classes() {
    let mut form = FormValidator::contact_form();
    form.validate_field(FieldId::Number);
    let p = form.presentation(FieldId::Number);
    insta::assert_snapshot!(p.error_classes(), @"error-message active");
    assert_eq!(p.error_text, "O telefone deve ter exatamente 9 dígitos numéricos");
    assert_eq!(p.input_class, Some(dom::CLASS_ERROR));
}
