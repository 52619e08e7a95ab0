#![forbid(unsafe_code)]
//! contactform_lib — formulaire de contact : validation des champs, modale de
//! services, envoi via un service e-mail tiers et notifications toast.

#[macro_use]
mod logging;

pub mod dom;
pub mod form;
pub mod modal;
pub mod page;
pub mod race;
pub mod submit;
pub mod toast;

pub use dom::PageElements;
pub use form::{
    Field, FieldCheck, FieldId, FieldPresentation, FieldState, FormError, FormValidator,
    ValidationFailure, check_field, normalize_phone,
};
pub use modal::{ClickTarget, ServiceItem, ServiceSelectorModal};
pub use page::{ContactPage, PageConfig, PageEvent};
pub use race::{SettleFlag, Settled, first_settle};
pub use submit::{
    ButtonHandle, ButtonState, EmailApi, SendError, SendReceipt, SubmissionPayload, SubmitOptions,
    SubmitOutcome, Submitter,
};
pub use toast::{
    TOAST_STYLE, Toast, ToastContainer, ToastKind, ToastLease, ToastNotifier, ToastOptions,
};
