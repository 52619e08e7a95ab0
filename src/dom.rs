//! Contrat avec le document HTML : ids et classes attendus par les composants.

pub const FORM_ID: &str = "contact-form";
pub const SUBMIT_SELECTOR: &str = "button[type=\"submit\"]";

pub const MODAL_ID: &str = "modalServicos";
pub const MODAL_CLOSE_ID: &str = "fecharModal";
pub const SERVICE_LIST_ID: &str = "listaServicos";

/// Éléments auxquels l'hôte attache ses écouteurs avant de relayer les
/// [`crate::PageEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageElements {
    pub form: &'static str,
    pub submit: &'static str,
    pub modal: &'static str,
    pub modal_close: &'static str,
    pub service_list: &'static str,
}

pub const CONTACT_PAGE: PageElements = PageElements {
    form: FORM_ID,
    submit: SUBMIT_SELECTOR,
    modal: MODAL_ID,
    modal_close: MODAL_CLOSE_ID,
    service_list: SERVICE_LIST_ID,
};

pub const CLASS_SUCCESS: &str = "input-success";
pub const CLASS_ERROR: &str = "input-error";
pub const CLASS_ERROR_MESSAGE: &str = "error-message";
pub const CLASS_ACTIVE: &str = "active";

pub const CLASS_TOAST: &str = "toast";
pub const CLASS_TOAST_ERROR: &str = "error";
pub const CLASS_TOAST_CLOSE: &str = "close-btn";
pub const TOAST_CONTAINER_ID: &str = "toast-container";
