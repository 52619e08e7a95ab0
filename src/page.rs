//! Assemblage de la page de contact : initialisation explicite des composants
//! et routage des événements DOM.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::dom::{self, PageElements};
use crate::form::{FieldId, FormError, FormValidator};
use crate::modal::{ClickTarget, ServiceItem, ServiceSelectorModal};
use crate::submit::{ButtonHandle, EmailApi, SubmitOptions, SubmitOutcome, Submitter};
use crate::toast::{ToastNotifier, ToastOptions};

/// Ce que l'hôte fournit à l'initialisation.
pub struct PageConfig {
    pub api: Arc<dyn EmailApi>,
    pub form: FormValidator,
    pub services: Vec<ServiceItem>,
    pub submit: SubmitOptions,
    pub toasts: ToastOptions,
}

impl PageConfig {
    pub fn new(api: Arc<dyn EmailApi>, services: Vec<ServiceItem>) -> Self {
        Self {
            api,
            form: FormValidator::contact_form(),
            services,
            submit: SubmitOptions::default(),
            toasts: ToastOptions::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    Focus(FieldId),
    Input(FieldId, String),
    Blur(FieldId),
    ServiceFieldClick,
    ModalCloseClick,
    WindowClick(ClickTarget),
    ServiceItemClick(usize),
}

/// Les événements DOM et l'envoi passent par `&self` : un envoi en attente ne
/// bloque ni la saisie ni la modale.
pub struct ContactPage {
    form: Mutex<FormValidator>,
    modal: Mutex<ServiceSelectorModal>,
    submitter: Submitter,
}

fn lock<T>(state: &Mutex<T>) -> MutexGuard<'_, T> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

impl ContactPage {
    /// # Panics
    ///
    /// Hors contexte de runtime Tokio (voir [`ToastNotifier::new`]).
    pub fn init(config: PageConfig) -> Self {
        let toasts = ToastNotifier::new(config.toasts);
        log_event!(debug, "page initialisée : {} service(s)", config.services.len());
        Self {
            form: Mutex::new(config.form),
            modal: Mutex::new(ServiceSelectorModal::new(
                FieldId::CampoFormulario,
                config.services,
            )),
            submitter: Submitter::new(config.api, config.submit, toasts),
        }
    }

    /// Copie de l'état courant du formulaire.
    pub fn form(&self) -> FormValidator {
        lock(&self.form).clone()
    }

    pub fn modal(&self) -> ServiceSelectorModal {
        lock(&self.modal).clone()
    }

    pub fn elements(&self) -> PageElements {
        dom::CONTACT_PAGE
    }

    pub fn button(&self) -> &ButtonHandle {
        self.submitter.button()
    }

    pub fn toasts(&self) -> &ToastNotifier {
        self.submitter.toasts()
    }

    pub fn handle(&self, event: PageEvent) -> Result<(), FormError> {
        match event {
            PageEvent::Focus(id) => lock(&self.form).on_focus(id),
            PageEvent::Input(id, value) => {
                lock(&self.form).on_input(id, value);
            }
            PageEvent::Blur(id) => {
                lock(&self.form).on_blur(id);
            }
            PageEvent::ServiceFieldClick => lock(&self.modal).on_input_click(),
            PageEvent::ModalCloseClick => lock(&self.modal).on_close_click(),
            PageEvent::WindowClick(target) => lock(&self.modal).on_window_click(target),
            PageEvent::ServiceItemClick(index) => {
                // ordre des verrous : modale puis formulaire
                let mut modal = lock(&self.modal);
                modal.select(index, &mut lock(&self.form))?;
            }
        }
        Ok(())
    }

    /// Événement `submit` de `#contact-form` (comportement par défaut empêché).
    pub async fn submit(&self) -> SubmitOutcome {
        self.submitter.submit_shared(&self.form).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FieldState;
    use crate::submit::{SendError, SendReceipt, SubmissionPayload};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    #[derive(Default)]
    struct CountingApi {
        calls: AtomicUsize,
        latency: Duration,
    }

    impl CountingApi {
        fn slow(latency_ms: u64) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                latency: Duration::from_millis(latency_ms),
            })
        }
    }

    #[async_trait]
    impl EmailApi for CountingApi {
        async fn send(
            &self,
            _service_id: &str,
            _template_id: &str,
            _payload: &SubmissionPayload,
        ) -> Result<SendReceipt, SendError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(self.latency).await;
            Ok(SendReceipt::ok())
        }
    }

    fn page(api: Arc<CountingApi>) -> ContactPage {
        ContactPage::init(PageConfig::new(
            api,
            vec![
                ServiceItem::new(" Consultoria Premium "),
                ServiceItem::new("Loja online"),
            ],
        ))
    }

    fn fill(page: &ContactPage) {
        let typed = [
            (FieldId::Name, "Maria Silva"),
            (FieldId::Number, "912-345-678"),
            (FieldId::Email, "maria@empresa.pt"),
            (FieldId::Empresa, "Empresa Lda"),
            (FieldId::EmpresaGps, "Lisboa, Portugal"),
        ];
        for (id, value) in typed {
            page.handle(PageEvent::Focus(id)).unwrap();
            page.handle(PageEvent::Input(id, value.to_string())).unwrap();
            page.handle(PageEvent::Blur(id)).unwrap();
            assert!(page.form().field(id).is_valid(), "{id}");
        }
        page.handle(PageEvent::ServiceFieldClick).unwrap();
        page.handle(PageEvent::ServiceItemClick(0)).unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn user_journey_from_focus_to_sent() {
        let api = Arc::new(CountingApi::default());
        let page = page(Arc::clone(&api));

        fill(&page);
        assert!(!page.modal().is_visible());
        assert_eq!(
            page.form().value(FieldId::CampoFormulario),
            "Consultoria Premium"
        );

        let outcome = page.submit().await;
        assert_eq!(outcome, SubmitOutcome::Sent(SendReceipt::ok()));
        assert_eq!(api.calls.load(Ordering::SeqCst), 1);
        assert!(page.form().fields().all(|f| f.value.is_empty()));
        assert_eq!(page.toasts().active().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn events_are_handled_while_a_send_is_pending() {
        let api = CountingApi::slow(2_000);
        let page = page(Arc::clone(&api));
        fill(&page);

        let meanwhile = async {
            tokio::time::sleep(Duration::from_millis(100)).await;
            assert!(page.button().is_disabled());

            page.handle(PageEvent::Input(FieldId::Name, "Ana".into())).unwrap();
            assert_eq!(page.form().field(FieldId::Name).state, FieldState::Invalid);
            page.handle(PageEvent::ServiceFieldClick).unwrap();
            assert!(page.modal().is_visible());
            page.handle(PageEvent::WindowClick(ClickTarget::Overlay)).unwrap();
            assert!(!page.modal().is_visible());

            page.submit().await
        };

        let (outcome, second) = tokio::join!(page.submit(), meanwhile);
        assert_eq!(outcome, SubmitOutcome::Sent(SendReceipt::ok()));
        assert_eq!(second, SubmitOutcome::InFlight);
        assert_eq!(api.calls.load(Ordering::SeqCst), 1);
        assert!(page.form().fields().all(|f| f.value.is_empty()));
        assert!(!page.button().is_disabled());
    }

    #[tokio::test]
    async fn empty_submit_shows_every_error() {
        let api = Arc::new(CountingApi::default());
        let page = page(Arc::clone(&api));
        match page.submit().await {
            SubmitOutcome::Invalid(failing) => assert_eq!(failing, FieldId::ALL),
            other => panic!("unexpected outcome {other:?}"),
        }
        assert_eq!(api.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn exposes_the_elements_to_bind() {
        let page = page(Arc::new(CountingApi::default()));
        let elements = page.elements();
        assert_eq!(elements.form, "contact-form");
        assert_eq!(elements.submit, r#"button[type="submit"]"#);
        assert_eq!(elements.modal, "modalServicos");
        assert_eq!(elements.modal_close, "fecharModal");
        assert_eq!(elements.service_list, "listaServicos");
        assert_eq!(page.modal().bound_field().dom_id(), "campoFormulario");
    }

    #[tokio::test]
    async fn unknown_service_item_propagates() {
        let page = page(Arc::new(CountingApi::default()));
        assert_eq!(
            page.handle(PageEvent::ServiceItemClick(5)),
            Err(FormError::UnknownServiceItem(5))
        );
        page.handle(PageEvent::ServiceFieldClick).unwrap();
        page.handle(PageEvent::WindowClick(ClickTarget::Overlay)).unwrap();
        assert!(!page.modal().is_visible());
    }
}
