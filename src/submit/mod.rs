//! Envoi du formulaire : validation globale, animation du bouton, appel au
//! service e-mail en course avec un délai, puis toast de retour.

mod api;
mod button;
mod error;
mod options;
mod payload;

pub use api::{EmailApi, SendReceipt};
pub use button::{
    ButtonHandle, ButtonState, IDLE_LABEL, LOADING_LABEL, LoadingAnimation, SubmitGuard,
    loading_frame,
};
pub use error::SendError;
pub use options::SubmitOptions;
pub use payload::{SUBMISSION_DATE_FORMAT, SubmissionPayload, format_submission_date};

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Local};

use crate::form::{FieldId, FormValidator};
use crate::race::{Settled, first_settle};
use crate::toast::ToastNotifier;

pub const SUCCESS_MESSAGE: &str = "Mensagem enviada com sucesso";
pub const FAILURE_MESSAGE: &str = "Falha ao enviar";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Un envoi est déjà en cours (bouton désactivé) : rien n'est fait.
    InFlight,
    /// Champs invalides ; leurs erreurs sont déjà affichées.
    Invalid(Vec<FieldId>),
    Sent(SendReceipt),
    Failed(SendError),
    TimedOut,
}

#[derive(Clone)]
pub struct Submitter {
    api: Arc<dyn EmailApi>,
    options: SubmitOptions,
    button: ButtonHandle,
    toasts: ToastNotifier,
}

impl Submitter {
    pub fn new(api: Arc<dyn EmailApi>, options: SubmitOptions, toasts: ToastNotifier) -> Self {
        Self {
            api,
            options,
            button: ButtonHandle::new(),
            toasts,
        }
    }

    pub fn button(&self) -> &ButtonHandle {
        &self.button
    }

    pub fn toasts(&self) -> &ToastNotifier {
        &self.toasts
    }

    pub fn options(&self) -> &SubmitOptions {
        &self.options
    }

    pub async fn submit(&self, form: &mut FormValidator) -> SubmitOutcome {
        self.submit_at(form, Local::now()).await
    }

    /// Comme [`Submitter::submit`], avec une date d'envoi fournie.
    pub async fn submit_at(
        &self,
        form: &mut FormValidator,
        submitted_at: DateTime<Local>,
    ) -> SubmitOutcome {
        let (sending, payload) = match self.begin(form, submitted_at) {
            Ok(started) => started,
            Err(outcome) => return outcome,
        };
        let settled = self.race(payload).await;
        self.finish(sending, settled, form)
    }

    /// Envoi sur un formulaire partagé : le verrou n'est pris que pour valider
    /// puis pour appliquer le résultat, jamais pendant l'attente du service.
    pub async fn submit_shared(&self, form: &Mutex<FormValidator>) -> SubmitOutcome {
        let started = self.begin(&mut lock_form(form), Local::now());
        let (sending, payload) = match started {
            Ok(started) => started,
            Err(outcome) => return outcome,
        };
        let settled = self.race(payload).await;
        self.finish(sending, settled, &mut lock_form(form))
    }

    fn begin(
        &self,
        form: &mut FormValidator,
        submitted_at: DateTime<Local>,
    ) -> Result<(Sending, SubmissionPayload), SubmitOutcome> {
        if self.button.is_disabled() {
            log_event!(debug, "envoi ignoré : déjà en cours");
            return Err(SubmitOutcome::InFlight);
        }
        if let Err(failing) = form.validate_all() {
            log_event!(debug, "envoi bloqué : {} champ(s) invalide(s)", failing.len());
            return Err(SubmitOutcome::Invalid(failing));
        }
        let Some(enabled_on_drop) = self.button.try_disable() else {
            return Err(SubmitOutcome::InFlight);
        };

        let animation = LoadingAnimation::start(&self.button, self.options.loading_tick());
        let payload = SubmissionPayload::from_form(form, &submitted_at);
        log_event!(info, "envoi du formulaire : {}", payload.subject);
        let sending = Sending {
            animation,
            _enabled_on_drop: enabled_on_drop,
        };
        Ok((sending, payload))
    }

    async fn race(&self, payload: SubmissionPayload) -> Settled<SendReceipt, SendError> {
        let api = Arc::clone(&self.api);
        let service_id = self.options.service_id.clone();
        let template_id = self.options.template_id.clone();
        first_settle(
            async move { api.send(&service_id, &template_id, &payload).await },
            self.options.timeout(),
        )
        .await
    }

    fn finish(
        &self,
        sending: Sending,
        settled: Settled<SendReceipt, SendError>,
        form: &mut FormValidator,
    ) -> SubmitOutcome {
        sending.animation.stop();
        match settled {
            Settled::Resolved(receipt) => {
                log_event!(info, "formulaire envoyé ({})", receipt.status);
                self.toasts.success(SUCCESS_MESSAGE);
                form.reset();
                SubmitOutcome::Sent(receipt)
            }
            Settled::Rejected(err) => {
                log_event!(warn, "échec de l'envoi : {}", err);
                self.toasts.error(FAILURE_MESSAGE);
                SubmitOutcome::Failed(err)
            }
            Settled::TimedOut => {
                log_event!(
                    warn,
                    "échec de l'envoi : délai de {} ms dépassé",
                    self.options.timeout_ms
                );
                self.toasts.error(FAILURE_MESSAGE);
                SubmitOutcome::TimedOut
            }
        }
    }
}

/// Bouton désactivé et animé le temps d'un envoi.
struct Sending {
    animation: LoadingAnimation,
    _enabled_on_drop: SubmitGuard,
}

fn lock_form(form: &Mutex<FormValidator>) -> MutexGuard<'_, FormValidator> {
    form.lock().unwrap_or_else(PoisonError::into_inner)
}
