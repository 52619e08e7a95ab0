use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;

use contactform_lib::{
    EmailApi, FormValidator, SendError, SendReceipt, SubmissionPayload, SubmitOptions,
    SubmitOutcome, Submitter, ToastKind, ToastNotifier, ToastOptions,
};

pub struct SimulationConfig {
    pub latency_ms: u64,
    pub fail: bool,
    pub timeout_ms: u64,
}

/// Service e-mail factice : répond après `latency`, en succès ou en refus.
struct SimulatedApi {
    latency: Duration,
    fail: bool,
}

#[async_trait]
impl EmailApi for SimulatedApi {
    async fn send(
        &self,
        service_id: &str,
        template_id: &str,
        payload: &SubmissionPayload,
    ) -> Result<SendReceipt, SendError> {
        println!("api: {service_id}/{template_id} <- {}", payload.subject);
        tokio::time::sleep(self.latency).await;
        if self.fail {
            Err(SendError::rejected(500, "simulated failure"))
        } else {
            Ok(SendReceipt::ok())
        }
    }
}

/// Renvoie `true` si l'envoi a abouti.
pub fn run_simulation(mut form: FormValidator, cfg: SimulationConfig) -> Result<bool> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("build tokio runtime")?;

    runtime.block_on(async move {
        let api = Arc::new(SimulatedApi {
            latency: Duration::from_millis(cfg.latency_ms),
            fail: cfg.fail,
        });
        let options = SubmitOptions {
            timeout_ms: cfg.timeout_ms,
            ..SubmitOptions::default()
        };
        let submitter = Submitter::new(api, options, ToastNotifier::new(ToastOptions::default()));

        let mut labels = submitter.button().subscribe();
        let watcher = tokio::spawn(async move {
            while labels.changed().await.is_ok() {
                let state = labels.borrow_and_update().clone();
                println!("button: {:<12} disabled={}", state.label, state.disabled);
            }
        });

        let outcome = submitter.submit(&mut form).await;
        tokio::task::yield_now().await;
        watcher.abort();

        match &outcome {
            SubmitOutcome::InFlight => println!("outcome: already in flight"),
            SubmitOutcome::Invalid(fields) => {
                let names: Vec<String> = fields.iter().map(ToString::to_string).collect();
                println!("outcome: invalid ({})", names.join(", "));
            }
            SubmitOutcome::Sent(receipt) => {
                println!("outcome: sent ({} {})", receipt.status, receipt.text)
            }
            SubmitOutcome::Failed(err) => println!("outcome: failed ({err})"),
            SubmitOutcome::TimedOut => println!("outcome: timed out after {} ms", cfg.timeout_ms),
        }
        for toast in submitter.toasts().active() {
            let kind = match toast.kind {
                ToastKind::Success => "success",
                ToastKind::Error => "error",
            };
            println!("toast [{kind}] {}", toast.message);
        }

        Ok(matches!(outcome, SubmitOutcome::Sent(_)))
    })
}
