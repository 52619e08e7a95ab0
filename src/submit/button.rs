use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Instant, interval_at};

pub const IDLE_LABEL: &str = "Enviar";
pub const LOADING_LABEL: &str = "Enviando";

/// `Enviando`, `Enviando.`, `Enviando..`, `Enviando...` puis recommence.
pub fn loading_frame(dots: usize) -> String {
    format!("{LOADING_LABEL}{}", ".".repeat(dots % 4))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonState {
    pub disabled: bool,
    pub label: String,
}

impl Default for ButtonState {
    fn default() -> Self {
        Self {
            disabled: false,
            label: IDLE_LABEL.to_string(),
        }
    }
}

/// Bouton `type="submit"` partagé entre le flux d'envoi et l'animation.
///
/// Les changements sont observables via [`ButtonHandle::subscribe`].
#[derive(Debug, Clone)]
pub struct ButtonHandle {
    state: Arc<watch::Sender<ButtonState>>,
}

impl Default for ButtonHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl ButtonHandle {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(ButtonState::default());
        Self {
            state: Arc::new(tx),
        }
    }

    pub fn snapshot(&self) -> ButtonState {
        self.state.borrow().clone()
    }

    pub fn is_disabled(&self) -> bool {
        self.state.borrow().disabled
    }

    pub fn label(&self) -> String {
        self.state.borrow().label.clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<ButtonState> {
        self.state.subscribe()
    }

    /// Désactive le bouton ; `None` s'il l'était déjà.
    pub fn try_disable(&self) -> Option<SubmitGuard> {
        let mut acquired = false;
        self.state.send_if_modified(|state| {
            if state.disabled {
                false
            } else {
                state.disabled = true;
                acquired = true;
                true
            }
        });
        acquired.then(|| SubmitGuard {
            button: self.clone(),
        })
    }

    fn set_label(&self, label: String) {
        self.state.send_if_modified(|state| {
            if state.label == label {
                false
            } else {
                state.label = label;
                true
            }
        });
    }
}

/// Réactive le bouton une seule fois, à la destruction.
#[derive(Debug)]
#[must_use = "dropping the guard re-enables the button immediately"]
pub struct SubmitGuard {
    button: ButtonHandle,
}

impl Drop for SubmitGuard {
    fn drop(&mut self) {
        self.button.state.send_modify(|state| state.disabled = false);
    }
}

/// Points de suspension animés sur le libellé du bouton.
#[derive(Debug)]
pub struct LoadingAnimation {
    button: ButtonHandle,
    running: Arc<AtomicBool>,
    task: Option<JoinHandle<()>>,
}

impl LoadingAnimation {
    pub fn start(button: &ButtonHandle, tick: Duration) -> Self {
        button.set_label(loading_frame(0));

        let running = Arc::new(AtomicBool::new(true));
        let task_running = Arc::clone(&running);
        let handle = button.clone();
        let task = tokio::spawn(async move {
            let mut ticks = interval_at(Instant::now() + tick, tick);
            let mut dots = 0usize;
            loop {
                ticks.tick().await;
                dots = (dots + 1) % 4;
                let frame = loading_frame(dots);
                // vérifié sous le verrou du canal : pas d'écriture après stop()
                handle.state.send_if_modified(|state| {
                    if !task_running.load(Ordering::Acquire) {
                        return false;
                    }
                    state.label = frame;
                    true
                });
            }
        });

        Self {
            button: button.clone(),
            running,
            task: Some(task),
        }
    }

    /// Arrête l'animation et remet le libellé `Enviar`.
    pub fn stop(mut self) {
        self.halt();
    }

    fn halt(&mut self) {
        if let Some(task) = self.task.take() {
            self.running.store(false, Ordering::Release);
            task.abort();
            self.button.set_label(IDLE_LABEL.to_string());
        }
    }
}

impl Drop for LoadingAnimation {
    fn drop(&mut self) {
        self.halt();
    }
}
