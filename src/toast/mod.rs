//! Notifications "toast" empilées dans un conteneur fixe.
//!
//! Chaque toast est retiré automatiquement après un délai ou immédiatement
//! via son [`ToastLease`].

mod lease;
mod options;
mod types;

pub use lease::ToastLease;
pub use options::ToastOptions;
pub use types::{CONTAINER_STYLE, TOAST_STYLE, Toast, ToastContainer, ToastKind};

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::AbortHandle;

#[derive(Debug, Default)]
pub(crate) struct ToastBoard {
    container: Option<ToastContainer>,
    next_id: u64,
}

fn lock(board: &Mutex<ToastBoard>) -> MutexGuard<'_, ToastBoard> {
    board.lock().unwrap_or_else(PoisonError::into_inner)
}

pub(crate) fn remove_toast(board: &Mutex<ToastBoard>, element_id: &str) -> bool {
    let mut board = lock(board);
    let removed = board
        .container
        .as_mut()
        .is_some_and(|container| container.remove(element_id));
    if removed {
        log_event!(trace, "toast {} retiré", element_id);
    }
    removed
}

/// Les retraits automatiques tournent sur le runtime Tokio fourni à la
/// construction, quel que soit le contexte d'appel de [`ToastNotifier::notify`].
#[derive(Debug, Clone)]
pub struct ToastNotifier {
    board: Arc<Mutex<ToastBoard>>,
    options: ToastOptions,
    runtime: Handle,
}

impl ToastNotifier {
    /// Utilise le runtime Tokio courant.
    ///
    /// # Panics
    ///
    /// Hors contexte de runtime Tokio, comme `tokio::spawn`.
    pub fn new(options: ToastOptions) -> Self {
        Self::with_runtime(options, Handle::current())
    }

    pub fn with_runtime(options: ToastOptions, runtime: Handle) -> Self {
        Self {
            board: Arc::default(),
            options,
            runtime,
        }
    }

    pub fn options(&self) -> &ToastOptions {
        &self.options
    }

    pub fn success(&self, message: impl Into<String>) -> ToastLease {
        self.notify(ToastKind::Success, message)
    }

    pub fn error(&self, message: impl Into<String>) -> ToastLease {
        self.notify(ToastKind::Error, message)
    }

    /// Ajoute un toast, en créant le conteneur au premier appel.
    pub fn notify(&self, kind: ToastKind, message: impl Into<String>) -> ToastLease {
        let element_id = {
            let mut board = lock(&self.board);
            board.next_id += 1;
            let element_id = format!("{}-{}", self.options.container_id, board.next_id);
            let container = board.container.get_or_insert_with(|| {
                log_event!(trace, "création du conteneur {}", self.options.container_id);
                ToastContainer::new(self.options.container_id.clone())
            });
            container.toasts.push(Toast {
                element_id: element_id.clone(),
                kind,
                message: message.into(),
            });
            element_id
        };

        let cancelled = Arc::new(AtomicBool::new(false));
        let timer = self.options.auto_dismiss().map(|delay| {
            schedule_removal(
                &self.runtime,
                Arc::downgrade(&self.board),
                element_id.clone(),
                delay,
                Arc::clone(&cancelled),
            )
        });

        ToastLease::new(element_id, Arc::downgrade(&self.board), cancelled, timer)
    }

    /// Copie du conteneur, `None` tant qu'aucun toast n'a été affiché.
    pub fn container(&self) -> Option<ToastContainer> {
        lock(&self.board).container.clone()
    }

    pub fn active(&self) -> Vec<Toast> {
        lock(&self.board)
            .container
            .as_ref()
            .map(|container| container.toasts.clone())
            .unwrap_or_default()
    }
}

fn schedule_removal(
    runtime: &Handle,
    board: Weak<Mutex<ToastBoard>>,
    element_id: String,
    delay: Duration,
    cancelled: Arc<AtomicBool>,
) -> AbortHandle {
    let task = runtime.spawn(async move {
        tokio::time::sleep(delay).await;
        let Some(board) = board.upgrade() else {
            return;
        };
        if cancelled.load(Ordering::Acquire) {
            return;
        }
        remove_toast(&board, &element_id);
    });
    task.abort_handle()
}

#[cfg(test)]
mod tests;
