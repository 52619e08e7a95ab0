use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, Weak};

use tokio::task::AbortHandle;

use super::{ToastBoard, remove_toast};

/// Poignée d'un toast affiché : identifiant DOM + annulation du retrait auto.
#[derive(Debug)]
pub struct ToastLease {
    element_id: String,
    board: Weak<Mutex<ToastBoard>>,
    cancelled: Arc<AtomicBool>,
    timer: Option<AbortHandle>,
}

impl ToastLease {
    pub(crate) fn new(
        element_id: String,
        board: Weak<Mutex<ToastBoard>>,
        cancelled: Arc<AtomicBool>,
        timer: Option<AbortHandle>,
    ) -> Self {
        Self {
            element_id,
            board,
            cancelled,
            timer,
        }
    }

    pub fn element_id(&self) -> &str {
        &self.element_id
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    /// Annule le retrait automatique. Idempotent.
    pub fn cancel(&self) {
        if !self.cancelled.swap(true, Ordering::AcqRel) {
            if let Some(timer) = &self.timer {
                timer.abort();
            }
        }
    }

    /// Clic sur `×` : annule le retrait auto et retire le toast tout de suite.
    ///
    /// Renvoie `false` si le toast n'était plus affiché.
    pub fn dismiss(&self) -> bool {
        self.cancel();
        self.board
            .upgrade()
            .is_some_and(|board| remove_toast(&board, &self.element_id))
    }
}
