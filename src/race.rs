//! Course "premier arrivé" entre une opération asynchrone et un délai.
//!
//! L'opération tourne dans sa propre tâche et n'est jamais annulée : si le
//! délai gagne, son résultat tardif est simplement ignoré.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tokio::sync::oneshot;

/// Drapeau partagé : seul le premier appel à [`SettleFlag::try_settle`] gagne.
#[derive(Debug, Clone, Default)]
pub struct SettleFlag(Arc<AtomicBool>);

impl SettleFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn try_settle(&self) -> bool {
        !self.0.swap(true, Ordering::AcqRel)
    }

    pub fn is_settled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settled<T, E> {
    Resolved(T),
    Rejected(E),
    TimedOut,
}

impl<T, E> From<Result<T, E>> for Settled<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Settled::Resolved(value),
            Err(err) => Settled::Rejected(err),
        }
    }
}

/// Lance `operation` et attend au plus `deadline`.
///
/// Doit être appelée depuis un runtime Tokio.
pub async fn first_settle<F, T, E>(operation: F, deadline: Duration) -> Settled<T, E>
where
    F: Future<Output = Result<T, E>> + Send + 'static,
    T: Send + 'static,
    E: Send + 'static,
{
    let flag = SettleFlag::new();
    let (tx, mut rx) = oneshot::channel();

    let op_flag = flag.clone();
    tokio::spawn(async move {
        let result = operation.await;
        if op_flag.try_settle() {
            let _ = tx.send(result);
        } else {
            log_event!(debug, "réponse reçue après expiration du délai, ignorée");
        }
    });

    tokio::select! {
        Ok(result) = &mut rx => result.into(),
        _ = tokio::time::sleep(deadline) => {
            if flag.try_settle() {
                Settled::TimedOut
            } else {
                // l'opération a gagné au même instant, son envoi est imminent
                match rx.await {
                    Ok(result) => result.into(),
                    Err(_) => Settled::TimedOut,
                }
            }
        }
    }
}
