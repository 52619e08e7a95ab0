//! Journalisation optionnelle (feature `with-tracing`).
//!
//! Sans la feature, les arguments restent type-checkés mais rien n'est émis.

macro_rules! log_event {
    ($level:ident, $($arg:tt)+) => {{
        #[cfg(feature = "with-tracing")]
        {
            tracing::$level!($($arg)+);
        }
        #[cfg(not(feature = "with-tracing"))]
        {
            if false {
                let _ = format!($($arg)+);
            }
        }
    }};
}
