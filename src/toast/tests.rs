use std::time::Duration;

use super::*;

#[tokio::test]
async fn container_is_created_lazily_and_reused() {
    let notifier = ToastNotifier::new(ToastOptions {
        auto_dismiss_ms: 0,
        ..ToastOptions::default()
    });
    assert!(notifier.container().is_none());

    let first = notifier.success("Mensagem enviada com sucesso");
    let second = notifier.error("Falha ao enviar");
    let container = notifier.container().expect("container after first toast");
    assert_eq!(container.id, "toast-container");
    assert_eq!(container.style(), CONTAINER_STYLE);
    assert_eq!(container.toasts.len(), 2);
    assert_ne!(first.element_id(), second.element_id());
}

#[test]
fn toast_markup_by_kind() {
    let toast = Toast {
        element_id: "toast-container-1".into(),
        kind: ToastKind::Error,
        message: "Falha <b>ao</b> enviar".into(),
    };
    insta::assert_snapshot!(
        toast.render_html(),
        @r#"<div id="toast-container-1" class="toast error" style="background-color: #c62828; display: flex; align-items: center; justify-content: space-between; color: #fff; padding: 12px 16px; margin-top: 10px; border-radius: 4px; min-width: 320px; max-width: 400px; box-shadow: 0 2px 8px rgba(0,0,0,0.3); font-family: Arial, sans-serif; animation: slideIn 0.4s ease, fadeOut 0.4s ease 4.6s;"><div class="toast-content" style="display: flex; align-items: center; flex-grow: 1;"><i style="margin-right: 8px; font-size: 18px;">❌</i><span>Falha &lt;b&gt;ao&lt;/b&gt; enviar</span></div><div class="toast-actions" style="margin-left: 16px; display: flex; align-items: center; gap: 10px;"><span class="close-btn" style="cursor: pointer; font-size: 18px;">&times;</span></div></div>"#
    );
    assert!(toast.style().starts_with("background-color: #c62828; display: flex;"));
    assert!(TOAST_STYLE.contains("fadeOut 0.4s ease 4.6s"));
    assert_eq!(ToastKind::Success.class_list(), "toast");
    assert_eq!(ToastKind::Success.background(), "#1e8e3e");
    assert_eq!(ToastKind::Success.icon(), "✅");
}

#[test]
fn notified_outside_runtime_context_still_expires() {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .start_paused(true)
        .build()
        .unwrap();
    let notifier = ToastNotifier::with_runtime(ToastOptions::default(), runtime.handle().clone());

    let lease = notifier.error("Falha ao enviar");
    assert_eq!(notifier.active().len(), 1);

    runtime.block_on(async {
        tokio::time::sleep(Duration::from_millis(4_900)).await;
        assert_eq!(notifier.active().len(), 1);
        tokio::time::sleep(Duration::from_millis(200)).await;
    });
    assert!(notifier.active().is_empty());
    assert!(!lease.is_cancelled());
    assert!(!lease.dismiss());
    assert!(notifier.container().is_some());
}

#[tokio::test]
async fn zero_delay_keeps_toast_until_dismissed() {
    let notifier = ToastNotifier::new(ToastOptions {
        auto_dismiss_ms: 0,
        ..ToastOptions::default()
    });
    let lease = notifier.success("ok");
    assert_eq!(notifier.active().len(), 1);
    assert!(lease.dismiss());
    assert!(notifier.active().is_empty());
}

#[tokio::test(start_paused = true)]
async fn toast_expires_after_delay() {
    let notifier = ToastNotifier::new(ToastOptions::default());
    let _lease = notifier.error("Falha ao enviar");

    tokio::time::sleep(Duration::from_millis(4_900)).await;
    assert_eq!(notifier.active().len(), 1);
    tokio::time::sleep(Duration::from_millis(200)).await;
    assert!(notifier.active().is_empty());
}

#[tokio::test(start_paused = true)]
async fn manual_dismiss_cancels_expiry() {
    let notifier = ToastNotifier::new(ToastOptions::default());
    let lease = notifier.success("primeiro");
    let other = notifier.success("segundo");

    tokio::time::sleep(Duration::from_millis(1_000)).await;
    assert!(lease.dismiss());
    assert!(lease.is_cancelled());
    assert_eq!(notifier.active().len(), 1);

    // idempotent
    lease.cancel();
    assert!(!lease.dismiss());

    tokio::time::sleep(Duration::from_millis(5_000)).await;
    assert!(notifier.active().is_empty());
    assert!(!other.dismiss());
}

#[tokio::test(start_paused = true)]
async fn cancel_keeps_toast_visible() {
    let notifier = ToastNotifier::new(ToastOptions::default());
    let lease = notifier.success("fica");
    lease.cancel();
    tokio::time::sleep(Duration::from_secs(30)).await;
    assert_eq!(notifier.active().len(), 1);
    assert!(lease.dismiss());
}
