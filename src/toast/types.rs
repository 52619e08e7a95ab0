use crate::dom;

/// Position fixe en bas à droite, au-dessus du reste de la page.
pub const CONTAINER_STYLE: &str = "position: fixed; bottom: 20px; right: 20px; z-index: 9999;";

/// Style en ligne d'un toast, complété par sa couleur de fond.
///
/// `fadeOut` démarre à 4,6 s et finit avec le retrait automatique par défaut.
pub const TOAST_STYLE: &str = "display: flex; align-items: center; \
    justify-content: space-between; color: #fff; padding: 12px 16px; \
    margin-top: 10px; border-radius: 4px; min-width: 320px; max-width: 400px; \
    box-shadow: 0 2px 8px rgba(0,0,0,0.3); font-family: Arial, sans-serif; \
    animation: slideIn 0.4s ease, fadeOut 0.4s ease 4.6s;";

#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn class_list(self) -> String {
        match self {
            ToastKind::Success => dom::CLASS_TOAST.to_string(),
            ToastKind::Error => format!("{} {}", dom::CLASS_TOAST, dom::CLASS_TOAST_ERROR),
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            ToastKind::Success => "#1e8e3e",
            ToastKind::Error => "#c62828",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ToastKind::Success => "✅",
            ToastKind::Error => "❌",
        }
    }
}

#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub element_id: String,
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    pub fn style(&self) -> String {
        format!("background-color: {}; {}", self.kind.background(), TOAST_STYLE)
    }

    pub fn render_html(&self) -> String {
        format!(
            concat!(
                r#"<div id="{id}" class="{class}" style="{style}">"#,
                r#"<div class="toast-content" style="display: flex; align-items: center; flex-grow: 1;">"#,
                r#"<i style="margin-right: 8px; font-size: 18px;">{icon}</i><span>{message}</span></div>"#,
                r#"<div class="toast-actions" style="margin-left: 16px; display: flex; align-items: center; gap: 10px;">"#,
                r#"<span class="{close}" style="cursor: pointer; font-size: 18px;">&times;</span>"#,
                "</div></div>",
            ),
            id = self.element_id,
            class = self.kind.class_list(),
            style = self.style(),
            icon = self.kind.icon(),
            message = escape_html(&self.message),
            close = dom::CLASS_TOAST_CLOSE,
        )
    }
}

/// Conteneur créé au premier toast, puis réutilisé.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastContainer {
    pub id: String,
    pub toasts: Vec<Toast>,
}

impl ToastContainer {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            toasts: Vec::new(),
        }
    }

    pub fn style(&self) -> &'static str {
        CONTAINER_STYLE
    }

    pub(crate) fn remove(&mut self, element_id: &str) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.element_id != element_id);
        self.toasts.len() != before
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
