#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// The one display channel for user-visible messages. Local validation
/// failures and normalized submission results both land here, so the
/// UI treats them uniformly.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub current: Option<Toast>,
}

impl ToastState {
    /// Replace the current toast. Only the latest message is shown.
    pub fn show(&mut self, title: impl Into<String>, message: impl Into<String>, variant: ToastVariant) {
        self.current = Some(Toast {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.into(),
            message: message.into(),
            variant,
        });
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }
}

/// A single transient message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: String,
    pub title: String,
    pub message: String,
    pub variant: ToastVariant,
}

/// Visual flavor of a toast.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}
