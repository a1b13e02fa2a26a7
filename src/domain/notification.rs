use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Normal,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub message: String,
    pub severity: Severity,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            title: "Success".to_owned(),
            message: message.into(),
            severity: Severity::Normal,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            title: "Error".to_owned(),
            message: message.into(),
            severity: Severity::Error,
        }
    }
}

/// Fire-and-forget user feedback.
pub trait Notifier {
    fn notify(&mut self, toast: Toast);
}

/// Toasts waiting to be shown on the next page render.
#[derive(Debug, Default)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
}

impl ToastQueue {
    pub fn drain(&mut self) -> Vec<Toast> {
        self.toasts.drain(..).collect()
    }

    pub fn peek(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

impl Notifier for ToastQueue {
    fn notify(&mut self, toast: Toast) {
        match toast.severity {
            Severity::Normal => {
                tracing::info!(title = %toast.title, "{}", toast.message)
            }
            Severity::Error => {
                tracing::warn!(title = %toast.title, "{}", toast.message)
            }
        }
        self.toasts.push_back(toast);
    }
}
