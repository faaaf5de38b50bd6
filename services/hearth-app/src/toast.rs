//! Toast notifications
//!
//! [`ToastQueue`] holds the toasts currently on screen. It is installed in
//! the Leptos context by [`provide_toaster`]; components fetch the
//! [`ToastContext`] handle with [`use_toaster`] while they are being built
//! and call its `success`/`error`/... helpers later from event handlers or
//! async tasks.

use std::collections::VecDeque;

use leptos::prelude::*;

use crate::status::Severity;

pub const DEFAULT_TOAST_CAPACITY: usize = 5;

/// Kind of a toast notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastKind {
    /// Badge severity used to color a toast of this kind
    pub fn severity(&self) -> Severity {
        match self {
            ToastKind::Info => Severity::Neutral,
            ToastKind::Success => Severity::Success,
            ToastKind::Warning => Severity::Warning,
            ToastKind::Error => Severity::Danger,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Bounded queue of visible toasts, oldest first
#[derive(Debug, Clone)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
    capacity: usize,
    next_id: u64,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(DEFAULT_TOAST_CAPACITY)
    }
}

impl ToastQueue {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            toasts: VecDeque::with_capacity(capacity),
            capacity,
            next_id: 1,
        }
    }

    /// Add a toast, dropping the oldest one when full. Returns the new id.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        if self.toasts.len() >= self.capacity {
            self.toasts.pop_front();
        }
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push_back(Toast {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    /// Remove a toast, returning false if it was already gone
    pub fn dismiss(&mut self, id: u64) -> bool {
        match self.toasts.iter().position(|t| t.id == id) {
            Some(index) => {
                self.toasts.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

/// Handle to the toast queue stored in the Leptos context
#[derive(Debug, Clone, Copy)]
pub struct ToastContext(pub RwSignal<ToastQueue>);

impl ToastContext {
    pub fn push(&self, kind: ToastKind, message: impl Into<String>) {
        let message = message.into();
        self.0.update(|q| {
            q.push(kind, message);
        });
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(ToastKind::Info, message);
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message);
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.push(ToastKind::Warning, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message);
    }
}

/// Install a toast queue for the current component tree
pub fn provide_toaster() -> ToastContext {
    let context = ToastContext(RwSignal::new(ToastQueue::default()));
    provide_context(context);
    context
}

pub fn use_toaster() -> Option<ToastContext> {
    use_context::<ToastContext>()
}
