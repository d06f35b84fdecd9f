//! Transient top-center notifications.
//!
//! `ToastHost` provides a `Signal<ToastQueue>` context; producers call
//! [`notify`] with `try_use_context::<Signal<ToastQueue>>()` so they keep
//! working (inline feedback only) when rendered without a host.
//!
//! Expiry is driven by the host's own ticker, so a toast still goes away
//! after its producer has unmounted.

use dioxus::prelude::*;

use crate::core::timing;

/// How long a toast stays up before it dismisses itself.
pub const TOAST_DURATION_MS: u64 = 4000;

/// Granularity of the host's expiry ticker.
const TICK_MS: u64 = 250;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn css_class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast--success",
            ToastKind::Error => "toast--error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub text: String,
    remaining_ms: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastQueue {
    next_id: u64,
    items: Vec<Toast>,
}

impl ToastQueue {
    pub fn push(&mut self, kind: ToastKind, text: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Toast {
            id,
            kind,
            text: text.into(),
            remaining_ms: TOAST_DURATION_MS,
        });
        id
    }

    /// Age every toast by `elapsed_ms` and drop the expired ones.
    pub fn tick(&mut self, elapsed_ms: u64) {
        for toast in &mut self.items {
            toast.remaining_ms = toast.remaining_ms.saturating_sub(elapsed_ms);
        }
        self.items.retain(|toast| toast.remaining_ms > 0);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Remove toast `id`; `false` if it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|toast| toast.id != id);
        self.items.len() != before
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }
}

/// Show a toast; the host dismisses it after [`TOAST_DURATION_MS`].
pub fn notify(toasts: Option<Signal<ToastQueue>>, kind: ToastKind, text: impl Into<String>) {
    if let Some(mut toasts) = toasts {
        toasts.with_mut(|queue| queue.push(kind, text));
    }
}

#[component]
pub fn ToastHost(children: Element) -> Element {
    let mut toasts = use_context_provider(|| Signal::new(ToastQueue::default()));

    use_future(move || async move {
        loop {
            timing::sleep_ms(TICK_MS).await;
            if !toasts.peek().is_empty() {
                toasts.with_mut(|queue| queue.tick(TICK_MS));
            }
        }
    });

    let visible: Vec<(u64, &'static str, String)> = toasts
        .read()
        .items()
        .iter()
        .map(|toast| (toast.id, toast.kind.css_class(), toast.text.clone()))
        .collect();

    rsx! {
        {children}

        div { class: "toast-stack", role: "status", aria_live: "polite",
            for (id, modifier, text) in visible {
                div {
                    key: "{id}",
                    class: "toast {modifier}",
                    onclick: move |_| {
                        toasts.with_mut(|queue| {
                            queue.dismiss(id);
                        });
                    },
                    "{text}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_ordered() {
        let mut queue = ToastQueue::default();
        let a = queue.push(ToastKind::Success, "saved");
        let b = queue.push(ToastKind::Error, "failed");
        assert_ne!(a, b);

        let texts: Vec<_> = queue.items().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["saved", "failed"]);
    }

    #[test]
    fn dismiss_removes_only_the_target() {
        let mut queue = ToastQueue::default();
        let a = queue.push(ToastKind::Success, "one");
        let b = queue.push(ToastKind::Error, "two");

        assert!(queue.dismiss(a));
        assert!(!queue.dismiss(a));
        assert_eq!(queue.items().len(), 1);
        assert_eq!(queue.items()[0].id, b);
    }

    #[test]
    fn ids_are_not_reused_after_dismissal() {
        let mut queue = ToastQueue::default();
        let a = queue.push(ToastKind::Success, "one");
        queue.dismiss(a);
        let b = queue.push(ToastKind::Success, "two");
        assert_ne!(a, b);
    }

    #[test]
    fn toasts_expire_after_their_duration() {
        let mut queue = ToastQueue::default();
        queue.push(ToastKind::Success, "posted");
        queue.tick(TOAST_DURATION_MS - TICK_MS);
        let late = queue.push(ToastKind::Error, "failed");

        queue.tick(TICK_MS);
        assert_eq!(queue.items().len(), 1);
        assert_eq!(queue.items()[0].id, late);

        queue.tick(TOAST_DURATION_MS);
        assert!(queue.is_empty());
    }

    #[test]
    fn notify_without_host_is_a_no_op() {
        notify(None, ToastKind::Error, "nobody listening");
    }
}
