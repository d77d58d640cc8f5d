//! Ordered collection of active toasts.

use crate::types::{Toast, ToastId, ToastKind};

/// Active toasts in display order (oldest first).
///
/// Ids come from a per-queue counter, so an id is never reused while the
/// queue lives, even after the toast holding it is gone.
#[derive(Debug, Default, Clone)]
pub struct ToastQueue {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a toast and return its freshly allocated id.
    pub fn push(
        &mut self,
        kind: ToastKind,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> ToastId {
        let id = ToastId::new(self.next_id);
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            kind,
            title: title.into(),
            message: message.into(),
        });
        id
    }

    /// Remove the toast with `id`. Returns `None` when it is already gone.
    pub fn remove(&mut self, id: ToastId) -> Option<Toast> {
        let pos = self.toasts.iter().position(|t| t.id == id)?;
        Some(self.toasts.remove(pos))
    }

    pub fn get(&self, id: ToastId) -> Option<&Toast> {
        self.toasts.iter().find(|t| t.id == id)
    }

    pub fn contains(&self, id: ToastId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn as_slice(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Drop every toast. Id allocation keeps counting.
    pub fn clear(&mut self) {
        self.toasts.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn push_appends_in_order() {
        let mut queue = ToastQueue::new();
        let first = queue.push(ToastKind::Success, "One", "first");
        let second = queue.push(ToastKind::Info, "Two", "second");

        assert_ne!(first, second);
        let titles: Vec<_> = queue.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["One", "Two"]);
    }

    #[test]
    fn remove_takes_only_the_matching_entry() {
        let mut queue = ToastQueue::new();
        let a = queue.push(ToastKind::Success, "A", "a");
        let b = queue.push(ToastKind::Warning, "B", "b");
        let c = queue.push(ToastKind::Info, "C", "c");

        let removed = queue.remove(b).unwrap();
        assert_eq!(removed.title, "B");
        assert_eq!(queue.len(), 2);
        assert!(queue.contains(a));
        assert!(queue.contains(c));
    }

    #[test]
    fn remove_missing_is_noop() {
        let mut queue = ToastQueue::new();
        let id = queue.push(ToastKind::Info, "T", "m");
        assert!(queue.remove(id).is_some());
        assert!(queue.remove(id).is_none());
        assert!(queue.is_empty());
    }

    #[test]
    fn ids_are_not_reused_after_clear() {
        let mut queue = ToastQueue::new();
        let before = queue.push(ToastKind::Info, "T", "m");
        queue.clear();
        let after = queue.push(ToastKind::Info, "T", "m");
        assert!(after > before);
    }
}
