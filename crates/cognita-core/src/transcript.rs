//! Append-only, ordered record of the conversation.

use std::cell::RefCell;
use std::rc::Rc;
use cognita_types::message::Message;

/// Shared handle to the transcript. Clones see the same sequence.
///
/// There is no way to remove, replace, or reorder an entry once appended.
#[derive(Clone, Default)]
pub struct TranscriptStore {
    entries: Rc<RefCell<Vec<Message>>>,
}

impl TranscriptStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&self, message: Message) {
        self.entries.borrow_mut().push(message);
    }

    /// Owned copy of the current sequence; later appends are not reflected.
    pub fn snapshot(&self) -> Vec<Message> {
        self.entries.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    pub fn last(&self) -> Option<Message> {
        self.entries.borrow().last().cloned()
    }
}
