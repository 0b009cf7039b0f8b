/// Undo/redo port. The editor pushes a snapshot before each discrete mutation.
pub trait History<T> {
    /// Record the state before a mutation. Clears the redo branch.
    fn checkpoint(&mut self, snapshot: T);
    /// Swap `current` for the most recent checkpoint.
    fn undo(&mut self, current: T) -> Option<T>;
    fn redo(&mut self, current: T) -> Option<T>;
    fn can_undo(&self) -> bool;
    fn can_redo(&self) -> bool;
}

pub const DEFAULT_HISTORY_LIMIT: usize = 100;

/// Bounded in-memory history; the oldest checkpoint is dropped past `limit`.
#[derive(Clone, Debug)]
pub struct UndoStack<T> {
    past: Vec<T>,
    future: Vec<T>,
    limit: usize,
}

impl<T> Default for UndoStack<T> {
    fn default() -> Self {
        Self::with_limit(DEFAULT_HISTORY_LIMIT)
    }
}

impl<T> UndoStack<T> {
    pub fn with_limit(limit: usize) -> Self {
        Self {
            past: Vec::new(),
            future: Vec::new(),
            limit: limit.max(1),
        }
    }

    pub fn len(&self) -> usize {
        self.past.len()
    }

    pub fn is_empty(&self) -> bool {
        self.past.is_empty()
    }
}

impl<T> History<T> for UndoStack<T> {
    fn checkpoint(&mut self, snapshot: T) {
        if self.past.len() == self.limit {
            self.past.remove(0);
        }
        self.past.push(snapshot);
        self.future.clear();
    }

    fn undo(&mut self, current: T) -> Option<T> {
        let prev = self.past.pop()?;
        self.future.push(current);
        Some(prev)
    }

    fn redo(&mut self, current: T) -> Option<T> {
        let next = self.future.pop()?;
        self.past.push(current);
        Some(next)
    }

    fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/interact/history.rs"]
mod tests;
