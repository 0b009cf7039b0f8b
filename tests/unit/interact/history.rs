use super::*;

#[test]
fn undo_then_redo_restores_states() {
    let mut h = UndoStack::default();
    h.checkpoint(1);
    h.checkpoint(2);
    assert_eq!(h.undo(3), Some(2));
    assert_eq!(h.undo(2), Some(1));
    assert_eq!(h.undo(1), None);
    assert_eq!(h.redo(1), Some(2));
    assert_eq!(h.redo(2), Some(3));
    assert!(!h.can_redo());
}

#[test]
fn checkpoint_clears_redo() {
    let mut h = UndoStack::default();
    h.checkpoint("a");
    assert_eq!(h.undo("b"), Some("a"));
    assert!(h.can_redo());
    h.checkpoint("a");
    assert!(!h.can_redo());
}

#[test]
fn limit_drops_oldest() {
    let mut h = UndoStack::with_limit(2);
    for i in 0..5 {
        h.checkpoint(i);
    }
    assert_eq!(h.len(), 2);
    assert_eq!(h.undo(5), Some(4));
    assert_eq!(h.undo(4), Some(3));
    assert_eq!(h.undo(3), None);
}
