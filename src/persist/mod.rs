//! Draft persistence: one opaque key-value slot holding the versioned draft envelope.

pub mod draft;

pub use draft::{
    DRAFT_VERSION, Draft, DraftSlot, FileSlot, LoadedDraft, MemorySlot, clear_draft, load_draft,
    save_draft,
};
