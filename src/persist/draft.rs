use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::catalog::templates::{Template, default_template, find};
use crate::foundation::config::EditorConfig;
use crate::foundation::error::{CardError, CardResult};
use crate::model::record::DataRecord;

/// Envelope version written by [`save_draft`].
pub const DRAFT_VERSION: u32 = 1;

/// Single storage slot for the serialized draft.
pub trait DraftSlot {
    fn read(&self) -> CardResult<Option<String>>;
    /// Overwrite the slot.
    fn write(&mut self, data: &str) -> CardResult<()>;
    /// Empty the slot. Removing an empty slot is not an error.
    fn remove(&mut self) -> CardResult<()>;

    fn is_occupied(&self) -> bool {
        matches!(self.read(), Ok(Some(_)))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemorySlot(Option<String>);

impl MemorySlot {
    pub fn with(data: impl Into<String>) -> Self {
        Self(Some(data.into()))
    }
}

impl DraftSlot for MemorySlot {
    fn read(&self) -> CardResult<Option<String>> {
        Ok(self.0.clone())
    }

    fn write(&mut self, data: &str) -> CardResult<()> {
        self.0 = Some(data.to_owned());
        Ok(())
    }

    fn remove(&mut self) -> CardResult<()> {
        self.0 = None;
        Ok(())
    }
}

/// Slot backed by one JSON file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_config(cfg: &EditorConfig) -> Self {
        Self::new(cfg.draft_file.clone())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DraftSlot for FileSlot {
    fn read(&self) -> CardResult<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(s) => Ok(Some(s)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(anyhow::Error::new(e)
                .context(format!("read draft '{}'", self.path.display()))
                .into()),
        }
    }

    fn write(&mut self, data: &str) -> CardResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create draft dir '{}'", parent.display()))?;
        }
        std::fs::write(&self.path, data)
            .with_context(|| format!("write draft '{}'", self.path.display()))?;
        Ok(())
    }

    fn remove(&mut self) -> CardResult<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(anyhow::Error::new(e)
                .context(format!("remove draft '{}'", self.path.display()))
                .into()),
        }
    }
}

/// Persisted envelope. Drafts written before versioning carry no `version` key and
/// read as version 1.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Draft {
    #[serde(default = "first_version")]
    pub version: u32,
    pub details: DataRecord,
    pub template_id: String,
}

fn first_version() -> u32 {
    1
}

#[derive(Clone, Debug, PartialEq)]
pub struct LoadedDraft {
    pub record: DataRecord,
    pub template: &'static Template,
    /// False when the stored template id was unknown and the default was substituted.
    pub template_known: bool,
}

#[tracing::instrument(level = "info", skip_all, fields(template = %template.id))]
pub fn save_draft(slot: &mut dyn DraftSlot, record: &DataRecord, template: &Template) -> CardResult<()> {
    let draft = Draft {
        version: DRAFT_VERSION,
        details: record.clone(),
        template_id: template.id.clone(),
    };
    let json = serde_json::to_string(&draft)?;
    slot.write(&json)?;
    tracing::debug!(bytes = json.len(), "draft saved");
    Ok(())
}

/// Read the slot. `Ok(None)` when empty. Undecodable or unknown-version drafts are
/// removed from the slot and reported as [`CardError::CorruptDraft`].
#[tracing::instrument(level = "info", skip_all)]
pub fn load_draft(slot: &mut dyn DraftSlot) -> CardResult<Option<LoadedDraft>> {
    let Some(raw) = slot.read()? else {
        return Ok(None);
    };
    let draft = match serde_json::from_str::<Draft>(&raw) {
        Ok(d) if d.version == DRAFT_VERSION => d,
        Ok(d) => return Err(discard(slot, format!("unsupported draft version {}", d.version))),
        Err(e) => return Err(discard(slot, e.to_string())),
    };
    let (template, template_known) = match find(&draft.template_id) {
        Some(t) => (t, true),
        None => {
            tracing::warn!(id = %draft.template_id, "draft names an unknown template, using default");
            (default_template(), false)
        }
    };
    Ok(Some(LoadedDraft {
        record: draft.details,
        template,
        template_known,
    }))
}

pub fn clear_draft(slot: &mut dyn DraftSlot) -> CardResult<()> {
    slot.remove()?;
    tracing::debug!("draft cleared");
    Ok(())
}

fn discard(slot: &mut dyn DraftSlot, reason: String) -> CardError {
    tracing::warn!(%reason, "discarding corrupt draft");
    if let Err(e) = slot.remove() {
        tracing::warn!(error = %e, "failed to clear corrupt draft");
    }
    CardError::corrupt_draft(reason)
}

#[cfg(test)]
#[path = "../../tests/unit/persist/draft.rs"]
mod tests;
