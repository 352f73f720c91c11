use std::collections::HashMap;
use crate::api::types::TextureId;

/// Load state of a texture, reported by the host loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureState {
    Pending,
    Ready,
    /// The image could not be loaded; materials using it render untextured.
    Failed,
}

#[derive(Debug, Clone)]
struct TextureEntry {
    path: String,
    state: TextureState,
}

/// Registry of textures requested by path.
///
/// `load` hands out an id immediately; the host fetches and decodes the image
/// asynchronously and reports back through `mark_loaded`. Only `Ready`
/// textures resolve, so a missing image degrades to an untextured material.
#[derive(Debug, Default)]
pub struct TextureRegistry {
    entries: Vec<TextureEntry>,
    by_path: HashMap<String, TextureId>,
}

impl TextureRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a texture. Loading the same path twice returns the same id.
    pub fn load(&mut self, path: &str) -> TextureId {
        if let Some(&id) = self.by_path.get(path) {
            return id;
        }
        let id = TextureId(self.entries.len() as u32);
        self.entries.push(TextureEntry {
            path: path.to_owned(),
            state: TextureState::Pending,
        });
        self.by_path.insert(path.to_owned(), id);
        id
    }

    /// Record the outcome of a host-side load.
    pub fn mark_loaded(&mut self, id: TextureId, ok: bool) {
        let Some(entry) = self.entries.get_mut(id.0 as usize) else {
            log::warn!("texture {:?} reported loaded but was never requested", id);
            return;
        };
        if ok {
            entry.state = TextureState::Ready;
        } else {
            log::warn!("texture '{}' failed to load, rendering untextured", entry.path);
            entry.state = TextureState::Failed;
        }
    }

    pub fn state(&self, id: TextureId) -> Option<TextureState> {
        self.entries.get(id.0 as usize).map(|e| e.state)
    }

    pub fn path(&self, id: TextureId) -> Option<&str> {
        self.entries.get(id.0 as usize).map(|e| e.path.as_str())
    }

    /// The id if the texture can be sampled this frame.
    pub fn resolve(&self, id: TextureId) -> Option<TextureId> {
        match self.state(id) {
            Some(TextureState::Ready) => Some(id),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
