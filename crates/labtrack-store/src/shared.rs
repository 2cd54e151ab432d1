//! Shared store handle for multi-threaded hosts
//!
//! Mutations are not atomic across fields, so every access goes through a
//! single mutex: one writer at a time, readers see whole mutations.

use crate::store::ProjectStore;
use labtrack_model::Project;
use labtrack_persist::StorageBackend;
use parking_lot::Mutex;
use std::sync::Arc;

/// Cloneable, mutex-guarded [`ProjectStore`]
#[derive(Debug)]
pub struct SharedStore<B: StorageBackend> {
    inner: Arc<Mutex<ProjectStore<B>>>,
}

impl<B: StorageBackend> Clone for SharedStore<B> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<B: StorageBackend> SharedStore<B> {
    /// Wrap a store
    #[inline]
    #[must_use]
    pub fn new(store: ProjectStore<B>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Run `f` with read access
    pub fn read<R>(&self, f: impl FnOnce(&ProjectStore<B>) -> R) -> R {
        f(&self.inner.lock())
    }

    /// Run `f` as the sole writer
    pub fn write<R>(&self, f: impl FnOnce(&mut ProjectStore<B>) -> R) -> R {
        f(&mut self.inner.lock())
    }

    /// Copy of the current list
    #[must_use]
    pub fn snapshot(&self) -> Vec<Project> {
        self.read(|store| store.projects().to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use labtrack_model::ProjectDraft;
    use labtrack_persist::{Gateway, MemoryBackend, PROJECTS_KEY};
    use std::collections::HashSet;
    use std::thread;

    #[test]
    fn concurrent_appends_are_serialized() {
        let backend = MemoryBackend::new().with_entry(PROJECTS_KEY, "[]");
        let shared = SharedStore::new(ProjectStore::hydrate(Gateway::new(backend)));

        let handles: Vec<_> = (0..4)
            .map(|t| {
                let shared = shared.clone();
                thread::spawn(move || {
                    for i in 0..25 {
                        shared
                            .write(|s| s.append(ProjectDraft::new(format!("p{t}-{i}"))))
                            .unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let projects = shared.snapshot();
        assert_eq!(projects.len(), 100);
        let ids: HashSet<_> = projects.iter().map(|p| p.id.clone()).collect();
        assert_eq!(ids.len(), 100);
        assert_eq!(shared.read(|s| s.gateway().load_projects().len()), 100);
    }
}
