//! The project store
//!
//! Single owner of the project list. Every mutation that changes state is
//! followed by a save of the full list; save failures are logged and never
//! roll the in-memory state back.

use crate::error::StoreError;
use crate::ordering::move_item;
use chrono::Utc;
use labtrack_model::{
    Attachment, AttachmentId, Project, ProjectDraft, ProjectId, ProjectPatch, StepList,
};
use labtrack_persist::{Gateway, StorageBackend};
use std::collections::HashSet;

/// Ordered, persisted project list
#[derive(Debug)]
pub struct ProjectStore<B: StorageBackend> {
    projects: Vec<Project>,
    dark_mode: bool,
    gateway: Gateway<B>,
}

impl<B: StorageBackend> ProjectStore<B> {
    /// Load state through `gateway` (seed data when nothing usable is stored)
    ///
    /// Duplicate ids in stored data are replaced with fresh ones so the
    /// uniqueness invariant holds from the first read.
    #[must_use]
    pub fn hydrate(gateway: Gateway<B>) -> Self {
        let mut projects = gateway.load_projects();
        let dark_mode = gateway.load_dark_mode();
        let reassigned = dedupe_ids(&mut projects);
        if reassigned > 0 {
            tracing::warn!(reassigned, "stored projects contained duplicate ids");
        }
        tracing::debug!(count = projects.len(), dark_mode, "store hydrated");
        Self {
            projects,
            dark_mode,
            gateway,
        }
    }

    /// Current projects in display order
    #[inline]
    #[must_use]
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Number of projects
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// No projects
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Project by id
    #[must_use]
    pub fn get(&self, id: &ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| &p.id == id)
    }

    /// Display index of a project
    #[must_use]
    pub fn position(&self, id: &ProjectId) -> Option<usize> {
        self.projects.iter().position(|p| &p.id == id)
    }

    /// Every tag used in the list, de-duplicated, first-seen order
    #[must_use]
    pub fn available_tags(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.projects
            .iter()
            .flat_map(|p| p.tags.iter())
            .map(String::as_str)
            .filter(|tag| seen.insert(*tag))
            .collect()
    }

    /// Display-mode flag
    #[inline]
    #[must_use]
    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    /// Persistence gateway
    #[inline]
    #[must_use]
    pub fn gateway(&self) -> &Gateway<B> {
        &self.gateway
    }

    /// Set the display-mode flag and save it
    pub fn set_dark_mode(&mut self, enabled: bool) {
        if self.dark_mode == enabled {
            return;
        }
        self.dark_mode = enabled;
        if let Err(e) = self.gateway.save_dark_mode(enabled) {
            tracing::warn!(error = %e, "failed to save display mode");
        }
    }

    /// Create a project from `draft` at the end of the list
    pub fn append(&mut self, draft: ProjectDraft) -> Result<ProjectId, StoreError> {
        let id = self.fresh_id();
        let project = draft.into_project(id.clone())?;
        tracing::debug!(%id, name = %project.name, "appending project");
        self.projects.push(project);
        self.persist();
        Ok(id)
    }

    /// Merge `patch` into the project with `id`
    ///
    /// Returns `Ok(false)` when no project has `id`.
    pub fn update(&mut self, id: &ProjectId, patch: ProjectPatch) -> Result<bool, StoreError> {
        let Some(project) = self.projects.iter_mut().find(|p| &p.id == id) else {
            tracing::debug!(%id, "update on unknown project ignored");
            return Ok(false);
        };
        patch.apply(project)?;
        tracing::debug!(%id, "project updated");
        self.persist();
        Ok(true)
    }

    /// Remove the project with `id`
    pub fn remove(&mut self, id: &ProjectId) -> bool {
        let Some(index) = self.position(id) else {
            tracing::debug!(%id, "remove on unknown project ignored");
            return false;
        };
        self.projects.remove(index);
        tracing::debug!(%id, index, "project removed");
        self.persist();
        true
    }

    /// Move the project with `id` to `target_index`
    ///
    /// Stable move; an index past the end means the last slot.
    pub fn reposition(&mut self, id: &ProjectId, target_index: usize) -> bool {
        let Some(from) = self.position(id) else {
            tracing::debug!(%id, "reposition on unknown project ignored");
            return false;
        };
        move_item(&mut self.projects, from, target_index);
        tracing::debug!(%id, from, to = target_index, "project repositioned");
        self.persist();
        true
    }

    /// Move a step within one of a project's step lists
    pub fn reposition_step(
        &mut self,
        id: &ProjectId,
        list: StepList,
        from: usize,
        to: usize,
    ) -> bool {
        let moved = self
            .find_mut(id)
            .is_some_and(|p| move_item(p.steps_mut(list), from, to));
        if moved {
            tracing::debug!(%id, ?list, from, to, "step repositioned");
            self.persist();
        }
        moved
    }

    /// Overwrite tracked time after a session closes and stamp activity
    pub fn record_time(&mut self, id: &ProjectId, total_secs: u64) -> bool {
        let Some(project) = self.find_mut(id) else {
            return false;
        };
        project.time_tracked = total_secs;
        project.last_activity = Some(Utc::now());
        tracing::debug!(%id, total_secs, "tracked time recorded");
        self.persist();
        true
    }

    /// Append attachment metadata to a project
    pub fn add_attachment(&mut self, id: &ProjectId, attachment: Attachment) -> bool {
        let Some(project) = self.find_mut(id) else {
            return false;
        };
        project.attachments.push(attachment);
        self.persist();
        true
    }

    /// Remove attachment metadata from a project
    pub fn remove_attachment(&mut self, id: &ProjectId, attachment_id: &AttachmentId) -> bool {
        let Some(project) = self.find_mut(id) else {
            return false;
        };
        let before = project.attachments.len();
        project.attachments.retain(|a| &a.id != attachment_id);
        let removed = project.attachments.len() != before;
        if removed {
            self.persist();
        }
        removed
    }

    fn find_mut(&mut self, id: &ProjectId) -> Option<&mut Project> {
        self.projects.iter_mut().find(|p| &p.id == id)
    }

    fn fresh_id(&self) -> ProjectId {
        loop {
            let id = ProjectId::new();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }

    fn persist(&mut self) {
        if let Err(e) = self.gateway.save_projects(&self.projects) {
            tracing::warn!(error = %e, "failed to save projects");
        }
    }
}

/// Give every repeated id after its first occurrence a fresh one
fn dedupe_ids(projects: &mut [Project]) -> usize {
    let mut seen = HashSet::new();
    let mut reassigned = 0;
    for project in projects.iter_mut() {
        if !seen.insert(project.id.clone()) {
            project.id = ProjectId::new();
            seen.insert(project.id.clone());
            reassigned += 1;
        }
    }
    reassigned
}

#[cfg(test)]
mod tests {
    use super::*;
    use labtrack_model::{ModelError, Step, StepCategory};
    use labtrack_persist::{MemoryBackend, PROJECTS_KEY};
    use pretty_assertions::assert_eq;

    fn empty_store() -> ProjectStore<MemoryBackend> {
        let backend = MemoryBackend::new().with_entry(PROJECTS_KEY, "[]");
        ProjectStore::hydrate(Gateway::new(backend))
    }

    fn names<B: StorageBackend>(store: &ProjectStore<B>) -> Vec<&str> {
        store.projects().iter().map(|p| p.name.as_str()).collect()
    }

    fn stored_count(store: &ProjectStore<MemoryBackend>) -> usize {
        store.gateway().load_projects().len()
    }

    #[test]
    fn hydrate_without_data_uses_seed() {
        let store = ProjectStore::hydrate(Gateway::new(MemoryBackend::new()));
        assert_eq!(store.len(), 2);
        assert!(!store.dark_mode());
    }

    #[test]
    fn append_assigns_unique_ids_and_saves() {
        let mut store = empty_store();
        let a = store.append(ProjectDraft::new("A")).unwrap();
        let b = store.append(ProjectDraft::new("B")).unwrap();

        assert_ne!(a, b);
        assert_eq!(names(&store), vec!["A", "B"]);
        assert_eq!(stored_count(&store), 2);
    }

    #[test]
    fn append_rejects_blank_name() {
        let mut store = empty_store();
        let err = store.append(ProjectDraft::new(" "));
        assert_eq!(err, Err(StoreError::InvalidProject(ModelError::EmptyName)));
        assert!(store.is_empty());
    }

    #[test]
    fn update_preserves_identity_and_position() {
        let mut store = empty_store();
        let a = store.append(ProjectDraft::new("A")).unwrap();
        store.append(ProjectDraft::new("B")).unwrap();

        let applied = store
            .update(&a, ProjectPatch::new().with_name("A2").with_progress(70))
            .unwrap();

        assert!(applied);
        assert_eq!(names(&store), vec!["A2", "B"]);
        assert_eq!(store.get(&a).unwrap().progress.value(), 70);
        assert_eq!(store.gateway().load_projects()[0].name, "A2");
    }

    #[test]
    fn update_unknown_id_is_noop() {
        let mut store = empty_store();
        store.append(ProjectDraft::new("A")).unwrap();
        let before = store.projects().to_vec();

        let applied = store
            .update(&ProjectId::from_raw("missing"), ProjectPatch::new().with_progress(10))
            .unwrap();

        assert!(!applied);
        assert_eq!(store.projects(), before.as_slice());
    }

    #[test]
    fn remove_deletes_only_matching() {
        let mut store = empty_store();
        let a = store.append(ProjectDraft::new("A")).unwrap();
        store.append(ProjectDraft::new("B")).unwrap();

        assert!(store.remove(&a));
        assert!(!store.remove(&a));
        assert_eq!(names(&store), vec!["B"]);
        assert_eq!(stored_count(&store), 1);
    }

    #[test]
    fn reposition_moves_and_saves() {
        let mut store = empty_store();
        let ids: Vec<_> = ["A", "B", "C", "D"]
            .into_iter()
            .map(|n| store.append(ProjectDraft::new(n)).unwrap())
            .collect();

        assert!(store.reposition(&ids[0], 2));
        assert_eq!(names(&store), vec!["B", "C", "A", "D"]);

        assert!(store.reposition(&ids[3], 0));
        assert_eq!(names(&store), vec!["D", "B", "C", "A"]);

        let stored: Vec<_> = store
            .gateway()
            .load_projects()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(stored, vec!["D", "B", "C", "A"]);

        assert!(!store.reposition(&ProjectId::from_raw("missing"), 0));
    }

    #[test]
    fn reposition_step_within_list() {
        let mut store = empty_store();
        let draft = ProjectDraft::new("Steps")
            .with_step(StepList::Next, Step::new("one", StepCategory::Other))
            .with_step(StepList::Next, Step::new("two", StepCategory::Other))
            .with_step(StepList::Next, Step::new("three", StepCategory::Other));
        let id = store.append(draft).unwrap();

        assert!(store.reposition_step(&id, StepList::Next, 2, 0));
        let texts: Vec<_> = store.get(&id).unwrap().next_steps.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["three", "one", "two"]);

        assert!(!store.reposition_step(&id, StepList::Completed, 0, 1));
    }

    #[test]
    fn record_time_sets_activity() {
        let mut store = empty_store();
        let id = store.append(ProjectDraft::new("Timed")).unwrap();

        assert!(store.record_time(&id, 3600));
        let project = store.get(&id).unwrap();
        assert_eq!(project.time_tracked, 3600);
        assert!(project.last_activity.is_some());
    }

    #[test]
    fn attachments_add_and_remove() {
        let mut store = empty_store();
        let id = store.append(ProjectDraft::new("Files")).unwrap();
        let attachment = Attachment::new("counts.csv", 1024, "text/csv");
        let attachment_id = attachment.id.clone();

        assert!(store.add_attachment(&id, attachment));
        assert_eq!(store.get(&id).unwrap().attachments.len(), 1);

        assert!(store.remove_attachment(&id, &attachment_id));
        assert!(!store.remove_attachment(&id, &attachment_id));
        assert!(store.get(&id).unwrap().attachments.is_empty());
    }

    #[test]
    fn available_tags_are_deduplicated_across_projects() {
        let mut store = empty_store();
        store
            .append(ProjectDraft::new("A").with_tag("RNA-seq").with_tag("Cancer"))
            .unwrap();
        store
            .append(ProjectDraft::new("B").with_tag("Cancer").with_tag("Plant"))
            .unwrap();
        assert_eq!(store.available_tags(), vec!["RNA-seq", "Cancer", "Plant"]);
    }

    #[test]
    fn duplicate_stored_ids_are_reassigned() {
        let payload = r#"[{"id": 1, "name": "A"}, {"id": 1, "name": "B"}]"#;
        let backend = MemoryBackend::new().with_entry(PROJECTS_KEY, payload);
        let store = ProjectStore::hydrate(Gateway::new(backend));

        assert_eq!(store.len(), 2);
        assert_eq!(store.projects()[0].id.as_str(), "1");
        assert_ne!(store.projects()[1].id.as_str(), "1");
    }

    #[test]
    fn dark_mode_is_saved() {
        let mut store = empty_store();
        store.set_dark_mode(true);
        assert!(store.dark_mode());
        assert!(store.gateway().load_dark_mode());
    }
}
