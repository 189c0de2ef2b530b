//! Shared project storage for multi-component access.
//!
//! Provides a thread-safe [`ProjectStore`] shared between the dashboard views
//! and the wizard save path. Everything lives in memory; nothing survives the
//! process.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::project::{ImagePayload, Project, ProjectId, ProjectSpace, ProjectStatus, SpaceId};

/// Errors that can occur during store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The requested project does not exist.
    #[error("Project not found: {0}")]
    ProjectNotFound(String),
    /// The requested space does not exist in the project.
    #[error("Space not found: {0}")]
    SpaceNotFound(String),
}

#[derive(Debug, Default)]
struct Projects {
    by_id: HashMap<ProjectId, Project>,
    order: Vec<ProjectId>,
}

/// Thread-safe, insertion-ordered project collection.
///
/// # Example
///
/// ```
/// use reno_core::project::Project;
/// use reno_core::store::ProjectStore;
///
/// let store = ProjectStore::new();
/// let id = store.add(Project::new("Miller Whole Home Reno", "Sarah Miller"));
/// assert!(store.get(id).is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ProjectStore {
    inner: Arc<RwLock<Projects>>,
}

impl ProjectStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a project. Returns its ID.
    #[must_use = "the returned ID is the only handle to the stored project"]
    pub fn add(&self, project: Project) -> ProjectId {
        let id = project.id;
        let mut projects = self
            .inner
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        projects.order.push(id);
        projects.by_id.insert(id, project);
        id
    }

    /// Remove a project by ID.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ProjectNotFound`] if the project does not exist.
    pub fn remove(&self, id: ProjectId) -> Result<Project, StoreError> {
        let mut projects = self
            .inner
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        projects.order.retain(|&pid| pid != id);
        projects
            .by_id
            .remove(&id)
            .ok_or_else(|| StoreError::ProjectNotFound(id.to_string()))
    }

    /// Get a project by ID.
    #[must_use]
    pub fn get(&self, id: ProjectId) -> Option<Project> {
        let projects = self
            .inner
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        projects.by_id.get(&id).cloned()
    }

    /// All projects in insertion order.
    #[must_use]
    pub fn list(&self) -> Vec<Project> {
        let projects = self
            .inner
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        projects
            .order
            .iter()
            .filter_map(|id| projects.by_id.get(id))
            .cloned()
            .collect()
    }

    /// Number of projects.
    #[must_use]
    pub fn len(&self) -> usize {
        let projects = self
            .inner
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        projects.by_id.len()
    }

    /// Check whether the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Update a project using a closure.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ProjectNotFound`] if the project does not exist.
    pub fn update<F>(&self, id: ProjectId, f: F) -> Result<(), StoreError>
    where
        F: FnOnce(&mut Project),
    {
        let mut projects = self
            .inner
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let project = projects
            .by_id
            .get_mut(&id)
            .ok_or_else(|| StoreError::ProjectNotFound(id.to_string()))?;
        f(project);
        Ok(())
    }

    /// Append a space to a project.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ProjectNotFound`] if the project does not exist.
    pub fn add_space(&self, id: ProjectId, space: ProjectSpace) -> Result<SpaceId, StoreError> {
        let space_id = space.id;
        self.update(id, |project| project.spaces.push(space))?;
        Ok(space_id)
    }

    /// Replace an existing space (matched by its ID) in a project.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ProjectNotFound`] if the project does not exist.
    /// Returns [`StoreError::SpaceNotFound`] if no space with that ID exists.
    pub fn replace_space(&self, id: ProjectId, space: ProjectSpace) -> Result<(), StoreError> {
        let mut projects = self
            .inner
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let project = projects
            .by_id
            .get_mut(&id)
            .ok_or_else(|| StoreError::ProjectNotFound(id.to_string()))?;
        let slot = project
            .spaces
            .iter_mut()
            .find(|s| s.id == space.id)
            .ok_or_else(|| StoreError::SpaceNotFound(space.id.to_string()))?;
        *slot = space;
        Ok(())
    }

    /// Set a project's cover photo.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ProjectNotFound`] if the project does not exist.
    pub fn set_cover_photo(&self, id: ProjectId, photo: ImagePayload) -> Result<(), StoreError> {
        self.update(id, |project| project.cover_photo = Some(photo))
    }

    /// Set a project's lifecycle status.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ProjectNotFound`] if the project does not exist.
    pub fn set_status(&self, id: ProjectId, status: ProjectStatus) -> Result<(), StoreError> {
        self.update(id, |project| project.status = status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_get() {
        let store = ProjectStore::new();
        let id = store.add(Project::new("Smith Kitchen", "John Smith"));
        let project = store.get(id).expect("project exists");
        assert_eq!(project.name, "Smith Kitchen");
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let store = ProjectStore::new();
        store.add(Project::new("First", "A"));
        store.add(Project::new("Second", "B"));
        store.add(Project::new("Third", "C"));

        let names: Vec<_> = store.list().into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_remove() {
        let store = ProjectStore::new();
        let id = store.add(Project::new("Doomed", "D"));
        store.remove(id).expect("remove succeeds");
        assert!(store.is_empty());
        assert!(matches!(
            store.remove(id),
            Err(StoreError::ProjectNotFound(_))
        ));
    }

    #[test]
    fn test_update_nonexistent_fails() {
        let store = ProjectStore::new();
        let result = store.update(ProjectId::new(), |_| {});
        assert!(matches!(result, Err(StoreError::ProjectNotFound(_))));
    }

    #[test]
    fn test_add_and_replace_space() {
        let store = ProjectStore::new();
        let id = store.add(Project::new("Smith Kitchen", "John Smith"));

        let space = ProjectSpace::new("Kitchen");
        let space_id = store.add_space(id, space.clone()).expect("add space");

        let mut updated = space;
        updated.description = "White shaker cabinets, quartz counters.".to_string();
        store.replace_space(id, updated).expect("replace space");

        let project = store.get(id).expect("project exists");
        assert_eq!(project.spaces.len(), 1);
        assert_eq!(project.spaces[0].id, space_id);
        assert_eq!(
            project.spaces[0].description,
            "White shaker cabinets, quartz counters."
        );
    }

    #[test]
    fn test_replace_unknown_space_fails() {
        let store = ProjectStore::new();
        let id = store.add(Project::new("Smith Kitchen", "John Smith"));
        let result = store.replace_space(id, ProjectSpace::new("Ghost"));
        assert!(matches!(result, Err(StoreError::SpaceNotFound(_))));
    }

    #[test]
    fn test_set_status() {
        let store = ProjectStore::new();
        let id = store.add(Project::new("Smith Kitchen", "John Smith"));
        store
            .set_status(id, ProjectStatus::OpenJob)
            .expect("set status");
        assert_eq!(
            store.get(id).expect("exists").status,
            ProjectStatus::OpenJob
        );
    }
}
