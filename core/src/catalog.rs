use serde::Deserialize;

/// Built-in thumbnail for a project list item.
#[derive(Clone, Copy, Debug)]
pub struct ProjectCatalogEntry {
    pub id: &'static str,
    pub image: &'static str,
}

pub const PROJECT_CATALOG: &[ProjectCatalogEntry] = &[
    ProjectCatalogEntry {
        id: "project-1",
        image: "images/project-1-thumb.jpg",
    },
    ProjectCatalogEntry {
        id: "project-2",
        image: "images/project-2-thumb.jpg",
    },
    ProjectCatalogEntry {
        id: "project-3",
        image: "images/project-3-thumb.jpg",
    },
    ProjectCatalogEntry {
        id: "project-4",
        image: "images/project-4-thumb.jpg",
    },
];

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ProjectEntry {
    pub id: String,
    pub image: String,
}

/// Lookup from project identifier to preview image path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectCatalog {
    entries: Vec<ProjectEntry>,
}

impl ProjectCatalog {
    /// Entries with a blank id or image are dropped.
    pub fn from_entries(entries: Vec<ProjectEntry>) -> Self {
        let entries = entries
            .into_iter()
            .filter_map(|entry| {
                let id = entry.id.trim();
                let image = entry.image.trim();
                if id.is_empty() || image.is_empty() {
                    return None;
                }
                Some(ProjectEntry {
                    id: id.to_string(),
                    image: image.to_string(),
                })
            })
            .collect();
        Self { entries }
    }

    pub fn builtin() -> Self {
        Self::from_entries(
            PROJECT_CATALOG
                .iter()
                .map(|entry| ProjectEntry {
                    id: entry.id.to_string(),
                    image: entry.image.to_string(),
                })
                .collect(),
        )
    }

    pub fn image_for(&self, project_id: &str) -> Option<&str> {
        let trimmed = project_id.trim();
        self.entries
            .iter()
            .find(|entry| entry.id == trimmed)
            .map(|entry| entry.image.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ProjectCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
