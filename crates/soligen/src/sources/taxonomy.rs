//! Hierarchical class taxonomy.

use std::collections::{BTreeMap, HashMap, HashSet, VecDeque};
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use soligen_vocab::normalize_tag;
use thiserror::Error;
use tracing::debug;

/// Read-only access to a hierarchical class graph.
///
/// Implementations must be idempotent: the engine may call them any number of
/// times per formatting call and never mutates them.
pub trait TaxonomyHandle {
    /// List the members of a category down to `max_depth` levels below its
    /// root class. Unknown categories have no members.
    fn list_members(&self, category: &str, max_depth: usize) -> Vec<&ClassRecord>;
}

/// One class of the taxonomy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassRecord {
    /// Stable identity of the class.
    pub iri: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub preferred_label: Option<String>,
    #[serde(default)]
    pub alternative_labels: Vec<String>,
    #[serde(default)]
    pub definition: String,
    /// IRIs of the parent classes.
    #[serde(default)]
    pub sub_class_of: Vec<String>,
}

impl ClassRecord {
    /// Human-readable labels of this class: label, preferred label, then
    /// alternative labels, skipping absent and blank ones.
    pub fn label_choices(&self) -> Vec<&str> {
        self.label
            .iter()
            .chain(self.preferred_label.iter())
            .chain(self.alternative_labels.iter())
            .map(String::as_str)
            .filter(|label| !label.trim().is_empty())
            .collect()
    }
}

/// Errors that occur while loading a taxonomy.
#[derive(Debug, Error)]
pub enum TaxonomyError {
    /// File I/O error when reading the taxonomy.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The taxonomy document is not valid JSON of the expected shape.
    #[error("invalid taxonomy document: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },

    /// Two classes share an IRI.
    #[error("duplicate class '{iri}'")]
    DuplicateClass { iri: String },

    /// A class names a parent that is not in the graph.
    #[error("class '{iri}' refers to unknown parent '{parent}'")]
    UnknownParent { iri: String, parent: String },

    /// A category root is not in the graph.
    #[error("category '{category}' refers to unknown root class '{root}'")]
    UnknownRoot { category: String, root: String },
}

/// Serialized form of a taxonomy document.
#[derive(Debug, Deserialize)]
struct TaxonomyDocument {
    #[serde(default)]
    categories: BTreeMap<String, String>,
    #[serde(default)]
    classes: Vec<ClassRecord>,
}

/// An in-memory class graph with named category roots.
///
/// Members of a category are the descendants of its root class, found by
/// breadth-first traversal. Traversal order follows class insertion order, so
/// member lists are deterministic.
///
/// # Example
///
/// ```
/// use soligen::sources::{ClassGraph, TaxonomyHandle};
///
/// let graph = ClassGraph::from_json_str(r#"{
///     "categories": {"Industry": "ex:Industry"},
///     "classes": [
///         {"iri": "ex:Industry", "label": "Industry"},
///         {"iri": "ex:Legal", "label": "Legal Services", "sub_class_of": ["ex:Industry"]}
///     ]
/// }"#).unwrap();
///
/// let members = graph.list_members("industry", 1);
/// assert_eq!(members.len(), 1);
/// assert_eq!(members[0].iri, "ex:Legal");
/// ```
#[derive(Debug, Default)]
pub struct ClassGraph {
    classes: HashMap<String, ClassRecord>,
    children: HashMap<String, Vec<String>>,
    roots: HashMap<String, String>,
}

impl ClassGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a graph from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, TaxonomyError> {
        let document: TaxonomyDocument = serde_json::from_str(json)?;
        let mut graph = ClassGraph::new();
        for class in document.classes {
            graph.insert_class(class)?;
        }
        graph.link_parents()?;
        for (category, root) in document.categories {
            graph.set_category_root(&category, root)?;
        }
        debug!(
            classes = graph.classes.len(),
            categories = graph.roots.len(),
            "loaded taxonomy"
        );
        Ok(graph)
    }

    /// Load a graph from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TaxonomyError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| TaxonomyError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Insert a class. Parent links are recorded for parents already present;
    /// call [`ClassGraph::link_parents`] after bulk inserts to validate them.
    pub fn insert_class(&mut self, class: ClassRecord) -> Result<(), TaxonomyError> {
        if self.classes.contains_key(&class.iri) {
            return Err(TaxonomyError::DuplicateClass { iri: class.iri });
        }
        for parent in &class.sub_class_of {
            self.children
                .entry(parent.clone())
                .or_default()
                .push(class.iri.clone());
        }
        self.classes.insert(class.iri.clone(), class);
        Ok(())
    }

    /// Check that every recorded parent link points at a known class.
    pub fn link_parents(&self) -> Result<(), TaxonomyError> {
        let mut parents: Vec<&String> = self.children.keys().collect();
        parents.sort();
        for parent in parents {
            if !self.classes.contains_key(parent) {
                let mut orphans = self.children[parent].clone();
                orphans.sort();
                return Err(TaxonomyError::UnknownParent {
                    iri: orphans.into_iter().next().unwrap_or_default(),
                    parent: parent.clone(),
                });
            }
        }
        Ok(())
    }

    /// Name the root class of a category. The category name is normalized.
    pub fn set_category_root(
        &mut self,
        category: &str,
        root: impl Into<String>,
    ) -> Result<(), TaxonomyError> {
        let root = root.into();
        let category = normalize_tag(category);
        if !self.classes.contains_key(&root) {
            return Err(TaxonomyError::UnknownRoot { category, root });
        }
        self.roots.insert(category, root);
        Ok(())
    }

    /// Look up a class by IRI.
    pub fn get(&self, iri: &str) -> Option<&ClassRecord> {
        self.classes.get(iri)
    }

    /// Number of classes in the graph.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// True if the graph holds no classes.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Root class IRI of a category, if the category is known.
    pub fn category_root(&self, category: &str) -> Option<&str> {
        self.roots.get(category).map(String::as_str)
    }
}

impl TaxonomyHandle for ClassGraph {
    fn list_members(&self, category: &str, max_depth: usize) -> Vec<&ClassRecord> {
        let Some(root) = self.roots.get(category) else {
            return Vec::new();
        };

        let mut members = Vec::new();
        let mut visited: HashSet<&str> = HashSet::from([root.as_str()]);
        let mut queue: VecDeque<(&str, usize)> = VecDeque::from([(root.as_str(), 0)]);
        while let Some((iri, depth)) = queue.pop_front() {
            if depth >= max_depth {
                continue;
            }
            let Some(children) = self.children.get(iri) else {
                continue;
            };
            for child in children {
                if !visited.insert(child.as_str()) {
                    continue;
                }
                if let Some(class) = self.classes.get(child) {
                    members.push(class);
                    queue.push_back((child.as_str(), depth + 1));
                }
            }
        }
        members
    }
}
