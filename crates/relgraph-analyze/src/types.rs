//! Relationship and analysis types.

use std::collections::HashMap;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Node identifier → free-text description.
pub type DescriptionIndex = HashMap<String, String>;

/// A (subject, relation, object) triple.
///
/// Deserializes from either `{"subject", "relation", "object"}` or a
/// three-element array; always serializes as the object form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RelationshipRepr")]
pub struct Relationship {
    pub subject: String,
    pub relation: String,
    pub object: String,
}

impl Relationship {
    pub fn new(
        subject: impl Into<String>,
        relation: impl Into<String>,
        object: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            relation: relation.into(),
            object: object.into(),
        }
    }
}

impl<S, R, O> From<(S, R, O)> for Relationship
where
    S: Into<String>,
    R: Into<String>,
    O: Into<String>,
{
    fn from((subject, relation, object): (S, R, O)) -> Self {
        Self::new(subject, relation, object)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RelationshipRepr {
    Object {
        subject: String,
        relation: String,
        object: String,
    },
    Triple(String, String, String),
}

impl From<RelationshipRepr> for Relationship {
    fn from(repr: RelationshipRepr) -> Self {
        match repr {
            RelationshipRepr::Object {
                subject,
                relation,
                object,
            } => Self::new(subject, relation, object),
            RelationshipRepr::Triple(subject, relation, object) => {
                Self::new(subject, relation, object)
            }
        }
    }
}

/// Normalized out-degree of a single node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CentralityScore {
    pub node: String,
    pub score: f64,
}

/// Objects sharing one relation label under one subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationGroup {
    pub relation: String,
    pub objects: Vec<String>,
}

/// All relations of one subject, in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectGroup {
    pub subject: String,
    pub relations: Vec<RelationGroup>,
    relation_index: HashMap<String, usize>,
}

impl SubjectGroup {
    fn new(subject: &str) -> Self {
        Self {
            subject: subject.to_string(),
            relations: Vec::new(),
            relation_index: HashMap::new(),
        }
    }

    /// Objects recorded under `relation`, in input order.
    pub fn objects(&self, relation: &str) -> Option<&[String]> {
        self.relation_index
            .get(relation)
            .map(|&i| self.relations[i].objects.as_slice())
    }

    fn push(&mut self, relation: &str, object: &str) {
        let idx = match self.relation_index.get(relation) {
            Some(&i) => i,
            None => {
                self.relations.push(RelationGroup {
                    relation: relation.to_string(),
                    objects: Vec::new(),
                });
                let i = self.relations.len() - 1;
                self.relation_index.insert(relation.to_string(), i);
                i
            }
        };
        self.relations[idx].objects.push(object.to_string());
    }
}

/// Subject → relation → objects, keeping first-seen order at every level.
///
/// Only subjects are keys; a node that only ever appears as an object has no
/// entry here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupedRelationships {
    groups: Vec<SubjectGroup>,
    subject_index: HashMap<String, usize>,
}

impl GroupedRelationships {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one triple, creating the subject and relation entries if absent.
    pub fn push(&mut self, subject: &str, relation: &str, object: &str) {
        let idx = match self.subject_index.get(subject) {
            Some(&i) => i,
            None => {
                self.groups.push(SubjectGroup::new(subject));
                let i = self.groups.len() - 1;
                self.subject_index.insert(subject.to_string(), i);
                i
            }
        };
        self.groups[idx].push(relation, object);
    }

    pub fn get(&self, subject: &str) -> Option<&SubjectGroup> {
        self.subject_index.get(subject).map(|&i| &self.groups[i])
    }

    /// Shorthand for `get(subject)?.objects(relation)`.
    pub fn objects(&self, subject: &str, relation: &str) -> Option<&[String]> {
        self.get(subject)?.objects(relation)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SubjectGroup> {
        self.groups.iter()
    }

    pub fn subjects(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|g| g.subject.as_str())
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl Serialize for GroupedRelationships {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for group in &self.groups {
            map.serialize_entry(&group.subject, &RelationsView(&group.relations))?;
        }
        map.end()
    }
}

struct RelationsView<'a>(&'a [RelationGroup]);

impl Serialize for RelationsView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for rel in self.0 {
            map.serialize_entry(&rel.relation, &rel.objects)?;
        }
        map.end()
    }
}

/// Basic statistics for a relationship graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStats {
    #[serde(rename = "nodes")]
    pub node_count: usize,
    #[serde(rename = "edges")]
    pub edge_count: usize,
    #[serde(rename = "connectedComponents")]
    pub connected_components: usize,
}
