//! Shared test doubles: an in-memory index service and domain store
//!
//! The in-memory index evaluates query trees directly against stored
//! documents. It exists only to exercise the shim end to end; ranking is
//! the document's explicit rank (higher first) with the identifier as a
//! tiebreaker.

// Not every test file uses every double.
#![allow(dead_code)]

use bridgewalk::{
    DocId, Document, DomainStore, Error, FieldValue, Identified, Indexable, IndexService,
    Operator, QueryNode, QueryRequest, Result, SearchHit, SearchResults,
};
use std::cell::RefCell;
use std::collections::BTreeMap;

// ============================================================================
// MemoryIndex
// ============================================================================

#[derive(Default)]
pub struct MemoryIndex {
    indexes: RefCell<BTreeMap<String, BTreeMap<String, Document>>>,
}

impl MemoryIndex {
    pub fn new() -> Self {
        MemoryIndex::default()
    }

    pub fn document_count(&self, index: &str) -> usize {
        self.indexes
            .borrow()
            .get(index)
            .map_or(0, |docs| docs.len())
    }

    pub fn document(&self, index: &str, id: &str) -> Option<Document> {
        self.indexes.borrow().get(index)?.get(id).cloned()
    }
}

impl IndexService for MemoryIndex {
    fn execute(&self, request: &QueryRequest) -> Result<SearchResults> {
        let indexes = self.indexes.borrow();
        let docs = indexes.get(&request.index);

        let mut matched: Vec<&Document> = docs
            .map(|docs| {
                docs.values()
                    .filter(|doc| match &request.query {
                        Some(tree) => matches(tree, doc),
                        None => true,
                    })
                    .collect()
            })
            .unwrap_or_default();

        matched.sort_by(|a, b| {
            b.rank
                .unwrap_or(0)
                .cmp(&a.rank.unwrap_or(0))
                .then_with(|| a.id.cmp(&b.id))
        });

        let total = matched.len();
        let hits = matched
            .into_iter()
            .skip(request.offset)
            .take(request.limit.unwrap_or(usize::MAX))
            .map(|doc| SearchHit::new(doc.id.clone(), doc.rank.unwrap_or(0)))
            .collect();

        Ok(SearchResults { hits, total })
    }

    fn put(&self, index: &str, document: &Document) -> Result<()> {
        self.indexes
            .borrow_mut()
            .entry(index.to_string())
            .or_default()
            .insert(document.id.to_string(), document.clone());
        Ok(())
    }

    fn delete(&self, index: &str, id: &DocId) -> Result<()> {
        if let Some(docs) = self.indexes.borrow_mut().get_mut(index) {
            docs.remove(id.as_str());
        }
        Ok(())
    }
}

fn matches(tree: &QueryNode, doc: &Document) -> bool {
    match tree {
        QueryNode::Leaf { field, op, value } => doc
            .field(field)
            .map_or(false, |stored| compare(stored, *op, value)),
        QueryNode::Composite {
            connector,
            children,
            ..
        } => match connector {
            bridgewalk::Connector::And => children.iter().all(|c| matches(c, doc)),
            bridgewalk::Connector::Or => children.iter().any(|c| matches(c, doc)),
        },
    }
}

fn compare(stored: &FieldValue, op: Operator, needle: &FieldValue) -> bool {
    match op {
        Operator::Eq => text_of(stored) == text_of(needle),
        Operator::Contains => text_of(stored).contains(&text_of(needle)),
        Operator::StartsWith => text_of(stored).starts_with(&text_of(needle)),
        Operator::Gt | Operator::Gte | Operator::Lt | Operator::Lte => {
            let (a, b) = match (number_of(stored), number_of(needle)) {
                (Some(a), Some(b)) => (a, b),
                _ => return false,
            };
            match op {
                Operator::Gt => a > b,
                Operator::Gte => a >= b,
                Operator::Lt => a < b,
                Operator::Lte => a <= b,
                _ => unreachable!(),
            }
        }
    }
}

fn text_of(value: &FieldValue) -> String {
    match value {
        FieldValue::Text(s) | FieldValue::Atom(s) | FieldValue::Date(s) => s.clone(),
        FieldValue::Int(i) => i.to_string(),
        FieldValue::Float(x) => x.to_string(),
        FieldValue::Bool(b) => b.to_string(),
        FieldValue::List(items) => items.join("|"),
        FieldValue::Json(v) => v.to_string(),
        FieldValue::Null => String::new(),
    }
}

fn number_of(value: &FieldValue) -> Option<f64> {
    match value {
        FieldValue::Int(i) => Some(*i as f64),
        FieldValue::Float(x) => Some(*x),
        _ => None,
    }
}

// ============================================================================
// Failing index
// ============================================================================

/// An index whose query parser rejects everything
pub struct UnparseableIndex;

impl IndexService for UnparseableIndex {
    fn execute(&self, _request: &QueryRequest) -> Result<SearchResults> {
        Err(Error::IndexQuery("parse error".to_string()))
    }

    fn put(&self, _index: &str, _document: &Document) -> Result<()> {
        Ok(())
    }

    fn delete(&self, _index: &str, _id: &DocId) -> Result<()> {
        Ok(())
    }
}

// ============================================================================
// Person / MemoryStore
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    pub pk: u64,
    pub name: String,
    pub age: i64,
}

impl Person {
    pub fn new(pk: u64, name: &str, age: i64) -> Self {
        Person {
            pk,
            name: name.to_string(),
            age,
        }
    }
}

impl Identified for Person {
    fn identifier(&self) -> DocId {
        DocId::from(self.pk)
    }
}

impl Indexable for Person {
    fn field_value(&self, field: &str) -> Option<FieldValue> {
        match field {
            "name" => Some(FieldValue::Text(self.name.clone())),
            "corpus" => Some(FieldValue::Text(self.name.clone())),
            "age" => Some(FieldValue::Int(self.age)),
            _ => None,
        }
    }
}

#[derive(Default)]
pub struct MemoryStore {
    objects: BTreeMap<String, Person>,
    pub prefetch_seen: RefCell<Vec<Vec<String>>>,
}

impl MemoryStore {
    pub fn with_people(people: &[Person]) -> Self {
        MemoryStore {
            objects: people
                .iter()
                .map(|p| (p.pk.to_string(), p.clone()))
                .collect(),
            prefetch_seen: RefCell::new(Vec::new()),
        }
    }
}

impl DomainStore for MemoryStore {
    type Object = Person;

    fn fetch_by_ids(&self, ids: &[DocId], prefetch: &[String]) -> Result<Vec<Person>> {
        self.prefetch_seen.borrow_mut().push(prefetch.to_vec());
        Ok(ids
            .iter()
            .filter_map(|id| self.objects.get(id.as_str()).cloned())
            .collect())
    }
}
