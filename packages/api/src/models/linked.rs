use serde::{Deserialize, Serialize};

/// Anything with a backend id.
pub trait Identified {
    fn id(&self) -> &str;
}

/// A reference the backend may send either as a bare id or as the embedded
/// object.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Linked<T> {
    Reference(String),
    Expanded(T),
}

impl<T: Identified> Linked<T> {
    /// Id of the referenced object, whichever form was sent.
    pub fn id(&self) -> &str {
        match self {
            Linked::Reference(id) => id,
            Linked::Expanded(item) => item.id(),
        }
    }

    pub fn expanded(&self) -> Option<&T> {
        match self {
            Linked::Reference(_) => None,
            Linked::Expanded(item) => Some(item),
        }
    }

    /// The embedded object, or the matching entry of `pool` for a bare id.
    pub fn resolve<'a>(&'a self, pool: &'a [T]) -> Option<&'a T> {
        match self {
            Linked::Expanded(item) => Some(item),
            Linked::Reference(id) => pool.iter().find(|item| item.id() == id),
        }
    }
}
