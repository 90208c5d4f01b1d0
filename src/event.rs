use std::{
    any::Any,
    fmt::{self, Debug},
    sync::Arc,
};

use derive_ex::Ex;
use parse_display::{Display, FromStr};
use serde::{Deserialize, Serialize};


/// Reason an [`Event`] was produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, FromStr, Serialize, Deserialize)]
#[display(style = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    /// An item was inserted into the backing collection.
    Add,
    /// An item was removed from the backing collection.
    Remove,
    /// Adapter-specific event. Details are usually carried by an [`Extension`].
    Unknown,
}

impl EventKind {
    pub const ALL: [EventKind; 3] = [EventKind::Add, EventKind::Remove, EventKind::Unknown];
}

/// Change notification for a keyed item of a list adapter.
///
/// An event is immutable once built. Use `Option<K>` or `Option<V>` when the key or value may be absent.
#[derive(Clone, Serialize, Deserialize, Ex)]
#[derive_ex(PartialEq, Eq)]
pub struct Event<K, V> {
    kind: EventKind,
    key: K,
    value: V,
    #[eq(ignore)]
    #[serde(skip)]
    extension: Option<Extension>,
}

impl<K, V> Event<K, V> {
    pub fn new(kind: EventKind, key: K, value: V) -> Self {
        Self {
            kind,
            key,
            value,
            extension: None,
        }
    }
    pub fn add(key: K, value: V) -> Self {
        Self::new(EventKind::Add, key, value)
    }
    pub fn remove(key: K, value: V) -> Self {
        Self::new(EventKind::Remove, key, value)
    }
    pub fn unknown(key: K, value: V) -> Self {
        Self::new(EventKind::Unknown, key, value)
    }

    /// Attaches an opaque payload, replacing any previous one.
    pub fn with_extension(self, extension: impl Any + Send + Sync) -> Self {
        Self {
            extension: Some(Extension(Arc::new(extension))),
            ..self
        }
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }
    pub fn key(&self) -> &K {
        &self.key
    }
    pub fn value(&self) -> &V {
        &self.value
    }
    pub fn is_add(&self) -> bool {
        self.kind == EventKind::Add
    }
    pub fn is_remove(&self) -> bool {
        self.kind == EventKind::Remove
    }
    pub fn is_unknown(&self) -> bool {
        self.kind == EventKind::Unknown
    }

    /// Returns the payload if one is attached and it is a `T`.
    pub fn extension<T: Any>(&self) -> Option<&T> {
        self.extension.as_ref()?.0.downcast_ref()
    }
    pub fn has_extension(&self) -> bool {
        self.extension.is_some()
    }

    pub fn into_parts(self) -> (EventKind, K, V) {
        (self.kind, self.key, self.value)
    }

    /// Converts the key, keeping kind, value and extension.
    pub fn map_key<K2>(self, f: impl FnOnce(K) -> K2) -> Event<K2, V> {
        Event {
            kind: self.kind,
            key: f(self.key),
            value: self.value,
            extension: self.extension,
        }
    }

    /// Converts the value, keeping kind, key and extension.
    pub fn map_value<V2>(self, f: impl FnOnce(V) -> V2) -> Event<K, V2> {
        Event {
            kind: self.kind,
            key: self.key,
            value: f(self.value),
            extension: self.extension,
        }
    }
}

impl<K: Debug, V: Debug> Debug for Event<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = f.debug_struct("Event");
        d.field("kind", &self.kind)
            .field("key", &self.key)
            .field("value", &self.value);
        if let Some(extension) = &self.extension {
            d.field("extension", extension);
        }
        d.finish()
    }
}

/// Opaque payload shared by all clones of an [`Event`].
#[derive(Clone)]
pub struct Extension(Arc<dyn Any + Send + Sync>);

impl Debug for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Extension(..)")
    }
}
