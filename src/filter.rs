use std::{any::Any, fmt, marker::PhantomData};

use derive_ex::derive_ex;

use crate::{Event, EventKind};


/// Predicate over [`Event`]s.
///
/// Implemented for [`KindFilter`], [`ExtensionFilter`] and any `Fn(&Event<K, V>) -> bool`.
pub trait EventFilter<K, V> {
    fn test(&self, event: &Event<K, V>) -> bool;
}

impl<K, V, F> EventFilter<K, V> for F
where
    F: Fn(&Event<K, V>) -> bool,
{
    fn test(&self, event: &Event<K, V>) -> bool {
        self(event)
    }
}

/// Accepts the events of one [`EventKind`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KindFilter {
    kind: EventKind,
}

impl KindFilter {
    pub const fn new(kind: EventKind) -> Self {
        Self { kind }
    }
    pub fn kind(&self) -> EventKind {
        self.kind
    }

    /// Returns `true` if `event` is of the kind this filter was built with.
    pub fn test<K, V>(&self, event: &Event<K, V>) -> bool {
        event.kind() == self.kind
    }

    /// Converts into a closure, e.g. for [`Iterator::filter`].
    pub fn into_fn<K, V>(self) -> impl Fn(&Event<K, V>) -> bool + Copy {
        move |event| self.test(event)
    }
}
impl From<EventKind> for KindFilter {
    fn from(kind: EventKind) -> Self {
        Self::new(kind)
    }
}
impl<K, V> EventFilter<K, V> for KindFilter {
    fn test(&self, event: &Event<K, V>) -> bool {
        KindFilter::test(self, event)
    }
}

/// Accepts the events carrying an extension of type `T`.
#[derive_ex(Clone, Copy, Default, bound())]
pub struct ExtensionFilter<T>(PhantomData<fn(&T)>);

impl<T: Any> ExtensionFilter<T> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}
impl<T: Any, K, V> EventFilter<K, V> for ExtensionFilter<T> {
    fn test(&self, event: &Event<K, V>) -> bool {
        event.extension::<T>().is_some()
    }
}
impl<T> fmt::Debug for ExtensionFilter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExtensionFilter<{}>", std::any::type_name::<T>())
    }
}
