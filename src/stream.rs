use std::{
    any::Any,
    fmt,
    pin::Pin,
    task::{Context, Poll},
};

use futures::{ready, Stream};

use crate::{Event, EventFilter, EventKind, ExtensionFilter, KindFilter};


/// Filtering adapters for streams of [`Event`]s.
///
/// The source stream must be `Unpin`; wrap it with `Box::pin` otherwise.
pub trait EventStreamExt<K, V>: Stream<Item = Event<K, V>> + Unpin + Sized {
    /// Yields only the events of `kind`.
    fn filter_kind(self, kind: EventKind) -> FilterEvents<Self, KindFilter> {
        self.filter_events(KindFilter::new(kind))
    }

    /// Yields only the events accepted by `filter`.
    fn filter_events<F: EventFilter<K, V>>(self, filter: F) -> FilterEvents<Self, F> {
        FilterEvents::new(self, filter)
    }

    /// Yields only the events carrying an extension of type `T`.
    fn extensions<T: Any>(self) -> FilterEvents<Self, ExtensionFilter<T>> {
        self.filter_events(ExtensionFilter::new())
    }
}
impl<K, V, S> EventStreamExt<K, V> for S where S: Stream<Item = Event<K, V>> + Unpin {}

/// Stream returned by the methods of [`EventStreamExt`].
#[must_use = "streams do nothing unless polled"]
pub struct FilterEvents<S, F> {
    source: S,
    filter: F,
}

impl<S, F> FilterEvents<S, F> {
    fn new(source: S, filter: F) -> Self {
        Self { source, filter }
    }
    pub fn event_filter(&self) -> &F {
        &self.filter
    }
    pub fn into_inner(self) -> S {
        self.source
    }
}

// `filter` is never pinned.
impl<S: Unpin, F> Unpin for FilterEvents<S, F> {}

impl<K, V, S, F> Stream for FilterEvents<S, F>
where
    S: Stream<Item = Event<K, V>> + Unpin,
    F: EventFilter<K, V>,
{
    type Item = Event<K, V>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        loop {
            match ready!(Pin::new(&mut this.source).poll_next(cx)) {
                Some(event) if this.filter.test(&event) => return Poll::Ready(Some(event)),
                Some(_) => {}
                None => return Poll::Ready(None),
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.source.size_hint().1)
    }
}

impl<S, F: fmt::Debug> fmt::Debug for FilterEvents<S, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterEvents")
            .field("filter", &self.filter)
            .finish_non_exhaustive()
    }
}
