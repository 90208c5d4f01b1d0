//! Change events emitted by list adapters and the predicates used to select them.
//!
//! ```
//! use adapter_event::{Event, EventKind, KindFilter};
//!
//! let events = vec![
//!     Event::add(1, "a"),
//!     Event::remove(2, "b"),
//!     Event::unknown(3, "c"),
//! ];
//! let added: Vec<_> = events
//!     .into_iter()
//!     .filter(KindFilter::new(EventKind::Add).into_fn())
//!     .collect();
//! assert_eq!(added, vec![Event::add(1, "a")]);
//! ```

mod event;
mod filter;
mod stream;

pub use event::*;
pub use filter::*;
pub use stream::*;
