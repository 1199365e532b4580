//! Process-wide shared instance with one-time initialization.
//!
//! # Responsibility
//! - Provide a single shared `Registry`, constructed at most once no
//!   matter how many threads race the first access.
//!
//! # Invariants
//! - Exactly one construction across all concurrent first callers.
//! - Every caller observes the same fully constructed instance.
//! - The instance is immutable after construction; reads need no locking.

use log::info;
use once_cell::sync::OnceCell;
use std::sync::atomic::{AtomicUsize, Ordering};
use uuid::Uuid;

static SHARED: OnceCell<Registry> = OnceCell::new();
static CONSTRUCTIONS: AtomicUsize = AtomicUsize::new(0);

/// The shared process-wide value.
///
/// Carries a generated id so callers can cheaply assert they all see the
/// same instance.
#[derive(Debug)]
pub struct Registry {
    id: Uuid,
}

impl Registry {
    fn new() -> Self {
        CONSTRUCTIONS.fetch_add(1, Ordering::Relaxed);
        let id = Uuid::new_v4();
        info!("event=registry_created module=singleton status=ok id={id}");
        Self { id }
    }

    /// Stable identity of this registry instance.
    pub fn id(&self) -> Uuid {
        self.id
    }
}

/// Returns the shared registry, constructing it on first access.
///
/// Concurrent first callers all block until the single construction
/// finishes, then proceed with the same `'static` reference. Once the
/// instance exists this is a non-blocking read.
pub fn instance() -> &'static Registry {
    SHARED.get_or_init(Registry::new)
}

/// Number of times the registry constructor has run. Stays at 1 for the
/// lifetime of the process once the instance exists.
pub fn construction_count() -> usize {
    CONSTRUCTIONS.load(Ordering::Relaxed)
}
