//! Service context bundling the port trait objects.

use crate::adapters::live::{LiveFileSystem, LiveIdGenerator};
use crate::adapters::memory::{MemoryFileSystem, SequenceIdGenerator};
use crate::ports::filesystem::FileSystem;
use crate::ports::id_gen::IdGenerator;

/// Bundles the port trait objects into a single context.
///
/// Each field provides access to one external boundary. Constructors wire up
/// different adapter implementations (live, in-memory); the service never
/// touches the disk or the random-number generator except through these.
pub struct ServiceContext {
    /// Filesystem for record I/O.
    pub fs: Box<dyn FileSystem>,
    /// Id generator for new cart identifiers.
    pub id_gen: Box<dyn IdGenerator>,
}

impl ServiceContext {
    /// Creates a live context with real disk I/O and random UUIDs.
    #[must_use]
    pub fn live() -> Self {
        Self { fs: Box::new(LiveFileSystem), id_gen: Box::new(LiveIdGenerator::new()) }
    }

    /// Creates an in-memory context for tests: hash-map filesystem and
    /// sequential cart ids.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            fs: Box::new(MemoryFileSystem::new()),
            id_gen: Box::new(SequenceIdGenerator::new("cart")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_memory_context_generates_sequential_ids() {
        let ctx = ServiceContext::in_memory();
        assert_eq!(ctx.id_gen.generate_id(), "cart-0");
        assert_eq!(ctx.id_gen.generate_id(), "cart-1");
    }

    #[tokio::test]
    async fn in_memory_context_starts_empty() {
        let ctx = ServiceContext::in_memory();
        assert!(!ctx.fs.exists(std::path::Path::new("/data")).await);
    }
}
