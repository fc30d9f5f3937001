//! ID generator port for producing unique record identifiers.

/// Generates unique identifiers for new records.
///
/// Abstracting id generation lets tests substitute a predictable sequence
/// where the live adapter produces random UUIDs. Uniqueness against records
/// already on disk is the caller's responsibility, not the generator's.
pub trait IdGenerator: Send + Sync {
    /// Generates a new identifier string.
    fn generate_id(&self) -> String;
}
