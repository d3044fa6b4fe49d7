//! Invariant checks shared by the graph types of this crate.

/// Trait for validating data structure invariants.
pub trait DebugInvariants {
    /// Error describing the first violated invariant.
    type Error: std::error::Error;

    /// Validate invariants and return the first error encountered.
    fn validate_invariants(&self) -> Result<(), Self::Error>;

    /// Assert invariants in debug builds or when `strict-invariants` is enabled.
    fn debug_assert_invariants(&self) {
        #[cfg(any(debug_assertions, feature = "strict-invariants"))]
        if let Err(e) = self.validate_invariants() {
            panic!("[invariants] {}: {}", std::any::type_name::<Self>(), e);
        }
    }
}
