use thiserror::Error;

/// Error types for `DVec` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum DVecError {
    /// Checked access or removal was attempted on an empty container
    #[error("Operation on empty vector")]
    Empty,
    /// The allocator could not provide storage for the requested growth
    #[error("Allocation failed: could not obtain storage for {elements} elements")]
    AllocationFailed {
        /// Number of element slots requested from the allocator
        elements: usize,
    },
}
