pub mod sort;

// Re-export all modules
pub use sort::*;
