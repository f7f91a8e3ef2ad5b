//! Concrete metadata source implementations

pub mod fs;
pub mod memory;

pub use fs::FsSource;
pub use memory::MemorySource;
