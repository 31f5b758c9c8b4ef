pub mod memory;
pub mod traits;

// Re-export
pub use memory::TaskList;
pub use traits::TaskRepository;
