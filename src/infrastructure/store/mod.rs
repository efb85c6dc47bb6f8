//! Store backends

mod memory;

pub use memory::InMemoryStore;
