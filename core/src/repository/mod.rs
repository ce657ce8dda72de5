pub mod file;
pub mod memory;
pub mod traits;

pub use file::{default_data_dir, FileGameStore};
pub use memory::MemoryGameStore;
pub use traits::{sort_by_date, GameStore};
