pub mod manager;
pub mod store;

pub use manager::{CartItem, CartManager};
pub use store::{CartStore, FileCartStore, MemoryCartStore};
