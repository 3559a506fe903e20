pub mod kv;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStore;

pub use kv::{load_json, remove, save_json, KeyValueStore};

/// Platform-appropriate durable store: `localStorage` in the browser,
/// process memory everywhere else.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type DefaultStore = LocalStore;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type DefaultStore = MemoryStore;
