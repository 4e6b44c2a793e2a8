// Adapters layer: concrete output backends for the Storage port.

pub mod storage;

pub use storage::{LocalStorage, StdoutStorage};
