//! Todo Core
//!
//! Layered state core for the todo app:
//! - domain: the `Item` record and its id
//! - observable: current-value + change-notification primitive
//! - storage: persistence capability, JSON codec, in-memory backend
//! - state: the reactive state container driving the UI

pub mod domain;
pub mod error;
pub mod id;
pub mod observable;
pub mod state;
pub mod storage;

pub use domain::{Item, ItemId};
pub use error::{StateError, StateResult, StorageError, StorageResult};
pub use id::IdGenerator;
pub use observable::{Observable, SubscriptionId};
pub use state::AppState;
pub use storage::{ItemStorage, MemoryStorage, STORAGE_KEY};
