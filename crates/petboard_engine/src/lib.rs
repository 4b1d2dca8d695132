//! Petboard engine: Pets API client and effect execution.
mod client;
mod engine;
mod persist;
mod types;

pub use client::{ApiSettings, PetsApi, ReqwestPetsApi};
pub use engine::{EngineCommand, EngineCommandSender, EngineHandle};
pub use persist::{ensure_config_dir, AtomicFileWriter, PersistError};
pub use types::{ApiFailure, EngineEvent, FailureKind, MutationOp, Pet};
