//! Files emitted by the Rust generator.

mod builder_rs;
mod registry_rs;

pub use builder_rs::BuilderRs;
pub use registry_rs::{REGISTRY_FILE, RegistryRs};
