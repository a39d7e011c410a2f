//! Application layer: the generator chain and its orchestration.

pub mod error;
pub mod generators;
pub mod ports;
pub mod service;

pub use error::ApplicationError;
pub use generators::{
    Generator, MappingGenerator, Outcome, SerializerGenerator, SkeletonGenerator,
};
pub use service::{GenerateService, RunSummary};
