#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;

mod config;
mod smoother;
pub mod frame;
pub mod kernel;
pub mod node;

pub use config::{Config, ConfigError};
pub use smoother::ScanSmoother;
pub use frame::{ScanFrame, ScanMetadata};
pub use kernel::{KernelWeights, gaussian_weight};
pub use node::{FilterNode, ScanSink, ScanSource};
