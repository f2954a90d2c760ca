#![doc = include_str!("../README.md")]

pub mod catalog;
pub mod error;
pub mod function2d;
pub mod functions;
pub mod info;
pub mod parallel;

pub use catalog::Function2D;
pub use error::{FunctionError, Operation, Result};
pub use function2d::TestFunction2D;
pub use functions::*;
pub use info::{Capabilities, FunctionInfo};
pub use parallel::{ParallelConfig, evaluate_batches};
