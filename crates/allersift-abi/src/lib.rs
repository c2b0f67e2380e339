//! Allersift ABI crate: stable contracts shared by the inference engine and
//! the model backends that drive it.

pub mod backend;
pub mod batch;
pub mod config;
pub mod error;
pub mod token;

pub use backend::*;
pub use batch::*;
pub use config::*;
pub use error::*;
pub use token::*;
