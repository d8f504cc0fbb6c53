//! Read-only collaborators the editor consults: datasets, process types, and the
//! notification side channel.

pub mod dataset;
pub mod notify;
pub mod process;

pub use dataset::*;
pub use notify::*;
pub use process::*;
