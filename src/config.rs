//! Configuration loader and schema types.
//!
//! Settings cover the two directory paths, which files count as audio,
//! the folder names of the destination tree and the failure policy.

mod load;
mod schema;

pub use schema::*;

#[cfg(test)]
mod tests;
