pub mod pagination;

#[cfg(feature = "cli")]
pub mod cli;
