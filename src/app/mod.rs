//! Terminal application shell: theme and the workbench that hosts the store.

pub mod theme;
pub mod workbench;

pub use workbench::Workbench;
