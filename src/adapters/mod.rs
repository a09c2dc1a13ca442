// Adapters layer: concrete implementations of the domain ports.

pub mod fs_store;
