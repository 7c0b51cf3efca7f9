// Adapters layer: concrete implementations of the domain ports (tabular
// sources and listing stores).

pub mod csv_source;
pub mod memory_store;
