// Adapters layer: concrete implementations of the domain ports (scene host, storage, exporters).

pub mod export;
pub mod memory;
pub mod storage;
