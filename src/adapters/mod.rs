// Adapters layer: concrete implementations for external systems (http, files, output).

pub mod provider;
pub mod sink;
pub mod storage;
