// Domain layer - pure dashboard types, no I/O
pub mod dataset;
pub mod error;
pub mod filters;
pub mod metric;
pub mod navigation;
pub mod page;
