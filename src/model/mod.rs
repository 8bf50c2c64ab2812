pub mod configs;
pub mod metric;
