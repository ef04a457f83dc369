// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod csv_source;
pub mod page;
pub mod plotly_mapper;
