// Domain layer - Launch records, selections and chart descriptions
pub mod chart;
pub mod dashboard;
pub mod error;
pub mod launch;
pub mod selection;
pub mod table;
