// Application layer - Use cases behind the dashboard controls
pub mod chart_service;
pub mod launch_source;
pub mod layout_service;
