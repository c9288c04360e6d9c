mod api_server;
pub mod map_page;

pub use api_server::{status_for, ApiServer, ApiState, HealthResponse};
