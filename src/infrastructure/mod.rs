// Infrastructure layer - configuration, session storage and HTTP rendering
pub mod config;
pub mod html;
pub mod http_response;
pub mod memory_store;
pub mod svg;
