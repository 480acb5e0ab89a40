// Application layer - data generation, page views and session orchestration
pub mod dashboard_service;
pub mod generator;
pub mod page_data;
pub mod page_views;
pub mod session;
pub mod session_store;
pub mod view_model;
