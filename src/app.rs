pub mod engine;
pub mod error;
pub mod events;
pub mod io_service;
pub mod settings;
pub mod tool_manager;
