pub mod courses;
pub mod events;
pub mod service;
pub mod state;
