pub mod components;
pub mod config;
pub mod host_events;
pub mod icons;
pub mod list_actions;
pub mod page_frame;
pub mod page_standard;
pub mod state;
