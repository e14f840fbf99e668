pub mod config;
pub mod events;
pub mod gui;
pub mod picker;
pub mod sys;
