pub mod actions;
pub mod bindings;
pub mod components;
pub mod controller;
pub mod events;
pub mod physics;
