pub mod events;
pub mod show;
pub mod view;
