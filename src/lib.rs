pub mod audio;
pub mod error;
pub mod events;
pub mod exercise;
pub mod items;
pub mod loader;
pub mod router;
pub mod selection;
// cmd and reports are modules of the binary crate (main).
