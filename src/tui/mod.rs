mod app;
pub mod content;
pub mod handler;
pub mod message;
pub mod state;
pub mod view;

pub use app::start;
