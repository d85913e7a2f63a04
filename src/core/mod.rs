//! Core types - pure abstractions shared across the codebase.

mod page;
mod state;

pub use page::PageId;
pub use state::{
    is_healthy, is_shutdown, register_server, set_healthy, setup_shutdown_handler,
};
