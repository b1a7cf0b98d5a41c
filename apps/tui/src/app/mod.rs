// App module for stellar_scout
// Handles application state and the request/response plumbing

pub mod actions;
pub mod input;
pub mod state;

pub use actions::{ApiEvent, AppActions, Request};
pub use input::handle_input;
pub use state::{App, AppScreen};
