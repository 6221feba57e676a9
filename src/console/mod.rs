//! Admin console controller.
//!
//! The external identity provider, record store and user-management
//! functions sit behind the traits in [`services`]. [`AdminConsole`] owns
//! the application state and turns every remote failure into an inline
//! status message.

pub mod controller;
pub mod memory;
pub mod services;
pub mod state;

pub use controller::*;
pub use memory::MemoryBackend;
pub use services::*;
pub use state::*;
