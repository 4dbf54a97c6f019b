//! Dropdown menu with nested panels.
//!
//! The dropdown shows exactly one panel of a `MenuGraph` at a time. Activating
//! an entry with a target switches panels: the old panel slides out, the new
//! one slides in, and once it has finished entering the container height
//! animates to fit it.
//!
//! - `state`: the navigation state machine and height choreography
//! - `entry`: stateless row rendering
//! - `dropdown_component`: layout, sliding, and input routing

mod dropdown_component;
mod entry;
mod state;

pub use dropdown_component::DropdownComponent;
pub use state::DropdownState;
