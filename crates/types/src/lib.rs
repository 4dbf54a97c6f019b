//! Shared type definitions for dropnav.
//!
//! Holds the menu value types used by both the configuration loader and the
//! terminal UI, plus the `Msg`/`Effect` vocabulary the UI runtime uses to
//! route events between components.

pub mod menu;

pub use menu::{IconRef, MenuId, PanelStyle};

/// Messages that can be sent to update the application state.
///
/// This enum defines the system events that can trigger state changes in the
/// application outside of direct key and mouse handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Periodic UI tick driving transitions and height animation
    Tick,
    /// Terminal resized
    Resize(u16, u16),
}

/// Side effects that can be triggered by state changes.
///
/// Components report these instead of mutating state they do not own; the
/// runtime applies them after the event that produced them has been handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Flip the open state of the nav item at the given index
    ToggleNavItem(usize),
    /// The dropdown switched its active panel
    MenuChanged { from: MenuId, to: MenuId },
    /// A leaf entry (one without a navigation target) was activated
    EntryActivated { menu: MenuId, label: String },
    /// Leave the application
    Quit,
}
