//! UI layer: components, theming, icons, transitions, and the event loop.

pub mod components;
pub mod icons;
pub mod main_component;
pub mod runtime;
pub mod theme;
pub mod transition;
