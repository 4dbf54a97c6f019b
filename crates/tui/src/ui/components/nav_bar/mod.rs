//! Horizontal navigation bar.
//!
//! Each item is an icon button that toggles open and closed. An item carrying
//! a menu mounts a dropdown while it is open; the dropdown is rendered by
//! [`DropdownComponent`](crate::ui::components::DropdownComponent) anchored
//! under the item's last rendered area.

mod nav_bar_component;
mod state;

pub use nav_bar_component::{NAV_BAR_HEIGHT, NAV_ITEM_WIDTH, NavBarComponent};
pub use state::{NavBarState, NavItemState};
