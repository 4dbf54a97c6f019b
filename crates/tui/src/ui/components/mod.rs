//! UI components: nav bar, dropdown, hint bar.

pub mod component;
pub mod dropdown;
pub mod hint_bar;
pub mod nav_bar;

pub use component::*;
pub use dropdown::DropdownComponent;
pub use hint_bar::HintBarComponent;
pub use nav_bar::NavBarComponent;
