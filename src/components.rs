pub mod connection_controls;
pub mod mobile_nav;
pub mod sidebar;
pub mod toast;

pub use connection_controls::ConnectionControls;
pub use mobile_nav::MobileNav;
pub use sidebar::Sidebar;
