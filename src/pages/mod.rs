//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The app has a single route; `home` assembles the shell sections and the
//! demo widget from `components`.

pub mod home;
