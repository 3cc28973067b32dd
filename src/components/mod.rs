//! Page component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shell components (`site_header`, `hero`, `section_card`, `flow_steps`,
//! `site_footer`) are stateless presentation. The widget pair (`demo_panel`,
//! `history_panel`) reads and writes shared assessment state from a Leptos
//! context provider.

pub mod demo_panel;
pub mod flow_steps;
pub mod hero;
pub mod history_panel;
pub mod section_card;
pub mod site_footer;
pub mod site_header;
