//! Shared application state.
//!
//! SYSTEM CONTEXT
//! ==============
//! State structs here are plain data with pure transition methods. Components
//! wrap them in an `RwSignal` provided through context at the app root, so
//! the demo form and the history panel observe the same widget state.

pub mod assess;
