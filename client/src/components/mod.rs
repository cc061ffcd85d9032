//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render form controls and the notification surface; pages own
//! the state they display.

pub mod text_field;
pub mod toast_stack;
