//! Reusable view components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything here renders out of the shared signals registered in `app`:
//! the chat panel drives the transcript, the analysis panel renders one
//! report, and the theme toggle flips the persisted preference.

pub mod analysis_panel;
pub mod chat_panel;
pub mod theme_toggle;
