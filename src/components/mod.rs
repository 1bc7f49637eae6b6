//! Reusable UI components for the Diligence GUI

mod forms;
mod modals;

pub use forms::*;
pub use modals::*;
