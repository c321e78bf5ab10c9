//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep browser and formatting concerns out of page and
//! component code so those stay testable off-browser.

pub mod browser;
pub mod format;
