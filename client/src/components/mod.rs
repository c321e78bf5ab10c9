//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render one piece of the wave page each and read or update the
//! shared `RwSignal<WaveState>` context provided by `app::App`.

pub mod connect_button;
pub mod wave_count;
pub mod wave_form;
pub mod wave_list;
