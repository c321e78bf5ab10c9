//! Shared client-side state.
//!
//! DESIGN
//! ======
//! The page owns one state bundle (`wave::WaveState`) provided through Leptos
//! context. Every mutation goes through `WaveState::apply`, so the async
//! wallet/contract operations only ever emit `WaveEvent`s.

pub mod wave;
