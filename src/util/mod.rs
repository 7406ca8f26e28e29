//! Utility helpers shared across the controller and browser modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate environment concerns (storage backends, key
//! events, listener lifetimes) from the page state so each piece can be
//! exercised natively.

pub mod keyboard;
pub mod storage;
pub mod subscription;
