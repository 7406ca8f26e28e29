//! # itinerary
//!
//! Client-side enhancement layer for a static, single-page trip itinerary.
//! Compiled to WebAssembly and attached to server-free markup: collapsible
//! day sections, a persisted booking checklist, a light/dark theme, smooth
//! in-page navigation with scroll-spy, bulk expand/collapse/print, keyboard
//! shortcuts, and a floating scroll-to-top control.
//!
//! The browser layer only scans the page and applies [`effect::Effect`]s;
//! every decision lives in [`itinerary::Itinerary`] so it can be tested
//! without a DOM.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`itinerary`] | Top-level controller owning all page state |
//! | [`effect`] | DOM mutations requested by the controller |
//! | [`page`] | Snapshot of the static markup taken at load |
//! | [`state`] | Theme, sections, bookings, nav spy, scroll-to-top |
//! | [`config`] | Typed configuration with validated overrides |
//! | [`util`] | Storage adapter, keyboard mapping, subscriptions |
//! | [`components`] | Leptos components mounted into the page |
//! | [`consts`] | Default keys, delays, offsets and colors |
//! | `browser` | `csr`-only DOM wiring and wasm entry points |

pub mod components;
pub mod config;
pub mod consts;
pub mod effect;
pub mod itinerary;
pub mod page;
pub mod state;
pub mod util;

#[cfg(feature = "csr")]
pub mod browser;
