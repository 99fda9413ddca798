// Copyright 2026 the Attune Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attune Event State: input helpers that turn raw key state into focus gestures.
//!
//! The host samples which keys are held once per cycle and feeds that into these
//! helpers, which keep just enough history to detect edges.
//!
//! - [`button`]: [`DigitalButton`](button::DigitalButton), a held/pressed/released
//!   state with edges computed from consecutive samples.
//! - [`keyboard`]: [`Keyboard`](keyboard::Keyboard), which maps Tab, Shift+Tab, the
//!   arrow keys, and Enter onto [`Gesture`](keyboard::Gesture)s.
//!
//! ## Example
//!
//! ```rust
//! use attune_event_state::keyboard::{Gesture, Key, Keyboard};
//!
//! let mut keys = Keyboard::new();
//! keys.update(|k| k == Key::Tab);
//! assert_eq!(keys.gestures(), &[Gesture::FocusNext]);
//!
//! // Holding Tab does not repeat the gesture.
//! keys.update(|k| k == Key::Tab);
//! assert!(keys.gestures().is_empty());
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod button;
pub mod keyboard;
