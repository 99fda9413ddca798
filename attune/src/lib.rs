// Copyright 2026 the Attune Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attune: an accessible tree model for screen-reader bridges.
//!
//! Attune ties the building blocks together behind one explicit handle, the
//! [`TreeContext`]:
//!
//! - `attune_tree` stores the per-frame [`Snapshot`](attune_tree::Snapshot) and navigates it.
//! - `attune_focus` tracks focus with edge-triggered change detection.
//! - `attune_text` reads, searches, and measures text ranges.
//! - [`ActionRegistry`] maps buttons to the [`Action`]s they run.
//! - [`Events`] carries the focus change and activations of one cycle to an [`EventSink`].
//!
//! ## Cycle
//!
//! 1. Apply input: [`TreeContext::handle_keyboard`], [`TreeContext::request_focus`],
//!    [`TreeContext::activate`].
//! 2. Drain: forward [`TreeContext::drain_events`] to the bridge.
//! 3. Rebuild: [`TreeContext::begin`] returns a [`Frame`] describing the whole UI;
//!    [`Frame::end`] commits it and reconciles focus and actions by id.
//! 4. Drain again for transitions requested while building.
//!
//! Events left undrained when the next rebuild begins are dropped.
//!
//! Between rebuilds the bridge queries the context by id: [`TreeContext::get_node`],
//! [`TreeContext::navigate`], [`TreeContext::get_text`], [`TreeContext::find_text`],
//! [`TreeContext::bounding_rects`], [`TreeContext::enclosing_node`], and others. Ids
//! from an older snapshot are answered with `None`.
//!
//! ## Example
//!
//! ```rust
//! use attune::{Direction, TreeContext};
//! use attune_text::{TextPoint, TextRange};
//!
//! let mut ctx = TreeContext::default();
//! let mut frame = ctx.begin();
//! let main = frame.pane("Main").unwrap();
//! let doc = frame.document("Doc").unwrap();
//! let a = frame.text("Alpha").unwrap();
//! let b = frame.text("Beta").unwrap();
//! frame.close(doc).unwrap();
//! frame.button("Close", || {}).unwrap();
//! frame.close(main).unwrap();
//! frame.end().unwrap();
//!
//! assert_eq!(ctx.navigate(doc, Direction::FirstChild), Some(a));
//! let range = TextRange::new(TextPoint::new(a, 2), TextPoint::new(b, 2));
//! assert_eq!(ctx.get_text(&range), "phaBe");
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod action;
mod config;
mod context;
mod events;
mod query;

pub use action::{Action, ActionRegistry};
pub use config::Config;
pub use context::{Frame, TreeContext};
pub use events::{EventSink, Events};

pub use attune_focus::{Step, WrapMode};
pub use attune_tree::{BuildError, Capabilities, Churn, Direction, NodeId, NodeInfo, NodeKind};
