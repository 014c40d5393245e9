// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_event_state --heading-base-level=0

//! Understory Event State: state managers for continuous UI gestures.
//!
//! This crate provides small, focused state machines for interactions that
//! span many input events. Each module handles one piece:
//!
//! - [`gesture`]: Track the `Idle → Active → Idle` lifecycle of a gesture kind
//!   and decide when transient values are updated, committed or discarded
//! - [`drag`]: Convert raw pointer positions into cumulative pan phases
//! - [`pinch`]: Convert two touch points into cumulative zoom phases
//!
//! ## Design Philosophy
//!
//! Each state manager is designed to be:
//!
//! - **Minimal and focused**: Each handles one specific interaction pattern
//! - **Stateful but simple**: Track just enough state to compute transitions
//! - **Commit‑on‑end**: Persistent state is only touched once, when a gesture
//!   ends; cancellation never leaks partial values
//! - **Generic**: [`gesture::GestureTracker`] accepts any `Copy` value type
//!
//! The crate does not assume any particular UI framework or event system.
//! Platform recognizers that already report cumulative values feed
//! [`gesture::GesturePhase`]s straight into a tracker; hosts that only see
//! raw pointers go through the [`drag`] and [`pinch`] adapters first.
//!
//! ## Usage
//!
//! ```rust
//! # #[cfg(feature = "drag")]
//! # fn example() {
//! use kurbo::{Point, Vec2};
//! use understory_event_state::drag::DragState;
//! use understory_event_state::gesture::{GestureTracker, GestureTransition};
//!
//! let mut drag = DragState::default();
//! let mut pan = GestureTracker::<Vec2>::new();
//!
//! pan.handle(drag.press(Point::new(0.0, 0.0)));
//! let moved = drag.motion(Point::new(4.0, 0.0)).unwrap();
//! assert_eq!(pan.handle(moved), GestureTransition::Update(Vec2::new(4.0, 0.0)));
//!
//! let done = drag.release(Point::new(6.0, 0.0)).unwrap();
//! assert_eq!(pan.handle(done), GestureTransition::Commit(Vec2::new(6.0, 0.0)));
//! # }
//! ```
//!
//! ## Features
//!
//! - `drag`: Enable the pointer drag adapter (requires `kurbo` dependency)
//! - `pinch`: Enable the two‑finger pinch adapter (requires `kurbo` dependency)
//!
//! This crate is `no_std` compatible for all modules.

#![no_std]

pub mod gesture;

#[cfg(feature = "drag")]
pub mod drag;
#[cfg(feature = "pinch")]
pub mod pinch;
