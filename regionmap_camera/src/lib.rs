// Copyright 2026 the Regionmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Regionmap Camera: eased transitions between viewport states.
//!
//! A camera move is modelled as a resumable task rather than a callback loop:
//! - [`CameraAnimation`] is plain data; [`CameraAnimation::sample`] maps a
//!   timestamp to the interpolated [`ViewportState`] and a `done` flag.
//! - [`Animator`] holds at most one animation and applies its frames to a
//!   [`Viewport`] whenever the host's frame driver calls [`Animator::tick`].
//!
//! Interpolation is linear in scale and translation, shaped by
//! [`ease_out_cubic`]. A finished animation leaves the viewport exactly at its
//! target (after the viewport's own clamping).
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Size, Vec2};
//! use regionmap_camera::Animator;
//! use regionmap_view2d::{ClampMode, Viewport, ViewportState};
//!
//! let mut view = Viewport::new(Size::new(800.0, 600.0));
//! view.set_clamp_mode(ClampMode::None);
//!
//! let target = ViewportState::new(2.0, Vec2::new(-100.0, -50.0));
//! let mut animator = Animator::new();
//! animator.animate_to(&view, target, 0, 500);
//!
//! let halfway = animator.tick(250, &mut view).unwrap();
//! assert!(!halfway.done);
//! assert!(view.scale() > 1.5);
//!
//! let last = animator.tick(500, &mut view).unwrap();
//! assert!(last.done);
//! assert_eq!(view.state(), target);
//! assert!(!animator.is_active());
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod animation;
mod easing;

pub use animation::{Animator, CameraAnimation, CameraFrame};
pub use easing::ease_out_cubic;
