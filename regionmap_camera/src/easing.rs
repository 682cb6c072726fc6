// Copyright 2026 the Regionmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Cubic ease-out: `1 - (1 - t)^3`, with `t` clamped to `[0, 1]`.
///
/// Starts fast and settles gently; `ease_out_cubic(1.0)` is exactly `1.0`.
#[must_use]
pub fn ease_out_cubic(t: f64) -> f64 {
    let u = 1.0 - t.clamp(0.0, 1.0);
    1.0 - u * u * u
}
