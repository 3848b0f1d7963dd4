// SPDX-License-Identifier: MPL-2.0
//! Default values for preferences and timed UI behaviour.

// ==========================================================================
// Session Defaults
// ==========================================================================

/// Admin dashboard entry is hidden unless enabled.
pub const DEFAULT_ADMIN_MODE: bool = false;

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// How long a drawer shows its success state before closing (milliseconds).
pub const SUCCESS_DISMISS_MS: u64 = 2_000;

/// Interval of the UI tick driving toasts and success timeouts (milliseconds).
pub const UI_TICK_MS: u64 = 100;

/// Interval of the recording counter (milliseconds).
pub const RECORDING_TICK_MS: u64 = 1_000;

const _: () = {
    assert!(UI_TICK_MS < SUCCESS_DISMISS_MS);
    assert!(RECORDING_TICK_MS >= UI_TICK_MS);
};
