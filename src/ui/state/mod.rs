// SPDX-License-Identifier: MPL-2.0
//! Small state types shared by several screens.

pub mod success_timer;

pub use success_timer::SuccessTimer;
