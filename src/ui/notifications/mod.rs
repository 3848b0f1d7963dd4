// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for short-lived feedback.
//!
//! Toasts confirm actions (lesson published, comment hidden) or report
//! problems (unreadable preferences) without blocking the screen below.
//!
//! # Components
//!
//! - [`notification`] - `Notification` and its `Severity`
//! - [`manager`] - `Manager` queuing toasts and expiring them
//! - [`toast`] - rendering of the toast stack
//!
//! # Usage
//!
//! ```ignore
//! let mut manager = Manager::new();
//! manager.push(Notification::success("notification-lesson-published"));
//!
//! let overlay = Toast::view_overlay(&manager, &i18n).map(Message::Notification);
//! ```
//!
//! Success and info toasts last 3s, warnings 5s, errors stay until
//! dismissed. At most three are visible, the rest wait in a queue.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, Severity};
pub use toast::Toast;
