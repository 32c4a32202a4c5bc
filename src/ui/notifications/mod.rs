// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for events outside the studio panel: upload
//! rejections, saved downloads, configuration warnings.
//!
//! - Success/info stay 3s, warnings 5s, errors until dismissed
//! - At most 3 toasts are visible; the rest wait in a queue
//! - An identical toast already showing is not pushed again
//!
//! ```ignore
//! manager.push(Notification::success("notification-download-saved").with_arg("path", path));
//! let overlay = Toast::view_overlay(&manager, &i18n).map(Message::Notification);
//! ```

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
