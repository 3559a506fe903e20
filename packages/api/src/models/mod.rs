//! Resource shapes returned by the backend.
//!
//! Every id is the backend's `_id` string. Fields the backend may omit carry
//! serde defaults so older records still decode.

mod celebrant;
mod event;
mod linked;
mod message;
mod user;

pub use celebrant::{Celebrant, CelebrantDraft, KeyDate, KEY_DATE_KINDS};
pub use event::{Event, EventDraft, EventStatus, ReminderSettings, StatusUpdate, DEFAULT_REMINDER_DAYS};
pub use linked::{Identified, Linked};
pub use message::{Message, MessageDraft};
pub use user::{Author, Credentials, ProfileUpdate, Registration, Role, RoleUpdate, User};
