//! Domain models for the Planora backend.
//!
//! Row types mirror the Postgres tables one-to-one. Enum-like columns are
//! stored as TEXT and exposed through the string enums declared here.

/// Declares a TEXT-backed enum with `as_str`, `FromStr` and serde support.
macro_rules! string_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $value:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $value)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Convert to database string
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $value,)+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($value => Ok($name::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($name), s)),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.as_str().to_string()
            }
        }
    };
}

pub(crate) use string_enum;

pub mod analytics;
pub mod event;
pub mod guest;
pub mod preference;
pub mod task;
pub mod validation;
pub mod vendor;

// Re-export all models for convenient access
pub use analytics::{
    AttendeeFeedback, BudgetUsage, CreateFeedbackRequest, DashboardSummary, EventAnalytics,
    EventReport, FeedbackSummary, RecordMetricsRequest, RsvpBreakdown, TaskProgress,
};
pub use event::{
    CreateEventRequest, Event, EventFormat, EventListQuery, EventStatus, EventType,
    UpdateEventRequest,
};
pub use guest::{CreateGuestRequest, Guest, RsvpStatus, UpdateGuestRequest};
pub use preference::{Theme, UpdatePreferenceRequest, UserPreference};
pub use task::{CreateTaskRequest, Task, TaskPriority, TaskStatus, UpdateTaskRequest};
pub use vendor::{
    CreateVendorRequest, EventVendor, LinkVendorRequest, LinkedVendor, UpdateVendorRequest,
    Vendor, VendorCategory, VendorLinkStatus,
};
