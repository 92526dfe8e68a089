pub mod analytics_service;
pub mod event_service;
pub mod guest_service;
pub mod preference_service;
pub mod suggestion_service;
pub mod task_service;
pub mod vendor_service;

pub use analytics_service::AnalyticsService;
pub use event_service::EventService;
pub use guest_service::GuestService;
pub use preference_service::PreferenceService;
pub use suggestion_service::SuggestionService;
pub use task_service::TaskService;
pub use vendor_service::VendorService;
