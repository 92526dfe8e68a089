pub mod analytics_repository;
pub mod event_repository;
pub mod guest_repository;
pub mod preference_repository;
pub mod task_repository;
pub mod vendor_repository;

// Re-export all repositories for convenient access
pub use analytics_repository::AnalyticsRepository;
pub use event_repository::EventRepository;
pub use guest_repository::GuestRepository;
pub use preference_repository::PreferenceRepository;
pub use task_repository::TaskRepository;
pub use vendor_repository::VendorRepository;
