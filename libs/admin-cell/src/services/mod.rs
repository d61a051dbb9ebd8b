pub mod notifications;
pub mod payouts;
pub mod subscribers;

pub use notifications::NotificationService;
pub use payouts::PayoutService;
pub use subscribers::SubscriberService;
