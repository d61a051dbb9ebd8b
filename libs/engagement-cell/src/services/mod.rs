pub mod contact;
pub mod newsletter;

pub use contact::ContactService;
pub use newsletter::{NewsletterService, SubscribeOutcome};
