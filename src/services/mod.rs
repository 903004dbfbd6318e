pub mod content_fetcher;
pub mod mailer;
pub mod speech;

pub use content_fetcher::{HttpPageFetcher, PageFetcher};
pub use mailer::{Notifier, ResendMailer};
