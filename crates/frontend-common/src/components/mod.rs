mod error_notice;
mod spinner;

pub use error_notice::ErrorNotice;
pub use spinner::LoadingSpinner as Spinner;
