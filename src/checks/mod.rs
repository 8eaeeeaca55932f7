//! Built-in health probes

pub mod disk_space;
pub mod file_writable;
pub mod smtp;

pub use disk_space::DiskSpaceCheck;
pub use file_writable::FileWritableCheck;
pub use smtp::SmtpConnectCheck;
