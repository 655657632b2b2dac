//! Boundary with the attendance service. The engine only ever reads from it.

pub mod file;
pub mod http;
pub mod source;

pub use file::FileSource;
pub use http::HttpSource;
pub use source::{AttendanceSource, parse_records};
