//! Document source strategies.
//!
//! Only the filesystem strategy exists; in-memory content goes straight to
//! `check_content`.

pub mod fs;
