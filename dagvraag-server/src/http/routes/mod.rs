//! Route handlers organized by resource

pub mod answers;
pub mod question;
pub mod results;
