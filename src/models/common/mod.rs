pub mod action;
pub mod nullable;
pub mod pagination;
pub mod warning;

pub use action::{DomainFilter, WindowAction};
pub use pagination::PaginationInfo;
pub use warning::Warning;
