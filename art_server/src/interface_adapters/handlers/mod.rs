pub mod art;
pub mod page;
