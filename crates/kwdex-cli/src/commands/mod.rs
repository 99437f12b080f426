pub mod build;
pub mod dispatch;
pub mod extract;
pub mod lookup;
