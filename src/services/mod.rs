pub mod events;
pub mod existence;
pub mod logs;
pub mod validation;
