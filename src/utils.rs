pub mod json;
pub mod logs;
