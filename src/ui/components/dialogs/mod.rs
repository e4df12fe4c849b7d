pub mod common;
pub mod help_dialog;
pub mod logs_dialog;
