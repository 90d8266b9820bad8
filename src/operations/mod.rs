pub mod config_op;
pub mod screenshot_op;
