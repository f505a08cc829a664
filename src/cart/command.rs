pub mod add_to_cart_cmd;
pub mod remove_from_cart_cmd;
pub mod clear_cart_cmd;
pub mod get_cart_cmd;
