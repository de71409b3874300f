pub mod admin_key_dialog;
pub mod login;
pub mod register;
