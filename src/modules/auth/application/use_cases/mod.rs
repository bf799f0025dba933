pub mod login_user;
pub mod signup_user;
