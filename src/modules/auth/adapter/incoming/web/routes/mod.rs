pub mod login;
pub mod signup;

pub use login::login_handler;
pub use signup::signup_handler;
