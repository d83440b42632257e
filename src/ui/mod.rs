pub mod login_form;
pub mod navbar;
pub mod pages;

pub use login_form::LoginForm;
pub use navbar::NavBar;
