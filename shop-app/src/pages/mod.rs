//! Page components. Pages are thin: they pull the app context, call the
//! endpoint wrappers, and render; all request mechanics live in `net`.

pub mod cart;
pub mod home;
pub mod login;
