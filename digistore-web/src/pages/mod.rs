mod home;
mod layout;
mod not_found;
mod stubs;

pub use home::Home;
pub use layout::StoreLayout;
pub use not_found::UndefinedRoute;
pub use stubs::{Cart, Dashboard, Login, Products, Register};
