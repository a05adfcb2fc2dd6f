mod cart;
mod load_state;

pub use cart::{CartService, SessionCart};
pub use load_state::LoadState;
