//! Page state module

mod forms;
mod overlay;
mod page_state;
mod success_banner;
mod toggles;

pub use forms::*;
pub use page_state::*;
pub use toggles::*;
