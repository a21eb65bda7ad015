pub use self::{app_state::*, settings::*, summary::*, ui_state::*};

mod app_state;
mod settings;
mod summary;
mod ui_state;
