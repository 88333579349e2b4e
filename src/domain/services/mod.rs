pub mod actions;
mod app_state;
pub mod events;
mod intake;
mod scroll;
mod transcript;
pub mod uploads;

pub use app_state::*;
pub use intake::*;
pub use scroll::*;
pub use transcript::*;
