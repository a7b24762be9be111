mod controls;
mod home;
mod play;
mod prep;
mod toast;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use controls::{HomeButton, StarBar, persist, say};
pub use home::HomeView;
pub use play::{ColorsView, CountingView, LettersView, PlayView};
pub use prep::PrepView;
pub use toast::{SAVE_FAILED, Toast, show_toast};
