mod play_vm;
mod progress_vm;
mod round_vm;
mod toast_vm;

pub use play_vm::PlayRoundVm;
pub use progress_vm::{
    HomeGameCardVm, map_home_cards, star_bar, voice_button_label, voice_hint,
};
pub use round_vm::{ChoiceFace, ChoiceVm, CountingBoardVm, map_choices, map_counting_board};
pub use toast_vm::{TOAST_DURATION_MS, ToastVm};
