use kids_core::model::{AppState, GameKind, GameProgress};
use services::SpeechStatus;

const STAR_CAP: u32 = 50;
const STAR_SLOTS: u32 = 10;

/// `Stars: ★★★☆☆☆☆☆☆☆`, filled stars capped at 50 and padded to ten slots.
#[must_use]
pub fn star_bar(stars: u32) -> String {
    let filled = stars.min(STAR_CAP);
    let empty = STAR_SLOTS.saturating_sub(filled);
    format!(
        "Stars: {}{}",
        "★".repeat(filled as usize),
        "☆".repeat(empty as usize)
    )
}

#[must_use]
pub fn voice_button_label(voice_on: bool) -> &'static str {
    if voice_on { "Voice: On" } else { "Voice: Off" }
}

#[must_use]
pub fn voice_hint(status: &SpeechStatus) -> &'static str {
    if status.supported {
        "Tip: Tap a game. The app will speak the question. If not, tap Test Voice."
    } else {
        "Voice may not be available on this device."
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HomeGameCardVm {
    pub game: GameKind,
    pub title: &'static str,
    pub meta: String,
}

fn meta_label(progress: GameProgress) -> String {
    format!("{} done · {} stars", progress.done, progress.stars)
}

#[must_use]
pub fn map_home_cards(state: &AppState) -> Vec<HomeGameCardVm> {
    GameKind::ALL
        .into_iter()
        .map(|game| HomeGameCardVm {
            game,
            title: game.title(),
            meta: meta_label(state.progress.game(game)),
        })
        .collect()
}
