//! Click sound for call-to-action buttons

use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlAudioElement;

use crate::utils::constants::CLICK_SOUND;

/// Play the click sound once.
///
/// Browsers may refuse playback (autoplay policy, missing file); that is
/// logged and otherwise ignored.
pub fn play_click() {
    let audio = match HtmlAudioElement::new_with_src(CLICK_SOUND) {
        Ok(audio) => audio,
        Err(e) => {
            log::warn!("Failed to create click sound: {:?}", e);
            return;
        }
    };

    let promise: js_sys::Promise = match audio.play() {
        Ok(promise) => promise,
        Err(e) => {
            log::warn!("Failed to play click sound: {:?}", e);
            return;
        }
    };

    leptos::task::spawn_local(async move {
        if let Err(e) = JsFuture::from(promise).await {
            log::debug!("Click sound rejected: {:?}", e);
        }
    });
}
