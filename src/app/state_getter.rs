//! Gets the current game state from the controller and converts it to JSON.

use log::{error, info};
use wasm_bindgen::JsValue;

use crate::app::SharedController;
use crate::presentation::Presenter;
use crate::systems::turn_controller::TurnController;

/// コントローラのスナップショットを JSON 文字列にするよ。
pub fn snapshot_json<P: Presenter>(controller: &TurnController<P>) -> Result<String, serde_json::Error> {
    serde_json::to_string(&controller.snapshot())
}

/// ゲームの状態を取得し、JSON 文字列 (JsValue) として返します。
/// (GameApp::get_state_json のロジック)
pub fn get_state_json(controller: &SharedController) -> Result<JsValue, JsValue> {
    let controller = match controller.try_borrow() {
        Ok(c) => c,
        Err(e) => {
            let error_msg = format!("Failed to borrow controller for getting state: {}", e);
            error!("{}", error_msg);
            return Err(JsValue::from_str(&error_msg));
        }
    };

    match snapshot_json(&*controller) {
        Ok(json_string) => {
            info!("Successfully serialized game state to JSON.");
            Ok(JsValue::from_str(&json_string))
        }
        Err(e) => {
            let error_msg = format!("Failed to serialize game state: {}", e);
            error!("{}", error_msg);
            Err(JsValue::from_str(&error_msg))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Card, CardStatus};
    use crate::config::GameConfig;
    use crate::logic::deck::Deck;
    use crate::presentation::EffectKind;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    struct NullPresenter;

    impl Presenter for NullPresenter {
        fn render_board(&mut self, _deck: &Deck) {}
        fn set_card_visual(&mut self, _card: &Card, _status: CardStatus) {}
        fn play_effect(&mut self, _kind: EffectKind) {}
        fn show_win_popup(&mut self, _final_moves: u32) {}
        fn hide_popup(&mut self) {}
        fn update_stats_display(&mut self, _moves: u32, _matches: u32) {}
    }

    #[test]
    fn snapshot_json_lists_every_card() {
        let mut controller =
            TurnController::with_rng(GameConfig::default(), NullPresenter, StdRng::seed_from_u64(5));
        controller.new_game();

        let json = snapshot_json(&controller).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["cards"].as_array().map(Vec::len), Some(16));
        assert_eq!(value["status"], "Previewing");
        assert_eq!(value["locked"], true);
        assert_eq!(value["cards"][0]["status"], "Hidden");
    }
}
