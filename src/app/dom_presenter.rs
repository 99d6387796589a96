// src/app/dom_presenter.rs
//! Presenter の DOM 実装。カード要素を作って、クラスを付けたり外したりするだけ！

use log::{error, warn};
use wasm_bindgen::JsValue;
use web_sys::{window, Document, Element};

use crate::app::audio::EffectTones;
use crate::app::{BOARD_ID, MATCHES_ID, MOVES_ID, POPUP_ID, POPUP_MESSAGE_ID};
use crate::components::card::{Card, CardStatus};
use crate::logic::deck::Deck;
use crate::presentation::{EffectKind, Presenter};

const CARD_BACK_TEXT: &str = "?";
const HIDDEN_CLASS: &str = "hidden";
const CELEBRATE_CLASS: &str = "celebrate";

pub fn moves_text(moves: u32) -> String {
    format!("Moves: {}", moves)
}

pub fn matches_text(matches: u32) -> String {
    format!("Matches: {}", matches)
}

pub fn win_message(moves: u32) -> String {
    format!("🎉 Great! You won in {} moves.", moves)
}

fn require_element(document: &Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("Element #{} not found", id)))
}

pub struct DomPresenter {
    document: Document,
    board: Element,
    moves_label: Element,
    matches_label: Element,
    /// ポップアップが無いページなら alert() で代用する
    popup: Option<(Element, Element)>,
    /// render_board で作ったカード要素 (index = カード id)
    cards: Vec<Element>,
    tones: Option<EffectTones>,
}

impl DomPresenter {
    /// 今のページから必要な要素を探して Presenter を作るよ。
    /// 盤面と手数表示が見つからなければエラー！
    pub fn from_document(sound_enabled: bool) -> Result<Self, JsValue> {
        let document = window()
            .ok_or("Failed to get window")?
            .document()
            .ok_or("Failed to get document")?;

        let board = require_element(&document, BOARD_ID)?;
        let moves_label = require_element(&document, MOVES_ID)?;
        let matches_label = require_element(&document, MATCHES_ID)?;
        let popup = match (
            document.get_element_by_id(POPUP_ID),
            document.get_element_by_id(POPUP_MESSAGE_ID),
        ) {
            (Some(popup), Some(message)) => Some((popup, message)),
            _ => {
                warn!("DomPresenter: #{} not found, falling back to alert()", POPUP_ID);
                None
            }
        };

        let tones = if sound_enabled {
            match EffectTones::new() {
                Ok(tones) => Some(tones),
                Err(e) => {
                    warn!("DomPresenter: audio unavailable: {:?}", e);
                    None
                }
            }
        } else {
            None
        };

        Ok(Self {
            document,
            board,
            moves_label,
            matches_label,
            popup,
            cards: Vec::new(),
            tones,
        })
    }

    /// `.card > .card-inner > (.card-back + .card-front)` を作る。
    fn build_card(&self, card: &Card, label: &str) -> Result<Element, JsValue> {
        let element = self.document.create_element("div")?;
        element.class_list().add_1("card")?;
        element.set_attribute("data-index", &card.id.to_string())?;

        let inner = self.document.create_element("div")?;
        inner.class_list().add_1("card-inner")?;

        let back = self.document.create_element("div")?;
        back.class_list().add_1("card-back")?;
        back.set_text_content(Some(CARD_BACK_TEXT));

        // 絵柄は設定から来るので innerHTML じゃなくて textContent で入れる
        let front = self.document.create_element("div")?;
        front.class_list().add_1("card-front")?;
        front.set_text_content(Some(label));

        inner.append_child(&back)?;
        inner.append_child(&front)?;
        element.append_child(&inner)?;
        Ok(element)
    }

    fn try_render_board(&mut self, deck: &Deck) -> Result<(), JsValue> {
        self.board.set_inner_html("");
        self.board.class_list().remove_1(CELEBRATE_CLASS)?;
        self.cards.clear();
        for card in deck.cards() {
            let element = self.build_card(card, deck.label(card.face))?;
            self.board.append_child(&element)?;
            self.cards.push(element);
        }
        Ok(())
    }

    fn try_set_card_visual(&self, card: &Card, status: CardStatus) -> Result<(), JsValue> {
        let element = self
            .cards
            .get(card.id)
            .ok_or_else(|| JsValue::from_str(&format!("No element for card {}", card.id)))?;
        let classes = element.class_list();
        // matched のカードも表向きのまま (flipped + matched)
        classes.toggle_with_force("flipped", status != CardStatus::Hidden)?;
        classes.toggle_with_force("matched", status == CardStatus::Matched)?;
        Ok(())
    }

    fn try_show_win_popup(&self, final_moves: u32) -> Result<(), JsValue> {
        let message = win_message(final_moves);
        match &self.popup {
            Some((popup, text)) => {
                text.set_text_content(Some(&message));
                popup.class_list().remove_1(HIDDEN_CLASS)
            }
            None => window().ok_or("Failed to get window")?.alert_with_message(&message),
        }
    }
}

impl Presenter for DomPresenter {
    fn render_board(&mut self, deck: &Deck) {
        if let Err(e) = self.try_render_board(deck) {
            error!("DomPresenter: failed to render board: {:?}", e);
        }
    }

    fn set_card_visual(&mut self, card: &Card, status: CardStatus) {
        if let Err(e) = self.try_set_card_visual(card, status) {
            error!("DomPresenter: failed to update card {}: {:?}", card.id, e);
        }
    }

    fn play_effect(&mut self, kind: EffectKind) {
        if let Some(tones) = &self.tones {
            tones.play(kind);
        }
        if kind == EffectKind::Win {
            // 紙吹雪なんかは CSS 側の .celebrate にお任せ🎊
            if let Err(e) = self.board.class_list().add_1(CELEBRATE_CLASS) {
                warn!("DomPresenter: failed to start celebration: {:?}", e);
            }
        }
    }

    fn show_win_popup(&mut self, final_moves: u32) {
        if let Err(e) = self.try_show_win_popup(final_moves) {
            error!("DomPresenter: failed to show win popup: {:?}", e);
        }
    }

    fn hide_popup(&mut self) {
        if let Some((popup, _)) = &self.popup {
            if let Err(e) = popup.class_list().add_1(HIDDEN_CLASS) {
                warn!("DomPresenter: failed to hide popup: {:?}", e);
            }
        }
    }

    fn update_stats_display(&mut self, moves: u32, matches: u32) {
        self.moves_label.set_text_content(Some(&moves_text(moves)));
        self.matches_label.set_text_content(Some(&matches_text(matches)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_texts() {
        assert_eq!(moves_text(3), "Moves: 3");
        assert_eq!(matches_text(0), "Matches: 0");
        assert!(win_message(12).contains("12 moves"));
    }
}
