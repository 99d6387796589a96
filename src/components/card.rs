// src/components/card.rs

// serde を使う宣言！盤面のスナップショットを JSON にして JS に渡す時に使うよ。
use serde::{Serialize, Deserialize};

/// カードの絵柄を表す ID だよ！🍎🍌
///
/// 中身はデッキが持ってるシンボル表 (`Deck::label`) のインデックス。
/// 同じ Face を持つカードがちょうど2枚あって、それが「ペア」になるんだ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Face(pub usize);

/// カードの見え方の状態だよ！
///
/// - Hidden: 裏向き (まだ選べる)
/// - Revealed: めくられて評価待ち
/// - Matched: ペア成立！もう動かない
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardStatus {
    Hidden,
    Revealed,
    Matched,
}

/// 盤面の1枚のカード！🃏
///
/// - `id`: 盤面上の位置 (デッキのインデックスと同じ)
/// - `face`: 絵柄
/// - `status`: 今の状態。書き換えるのは TurnController だけ！
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: usize,
    pub face: Face,
    pub status: CardStatus,
}

impl Card {
    /// 裏向きの新しいカードを作るよ。
    pub fn new(id: usize, face: Face) -> Self {
        Self { id, face, status: CardStatus::Hidden }
    }

    pub fn is_hidden(&self) -> bool {
        self.status == CardStatus::Hidden
    }

    /// 2枚が同じ絵柄 (= ペア) かどうか。
    pub fn pairs_with(&self, other: &Card) -> bool {
        self.id != other.id && self.face == other.face
    }
}

// --- テスト ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_card_is_hidden() {
        let card = Card::new(3, Face(1));

        assert_eq!(card.id, 3);
        assert_eq!(card.face, Face(1));
        assert!(card.is_hidden());
        println!("作成したカード: {:?}", card);
    }

    #[test]
    fn pairs_need_same_face_and_different_position() {
        let a = Card::new(0, Face(2));
        let b = Card::new(5, Face(2));
        let c = Card::new(6, Face(4));

        assert!(a.pairs_with(&b));
        assert!(!a.pairs_with(&c));
        // 同じカード同士はペアじゃない！
        assert!(!a.pairs_with(&a.clone()));
    }
}
