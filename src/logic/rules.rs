// src/logic/rules.rs
//! 神経衰弱のルール判定だよ！状態は変えない、判定するだけの関数たち。

use serde::{Deserialize, Serialize};

use crate::components::card::{Card, CardStatus};
use crate::logic::deck::Deck;

/// クリックが無視された理由。
///
/// UI から見ればどれも「何も起きない」だけど、ログやテストで区別したいからね。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// プレビュー中 (まだ始まってない)
    NotStarted,
    /// 評価待ち or 勝利後でロック中🔒
    Locked,
    /// そんな位置のカードは無い
    OutOfRange,
    /// もうめくれてる or そろってる
    NotHidden,
}

/// カードを選べるかチェック！順番は started → locked → 範囲 → Hidden。
pub fn check_selectable(
    deck: &Deck,
    index: usize,
    started: bool,
    locked: bool,
) -> Result<(), IgnoreReason> {
    if !started {
        return Err(IgnoreReason::NotStarted);
    }
    if locked {
        return Err(IgnoreReason::Locked);
    }
    let card = deck.card(index).ok_or(IgnoreReason::OutOfRange)?;
    if card.status != CardStatus::Hidden {
        return Err(IgnoreReason::NotHidden);
    }
    Ok(())
}

/// 2枚がペアかどうか。
pub fn is_pair(first: &Card, second: &Card) -> bool {
    first.pairs_with(second)
}

/// そろったペア数が N に届いたら勝ち！🏆
pub fn is_won(matches: u32, pair_count: usize) -> bool {
    pair_count > 0 && matches as usize == pair_count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::Face;

    fn deck() -> Deck {
        Deck::from_faces(
            vec!["A".into(), "B".into()],
            vec![Face(0), Face(1), Face(1), Face(0)],
        )
    }

    #[test]
    fn preconditions_are_checked_in_order() {
        let mut deck = deck();
        // started が一番先！locked でも範囲外でも NotStarted
        assert_eq!(check_selectable(&deck, 99, false, true), Err(IgnoreReason::NotStarted));
        assert_eq!(check_selectable(&deck, 99, true, true), Err(IgnoreReason::Locked));
        assert_eq!(check_selectable(&deck, 99, true, false), Err(IgnoreReason::OutOfRange));
        assert_eq!(check_selectable(&deck, 0, true, false), Ok(()));

        deck.set_status(0, CardStatus::Revealed);
        assert_eq!(check_selectable(&deck, 0, true, false), Err(IgnoreReason::NotHidden));
        deck.set_status(0, CardStatus::Matched);
        assert_eq!(check_selectable(&deck, 0, true, false), Err(IgnoreReason::NotHidden));
    }

    #[test]
    fn pair_detection() {
        let deck = deck();
        let cards = deck.cards();
        assert!(is_pair(&cards[0], &cards[3]));
        assert!(is_pair(&cards[1], &cards[2]));
        assert!(!is_pair(&cards[0], &cards[1]));
    }

    #[test]
    fn win_needs_all_pairs() {
        assert!(!is_won(1, 2));
        assert!(is_won(2, 2));
        assert!(!is_won(0, 0));
    }
}
