// src/logic/deck.rs

use crate::components::card::{Card, CardStatus, Face};
use itertools::Itertools;
use rand::{seq::SliceRandom, Rng};

/// 神経衰弱の盤面 (カードの並び) だよ！🃏🃏
///
/// 不変条件:
/// - 長さは 2×N (N = 絵柄の数)
/// - どの絵柄もちょうど2枚
/// - `cards[i].id == i`
///
/// これが崩れてたら作り方のバグなので、作る時に assert で落とす！💥
#[derive(Debug, Clone, PartialEq)]
pub struct Deck {
    cards: Vec<Card>,
    symbols: Vec<String>,
}

/// 絵柄を2枚ずつ並べた Face の列を作る関数。まだシャッフルしてない！
///
/// `[0, 1, ..., N-1, 0, 1, ..., N-1]` の順になるよ。
pub fn create_pair_faces(pair_count: usize) -> Vec<Face> {
    (0..pair_count).chain(0..pair_count).map(Face).collect()
}

/// スライスをシャッフルする関数だよ！🎲
///
/// 中身は `SliceRandom::shuffle` (Fisher–Yates)。偏りのない乱数なら
/// 全部の並び順が同じ確率で出てくる。
pub fn shuffle_deck<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    items.shuffle(rng);
}

/// 各絵柄がちょうど2枚あるかチェック！ダメなら panic。
///
/// 同じ文字列の絵柄が2つあると、見た目が同じカードが4枚になってペアにならないので、それもダメ。
fn assert_pair_invariant(symbols: &[String], faces: &[Face]) {
    if let Some(symbol) = symbols.iter().duplicates().next() {
        panic!("symbol {:?} appears more than twice in the deck", symbol);
    }
    let pair_count = symbols.len();
    assert_eq!(
        faces.len(),
        pair_count * 2,
        "deck must hold exactly two cards per symbol"
    );
    let counts = faces.iter().counts();
    assert_eq!(counts.len(), pair_count, "deck has missing or unknown faces");
    for (face, count) in counts {
        assert!(face.0 < pair_count, "face {:?} has no symbol", face);
        assert_eq!(count, 2, "face {:?} appears {} times", face, count);
    }
}

impl Deck {
    /// 絵柄を2枚ずつ用意してシャッフルした、新しいデッキを作るよ！
    pub fn shuffled<R: Rng + ?Sized>(symbols: &[String], rng: &mut R) -> Self {
        let mut faces = create_pair_faces(symbols.len());
        shuffle_deck(&mut faces, rng);
        Self::from_faces(symbols.to_vec(), faces)
    }

    /// 並び順を指定してデッキを作るよ。テストやデモで決まった配置にしたい時用！
    ///
    /// # Panics
    /// 絵柄がちょうど2枚ずつになっていない場合。
    pub fn from_faces(symbols: Vec<String>, faces: Vec<Face>) -> Self {
        assert_pair_invariant(&symbols, &faces);
        let cards = faces
            .into_iter()
            .enumerate()
            .map(|(id, face)| Card::new(id, face))
            .collect();
        Self { cards, symbols }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn card(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// カードの状態を書き換える。TurnController 専用！
    pub(crate) fn set_status(&mut self, index: usize, status: CardStatus) -> Option<&Card> {
        let card = self.cards.get_mut(index)?;
        card.status = status;
        Some(card)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// ペアの数 (N)
    pub fn pair_count(&self) -> usize {
        self.symbols.len()
    }

    /// Face に対応する表示用の絵柄。
    pub fn label(&self, face: Face) -> &str {
        self.symbols.get(face.0).map(String::as_str).unwrap_or("?")
    }

    pub fn all_matched(&self) -> bool {
        self.cards.iter().all(|c| c.status == CardStatus::Matched)
    }
}

// --- テスト ---
#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn symbols(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("S{}", i)).collect()
    }

    #[test]
    fn fresh_deck_has_two_of_each_face_all_hidden() {
        let mut rng = StdRng::seed_from_u64(1);
        for n in 1..=12 {
            let deck = Deck::shuffled(&symbols(n), &mut rng);

            // 1. 枚数は 2N
            assert_eq!(deck.len(), 2 * n);
            // 2. どの絵柄もちょうど2枚
            let counts = deck.cards().iter().map(|c| c.face).counts();
            assert_eq!(counts.len(), n);
            assert!(counts.values().all(|&c| c == 2), "絵柄の枚数がおかしい: {:?}", counts);
            // 3. 全部裏向き & id は位置と同じ
            assert!(deck.cards().iter().all(Card::is_hidden));
            assert!(deck.cards().iter().enumerate().all(|(i, c)| c.id == i));
        }
        println!("デッキ生成テスト、成功！🎉");
    }

    #[test]
    fn create_pair_faces_duplicates_in_order() {
        assert_eq!(
            create_pair_faces(3),
            vec![Face(0), Face(1), Face(2), Face(0), Face(1), Face(2)]
        );
        assert!(create_pair_faces(0).is_empty());
    }

    #[test]
    fn from_faces_keeps_layout() {
        let deck = Deck::from_faces(
            vec!["A".into(), "B".into()],
            vec![Face(0), Face(1), Face(1), Face(0)],
        );
        assert_eq!(deck.label(deck.cards()[2].face), "B");
        assert_eq!(deck.label(deck.cards()[3].face), "A");
        assert_eq!(deck.pair_count(), 2);
    }

    #[test]
    #[should_panic(expected = "appears")]
    fn triple_face_is_a_defect() {
        Deck::from_faces(
            vec!["A".into(), "B".into()],
            vec![Face(0), Face(0), Face(0), Face(1)],
        );
    }

    #[test]
    #[should_panic(expected = "appears more than twice")]
    fn duplicate_symbol_is_a_defect() {
        // 絵柄 "A" が2種類あると、"A" のカードが4枚になっちゃう
        Deck::from_faces(
            vec!["A".into(), "A".into()],
            vec![Face(0), Face(1), Face(0), Face(1)],
        );
    }

    #[test]
    #[should_panic]
    fn wrong_length_is_a_defect() {
        Deck::from_faces(vec!["A".into()], vec![Face(0)]);
    }

    #[test]
    fn shuffle_positions_are_uniform() {
        // 4枚を 20000 回シャッフルして、0番のカードがどこに行くか数える。
        // 期待値は各位置 5000 回。標準偏差 ~61 なので ±400 なら十分ゆるい。
        const TRIALS: usize = 20_000;
        let mut rng = StdRng::seed_from_u64(0xC0FFEE);
        let mut hits = [0usize; 4];
        for _ in 0..TRIALS {
            let mut items = [0u8, 1, 2, 3];
            shuffle_deck(&mut items, &mut rng);
            let pos = items.iter().position(|&v| v == 0).unwrap();
            hits[pos] += 1;
        }
        let expected = TRIALS / 4;
        for (pos, &count) in hits.iter().enumerate() {
            assert!(
                count.abs_diff(expected) < 400,
                "位置 {} の出現回数が偏ってる: {:?}",
                pos,
                hits
            );
        }
    }

    #[test]
    fn shuffle_covers_every_permutation() {
        // 4枚なら 4! = 24 通り。全部出てくるはず！
        let mut rng = StdRng::seed_from_u64(99);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..5_000 {
            let mut items = [0u8, 1, 2, 3];
            shuffle_deck(&mut items, &mut rng);
            seen.insert(items);
        }
        assert_eq!(seen.len(), 24);
    }

    #[test]
    fn set_status_and_all_matched() {
        let mut deck = Deck::from_faces(vec!["A".into()], vec![Face(0), Face(0)]);
        assert!(!deck.all_matched());
        deck.set_status(0, CardStatus::Matched);
        deck.set_status(1, CardStatus::Matched);
        assert!(deck.all_matched());
        assert!(deck.set_status(2, CardStatus::Matched).is_none());
    }
}
