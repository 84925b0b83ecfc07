use hand_rank::cards::{Card, Rank, Suit};
use hand_rank::evaluator::{best_hand, classify, HandCategory};
use proptest::prelude::*;
use std::cmp::Ordering;

fn full_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(52);
    for &s in Suit::ALL.iter() {
        for &r in Rank::ALL.iter() {
            cards.push(Card::new(r, s));
        }
    }
    cards
}

/// Exactly `n` distinct cards sampled from a full deck.
fn distinct_cards(n: usize) -> impl Strategy<Value = Vec<Card>> {
    prop::sample::subsequence(full_deck(), n)
}

/// The same card set twice, the second copy in a random order.
fn with_permutation(n: usize) -> impl Strategy<Value = (Vec<Card>, Vec<Card>)> {
    distinct_cards(n).prop_flat_map(|hand| (Just(hand.clone()), Just(hand).prop_shuffle()))
}

fn straight_cards(top: u8) -> Vec<Card> {
    let rank_vals: Vec<u8> = if top == 5 {
        vec![14, 2, 3, 4, 5]
    } else {
        (top - 4..=top).collect()
    };
    let suits = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades, Suit::Clubs];
    rank_vals
        .into_iter()
        .zip(suits)
        .map(|(v, s)| Card::new(Rank::try_from(v).unwrap(), s))
        .collect()
}

fn ranks_desc(ranks: &[Rank]) -> Vec<Rank> {
    let mut out = ranks.to_vec();
    out.sort_by(|a, b| b.cmp(a));
    out
}

fn compare_rank_lists(a: &[Rank], b: &[Rank]) -> Ordering {
    for i in 0..a.len().min(b.len()) {
        let ord = a[i].cmp(&b[i]);
        if ord != Ordering::Equal {
            return ord;
        }
    }
    Ordering::Equal
}

fn non_straight_rank_set() -> impl Strategy<Value = Vec<Rank>> {
    prop::collection::btree_set(2u8..=14u8, 5)
        .prop_filter("non-straight ranks", |set| {
            let vals: Vec<u8> = set.iter().copied().collect();
            let is_wheel = vals == vec![2, 3, 4, 5, 14];
            let is_run = vals.windows(2).all(|w| w[1] == w[0] + 1);
            !(is_run || is_wheel)
        })
        .prop_map(|set| set.into_iter().map(|v| Rank::try_from(v).unwrap()).collect())
}

proptest! {
    #[test]
    fn classify_is_permutation_invariant((original, shuffled) in with_permutation(5)) {
        let a = classify(&original).unwrap();
        let b = classify(&shuffled).unwrap();
        prop_assert_eq!(a, b);
        prop_assert_eq!(a.rank_mask(), b.rank_mask());
    }

    #[test]
    fn ordering_is_antisymmetric_and_transitive(
        a in distinct_cards(5),
        b in distinct_cards(5),
        c in distinct_cards(5),
    ) {
        let ea = classify(&a).unwrap();
        let eb = classify(&b).unwrap();
        let ec = classify(&c).unwrap();

        // antisymmetric: if a >= b and b >= a then a == b
        if ea >= eb && eb >= ea { prop_assert_eq!(ea, eb); }

        // transitive: if a >= b and b >= c then a >= c
        if ea >= eb && eb >= ec { prop_assert!(ea >= ec); }
    }

    #[test]
    fn best_of_seven_dominates_every_five_subset(cards in distinct_cards(7)) {
        let best = best_hand(&cards).unwrap();
        for i in 0..3 { for j in (i+1)..4 { for k in (j+1)..5 { for l in (k+1)..6 { for m in (l+1)..7 {
            let five = [cards[i], cards[j], cards[k], cards[l], cards[m]];
            let e5 = classify(&five).unwrap();
            prop_assert!(best >= e5);
        }}}}}
    }

    #[test]
    fn best_hand_ignores_input_order((original, shuffled) in with_permutation(7)) {
        let a = best_hand(&original).unwrap();
        let b = best_hand(&shuffled).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn best_hand_of_six_dominates_every_five_subset(cards in distinct_cards(6)) {
        let best = best_hand(&cards).unwrap();
        for skip in 0..6 {
            let five: Vec<Card> = cards
                .iter()
                .enumerate()
                .filter_map(|(i, &c)| (i != skip).then_some(c))
                .collect();
            let e5 = classify(&five).unwrap();
            prop_assert!(best >= e5);
        }
    }

    #[test]
    fn straight_ordering_respects_top_card(top_hi in 6u8..=14u8, top_lo in 5u8..=13u8) {
        prop_assume!(top_hi > top_lo);
        let e_hi = classify(&straight_cards(top_hi)).unwrap();
        let e_lo = classify(&straight_cards(top_lo)).unwrap();
        prop_assert_eq!(e_hi.category(), HandCategory::Straight);
        prop_assert_eq!(e_lo.category(), HandCategory::Straight);
        prop_assert!(e_hi > e_lo);
    }

    #[test]
    fn wheel_is_lowest_straight(top in 6u8..=14u8) {
        let e_wheel = classify(&straight_cards(5)).unwrap();
        let e_high = classify(&straight_cards(top)).unwrap();
        prop_assert_eq!(e_wheel.category(), HandCategory::Straight);
        prop_assert_eq!(e_high.category(), HandCategory::Straight);
        prop_assert!(e_high > e_wheel);
    }

    #[test]
    fn flush_kicker_ordering(a in non_straight_rank_set(), b in non_straight_rank_set()) {
        let suit = Suit::Hearts;
        let hand_a: Vec<Card> = a.iter().map(|&r| Card::new(r, suit)).collect();
        let hand_b: Vec<Card> = b.iter().map(|&r| Card::new(r, suit)).collect();
        let e_a = classify(&hand_a).unwrap();
        let e_b = classify(&hand_b).unwrap();
        prop_assert_eq!(e_a.category(), HandCategory::Flush);
        prop_assert_eq!(e_b.category(), HandCategory::Flush);

        match compare_rank_lists(&ranks_desc(&a), &ranks_desc(&b)) {
            Ordering::Greater => prop_assert!(e_a > e_b),
            Ordering::Less => prop_assert!(e_a < e_b),
            Ordering::Equal => prop_assert_eq!(e_a, e_b),
        }
    }

    #[test]
    fn suits_never_break_ties(hand in distinct_cards(5), perm in any::<u8>()) {
        // Remap all four suits by a rotation; ranks unchanged.
        let rot = (perm % 4) as usize;
        let remapped: Vec<Card> = hand
            .iter()
            .map(|c| {
                let idx = Suit::ALL.iter().position(|&s| s == c.suit()).unwrap();
                Card::new(c.rank(), Suit::ALL[(idx + rot) % 4])
            })
            .collect();
        let a = classify(&hand).unwrap();
        let b = classify(&remapped).unwrap();
        prop_assert_eq!(a, b);
    }
}
