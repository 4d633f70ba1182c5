//! Round integration tests.

use bjtable::{
    Card, CardView, DECK_SIZE, GameOptions, Reason, Round, RoundError, RoundState, Shoe, Suit,
    Winner,
};

const fn card(suit: Suit, face: u8) -> Card {
    Card::new(suit, face)
}

fn round_with(draws: &[Card]) -> Round {
    let mut round = Round::new(GameOptions::default(), 1);
    round.start_with(Shoe::from_cards(draws.to_vec())).unwrap();
    round
}

#[test]
fn actions_rejected_before_start() {
    let mut round = Round::new(GameOptions::default(), 1);
    assert_eq!(round.state(), RoundState::Waiting);
    assert!(!round.is_over());
    assert_eq!(round.player_hit().unwrap_err(), RoundError::InvalidRoundState);
    assert_eq!(round.player_stand().unwrap_err(), RoundError::InvalidRoundState);
    assert_eq!(round.dealer_play().unwrap_err(), RoundError::InvalidRoundState);
}

#[test]
fn initial_deal_interleaves_and_hides_hole() {
    let round = round_with(&[
        card(Suit::Heart, 10),  // player
        card(Suit::Spade, 9),   // dealer hole
        card(Suit::Club, 7),    // player
        card(Suit::Diamond, 8), // dealer up
    ]);

    assert_eq!(round.state(), RoundState::PlayerTurn);
    assert!(!round.is_over());
    assert_eq!(round.outcome(), None);
    assert_eq!(
        round.player_hand().cards(),
        &[card(Suit::Heart, 10), card(Suit::Club, 7)]
    );
    assert_eq!(round.dealer_hand().hole_card(), Some(&card(Suit::Spade, 9)));
    assert_eq!(round.dealer_hand().up_card(), Some(&card(Suit::Diamond, 8)));
    assert_eq!(round.shoe().cursor(), 4);

    let view = round.view();
    assert_eq!(view.player_name, "Player1");
    assert_eq!(
        view.dealer_cards,
        vec![CardView::Hidden, CardView::Up(card(Suit::Diamond, 8))]
    );
    assert_eq!(view.dealer_totals, None);
}

#[test]
fn player_blackjack_settles_on_deal() {
    let mut round = round_with(&[
        card(Suit::Spade, 1),   // player
        card(Suit::Heart, 9),   // dealer hole
        card(Suit::Club, 13),   // player
        card(Suit::Diamond, 8), // dealer up
    ]);

    assert!(round.is_over());
    assert_eq!(round.state(), RoundState::Settled);
    assert_eq!(round.winner(), Some(Winner::Player));
    assert_eq!(round.reason(), Some(Reason::Blackjack));
    assert!(round.dealer_hand().is_hole_revealed());

    assert_eq!(round.player_hit().unwrap_err(), RoundError::InvalidRoundState);
    assert_eq!(round.dealer_play().unwrap_err(), RoundError::InvalidRoundState);
}

#[test]
fn dealer_blackjack_wins_on_deal() {
    let round = round_with(&[
        card(Suit::Spade, 9),
        card(Suit::Heart, 1),
        card(Suit::Club, 8),
        card(Suit::Diamond, 12),
    ]);

    assert_eq!(round.winner(), Some(Winner::Dealer));
    assert_eq!(round.reason(), Some(Reason::Blackjack));
}

#[test]
fn double_blackjack_pushes() {
    let round = round_with(&[
        card(Suit::Spade, 1),
        card(Suit::Heart, 1),
        card(Suit::Club, 10),
        card(Suit::Diamond, 11),
    ]);

    assert_eq!(round.winner(), Some(Winner::Push));
    assert_eq!(round.reason(), Some(Reason::Blackjack));
}

#[test]
fn player_bust_ends_round_before_dealer() {
    let mut round = round_with(&[
        card(Suit::Spade, 10),  // player
        card(Suit::Heart, 7),   // dealer hole
        card(Suit::Club, 9),    // player
        card(Suit::Diamond, 10), // dealer up
        card(Suit::Heart, 5),   // player hit
    ]);

    let drawn = round.player_hit().unwrap();
    assert_eq!(drawn, card(Suit::Heart, 5));
    assert!(round.player_hand().is_bust());
    assert_eq!(round.winner(), Some(Winner::Dealer));
    assert_eq!(round.reason(), Some(Reason::Bust));
    assert_eq!(round.dealer_hand().len(), 2);
    assert_eq!(round.dealer_play().unwrap_err(), RoundError::InvalidRoundState);

    let result = round.result().unwrap();
    assert_eq!(result.player_score, None);
    assert_eq!(result.dealer_score, Some(17));
    assert_eq!(result.announcement().to_string(), "Player1 busts! Dealer wins!");
}

#[test]
fn dealer_draws_to_twenty_one_and_wins_compare() {
    let mut round = round_with(&[
        card(Suit::Spade, 10),  // player
        card(Suit::Heart, 10),  // dealer hole
        card(Suit::Club, 8),    // player
        card(Suit::Diamond, 5), // dealer up
        card(Suit::Spade, 6),   // dealer draw
        card(Suit::Club, 2),    // never dealt
    ]);

    round.player_stand().unwrap();
    assert_eq!(round.state(), RoundState::DealerTurn);
    assert!(!round.is_over());

    let drawn = round.dealer_play().unwrap();
    assert_eq!(drawn, vec![card(Suit::Spade, 6)]);
    assert_eq!(round.dealer_hand().hand().best_score(), Ok(21));
    assert_eq!(round.winner(), Some(Winner::Dealer));
    assert_eq!(round.reason(), Some(Reason::Compare));
    assert_eq!(round.cards_remaining(), 1);
}

#[test]
fn dealer_bust_pays_player() {
    let mut round = round_with(&[
        card(Suit::Spade, 10),
        card(Suit::Heart, 10),
        card(Suit::Club, 8),
        card(Suit::Diamond, 6),
        card(Suit::Spade, 13),
    ]);

    round.player_stand().unwrap();
    let drawn = round.dealer_play().unwrap();
    assert_eq!(drawn.len(), 1);
    assert!(round.dealer_hand().hand().is_bust());
    assert_eq!(round.winner(), Some(Winner::Player));
    assert_eq!(round.reason(), Some(Reason::Bust));
}

#[test]
fn equal_scores_push() {
    let mut round = round_with(&[
        card(Suit::Spade, 10),
        card(Suit::Heart, 10),
        card(Suit::Club, 8),
        card(Suit::Diamond, 8),
    ]);

    round.player_stand().unwrap();
    assert!(round.dealer_play().unwrap().is_empty());
    assert_eq!(round.winner(), Some(Winner::Push));
    assert_eq!(round.reason(), Some(Reason::Compare));
}

#[test]
fn dealer_draws_on_soft_hand_by_lowest_total() {
    let mut round = round_with(&[
        card(Suit::Spade, 10),  // player
        card(Suit::Heart, 1),   // dealer hole
        card(Suit::Club, 9),    // player
        card(Suit::Diamond, 6), // dealer up: totals 7 or 17
        card(Suit::Spade, 10),  // dealer draw: 17 or 27
    ]);

    round.player_stand().unwrap();
    let drawn = round.dealer_play().unwrap();
    assert_eq!(drawn.len(), 1);
    assert_eq!(round.dealer_hand().hand().min_total(), 17);
    assert_eq!(round.winner(), Some(Winner::Player));
}

#[test]
fn hit_after_stand_is_rejected() {
    let mut round = round_with(&[
        card(Suit::Spade, 10),
        card(Suit::Heart, 10),
        card(Suit::Club, 5),
        card(Suit::Diamond, 8),
        card(Suit::Club, 2),
    ]);

    round.player_stand().unwrap();
    round.player_stand().unwrap();
    assert_eq!(round.player_hit().unwrap_err(), RoundError::InvalidRoundState);
    assert_eq!(round.player_hand().len(), 2);
}

#[test]
fn dealer_play_ends_player_turn() {
    let mut round = round_with(&[
        card(Suit::Spade, 10),
        card(Suit::Heart, 10),
        card(Suit::Club, 9),
        card(Suit::Diamond, 7),
    ]);

    round.dealer_play().unwrap();
    assert!(round.player_hand().is_standing());
    assert_eq!(round.winner(), Some(Winner::Player));
}

#[test]
fn short_shoe_fails_initial_deal() {
    let mut round = Round::new(GameOptions::default(), 1);
    let shoe = Shoe::from_cards(vec![
        card(Suit::Spade, 2),
        card(Suit::Heart, 3),
        card(Suit::Club, 4),
    ]);

    assert_eq!(round.start_with(shoe).unwrap_err(), RoundError::ExhaustedShoe);
    assert_eq!(round.state(), RoundState::Dealing);
    assert_eq!(round.player_hit().unwrap_err(), RoundError::InvalidRoundState);

    round.start().unwrap();
    assert_eq!(round.player_hand().len(), 2);
}

#[test]
fn exhausted_shoe_on_hit_leaves_round_in_play() {
    let mut round = round_with(&[
        card(Suit::Spade, 10),
        card(Suit::Heart, 10),
        card(Suit::Club, 5),
        card(Suit::Diamond, 7),
    ]);

    assert_eq!(round.player_hit().unwrap_err(), RoundError::ExhaustedShoe);
    assert_eq!(round.state(), RoundState::PlayerTurn);
    assert_eq!(round.player_hand().len(), 2);
}

#[test]
fn exhausted_shoe_on_dealer_draw() {
    let mut round = round_with(&[
        card(Suit::Spade, 10),
        card(Suit::Heart, 10),
        card(Suit::Club, 8),
        card(Suit::Diamond, 2),
    ]);

    round.player_stand().unwrap();
    assert_eq!(round.dealer_play().unwrap_err(), RoundError::ExhaustedShoe);
    assert!(!round.is_over());
}

#[test]
fn configured_shoe_size_truncates() {
    let options = GameOptions::default().with_shoe_size(4);
    // About one deal in ten is a blackjack; take the first seed that is not.
    let mut round = (0..64)
        .map(|seed| {
            let mut round = Round::new(options.clone(), seed);
            round.start().unwrap();
            round
        })
        .find(|round| !round.is_over())
        .unwrap();

    assert_eq!(round.shoe().len(), 4);
    assert_eq!(round.cards_remaining(), 0);
    assert_eq!(round.state(), RoundState::PlayerTurn);
    assert_eq!(round.player_hit().unwrap_err(), RoundError::ExhaustedShoe);
    assert_eq!(round.player_hand().len(), 2);
}

#[test]
fn restart_clears_previous_round() {
    let mut round = round_with(&[
        card(Suit::Spade, 10),
        card(Suit::Heart, 7),
        card(Suit::Club, 9),
        card(Suit::Diamond, 10),
        card(Suit::Heart, 5),
    ]);
    round.player_hit().unwrap();
    assert!(round.is_over());

    round
        .start_with(Shoe::from_cards(vec![
            card(Suit::Club, 2),
            card(Suit::Club, 3),
            card(Suit::Club, 4),
            card(Suit::Club, 5),
        ]))
        .unwrap();

    assert_eq!(round.state(), RoundState::PlayerTurn);
    assert_eq!(round.outcome(), None);
    assert!(!round.player_hand().is_standing());
    assert_eq!(
        round.player_hand().cards(),
        &[card(Suit::Club, 2), card(Suit::Club, 4)]
    );
    assert_eq!(round.dealer_hand().len(), 2);
    assert!(!round.dealer_hand().is_hole_revealed());
    assert_eq!(round.shoe().cursor(), 4);
}

#[test]
fn start_rebuilds_full_shoe_each_round() {
    let mut round = Round::new(GameOptions::default(), 7);
    for _ in 0..10 {
        round.start().unwrap();
        assert_eq!(round.shoe().len(), DECK_SIZE);
        assert_eq!(round.shoe().cursor(), 4);
        assert_eq!(round.player_hand().len(), 2);
        assert_eq!(round.dealer_hand().len(), 2);

        let mut seen: Vec<Card> = round.shoe().cards().to_vec();
        seen.sort_unstable_by_key(|c| (c.suit as u8, c.face));
        seen.dedup();
        assert_eq!(seen.len(), DECK_SIZE);

        if !round.is_over() {
            round.player_stand().unwrap();
            round.dealer_play().unwrap();
        }
        assert!(round.outcome().is_some());
    }
}

#[test]
fn same_seed_deals_same_cards() {
    let mut a = Round::new(GameOptions::default(), 99);
    let mut b = Round::new(GameOptions::default(), 99);
    a.start().unwrap();
    b.start().unwrap();
    assert_eq!(a.shoe(), b.shoe());
    assert_eq!(a.player_hand(), b.player_hand());
}

#[test]
fn settled_view_reveals_dealer() {
    let mut round = round_with(&[
        card(Suit::Spade, 10),
        card(Suit::Heart, 9),
        card(Suit::Club, 9),
        card(Suit::Diamond, 8),
    ]);
    round.player_stand().unwrap();
    round.dealer_play().unwrap();

    let view = round.view();
    assert_eq!(view.state, RoundState::Settled);
    assert_eq!(view.dealer_cards[0], CardView::Up(card(Suit::Heart, 9)));
    assert_eq!(
        view.dealer_totals.map(|t| t.iter().copied().collect::<Vec<_>>()),
        Some(vec![17])
    );

    let result = round.result().unwrap();
    assert_eq!(result.player_score, Some(19));
    assert_eq!(result.dealer_score, Some(17));
    assert_eq!(
        result.announcement().to_string(),
        "Player1 has a larger hand! Player1 wins!"
    );
}

#[test]
fn announcement_uses_configured_names() {
    let options = GameOptions::default()
        .with_player_name("Alice")
        .with_dealer_name("House");
    let mut round = Round::new(options, 1);
    round
        .start_with(Shoe::from_cards(vec![
            card(Suit::Spade, 1),
            card(Suit::Heart, 1),
            card(Suit::Club, 13),
            card(Suit::Diamond, 13),
        ]))
        .unwrap();

    let result = round.result().unwrap();
    assert_eq!(
        result.announcement().to_string(),
        "House and Alice have blackjack! Push!"
    );
}
