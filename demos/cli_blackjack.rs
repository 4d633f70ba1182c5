//! CLI blackjack example.

use std::io::{self, BufRead, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjtable::{
    Card, CardView, Continuation, GameOptions, Hand, InputCollector, PlayerAction, Presenter,
    RoundResult, RoundState, Session, Suit, TableView,
};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    println!("Blackjack CLI example");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut session = Session::new(GameOptions::default(), seed);

    let mut console = Console::new(io::stdin().lock());
    match session.run(&mut console, &mut Screen) {
        Ok(stats) => println!(
            "Thank you for playing! {} rounds: {} won, {} lost, {} pushed.",
            stats.rounds, stats.player_wins, stats.dealer_wins, stats.pushes
        ),
        Err(err) => println!("Round error: {err}"),
    }
}

struct Console<R> {
    input: R,
}

impl<R: BufRead> Console<R> {
    const fn new(input: R) -> Self {
        Self { input }
    }

    /// Returns `None` once input is closed.
    fn prompt_line(&mut self, prompt: &str) -> Option<String> {
        print!("{prompt}");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => {
                println!();
                None
            }
            Ok(_) => Some(line.trim().to_lowercase()),
        }
    }
}

impl<R: BufRead> InputCollector for Console<R> {
    fn player_action(&mut self, _view: &TableView<'_>) -> PlayerAction {
        loop {
            let Some(line) = self.prompt_line("Enter \"hit\" or \"stand\": ") else {
                return PlayerAction::Stand;
            };
            match line.as_str() {
                "h" | "hit" => return PlayerAction::Hit,
                "s" | "stand" => return PlayerAction::Stand,
                _ => println!("Invalid input. Please try again."),
            }
        }
    }

    fn play_again(&mut self, _result: &RoundResult) -> Continuation {
        println!();
        loop {
            let Some(line) = self.prompt_line("Do you want to play again? (y/n): ") else {
                return Continuation::Quit;
            };
            match line.as_str() {
                "y" | "yes" => {
                    println!();
                    return Continuation::Continue;
                }
                "n" | "no" => return Continuation::Quit,
                _ => println!("Invalid input. Please try again."),
            }
        }
    }
}

struct Screen;

impl Presenter for Screen {
    fn show_table(&mut self, view: &TableView<'_>) {
        println!(
            "\n{}: {} (value {})",
            view.dealer_name,
            format_dealer(&view.dealer_cards),
            view.dealer_totals
                .map_or_else(|| "?".to_string(), |totals| format_totals(totals.iter())),
        );
        println!(
            "{}: {} (value {})",
            view.player_name,
            format_hand(view.player_hand),
            format_totals(view.player_hand.totals().iter()),
        );
        if let Some(line) = stand_line(view) {
            println!("{line}");
        }
        println!();
    }

    fn show_result(&mut self, result: &RoundResult) {
        println!("{}: {}", result.dealer_name, format_hand(&result.dealer_hand));
        println!("{}: {}", result.player_name, format_hand(&result.player_hand));
        println!("{}", result.announcement());
    }
}

fn stand_line(view: &TableView<'_>) -> Option<String> {
    if let (RoundState::DealerTurn, Ok(score)) = (view.state, view.player_hand.best_score()) {
        Some(format!("{} stands on {score}", view.player_name))
    } else {
        None
    }
}

fn format_totals<'a>(totals: impl Iterator<Item = &'a u16>) -> String {
    totals
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" or ")
}

fn format_dealer(cards: &[CardView]) -> String {
    if cards.is_empty() {
        return "(no cards)".to_string();
    }
    cards
        .iter()
        .map(|view| match view {
            CardView::Up(card) => format_card(card),
            CardView::Hidden => "??".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    hand.cards()
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Heart | Suit::Diamond => "31",
        Suit::Club | Suit::Spade => "34",
    };
    colorize(&card.to_string(), color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
