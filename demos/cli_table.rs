//! CLI table example: seat players, pick a dealer, and play rounds until at
//! most one player has chips left.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjtable::{Card, GameState, RoundView, SeatView, Suit, Table, TableOptions};

fn main() {
    println!("Blackjack table example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let table = Table::new(TableOptions::default(), seed);

    if !seat_players(&table) {
        return;
    }

    loop {
        let view = match table.start_round() {
            Ok(view) => view,
            Err(err) => {
                println!("Cannot start round: {err}");
                return;
            }
        };
        println!("\n=== New round ({} cards in deck) ===", view.cards_remaining);

        while let Some(id) = table.awaiting_bet() {
            let seat = table.view().seat(id).cloned();
            let Some(seat) = seat else { break };
            let prompt = format!("{}, how much do you bet? (chips: {}): ", seat.name, seat.chips);
            let Some(amount) = prompt_usize(&prompt) else {
                table.abandon_round();
                return;
            };
            if let Err(err) = table.submit_bet(id, amount) {
                println!("Bet error: {err}");
            }
        }

        if let Err(err) = table.deal_initial_hands() {
            println!("Deal error: {err}");
            table.abandon_round();
            return;
        }

        while let Some(id) = table.current_player() {
            print_table(&table.view());

            let action = prompt_line("Action ([h]it, [s]tand): ");
            let result = match action.as_str() {
                "h" | "hit" => table.hit(id),
                "s" | "stand" => table.stand(id),
                "q" | "quit" => {
                    table.abandon_round();
                    return;
                }
                _ => {
                    println!("Unknown action.");
                    continue;
                }
            };

            match result {
                Ok(view) => {
                    if view.seat(id).is_some_and(|seat| seat.bust) {
                        println!("Bust!");
                    }
                }
                Err(err) => println!("Action error: {err}"),
            }
        }

        if table.state() == GameState::DealerTurn {
            match table.dealer_play() {
                Ok(drawn) if !drawn.is_empty() => {
                    println!("Dealer draws {} card(s).", drawn.len());
                }
                Ok(_) => {}
                Err(err) => {
                    println!("Dealer error: {err}");
                    table.abandon_round();
                    return;
                }
            }
        }

        match table.settle() {
            Ok(result) => {
                print_table(&table.view());
                for player in &result.players {
                    println!(
                        "{}: {} (payout {}, net {}, chips {})",
                        player.name,
                        player.outcome.tag(),
                        player.payout,
                        player.net,
                        player.chips
                    );
                }
                if result.winners.is_empty() {
                    println!("No winners this round.");
                } else {
                    println!("Winners: {}", result.winners.join(", "));
                }
            }
            Err(err) => {
                println!("Settlement error: {err}");
                table.abandon_round();
                return;
            }
        }

        if table.is_game_over() {
            match table.contenders().first() {
                Some(&id) => {
                    let name = table
                        .participant(id)
                        .map(|p| p.name().to_string())
                        .unwrap_or_default();
                    println!("{name} wins the game!");
                }
                None => println!("Nobody has chips left."),
            }
            println!("Game over.");
            break;
        }
    }
}

fn seat_players(table: &Table) -> bool {
    println!("Enter player names, one per line. Empty line when done.");
    loop {
        let name = prompt_raw("Name: ");
        if name.is_empty() {
            if table.participant_count() >= 2 {
                break;
            }
            println!("Seat a dealer and at least one player.");
            continue;
        }
        if name == "q" {
            return false;
        }
        match table.join(&name) {
            Ok(id) => println!("Seat {id}: {name}"),
            Err(err) => println!("Cannot seat {name}: {err}"),
        }
    }

    loop {
        let Some(seat) = prompt_usize("Seat number of the dealer: ") else {
            return false;
        };
        let Ok(seat) = u8::try_from(seat) else {
            println!("No such seat.");
            continue;
        };
        match table.designate_dealer(seat) {
            Ok(()) => return true,
            Err(err) => println!("{err}"),
        }
    }
}

fn prompt_raw(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_string()
}

fn prompt_line(prompt: &str) -> String {
    prompt_raw(prompt).to_lowercase()
}

fn prompt_usize(prompt: &str) -> Option<usize> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn print_table(view: &RoundView) {
    if let Some(dealer) = &view.dealer {
        println!(
            "\nDealer {}: {} (value {})",
            dealer.name,
            format_cards(&dealer.cards),
            dealer.value
        );
    }

    for seat in &view.seats {
        let marker = if view.current_turn == Some(seat.id) { "*" } else { " " };
        println!("{marker} {}", format_seat(seat));
    }
    println!();
}

fn format_seat(seat: &SeatView) -> String {
    let mut line = format!(
        "{} (chips {}) {} | value {} | bet {}",
        seat.name,
        seat.chips,
        format_cards(&seat.cards),
        seat.value,
        seat.bet
    );
    if seat.natural {
        line.push_str(" | blackjack");
    } else if seat.bust {
        line.push_str(" | bust");
    }
    line
}

fn format_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(no cards)".to_string();
    }
    cards
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs | Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
