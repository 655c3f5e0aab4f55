use std::env;
use std::process::ExitCode;

use chess_rules::board::{CastleSide, PieceKind, Square};
use chess_rules::game::Game;
use chess_rules::variant::VariantDescriptor;

fn parse_variant(name: &str) -> Result<VariantDescriptor, String> {
    match name {
        "standard" => Ok(VariantDescriptor::standard()),
        "unicorn" => Ok(VariantDescriptor::with_unicorn()),
        _ => {
            let index = name
                .strip_prefix("chess960:")
                .ok_or_else(|| format!("unknown variant '{name}'"))?;
            let index: u16 = index
                .parse()
                .map_err(|_| format!("bad chess960 index '{index}'"))?;
            VariantDescriptor::chess960(index).map_err(|err| err.to_string())
        }
    }
}

/// One command-line move token.
#[derive(Debug, PartialEq, Eq)]
enum Token {
    /// `O-O` or `O-O-O`, always played as a castle
    Castle(CastleSide),
    Step {
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    },
}

fn parse_token(text: &str) -> Result<Token, String> {
    match text {
        "O-O" | "0-0" => Ok(Token::Castle(CastleSide::Kingside)),
        "O-O-O" | "0-0-0" => Ok(Token::Castle(CastleSide::Queenside)),
        _ => {
            let (from, to, promotion) = parse_move(text)?;
            Ok(Token::Step { from, to, promotion })
        }
    }
}

/// Coordinate move such as `e2e4`, `e7e8q` or `j10j9` on larger boards.
fn parse_move(text: &str) -> Result<(Square, Square, Option<PieceKind>), String> {
    if !text.is_ascii() || text.len() < 4 {
        return Err(format!("bad move '{text}'"));
    }
    let split = text[1..]
        .find(|c: char| c.is_ascii_alphabetic())
        .map(|i| i + 1)
        .ok_or_else(|| format!("bad move '{text}'"))?;
    let (from, rest) = text.split_at(split);

    let (to, promotion) = match rest.char_indices().skip(1).find(|(_, c)| c.is_ascii_alphabetic()) {
        Some((i, c)) => {
            let kind = PieceKind::from_char(c).ok_or_else(|| format!("bad promotion in '{text}'"))?;
            (&rest[..i], Some(kind))
        }
        None => (rest, None),
    };

    let from: Square = from.parse().map_err(|err| format!("{text}: {err}"))?;
    let to: Square = to.parse().map_err(|err| format!("{text}: {err}"))?;
    Ok((from, to, promotion))
}

fn run(args: &[String]) -> Result<(), String> {
    let Some(variant_name) = args.first() else {
        return Err("usage: legal_moves <standard|unicorn|chess960:N> [e2e4|e7e8q|O-O|O-O-O ...]".to_string());
    };
    let mut game = Game::new(parse_variant(variant_name)?).map_err(|err| err.to_string())?;

    for text in &args[1..] {
        match parse_token(text)? {
            Token::Castle(side) => {
                game.propose_castling(side)
                    .map_err(|err| format!("{text}: {err}"))?;
            }
            Token::Step { from, to, promotion } => {
                let outcome = game
                    .propose_move(from, to)
                    .map_err(|err| format!("{text}: {err}"))?;
                if outcome.promotion_pending {
                    let kind = promotion.unwrap_or(PieceKind::Queen);
                    game.resolve_promotion(to, kind)
                        .map_err(|err| format!("{text}: {err}"))?;
                }
            }
        }
    }

    print!("{}", game.board());
    println!("variant: {}", game.variant().name());
    println!("side_to_move: {}", game.side_to_move());
    println!("status: {}", game.status());
    println!("check: {}", game.in_check());

    let moves = game.board().all_legal_moves(game.side_to_move());
    println!("legal_moves: {}", moves.len());
    for mv in moves {
        println!("{mv}");
    }
    Ok(())
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_tokens() {
        assert_eq!(parse_token("O-O"), Ok(Token::Castle(CastleSide::Kingside)));
        assert_eq!(parse_token("0-0-0"), Ok(Token::Castle(CastleSide::Queenside)));
        assert_eq!(
            parse_token("e7e8q"),
            Ok(Token::Step {
                from: Square::new(4, 6),
                to: Square::new(4, 7),
                promotion: Some(PieceKind::Queen),
            })
        );
        assert!(parse_token("O-").is_err());
    }

    #[test]
    fn test_castle_token_plays_ambiguous_castle() {
        // 600 is R B Q N B K R N: king f1, rook g1. The king's g1 landing
        // square holds its own rook, so only O-O reaches it.
        assert!(run(&args(&["chess960:600", "O-O"])).is_ok());
        assert!(run(&args(&["chess960:600", "O-O-O"])).is_err());
    }

    #[test]
    fn test_castle_token_standard() {
        assert!(run(&args(&[
            "standard", "e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "g8f6", "O-O"
        ]))
        .is_ok());
    }
}
