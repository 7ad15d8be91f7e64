//! Camel cards: rank poker-like hands, with `J` as jack or as joker

use advent_solver::{AocParser, ExecutionMode, Expected, ParseError, SolveError, Solver};
use itertools::Itertools;

pub struct Day07;

const CARDS: &str = "23456789TJQKA";
const JOKER: u8 = b'J';

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum HandType {
    HighCard,
    OnePair,
    TwoPair,
    ThreeOfAKind,
    FullHouse,
    FourOfAKind,
    FiveOfAKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rules {
    Jacks,
    Jokers,
}

impl Rules {
    fn card_value(self, card: u8) -> usize {
        match (self, card) {
            (Rules::Jokers, JOKER) => 0,
            _ => CARDS.bytes().position(|c| c == card).map_or(0, |p| p + 1),
        }
    }
}

#[derive(Debug)]
pub struct Hand {
    cards: [u8; 5],
    bid: u64,
}

impl Hand {
    fn hand_type(&self, rules: Rules) -> HandType {
        let jokers = match rules {
            Rules::Jacks => 0,
            Rules::Jokers => self.cards.iter().filter(|&&c| c == JOKER).count(),
        };
        let mut groups: Vec<usize> = self
            .cards
            .iter()
            .filter(|&&c| rules == Rules::Jacks || c != JOKER)
            .counts()
            .into_values()
            .sorted_unstable_by(|a, b| b.cmp(a))
            .collect();
        // jokers join the largest group
        match groups.first_mut() {
            Some(largest) => *largest += jokers,
            None => groups.push(jokers),
        }

        match groups.as_slice() {
            [5] => HandType::FiveOfAKind,
            [4, 1] => HandType::FourOfAKind,
            [3, 2] => HandType::FullHouse,
            [3, ..] => HandType::ThreeOfAKind,
            [2, 2, 1] => HandType::TwoPair,
            [2, ..] => HandType::OnePair,
            _ => HandType::HighCard,
        }
    }

    fn strength(&self, rules: Rules) -> (HandType, [usize; 5]) {
        (self.hand_type(rules), self.cards.map(|c| rules.card_value(c)))
    }
}

fn parse_hand(line: &str) -> Result<Hand, ParseError> {
    let (cards, bid) = line
        .split_once(' ')
        .ok_or_else(|| ParseError::invalid(format!("expected '<hand> <bid>', got '{}'", line)))?;
    let cards: [u8; 5] = cards
        .as_bytes()
        .try_into()
        .map_err(|_| ParseError::invalid(format!("hand '{}' needs five cards", cards)))?;
    if let Some(c) = cards.iter().find(|c| !CARDS.as_bytes().contains(c)) {
        return Err(ParseError::invalid(format!("unknown card '{}'", *c as char)));
    }
    Ok(Hand {
        cards,
        bid: bid.trim().parse().map_err(ParseError::invalid)?,
    })
}

fn total_winnings(hands: &[Hand], rules: Rules) -> u64 {
    hands
        .iter()
        .sorted_by_cached_key(|h| h.strength(rules))
        .zip(1..)
        .map(|(hand, rank)| hand.bid * rank)
        .sum()
}

impl AocParser for Day07 {
    type SharedData<'a> = Vec<Hand>;

    fn parse(input: &str, _mode: ExecutionMode) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(parse_hand)
            .collect()
    }
}

impl Solver for Day07 {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        let rules = match part {
            1 => Rules::Jacks,
            2 => Rules::Jokers,
            _ => return Err(SolveError::PartNotImplemented(part)),
        };
        Ok(total_winnings(shared, rules).to_string())
    }

    fn sample(_part: u8) -> Option<&'static str> {
        Some(SAMPLE)
    }

    fn expected(part: u8) -> Option<Expected> {
        match part {
            1 => Some(Expected::new("6440", "247961593")),
            2 => Some(Expected::new("5905", "248750699")),
            _ => None,
        }
    }
}

const SAMPLE: &str = "\
32T3K 765
T55J5 684
KK677 28
KTJJT 220
QQQJA 483
";

#[cfg(test)]
mod tests {
    use super::*;

    fn hand(cards: &str) -> Hand {
        parse_hand(&format!("{} 1", cards)).unwrap()
    }

    #[test]
    fn test_sample() {
        let mut shared = Day07::parse(SAMPLE, ExecutionMode::Sample).unwrap();
        assert_eq!(Day07::solve_part(&mut shared, 1).unwrap(), "6440");
        assert_eq!(Day07::solve_part(&mut shared, 2).unwrap(), "5905");
    }

    #[test]
    fn test_hand_types() {
        assert_eq!(hand("AAAAA").hand_type(Rules::Jacks), HandType::FiveOfAKind);
        assert_eq!(hand("23332").hand_type(Rules::Jacks), HandType::FullHouse);
        assert_eq!(hand("23432").hand_type(Rules::Jacks), HandType::TwoPair);
        assert_eq!(hand("KTJJT").hand_type(Rules::Jacks), HandType::TwoPair);
        assert_eq!(hand("KTJJT").hand_type(Rules::Jokers), HandType::FourOfAKind);
        assert_eq!(hand("JJJJJ").hand_type(Rules::Jokers), HandType::FiveOfAKind);
    }

    #[test]
    fn test_joker_is_weakest_card() {
        assert!(hand("J2345").strength(Rules::Jacks) > hand("T2345").strength(Rules::Jacks));
        assert_eq!(hand("J2234").hand_type(Rules::Jokers), HandType::ThreeOfAKind);
        assert!(hand("J2234").strength(Rules::Jokers) < hand("22234").strength(Rules::Jokers));
        assert!(hand("JKKK2").strength(Rules::Jokers) < hand("QQQQ2").strength(Rules::Jokers));
    }

    #[test]
    fn test_malformed_hands() {
        assert!(parse_hand("AAAA 1").is_err());
        assert!(parse_hand("AAAAX 1").is_err());
        assert!(parse_hand("AAAAA").is_err());
    }
}
