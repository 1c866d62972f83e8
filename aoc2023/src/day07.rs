use crate::error::malformed;
use crate::Result;
use arrayvec::ArrayVec;

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
enum HandType {
    HighCard,
    OnePair,
    TwoPair,
    ThreeOfAKind,
    FullHouse,
    FourOfAKind,
    FiveOfAKind,
}

fn card_value(card: u8, jokers: bool) -> Option<u8> {
    Some(match card {
        b'2' ..= b'9' => card - b'0',
        b'T' => 10,
        b'J' => if jokers {1} else {11},
        b'Q' => 12,
        b'K' => 13,
        b'A' => 14,
        _ => return None,
    })
}

/// Jokers (value 1) join whichever group is already largest.
fn hand_type(values: &[u8; 5]) -> HandType {
    let mut counts = [0u8; 15];
    for &v in values {counts[v as usize] += 1};
    let jokers = std::mem::take(&mut counts[1]);
    let mut groups = counts.into_iter().filter(|&c| c > 0).collect::<ArrayVec<u8, 5>>();
    groups.sort_unstable_by(|a, b| b.cmp(a));
    match groups.first_mut() {
        Some(largest) => *largest += jokers,
        None => groups.push(jokers),
    }
    match groups[..] {
        [5] => HandType::FiveOfAKind,
        [4, ..] => HandType::FourOfAKind,
        [3, 2] => HandType::FullHouse,
        [3, ..] => HandType::ThreeOfAKind,
        [2, 2, ..] => HandType::TwoPair,
        [2, ..] => HandType::OnePair,
        _ => HandType::HighCard,
    }
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let jokers = part == 2;
    let mut hands = vec![];
    for line in input.trim().lines() {
        let (cards, bid) = line.trim().split_once(' ').ok_or_else(|| malformed(line, "expected cards and a bid"))?;
        let values: [u8; 5] = cards.bytes().map(|c| card_value(c, jokers)).collect::<Option<Vec<_>>>()
            .and_then(|v| v.try_into().ok())
            .ok_or_else(|| malformed(line, "expected five cards"))?;
        let bid: u64 = bid.trim().parse()?;
        hands.push((hand_type(&values), values, bid));
    }

    hands.sort_unstable();
    Ok(hands.iter().enumerate().map(|(rank, &(_, _, bid))| (rank as u64 + 1) * bid).sum::<u64>().to_string())
}
