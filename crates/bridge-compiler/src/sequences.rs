//! Sequence transcription

use bridge_model::{Category, Role, Sequence, SequenceBid};
use indexmap::IndexMap;
use tracing::debug;

const NON_VUL: &str = "non-vul";
const VUL: &str = "vul";

/// Sequences transcribed from the opener-rebid notes
#[must_use]
pub fn parse_sequences(notes: &str) -> IndexMap<String, Sequence> {
    debug!(lines = notes.lines().count(), "transcribing sequence notes");

    let sequence = opener_rebids_over_one_diamond();
    IndexMap::from([(sequence.id.clone(), sequence)])
}

fn category(title: &str, bids: Vec<SequenceBid>) -> Category {
    Category {
        title: title.to_string(),
        bids,
    }
}

fn opener_rebids_over_one_diamond() -> Sequence {
    let balanced = category(
        "Rebids to show balanced hands",
        vec![
            SequenceBid::opener("1c-1d-1n", "12-14; can have 4M if < 5c", "12-14", "balanced")
                .referencing("responder-rebids-1c1d1n"),
            SequenceBid::opener("1c-1d-2n", "18/19 bal", "18-19", "balanced")
                .when(NON_VUL)
                .referencing("responder-rebids-1c1d2n-nv"),
        ],
    );

    let single_suiter = category(
        "Rebids to show single suiter clubs",
        vec![
            SequenceBid::opener("1c-1d-2c", "4+c, 12-14", "12-14", "4+c")
                .referencing("responder-rebids-1c1d2c"),
            SequenceBid::opener("1c-1d-3c", "6+c, 15-17, nf", "15-17", "6+c"),
            SequenceBid::opener("1c-1d-2n", "long c, 18+, no sing, gf", "18+", "long c")
                .when(VUL)
                .referencing("responder-rebids-1c1d2n-vul"),
        ],
    );

    let two_suiter = category(
        "Rebids to show 2 suiter: c + another",
        vec![
            SequenceBid::opener("1c-1d-1M", "12-17, 5+c, 4M", "12-17", "5+c, 4M")
                .referencing("responder-rebids-1c1d1M"),
            SequenceBid::opener(
                "1c-1d-2h",
                "Artificial reverse: c+h/long c; f1",
                "varies",
                "c+h/long c",
            )
            .when(NON_VUL)
            .referencing("responder-rebids-1c1d2h-nv")
            .with_definitions(&["artificial-reverse"]),
            SequenceBid::opener("1c-1d-2h", "Natural reverse: 5c,4h; 18+, gf", "18+", "5c,4h")
                .when(VUL)
                .referencing("responder-rebids-1c1d2h-vul")
                .with_definitions(&["natural-reverse"]),
            SequenceBid::opener("1c-1d-2s", "Natural reverse: 5c,4s 18+, gf", "18+", "5c,4s")
                .referencing("responder-rebids-1c1d2s")
                .with_definitions(&["natural-reverse"]),
        ],
    );

    let diamond_support = category(
        "Rebids to show support for d",
        vec![
            SequenceBid::opener("1c-1d-2d", "4d, 4+c, 12-14", "12-14", "4d, 4+c"),
            SequenceBid::opener("1c-1d-3d", "4d, 4+c, 15-17", "15-17", "4d, 4+c"),
            SequenceBid::opener("1c-1d-3M", "Spl for d, 18+; denies 4OM", "18+", "splinter"),
        ],
    );

    Sequence {
        id: "opener-rebids-1c1d".to_string(),
        title: "Opener rebids over 1c-1d".to_string(),
        auction: vec!["1c".to_string(), "1d".to_string()],
        player: Role::Opener,
        categories: IndexMap::from([
            ("balanced".to_string(), balanced),
            ("single-suiter-clubs".to_string(), single_suiter),
            ("two-suiter".to_string(), two_suiter),
            ("diamond-support".to_string(), diamond_support),
        ]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notes::OPENER_REBIDS;
    use pretty_assertions::assert_eq;

    #[test]
    fn one_sequence_with_four_categories() {
        let sequences = parse_sequences(OPENER_REBIDS);
        assert_eq!(sequences.len(), 1);

        let sequence = &sequences["opener-rebids-1c1d"];
        assert_eq!(sequence.auction, ["1c", "1d"]);
        assert_eq!(sequence.player, Role::Opener);

        let categories: Vec<_> = sequence.categories.keys().map(String::as_str).collect();
        assert_eq!(
            categories,
            ["balanced", "single-suiter-clubs", "two-suiter", "diamond-support"]
        );
        let counts: Vec<_> = sequence.categories.values().map(|c| c.bids.len()).collect();
        assert_eq!(counts, [2, 3, 4, 3]);
    }

    #[test]
    fn vulnerability_splits_the_same_call() {
        let sequences = parse_sequences(OPENER_REBIDS);
        let two_suiter = &sequences["opener-rebids-1c1d"].categories["two-suiter"];
        let two_hearts: Vec<_> = two_suiter
            .bids
            .iter()
            .filter(|bid| bid.bid == "1c-1d-2h")
            .map(|bid| bid.vulnerability.as_deref())
            .collect();
        assert_eq!(two_hearts, [Some(NON_VUL), Some(VUL)]);
    }

    #[test]
    fn every_transcribed_bid_appears_in_the_notes() {
        let sequences = parse_sequences(OPENER_REBIDS);
        for bid in sequences.values().flat_map(|s| s.categories.values()).flat_map(|c| &c.bids) {
            let compact = bid.bid.replace('-', "");
            assert!(OPENER_REBIDS.contains(&compact), "{compact} missing from notes");
        }
    }
}
