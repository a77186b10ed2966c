//! Definition and cross-reference transcription

use bridge_model::{AlgorithmStep, Definition};
use indexmap::IndexMap;
use tracing::debug;

/// Definitions plus the topic cross-reference table
#[derive(Debug, Clone, PartialEq)]
pub struct DefinitionTables {
    /// Definition id → definition
    pub definitions: IndexMap<String, Definition>,
    /// Topic id → related ids
    pub cross_references: IndexMap<String, Vec<String>>,
}

/// Definitions transcribed from the definition notes
#[must_use]
pub fn parse_definitions(notes: &str) -> DefinitionTables {
    debug!(lines = notes.lines().count(), "transcribing definition notes");

    let definitions = [
        walsh(),
        artificial_reverse(),
        natural_reverse(),
        reverse_flannery(),
        super_splinter(),
    ]
    .into_iter()
    .map(|definition| (definition.id.clone(), definition))
    .collect();

    DefinitionTables {
        definitions,
        cross_references: cross_references(),
    }
}

fn walsh() -> Definition {
    Definition::convention(
        "walsh",
        "Walsh Convention",
        "Holding 5+d and 4M; bid 1d (instead of 1M) when:",
    )
    .with_details(&[
        "Weak hands (5-7) with 5/6 d and 4M; don't see game opp 18/19; so looking at signoff in d",
        "Strong hands, 15+ hcp; On such hands, subsequently 2d gf shows 45 and 2n st shows 46",
        "7+ d, any strength",
    ])
    .with_examples(&[
        "♠ A432 ♥ 2 ♦ KJ987 ♣ 432 - Bid 1♦ (weak Walsh)",
        "♠ AK32 ♥ 2 ♦ KQJ987 ♣ A32 - Bid 1♦ (strong Walsh)",
    ])
}

fn artificial_reverse() -> Definition {
    Definition::convention(
        "artificial-reverse",
        "Artificial Reverse",
        "1x-1y-2z (y ≠ NT; z = cheapest 2 bid) = single suit x/45; f1",
    )
    .with_vulnerability("non-vul only")
    .with_step("2y_if_available", AlgorithmStep::Rule("nf".to_string()))
    .with_step(
        "ask_bid",
        AlgorithmStep::Rule("2fs or 2n whichever is cheaper (non sign off hands)".to_string()),
    )
    .with_step(
        "responses_to_ask",
        AlgorithmStep::cases(&[
            "2y if available = 3 card y, 45 in y and x",
            "2n if available = 45, min",
            "3fs = single suit x, gf",
            "3y = 3 card y, 45 in y and x (if 2y available then 3y = 6331)",
            "3x = single suit x, min, nf (if 2n asking: 3x = single x min or 45min)",
            "3z = 45, max, gf",
            "3n = single suit x, min, good suit, COG",
        ]),
    )
    .with_step(
        "other_responses",
        AlgorithmStep::cases(&[
            "2n if not asking bid = nat, nf",
            "3x = min, nf",
            "3y = long y, nf if 2y not available, if 2y available then 3y = 0/1 loser suit",
            "3z = 4 card z, gf",
        ]),
    )
}

fn natural_reverse() -> Definition {
    Definition::convention(
        "natural-reverse",
        "Natural Reverse",
        "1x-1y-2z: z is not the cheapest 2 bid (not artificial reverse); f1, gf if jump shift",
    )
    .with_step(
        "general_responses",
        AlgorithmStep::cases(&[
            "2y if available = 5+y, mostly gf",
            "2n or 2fs = start of a possible weak sequence",
            "2n/3x = relayed bid, min reverse",
            "rest = max reverse",
            "3x = gf",
            "3fs = Can't raise p's suits, but good hand, slammish",
        ]),
    )
}

fn reverse_flannery() -> Definition {
    Definition::convention(
        "reverse-flannery",
        "Reverse Flannery",
        "2♥ response to 1♣ opening",
    )
    .with_meaning(
        "5♠4♥/55/65, invitational (good 8 - bad 11)",
        "64 hands go via xyz convention",
    )
}

fn super_splinter() -> Definition {
    Definition::convention(
        "super-splinter",
        "Super Splinter",
        "Advanced splinter bid showing exceptional slam interest",
    )
    .with_remark("Placeholder - full definition to be added")
}

fn cross_references() -> IndexMap<String, Vec<String>> {
    let table: [(&str, &[&str]); 5] = [
        (
            "1c-opening",
            &["walsh", "reverse-flannery", "artificial-reverse", "natural-reverse"],
        ),
        (
            "opener-rebids",
            &["artificial-reverse", "natural-reverse", "super-splinter"],
        ),
        ("walsh", &["1c-1d-response"]),
        (
            "artificial-reverse",
            &["opener-rebids-1c1d", "opener-rebids-1cM"],
        ),
        (
            "natural-reverse",
            &["opener-rebids-1c1d", "opener-rebids-1cM"],
        ),
    ];

    table
        .iter()
        .map(|(topic, ids)| {
            (
                (*topic).to_string(),
                ids.iter().map(|id| (*id).to_string()).collect(),
            )
        })
        .collect()
}
