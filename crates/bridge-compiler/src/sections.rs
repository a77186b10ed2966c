//! Section transcription

use bridge_model::{Response, Section, SectionContent, Subsection};
use indexmap::IndexMap;
use tracing::debug;

const CLUB_OPENING_SUMMARY: &str =
    "longer clubs or 44 in c and d; denies 5M unless strong hands with 6+c and 5M";

/// Sections transcribed from the club-opening notes, in display order
///
/// `notes` is not tokenized; the records below are its transcription.
#[must_use]
pub fn parse_sections(notes: &str) -> IndexMap<String, Section> {
    debug!(lines = notes.lines().count(), "transcribing section notes");

    let mut sections = IndexMap::new();
    for section in [club_opening(), intervention(), major_opening()] {
        sections.insert(section.id.clone(), section);
    }
    sections
}

fn club_opening() -> Section {
    let non_support = Subsection {
        title: "Non support showing responses".to_string(),
        responses: vec![
            Response::link(
                "1c-1d",
                "Walsh: 5+, 7+d any/4+d, no 4M; OR 5d4M, 4-5/15+ or 6d4M, 4-8/15+",
                "opener-rebids-1c1d",
            )
            .with_definitions(&["walsh"]),
            Response::link("1c-1M", "5+, 4+M, up the line", "opener-rebids-1cM"),
            Response::link(
                "1c-2h",
                "Reverse Flannery: 5s4h/55/65, inv (Gd 8 – bad 11): (64 hands go via xyz)",
                "opener-rebids-1c2h",
            )
            .with_definitions(&["reverse-flannery"]),
            Response::link(
                "1c-2n",
                "10/11, no 4M generally denies 4d for 1d2n, nf",
                "opener-rebids-1c2n",
            ),
            Response::terminal("1c-3n", "12-14, no 4M"),
        ],
    };

    let support = Subsection {
        title: "Responses with support for m".to_string(),
        responses: vec![
            Response::terminal("1c-1n", "4+c, no 4 card M"),
            Response::link("1c-2s", "5sp, 4+m, inv", "opener-rebids-1c2s"),
            Response::link("1c-2c", "Inverted minor: 10+", "opener-rebids-1c2c"),
            Response::terminal("1c-3c", "pre-empt/mixed no stiff"),
            Response::link("1c-2d", "Mixed with stiff", "opener-rebids-1c2d"),
            Response::terminal("1c-3d/1c-3M", "Spl, 12-14 or 18+, denies 4OM"),
        ],
    };

    let mut subsections = IndexMap::new();
    subsections.insert("non-support-responses".to_string(), non_support);
    subsections.insert("support-responses".to_string(), support);

    Section {
        id: "1m-opening".to_string(),
        title: "1 Club Opening".to_string(),
        subtitle: CLUB_OPENING_SUMMARY.to_string(),
        order: 1,
        content: SectionContent::Narrative {
            overview: format!("1 Club Opening: {CLUB_OPENING_SUMMARY}"),
            subsections,
        },
    }
}

fn intervention() -> Section {
    Section {
        id: "1m-intervention".to_string(),
        title: "1m intervention".to_string(),
        subtitle: "Competitive bidding after 1m opening".to_string(),
        order: 2,
        content: SectionContent::overview("Responses when opponents intervene over 1m opening"),
    }
}

fn major_opening() -> Section {
    Section {
        id: "1M-op".to_string(),
        title: "1M opening".to_string(),
        subtitle: "Major suit opening bids".to_string(),
        order: 3,
        content: SectionContent::overview("One-level major suit opening bids and responses"),
    }
}
