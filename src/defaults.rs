use crate::catalog::Catalog;
use crate::models::{Cadence, Card, Credit};

struct SeedCredit {
    id: &'static str,
    label: &'static str,
    amount: f64,
    cadence: Cadence,
}

struct SeedCard {
    id: &'static str,
    name: &'static str,
    annual_fee: f64,
    rewards_note: &'static str,
    credits: &'static [SeedCredit],
}

const SEED: &[SeedCard] = &[
    SeedCard {
        id: "amex-gold",
        name: "Amex Gold",
        annual_fee: 325.0,
        rewards_note: "4x dining & groceries, 3x flights, 2x prepaid hotels, 1x other",
        credits: &[
            SeedCredit { id: "uber-cash", label: "Uber Cash ($10/mo)", amount: 10.0, cadence: Cadence::Monthly },
            SeedCredit { id: "dining-credit", label: "Dining Credit ($10/mo)", amount: 10.0, cadence: Cadence::Monthly },
            SeedCredit { id: "dunkin", label: "Dunkin ($7/mo)", amount: 7.0, cadence: Cadence::Monthly },
            SeedCredit { id: "resy", label: "Resy ($50 semi-annual)", amount: 50.0, cadence: Cadence::SemiAnnual },
        ],
    },
    SeedCard {
        id: "venture-x",
        name: "Capital One Venture X",
        annual_fee: 395.0,
        rewards_note: "10x hotels/cars (portal), 5x flights (portal), 2x everywhere",
        credits: &[
            SeedCredit { id: "c1-travel", label: "$300 Capital One Travel (annual)", amount: 300.0, cadence: Cadence::Annual },
            SeedCredit { id: "c1-anniv", label: "10k anniversary miles (~$100)", amount: 100.0, cadence: Cadence::Annual },
        ],
    },
    SeedCard {
        id: "csr",
        name: "Chase Sapphire Reserve",
        annual_fee: 795.0,
        rewards_note: "8x Chase Travel, 4x direct flights/hotels, 3x dining",
        credits: &[
            SeedCredit { id: "csr-travel", label: "$300 Travel (annual)", amount: 300.0, cadence: Cadence::Annual },
            SeedCredit { id: "csr-edit", label: "$500 The EditSM (semi-annual)", amount: 250.0, cadence: Cadence::SemiAnnual },
            SeedCredit { id: "csr-dining", label: "$300 Dining ($150 semi-annual)", amount: 150.0, cadence: Cadence::SemiAnnual },
            SeedCredit { id: "csr-apple", label: "$250 Apple TV+ / Music (annual)", amount: 250.0, cadence: Cadence::Annual },
            SeedCredit { id: "csr-dashpass", label: "$120 DashPass ($10/mo)", amount: 10.0, cadence: Cadence::Monthly },
            SeedCredit { id: "csr-doordash", label: "$300 DoorDash promos ($25/mo)", amount: 25.0, cadence: Cadence::Monthly },
            SeedCredit { id: "csr-lyft", label: "$120 Lyft ($10/mo)", amount: 10.0, cadence: Cadence::Monthly },
            SeedCredit { id: "csr-stubhub", label: "$300 StubHub ($150 semi-annual)", amount: 150.0, cadence: Cadence::SemiAnnual },
        ],
    },
];

/// The catalog a fresh install starts with.
pub fn default_catalog() -> Catalog {
    let cards = SEED
        .iter()
        .map(|c| Card {
            id: c.id.to_string(),
            name: c.name.to_string(),
            annual_fee: c.annual_fee,
            rewards_note: c.rewards_note.to_string(),
            credits: c
                .credits
                .iter()
                .map(|cr| Credit {
                    id: cr.id.to_string(),
                    label: cr.label.to_string(),
                    amount: cr.amount,
                    cadence: cr.cadence,
                })
                .collect(),
        })
        .collect();
    // Seed ids are distinct literals.
    Catalog::new(cards).unwrap_or_default()
}
