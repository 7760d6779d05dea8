//! Curated first and last names for sample customers.

use crate::rng::SampleRng;

pub fn first_name(rng: &mut SampleRng) -> &'static str {
    *rng.pick(FIRST_NAMES)
}

pub fn last_name(rng: &mut SampleRng) -> &'static str {
    *rng.pick(LAST_NAMES)
}

const FIRST_NAMES: &[&str] = &[
    "Alice", "Anna", "Bruno", "Camille", "Chloé", "Daniel", "David", "Elena", "Emma",
    "Fabian", "Felix", "Giulia", "Hannah", "Hugo", "Ines", "Jan", "Julia", "Laura",
    "Léa", "Luca", "Lukas", "Marco", "Maria", "Marie", "Mia", "Nadia", "Noah", "Nina",
    "Oliver", "Paul", "Pierre", "Sara", "Simon", "Sofia", "Thomas", "Tim", "Valentin",
    "Yves", "Zack", "Zoé",
];

const LAST_NAMES: &[&str] = &[
    "Bernasconi", "Bianchi", "Brunner", "Dubois", "Favre", "Fischer", "Frei", "Gerber",
    "Huber", "Johnson", "Keller", "Lambert", "Meier", "Meyer", "Moser", "Müller",
    "Rossi", "Schmid", "Schneider", "Smith", "Steiner", "Weber", "Widmer", "Wyss",
    "Zimmermann",
];
