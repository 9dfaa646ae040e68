//! Word lists and text helpers for fabricated names, places and prose.

use rand::Rng;

const FIRST_NAMES: &[&str] = &[
    "Amelia", "Andrew", "Aisha", "Benjamin", "Carlos", "Chloe", "Daniel", "Diana", "Elena",
    "Ethan", "Fatima", "George", "Grace", "Hannah", "Hiroshi", "Isabel", "James", "Julia",
    "Kevin", "Laura", "Lucas", "Maria", "Mateo", "Nadia", "Noah", "Olivia", "Omar", "Priya",
    "Rafael", "Sarah", "Sofia", "Thomas", "Victoria", "William", "Yusuf", "Zoe",
];

const LAST_NAMES: &[&str] = &[
    "Adams", "Bauer", "Brown", "Chen", "Clark", "Costa", "Davies", "Dubois", "Evans", "Fischer",
    "Garcia", "Hughes", "Ivanova", "Jensen", "Kim", "Kowalski", "Lopez", "Martin", "Meyer",
    "Nakamura", "Nguyen", "O'Brien", "Patel", "Rossi", "Schmidt", "Silva", "Smith", "Suzuki",
    "Taylor", "Walker", "Wilson", "Young",
];

const COMPANY_SUFFIXES: &[&str] = &["Inc", "LLC", "Ltd", "PLC", "Group", "and Sons", "Holdings"];

const COUNTRIES: &[&str] = &[
    "Australia", "Austria", "Belgium", "Brazil", "Canada", "Cayman Islands", "Chile", "Denmark",
    "Finland", "France", "Germany", "Hong Kong", "India", "Ireland", "Italy", "Japan",
    "Luxembourg", "Mexico", "Netherlands", "New Zealand", "Norway", "Poland", "Portugal",
    "Singapore", "South Africa", "Spain", "Sweden", "Switzerland", "United Arab Emirates",
    "United Kingdom", "United States",
];

const STREET_NAMES: &[&str] = &[
    "Oak", "Maple", "Cedar", "Harbour", "King", "Queen", "Church", "Mill", "Park", "River",
    "Station", "Victoria", "Elm", "High", "Market",
];

const STREET_SUFFIXES: &[&str] = &["Street", "Road", "Avenue", "Lane", "Square", "Drive", "Way"];

const CITIES: &[&str] = &[
    "Amsterdam", "Boston", "Dublin", "Edinburgh", "Frankfurt", "Geneva", "Hamilton", "Lisbon",
    "London", "Madrid", "Milan", "Montreal", "Munich", "Oslo", "Paris", "Sydney", "Tokyo",
    "Toronto", "Vienna", "Zurich",
];

const EMAIL_DOMAINS: &[&str] = &["example.com", "example.org", "example.net", "mail.test"];

const LOREM: &[&str] = &[
    "alpha", "board", "capital", "close", "company", "dividend", "equity", "event", "filing",
    "fund", "holders", "interim", "issue", "market", "notice", "payable", "period", "record",
    "report", "share", "terms", "value",
];

/// Pick one element uniformly. `items` must not be empty.
pub(crate) fn pick<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T]) -> &'a T {
    &items[rng.gen_range(0..items.len())]
}

/// A person's full name.
pub(crate) fn person_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("{} {}", pick(rng, FIRST_NAMES), pick(rng, LAST_NAMES))
}

/// A company name such as `"Rossi, Chen and Young"` or `"Patel Group"`.
pub(crate) fn company<R: Rng + ?Sized>(rng: &mut R) -> String {
    match rng.gen_range(0..3) {
        0 => format!("{} {}", pick(rng, LAST_NAMES), pick(rng, COMPANY_SUFFIXES)),
        1 => format!("{}-{}", pick(rng, LAST_NAMES), pick(rng, LAST_NAMES)),
        _ => format!(
            "{}, {} and {}",
            pick(rng, LAST_NAMES),
            pick(rng, LAST_NAMES),
            pick(rng, LAST_NAMES)
        ),
    }
}

/// A country name.
pub(crate) fn country<R: Rng + ?Sized>(rng: &mut R) -> String {
    (*pick(rng, COUNTRIES)).to_string()
}

/// A two-line postal address.
pub(crate) fn address<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(
        "{} {} {}\n{} {:05}",
        rng.gen_range(1..1000),
        pick(rng, STREET_NAMES),
        pick(rng, STREET_SUFFIXES),
        pick(rng, CITIES),
        rng.gen_range(1000..100_000)
    )
}

/// An e-mail address in a reserved example domain.
pub(crate) fn email<R: Rng + ?Sized>(rng: &mut R) -> String {
    let first = pick(rng, FIRST_NAMES).to_lowercase();
    let last = pick(rng, LAST_NAMES).to_lowercase().replace('\'', "");
    format!(
        "{}.{}{}@{}",
        first,
        last,
        rng.gen_range(1..100),
        pick(rng, EMAIL_DOMAINS)
    )
}

/// A capitalised sentence of at most `max_chars` characters, ending in a period.
pub(crate) fn sentence<R: Rng + ?Sized>(rng: &mut R, max_chars: usize) -> String {
    let mut text = String::new();
    loop {
        let word = pick(rng, LOREM);
        let extra = usize::from(!text.is_empty()) + word.len();
        // Leave room for the trailing period.
        if text.len() + extra + 1 > max_chars {
            break;
        }
        if !text.is_empty() {
            text.push(' ');
        }
        text.push_str(word);
        if text.len() > max_chars / 2 && rng.gen_bool(0.3) {
            break;
        }
    }

    let mut chars = text.chars();
    let mut sentence: String = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    };
    sentence.push('.');
    sentence
}
