use std::collections::BTreeMap;
use std::fmt;

// ---------------------------------------------------------------------------
// PlanetRecord – one line of the catalog file
// ---------------------------------------------------------------------------

/// A single planet. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanetRecord {
    /// Display name, cased as written in the file.
    name: String,
    /// Mass in 10^24 kg.
    mass: f64,
    /// Mean distance from the Sun in million km.
    distance: f64,
    /// Moon names in file order; may be empty.
    moons: Vec<String>,
    /// Lookup key, derived from `name`.
    key: String,
}

impl PlanetRecord {
    pub fn new(name: impl Into<String>, mass: f64, distance: f64, moons: Vec<String>) -> Self {
        let name = name.into();
        let key = Catalog::normalize(&name);
        Self {
            name,
            mass,
            distance,
            moons,
            key,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn moons(&self) -> &[String] {
        &self.moons
    }

    /// Lookup key for this record (trimmed, lowercased name).
    pub fn key(&self) -> &str {
        &self.key
    }

    /// One-line answer for the "Show Mass" query.
    pub fn mass_summary(&self) -> String {
        format!("{} has a mass of {} × 10^24 kg.", self.name, self.mass)
    }

    /// One-line answer for the "Show Number of Moons" query.
    pub fn moon_summary(&self) -> String {
        format!("{} has {} moon(s).", self.name, self.moons.len())
    }

    /// Positive answer for the "Check If Planet Exists" query.
    pub fn existence_summary(&self) -> String {
        format!("Yes, {} is in the solar system!", self.name)
    }

    /// Parse the multi-line form produced by `Display` back into a record.
    ///
    /// Lines are matched by label, so reordered lines still parse. The moon
    /// count in the label decides between "no moons" and a moon named "None".
    /// Returns `None` if any of the four fields is missing or unreadable.
    pub fn from_rendered(text: &str) -> Option<Self> {
        let mut name = None;
        let mut mass = None;
        let mut distance = None;
        let mut moons = None;

        for line in text.lines() {
            let Some((label, value)) = line.split_once(": ") else {
                continue;
            };
            match label.trim() {
                "Planet" => name = Some(value.to_string()),
                "Distance from Sun" => distance = leading_number(value),
                "Mass" => mass = leading_number(value),
                other => {
                    if let Some(count) = moon_count(other) {
                        moons = parse_moons(value, count);
                    }
                }
            }
        }

        Some(Self::new(name?, mass?, distance?, moons?))
    }
}

const NO_MOONS: &str = "None";
const MOON_SEPARATOR: &str = ", ";

fn leading_number(value: &str) -> Option<f64> {
    value.split_whitespace().next()?.parse().ok()
}

/// `"Moons (3)"` → `Some(3)`.
fn moon_count(label: &str) -> Option<usize> {
    label
        .strip_prefix("Moons (")?
        .strip_suffix(')')?
        .parse()
        .ok()
}

fn parse_moons(value: &str, count: usize) -> Option<Vec<String>> {
    if count == 0 {
        return (value == NO_MOONS).then(Vec::new);
    }
    let moons: Vec<String> = value.split(MOON_SEPARATOR).map(str::to_string).collect();
    (moons.len() == count).then_some(moons)
}

impl fmt::Display for PlanetRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Planet: {}", self.name)?;
        writeln!(f, "Mass: {} × 10^24 kg", self.mass)?;
        writeln!(f, "Distance from Sun: {} million km", self.distance)?;
        write!(f, "Moons ({}): ", self.moons.len())?;
        if self.moons.is_empty() {
            write!(f, "{NO_MOONS}")
        } else {
            write!(f, "{}", self.moons.join(MOON_SEPARATOR))
        }
    }
}

// ---------------------------------------------------------------------------
// Catalog – the loaded, read-only planet table
// ---------------------------------------------------------------------------

/// Lowercase name → record. Built once by the loader, never mutated after.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    planets: BTreeMap<String, PlanetRecord>,
}

impl Catalog {
    /// Normalize user input or a display name into a lookup key.
    pub fn normalize(name: &str) -> String {
        name.trim().to_lowercase()
    }

    /// Insert a record, returning the one it replaced (same key).
    pub(crate) fn insert(&mut self, record: PlanetRecord) -> Option<PlanetRecord> {
        self.planets.insert(record.key.clone(), record)
    }

    /// Find a planet by user-supplied name, ignoring case and surrounding
    /// whitespace. A miss is an ordinary `None`.
    pub fn lookup(&self, query: &str) -> Option<&PlanetRecord> {
        self.planets.get(&Self::normalize(query))
    }

    pub fn contains(&self, query: &str) -> bool {
        self.lookup(query).is_some()
    }

    /// Number of planets.
    pub fn len(&self) -> usize {
        self.planets.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.planets.is_empty()
    }

    /// Records in key order.
    pub fn iter(&self) -> impl Iterator<Item = &PlanetRecord> {
        self.planets.values()
    }
}

impl FromIterator<PlanetRecord> for Catalog {
    fn from_iter<I: IntoIterator<Item = PlanetRecord>>(iter: I) -> Self {
        let mut catalog = Catalog::default();
        for record in iter {
            catalog.insert(record);
        }
        catalog
    }
}
