//! Service category normalisation
//!
//! The marketplace API accepts a closed set of category identifiers, while UI
//! copy, legacy records and typed search text spell the same concept many ways
//! ("Plumber", "plumbing service", "AC Repair"). This module maps those
//! spellings onto the canonical identifier and never fails: unknown input is
//! passed through as a best guess so the server can reject it.
//!
//! The canonical set is derived from [`CATEGORY_TABLE`], so aliases and valid
//! names cannot drift apart.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use tracing::debug;

/// Canonical category identifiers with their known aliases (lower-case).
///
/// Aliases must be unique across the whole table.
pub static CATEGORY_TABLE: &[(&str, &[&str])] = &[
    ("plumbing", &["plumber", "plumbers", "plumbing service", "plumbing services", "pipe repair"]),
    ("electrical", &["electrician", "electric", "electrical service", "electrical work", "electricals", "wiring"]),
    (
        "airConditioning",
        &["ac", "a/c", "ac repair", "ac installation", "air conditioning", "air conditioner", "air conditioning repair", "hvac"],
    ),
    ("mechanicRepair", &["mechanic", "mechanics", "mechanic repair", "car repair", "auto repair", "vehicle repair"]),
    ("cleaning", &["cleaner", "cleaners", "cleaning service", "house cleaning", "home cleaning"]),
    ("carpentry", &["carpenter", "carpentry service", "woodwork", "furniture repair"]),
    ("painting", &["painter", "painting service", "house painting"]),
    ("cctvInstallation", &["cctv", "cctv installation", "security camera", "camera installation", "surveillance"]),
    ("roofing", &["roofer", "roof repair", "roofing service"]),
    ("tiling", &["tiler", "tiles", "tile installation", "floor tiling"]),
    ("welding", &["welder", "welding service", "iron work"]),
    ("masonry", &["mason", "bricklayer", "bricklaying", "block work"]),
    ("landscaping", &["landscaper", "landscape", "lawn care"]),
    ("gardening", &["gardener", "garden", "garden maintenance"]),
    ("pestControl", &["pest", "pest control", "exterminator"]),
    ("fumigation", &["fumigator", "fumigation service"]),
    ("generatorRepair", &["generator", "generator repair", "generator service", "gen repair"]),
    ("solarInstallation", &["solar", "solar installation", "solar panel", "solar panels", "inverter installation"]),
    ("interiorDesign", &["interior design", "interior designer", "interior decoration", "decorator"]),
    ("laundry", &["laundry service", "laundromat", "dry cleaning", "washing"]),
    ("moving", &["mover", "movers", "moving service", "relocation", "packers"]),
    ("hairStyling", &["hair", "hair stylist", "hairstylist", "hairdresser", "barber"]),
    ("makeup", &["make up", "make-up", "makeup artist"]),
    ("catering", &["caterer", "catering service", "cook", "chef"]),
    ("eventPlanning", &["events", "event planner", "event planning", "party planner"]),
    ("photography", &["photo", "photographer", "photoshoot"]),
    ("tutoring", &["tutor", "home tutor", "lessons", "teacher"]),
    ("computerRepair", &["computer repair", "laptop repair", "pc repair", "computer technician"]),
    ("phoneRepair", &["phone repair", "mobile repair", "phone technician"]),
    ("applianceRepair", &["appliances", "appliance repair", "fridge repair", "washing machine repair"]),
    ("furnitureAssembly", &["furniture assembly", "furniture assembler"]),
    ("glassWork", &["glazier", "glass work", "glass installation", "window repair"]),
    ("locksmith", &["keys", "lock repair", "locksmith service"]),
    ("securityGuard", &["security", "security guard", "guard", "bouncer"]),
    ("poolMaintenance", &["swimming pool", "pool cleaning", "pool maintenance"]),
    (
        "satelliteInstallation",
        &["satellite", "satellite installation", "dish installation", "dstv installation", "tv installation"],
    ),
    ("boreholeDrilling", &["borehole", "borehole drilling", "water drilling"]),
    ("wasteDisposal", &["waste disposal", "waste management", "refuse collection", "garbage collection"]),
    ("babysitting", &["babysitter", "nanny", "child care", "childcare"]),
    ("elderlyCare", &["elderly care", "caregiver", "home care"]),
    ("petCare", &["pet care", "pet sitting", "pet grooming", "dog walking"]),
];

/// Suffixes stripped before the last alias lookup, e.g. "locksmithing" -> "locksmith"
const MORPHOLOGICAL_SUFFIXES: &[&str] = &["er", "ian", "ist", "ing"];

const SERVICE_SUFFIX: &str = " service";

struct CategoryIndex {
    /// lower-case alias (and lower-cased canonical name) -> canonical name
    aliases: HashMap<String, &'static str>,
    /// canonical name with whitespace removed, lower-case -> canonical name
    squashed: HashMap<String, &'static str>,
}

impl CategoryIndex {
    fn build() -> Self {
        let mut aliases = HashMap::new();
        let mut squashed = HashMap::new();

        for &(canonical, names) in CATEGORY_TABLE {
            aliases.insert(canonical.to_lowercase(), canonical);
            squashed.insert(squash(canonical), canonical);
            for alias in names {
                aliases.insert((*alias).to_string(), canonical);
            }
        }

        Self { aliases, squashed }
    }

    fn lookup(&self, key: &str) -> Option<&'static str> {
        self.aliases.get(key).copied()
    }
}

static INDEX: Lazy<CategoryIndex> = Lazy::new(CategoryIndex::build);

/// Lower-case and drop every whitespace character
fn squash(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

fn strip_morphological_suffix(s: &str) -> Option<&str> {
    MORPHOLOGICAL_SUFFIXES
        .iter()
        .find_map(|suffix| s.strip_suffix(suffix))
}

/// Canonical category identifiers in table order
pub fn canonical_category_names() -> impl Iterator<Item = &'static str> {
    CATEGORY_TABLE.iter().map(|(canonical, _)| *canonical)
}

/// Exact, case-sensitive membership in the canonical set
pub fn is_canonical(name: &str) -> bool {
    canonical_category_names().any(|c| c == name)
}

/// Map a display or free-form category string to the API identifier.
///
/// Lookup order: exact alias, alias without a trailing " service", alias
/// without a trailing er/ian/ist/ing, case- and space-insensitive canonical
/// match. Anything else comes back trimmed with whitespace removed.
///
/// The suffix step can match unrelated words ("pester" -> "pestControl").
/// That is current behaviour and is kept until product decides otherwise.
pub fn normalize_category_name(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    let index = &*INDEX;
    let trimmed = input.trim();
    let lowered = trimmed.to_lowercase();

    if let Some(canonical) = index.lookup(&lowered) {
        return canonical.to_string();
    }

    let without_service = lowered
        .strip_suffix(SERVICE_SUFFIX)
        .map(str::trim_end)
        .unwrap_or(lowered.as_str());
    if let Some(canonical) = index.lookup(without_service) {
        return canonical.to_string();
    }

    if let Some(stem) = strip_morphological_suffix(without_service) {
        if let Some(canonical) = index.lookup(stem) {
            return canonical.to_string();
        }
    }

    if let Some(canonical) = index.squashed.get(&squash(&lowered)) {
        return (*canonical).to_string();
    }

    let fallback: String = trimmed.chars().filter(|c| !c.is_whitespace()).collect();
    debug!("Unrecognised service category '{}', passing through as '{}'", input, fallback);
    fallback
}

/// Same as [`normalize_category_name`] for values that may be missing upstream
pub fn normalize_category_name_opt(input: Option<&str>) -> String {
    input.map(normalize_category_name).unwrap_or_default()
}

/// True when the input normalises to one of the canonical identifiers
pub fn is_valid_category_name(input: &str) -> bool {
    if input.trim().is_empty() {
        return false;
    }
    let normalized = normalize_category_name(input);
    INDEX.squashed.contains_key(&squash(&normalized))
}
