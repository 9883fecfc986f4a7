use crate::core::rng::Rng;

/// Star display names are one of these...
pub const STAR_NAMES: [&str; 19] = [
    "Proxima", "Sirius", "Vega", "Altair", "Antares", "Rigel", "Deneb",
    "Canopus", "Arcturus", "Aldebaran", "Pollux", "Spica", "Betelgeuse",
    "Castor", "Regulus", "Polaris", "Fomalhaut", "Capella", "Achernar",
];

/// ...followed by one of these.
pub const STAR_SUFFIXES: [&str; 13] = [
    "Alpha", "Beta", "Gamma", "Delta", "Epsilon", "Zeta", "Theta",
    "Prime", "Secundus", "Tertius", "Minor", "Major", "Centauri",
];

/// Compose a display name such as "Vega Prime".
pub fn random_name(rng: &mut Rng) -> String {
    let name = rng.pick(&STAR_NAMES).copied().unwrap_or("Unnamed");
    let suffix = rng.pick(&STAR_SUFFIXES).copied().unwrap_or("Prime");
    format!("{} {}", name, suffix)
}
