//! Derived-field helpers
//!
//! Pure functions turning raw record fields into display values.

/// Lower bound of the base-stat scale
pub const STAT_MIN: u32 = 0;

/// Upper bound of the base-stat scale
pub const STAT_MAX: u32 = 200;

/// Card background when none of the Pokémon's types has a color
pub const DEFAULT_BACKGROUND: &str = "#EEE8AA";

/// Type colors in priority order. Dual-typed Pokémon take the color of
/// whichever of their types appears first here.
pub const TYPE_COLORS: [(&str, &str); 11] = [
    ("fire", "#FEC5BB"),
    ("grass", "#80FFDB"),
    ("water", "#DFE7FD"),
    ("bug", "#B0DEA3"),
    ("normal", "#E0FFFF"),
    ("electric", "#D8E2DC"),
    ("ground", "#FAD2E1"),
    ("fairy", "#FFF1E6"),
    ("ghost", "#F8EDEB"),
    ("fighting", "#F1FAEE"),
    ("rock", "#A8DADC"),
];

/// Uppercase the first character, leave the rest unchanged
pub fn display_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `#` followed by the id zero-padded to three digits
pub fn display_id(id: u32) -> String {
    format!("#{id:03}")
}

/// Background color for a card, chosen by type priority
pub fn background_color<S: AsRef<str>>(types: &[S]) -> &'static str {
    TYPE_COLORS
        .iter()
        .find(|(name, _)| types.iter().any(|t| t.as_ref() == *name))
        .map_or(DEFAULT_BACKGROUND, |&(_, color)| color)
}

/// Map `value` linearly from `[min, max]` onto `0..=100`.
///
/// Values outside the range clamp to the nearest bound. An empty or
/// inverted range yields `0`.
pub fn normalize_stat(value: u32, min: u32, max: u32) -> f64 {
    if min >= max {
        return 0.0;
    }

    let clamped = value.clamp(min, max);
    f64::from(clamped - min) * 100.0 / f64::from(max - min)
}

/// [`normalize_stat`] over the default base-stat scale
pub fn stat_percent(value: u32) -> f64 {
    normalize_stat(value, STAT_MIN, STAT_MAX)
}

/// Comma-joined type list as shown on a card
pub fn types_label<S: AsRef<str>>(types: &[S]) -> String {
    let joined: Vec<&str> = types.iter().map(|t| t.as_ref()).collect();
    format!("Type: {}", joined.join(","))
}
