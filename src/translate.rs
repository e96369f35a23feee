//! Spanish display labels for the backend's enum codes.
//!
//! The tables double as option lists for the form selects, checkboxes and
//! filters, so their order is the order shown to the user.

pub const EXERCISE_TYPES: &[(&str, &str)] = &[
    ("strength", "Fuerza"),
    ("cardio", "Cardio"),
    ("flexibility", "Flexibilidad"),
    ("balance", "Equilibrio"),
    ("sports", "Deportes"),
];

/// Shared by exercise/routine difficulty and user fitness level.
pub const DIFFICULTIES: &[(&str, &str)] = &[
    ("beginner", "Principiante"),
    ("intermediate", "Intermedio"),
    ("advanced", "Avanzado"),
];

pub const MUSCLE_GROUPS: &[(&str, &str)] = &[
    ("chest", "Pecho"),
    ("back", "Espalda"),
    ("shoulders", "Hombros"),
    ("arms", "Brazos"),
    ("legs", "Piernas"),
    ("core", "Core"),
    ("full_body", "Cuerpo Completo"),
];

/// Look up `code` in `table`; unknown codes come back unchanged.
pub fn lookup<'a>(table: &[(&str, &'a str)], code: &'a str) -> &'a str {
    table
        .iter()
        .find(|(key, _)| *key == code)
        .map(|(_, label)| *label)
        .unwrap_or(code)
}

pub fn exercise_type(code: &str) -> &str {
    lookup(EXERCISE_TYPES, code)
}

pub fn difficulty(code: &str) -> &str {
    lookup(DIFFICULTIES, code)
}

pub fn muscle_group(code: &str) -> &str {
    lookup(MUSCLE_GROUPS, code)
}

/// Translate every code and join with `, `.
pub fn muscle_groups(codes: &[String]) -> String {
    codes
        .iter()
        .map(|c| muscle_group(c))
        .collect::<Vec<_>>()
        .join(", ")
}
