//! Default roster and categories seeded into an empty store.

/// Category names seeded on first use, in insertion order.
pub const DEFAULT_CATEGORIES: &[&str] = &[
    "Offensive Play",
    "Defensive Play",
    "Turnover",
    "Goal",
    "Penalty",
];

/// `(name, jersey number)` pairs seeded on first use, in insertion order.
pub const DEFAULT_PLAYERS: &[(&str, i32)] = &[
    ("Sarah Johnson", 7),
    ("Mike Chen", 23),
    ("Alex Rivera", 12),
    ("Taylor Kim", 5),
    ("Jordan Smith", 18),
    ("Casey Williams", 9),
];
