//! SQLite schema definitions.

/// Current schema version for migrations.
pub const SCHEMA_VERSION: i32 = 1;

/// Complete schema for a learner's review store.
///
/// Timestamps are unix seconds; intervals are whole hours.
pub const SCHEMA: &str = r#"
-- Word catalog (new words are introduced from here)
CREATE TABLE IF NOT EXISTS word (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    word TEXT NOT NULL UNIQUE,
    frequency_class INTEGER NOT NULL
);

-- Review history, one row per attempt, append-only
CREATE TABLE IF NOT EXISTS review (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    item TEXT NOT NULL,
    interval_hours INTEGER NOT NULL,
    reviewed INTEGER NOT NULL,
    due INTEGER NOT NULL,
    correct INTEGER NOT NULL
);

-- Interval buckets and their success counters
CREATE TABLE IF NOT EXISTS interval_stat (
    hours INTEGER PRIMARY KEY,
    correct INTEGER NOT NULL DEFAULT 0,
    incorrect INTEGER NOT NULL DEFAULT 0
);

-- First-presentation results per frequency class
CREATE TABLE IF NOT EXISTS new_word_stat (
    frequency_class INTEGER PRIMARY KEY,
    correct INTEGER NOT NULL DEFAULT 0,
    incorrect INTEGER NOT NULL DEFAULT 0
);

-- Estimated level (singleton)
CREATE TABLE IF NOT EXISTS estimated_level (
    id INTEGER PRIMARY KEY CHECK (id = 1),
    level INTEGER NOT NULL DEFAULT 0,
    correct INTEGER NOT NULL DEFAULT 0,
    incorrect INTEGER NOT NULL DEFAULT 0
);

-- Schema version tracking
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER PRIMARY KEY
);

-- Current state of each item: its newest review
CREATE VIEW IF NOT EXISTS most_recent_review AS
SELECT id, item, interval_hours, reviewed, due, correct
FROM (
    SELECT *, ROW_NUMBER() OVER (
        PARTITION BY item ORDER BY reviewed DESC, id DESC
    ) AS recency
    FROM review
)
WHERE recency = 1;

-- Indexes
CREATE INDEX IF NOT EXISTS idx_review_item ON review(item, reviewed);
CREATE INDEX IF NOT EXISTS idx_review_interval ON review(interval_hours);
CREATE INDEX IF NOT EXISTS idx_word_class ON word(frequency_class);
"#;

/// Seed the protected interval floors (0 hours and 1 day).
pub const INIT_INTERVALS: &str = r#"
INSERT OR IGNORE INTO interval_stat (hours) VALUES (0);
INSERT OR IGNORE INTO interval_stat (hours) VALUES (24);
"#;

/// Initialize the level estimate if not exists.
pub const INIT_ESTIMATED_LEVEL: &str = r#"
INSERT OR IGNORE INTO estimated_level (id) VALUES (1);
"#;

