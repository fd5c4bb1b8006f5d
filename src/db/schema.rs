//! SQL DDL for initializing the database schema.
//! SQLite-first design; can be adapted for other RDBMS.

/// SQLite schema includes:
/// - `folders` table (named groupings)
/// - `notes` table (one folder per note, referenced by `folder_id`)
pub const SQLITE_INIT: &str = r#"
-- ---------------------------------------------------------------------------
-- Folders
-- ---------------------------------------------------------------------------
CREATE TABLE IF NOT EXISTS folders (
    id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
    name TEXT NOT NULL
);

-- ---------------------------------------------------------------------------
-- Notes
-- ---------------------------------------------------------------------------
CREATE TABLE IF NOT EXISTS notes (
    id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
    name TEXT NOT NULL,
    -- No ON DELETE action: deleting a folder that still has notes is a
    -- constraint violation (500). Cascading is an open product decision.
    folder_id INTEGER NOT NULL REFERENCES folders(id),
    content TEXT NULL,
    modified TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now')) -- RFC3339
);

CREATE INDEX IF NOT EXISTS idx_notes_folder_id ON notes(folder_id);
"#;
