//! SQL queries for different databases.

/// Table creation (shared DDL, valid on all three dialects).
pub const CREATE_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS accounts (
    username        VARCHAR(128) PRIMARY KEY,
    password_digest VARCHAR(64) NOT NULL,
    created_at      BIGINT NOT NULL,
    trial_days      BIGINT NULL,
    expires_at      BIGINT NULL,
    bound_device    VARCHAR(255) NULL
)
"#;

/// Query to find an account by username (PostgreSQL).
pub const FIND_PG: &str = r#"
SELECT username, password_digest, created_at, trial_days, expires_at, bound_device
FROM accounts
WHERE username = $1
"#;

/// Query to find an account by username (MySQL/SQLite).
pub const FIND_MYSQL: &str = r#"
SELECT username, password_digest, created_at, trial_days, expires_at, bound_device
FROM accounts
WHERE username = ?
"#;

/// Full-record upsert (PostgreSQL).
pub const UPSERT_PG: &str = r#"
INSERT INTO accounts (username, password_digest, created_at, trial_days, expires_at, bound_device)
VALUES ($1, $2, $3, $4, $5, $6)
ON CONFLICT (username) DO UPDATE SET
    password_digest = EXCLUDED.password_digest,
    created_at      = EXCLUDED.created_at,
    trial_days      = EXCLUDED.trial_days,
    expires_at      = EXCLUDED.expires_at,
    bound_device    = EXCLUDED.bound_device
"#;

/// Full-record upsert (SQLite).
pub const UPSERT_SQLITE: &str = r#"
INSERT INTO accounts (username, password_digest, created_at, trial_days, expires_at, bound_device)
VALUES (?, ?, ?, ?, ?, ?)
ON CONFLICT (username) DO UPDATE SET
    password_digest = excluded.password_digest,
    created_at      = excluded.created_at,
    trial_days      = excluded.trial_days,
    expires_at      = excluded.expires_at,
    bound_device    = excluded.bound_device
"#;

/// Full-record upsert (MySQL).
pub const UPSERT_MYSQL: &str = r#"
INSERT INTO accounts (username, password_digest, created_at, trial_days, expires_at, bound_device)
VALUES (?, ?, ?, ?, ?, ?)
ON DUPLICATE KEY UPDATE
    password_digest = VALUES(password_digest),
    created_at      = VALUES(created_at),
    trial_days      = VALUES(trial_days),
    expires_at      = VALUES(expires_at),
    bound_device    = VALUES(bound_device)
"#;

/// Delete by username (PostgreSQL).
pub const DELETE_PG: &str = "DELETE FROM accounts WHERE username = $1";

/// Delete by username (MySQL/SQLite).
pub const DELETE_MYSQL: &str = "DELETE FROM accounts WHERE username = ?";

/// Enumerate all accounts.
pub const LIST_ALL: &str = r#"
SELECT username, password_digest, created_at, trial_days, expires_at, bound_device
FROM accounts
ORDER BY username
"#;
