/// All primary keys in the school schema are PostgreSQL BIGINT.
pub type DbId = i64;
