/// Row id; every catalog table keys on a BIGSERIAL column.
pub type DbId = i64;
