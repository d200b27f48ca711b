use sea_orm::{DbErr, SqlErr};

/// Classifies driver errors independently of the database backend.
pub trait DatabaseError {
    fn unique_violation(&self) -> bool;
    fn foreign_key_violation(&self) -> bool;
}

impl DatabaseError for DbErr {
    fn unique_violation(&self) -> bool {
        matches!(self.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
    }

    fn foreign_key_violation(&self) -> bool {
        matches!(self.sql_err(), Some(SqlErr::ForeignKeyConstraintViolation(_)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_driver_errors_are_not_violations() {
        let error = DbErr::Custom("payment history is append-only".to_owned());

        assert!(!error.unique_violation());
        assert!(!error.foreign_key_violation());
    }
}
