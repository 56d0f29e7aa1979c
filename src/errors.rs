use std::fmt;

#[derive(Debug, Clone)]
pub enum LinkgateError {
    Configuration(String),
    DatabaseConnection(String),
    DatabaseOperation(String),
}

impl LinkgateError {
    pub fn code(&self) -> &'static str {
        match self {
            LinkgateError::Configuration(_) => "E001",
            LinkgateError::DatabaseConnection(_) => "E002",
            LinkgateError::DatabaseOperation(_) => "E003",
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            LinkgateError::Configuration(_) => "Configuration Error",
            LinkgateError::DatabaseConnection(_) => "Database Connection Error",
            LinkgateError::DatabaseOperation(_) => "Database Operation Error",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            LinkgateError::Configuration(msg) => msg,
            LinkgateError::DatabaseConnection(msg) => msg,
            LinkgateError::DatabaseOperation(msg) => msg,
        }
    }
}

impl fmt::Display for LinkgateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.error_type(), self.message())
    }
}

impl std::error::Error for LinkgateError {}

impl LinkgateError {
    pub fn configuration<T: Into<String>>(msg: T) -> Self {
        LinkgateError::Configuration(msg.into())
    }

    pub fn database_connection<T: Into<String>>(msg: T) -> Self {
        LinkgateError::DatabaseConnection(msg.into())
    }

    pub fn database_operation<T: Into<String>>(msg: T) -> Self {
        LinkgateError::DatabaseOperation(msg.into())
    }
}

impl From<sea_orm::DbErr> for LinkgateError {
    fn from(err: sea_orm::DbErr) -> Self {
        LinkgateError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for LinkgateError {
    fn from(err: std::io::Error) -> Self {
        LinkgateError::Configuration(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LinkgateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_includes_type_and_message() {
        let err = LinkgateError::database_operation("insert failed");
        assert_eq!(err.to_string(), "Database Operation Error: insert failed");
        assert_eq!(err.code(), "E003");
    }

    #[test]
    fn test_constructors_cover_every_variant() {
        // The service produces exactly these three error kinds
        assert!(matches!(
            LinkgateError::configuration("bad url"),
            LinkgateError::Configuration(_)
        ));
        assert!(matches!(
            LinkgateError::database_connection("refused"),
            LinkgateError::DatabaseConnection(_)
        ));
        assert!(matches!(
            LinkgateError::database_operation("insert failed"),
            LinkgateError::DatabaseOperation(_)
        ));
    }

    #[test]
    fn test_io_error_maps_to_configuration() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: LinkgateError = io.into();
        assert!(matches!(err, LinkgateError::Configuration(_)));
    }

    #[test]
    fn test_db_error_maps_to_database_operation() {
        let db = sea_orm::DbErr::Custom("timeout".to_string());
        let err: LinkgateError = db.into();
        assert!(matches!(err, LinkgateError::DatabaseOperation(_)));
    }
}
