//! Test fixtures - reusable configuration content.

/// Persisted config with one active service record
pub const SINGLE_SERVICE: &str = r#"deployment_service = "svc1"

[repl_services.svc1]
a = 2
b = 3
deployment_service = "mysql"
"#;

/// Persisted config with two service records and unrelated sections
pub const TWO_SERVICES: &str = r#"deployment_service = "east"
home_directory = "/opt/continuent"

[hosts]
primary = "db1.example.com"

[repl_services.east]
deployment_service = "mysql"
master_port = 3306
thl_port = 2112

[repl_services.west]
deployment_service = "postgresql"
master_port = 5432
"#;

/// Global config without an active service selector
pub const NO_ACTIVE_SERVICE: &str = r#"[repl_services.svc1]
deployment_service = "mysql"
"#;
