use super::parsing::{
    env_flag, env_optional, env_or_default, parse_bool, parse_cors_origins, parse_environment,
    parse_u16, parse_u32, parse_u64,
};
use super::types::{
    ApiSettings, AssignmentSettings, ConfigError, CorsSettings, DatabaseSettings, RuntimeSettings,
    SeedSettings, ServerHost, ServerPort, ServerSettings, Settings, TelemetrySettings,
};

impl Settings {
    pub(crate) fn load() -> Result<Self, ConfigError> {
        let host = env_or_default("APC_HOST", "0.0.0.0");
        let port = env_or_default("APC_PORT", "8080");

        let environment =
            parse_environment(env_optional("APC_ENV").or_else(|| env_optional("ENVIRONMENT")));
        let strict_config =
            env_optional("APC_STRICT_CONFIG").map(|value| parse_bool(&value)).unwrap_or(false)
                || environment.is_production();

        let project_name = env_or_default("PROJECT_NAME", "APC API");
        let version = env_or_default("VERSION", env!("CARGO_PKG_VERSION"));
        let api_v1_str = env_or_default("API_V1_STR", "/api/v1");

        let cors_origins = parse_cors_origins(env_optional("BACKEND_CORS_ORIGINS"))?;

        let postgres_server = env_or_default("POSTGRES_SERVER", "localhost");
        let postgres_port = parse_u16("POSTGRES_PORT", env_or_default("POSTGRES_PORT", "5432"))?;
        let postgres_user = env_or_default("POSTGRES_USER", "apc");
        let postgres_password = env_or_default("POSTGRES_PASSWORD", "");
        let postgres_db = env_or_default("POSTGRES_DB", "apc_database");
        let database_url = env_optional("DATABASE_URL");
        let max_connections = parse_u32(
            "DATABASE_MAX_CONNECTIONS",
            env_or_default("DATABASE_MAX_CONNECTIONS", "20"),
        )?;

        let max_attempts =
            parse_u32("ASSIGNMENT_MAX_ATTEMPTS", env_or_default("ASSIGNMENT_MAX_ATTEMPTS", "3"))?;
        let store_timeout_ms =
            parse_u64("STORE_TIMEOUT_MS", env_or_default("STORE_TIMEOUT_MS", "5000"))?;

        let seed_enabled = env_flag("SEED_DEMO_DATA");
        let seed_student_password = env_or_default("SEED_STUDENT_PASSWORD", "");

        let log_level = env_or_default("APC_LOG_LEVEL", "info");
        let json = env_flag("APC_LOG_JSON");
        let prometheus_enabled = env_flag("PROMETHEUS_ENABLED");

        let settings = Self {
            server: ServerSettings {
                host: ServerHost::parse(host)?,
                port: ServerPort::parse(port)?,
            },
            runtime: RuntimeSettings { environment, strict_config },
            api: ApiSettings { project_name, version, api_v1_str },
            cors: CorsSettings { origins: cors_origins },
            database: DatabaseSettings {
                postgres_server,
                postgres_port,
                postgres_user,
                postgres_password,
                postgres_db,
                database_url,
                max_connections,
            },
            assignment: AssignmentSettings { max_attempts, store_timeout_ms },
            seed: SeedSettings { enabled: seed_enabled, student_password: seed_student_password },
            telemetry: TelemetrySettings { log_level, json, prometheus_enabled },
        };

        settings.validate()?;
        Ok(settings)
    }

    pub(crate) fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host.0, self.server.port.0)
    }

    pub(crate) fn server_host(&self) -> &str {
        &self.server.host.0
    }

    pub(crate) fn server_port(&self) -> u16 {
        self.server.port.0
    }

    pub(crate) fn api(&self) -> &ApiSettings {
        &self.api
    }

    pub(crate) fn cors(&self) -> &CorsSettings {
        &self.cors
    }

    pub(crate) fn database(&self) -> &DatabaseSettings {
        &self.database
    }

    pub(crate) fn assignment(&self) -> &AssignmentSettings {
        &self.assignment
    }

    pub(crate) fn seed(&self) -> &SeedSettings {
        &self.seed
    }

    pub(crate) fn telemetry(&self) -> &TelemetrySettings {
        &self.telemetry
    }

    pub(crate) fn runtime(&self) -> &RuntimeSettings {
        &self.runtime
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !self.api.api_v1_str.starts_with('/') || self.api.api_v1_str.len() < 2 {
            return Err(ConfigError::InvalidValue {
                field: "API_V1_STR",
                value: self.api.api_v1_str.clone(),
            });
        }

        if self.database.max_connections == 0 {
            return Err(ConfigError::InvalidValue {
                field: "DATABASE_MAX_CONNECTIONS",
                value: "0".to_string(),
            });
        }

        if self.assignment.max_attempts == 0 {
            return Err(ConfigError::InvalidValue {
                field: "ASSIGNMENT_MAX_ATTEMPTS",
                value: "0".to_string(),
            });
        }

        if self.assignment.store_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "STORE_TIMEOUT_MS",
                value: "0".to_string(),
            });
        }

        if !(self.runtime.strict_config || self.runtime.environment.is_production()) {
            return Ok(());
        }

        if self.database.database_url.is_none() && self.database.postgres_password.is_empty() {
            return Err(ConfigError::MissingSecret("POSTGRES_PASSWORD"));
        }
        if self.seed.enabled && self.seed.student_password.is_empty() {
            return Err(ConfigError::MissingSecret("SEED_STUDENT_PASSWORD"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support;

    const TOUCHED: &[&str] = &[
        "APC_ENV",
        "APC_STRICT_CONFIG",
        "API_V1_STR",
        "ASSIGNMENT_MAX_ATTEMPTS",
        "STORE_TIMEOUT_MS",
        "DATABASE_URL",
        "POSTGRES_PASSWORD",
        "SEED_DEMO_DATA",
        "SEED_STUDENT_PASSWORD",
    ];

    fn clear_env() {
        for key in TOUCHED {
            std::env::remove_var(key);
        }
    }

    #[tokio::test]
    async fn defaults_load_in_development() {
        let _guard = test_support::env_lock().await;
        clear_env();

        let settings = Settings::load().expect("settings");
        assert_eq!(settings.assignment().max_attempts, 3);
        assert_eq!(settings.assignment().store_timeout_ms, 5000);
        assert_eq!(settings.api().api_v1_str, "/api/v1");
        assert!(!settings.seed().enabled);
        assert_eq!(
            settings.database().database_url(),
            "postgresql://apc:@localhost:5432/apc_database"
        );
    }

    #[tokio::test]
    async fn zero_attempts_is_rejected() {
        let _guard = test_support::env_lock().await;
        clear_env();
        std::env::set_var("ASSIGNMENT_MAX_ATTEMPTS", "0");

        let err = Settings::load().unwrap_err();
        clear_env();
        assert!(matches!(err, ConfigError::InvalidValue { field: "ASSIGNMENT_MAX_ATTEMPTS", .. }));
    }

    #[tokio::test]
    async fn strict_mode_requires_database_secret() {
        let _guard = test_support::env_lock().await;
        clear_env();
        std::env::set_var("APC_ENV", "production");

        let err = Settings::load().unwrap_err();
        assert!(matches!(err, ConfigError::MissingSecret("POSTGRES_PASSWORD")));

        std::env::set_var("DATABASE_URL", "postgresql://apc:secret@db:5432/apc_database");
        std::env::set_var("SEED_DEMO_DATA", "1");
        let err = Settings::load().unwrap_err();
        clear_env();
        assert!(matches!(err, ConfigError::MissingSecret("SEED_STUDENT_PASSWORD")));
    }
}
