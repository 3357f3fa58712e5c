//! Spring Boot configuration rendering for extracted services.
//!
//! Field names are the fixed Spring property paths
//! (`spring.datasource.*`, `spring.data.redis.*`) or their uppercase
//! underscore env-var equivalents. Sections are emitted only for services
//! that were actually found, MySQL always before Redis.

use serde::{Deserialize, Serialize};

pub(crate) const DEFAULT_HOST: &str = "localhost";
pub(crate) const MYSQL_CONTAINER_PORT: u16 = 3306;
pub(crate) const REDIS_CONTAINER_PORT: u16 = 6379;

const MYSQL_DRIVER: &str = "com.mysql.cj.jdbc.Driver";

/// MySQL connection settings extracted from a Compose service block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MysqlConfig {
    pub host: String,
    pub port: u16,
    pub database: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub timezone: Option<String>,
}

/// Redis connection settings extracted from a Compose service block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedisConfig {
    pub host: String,
    pub port: u16,
    pub password: Option<String>,
}

/// Everything one Compose document scan yields. Each service is optional
/// and defaults independently.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpringServiceConfig {
    pub mysql: Option<MysqlConfig>,
    pub redis: Option<RedisConfig>,
}

/// Renders the config as a Spring `application.yml` fragment.
///
/// The `spring:` root is always present, even for an empty config.
pub fn to_spring_yaml(config: &SpringServiceConfig) -> String {
    let mut lines = vec!["spring:".to_string()];

    if let Some(mysql) = &config.mysql {
        lines.push("  datasource:".to_string());
        lines.push(format!("    driver-class-name: {MYSQL_DRIVER}"));
        lines.push(format!("    url: {}", jdbc_url(mysql)));
        if let Some(username) = &mysql.username {
            lines.push(format!("    username: {username}"));
        }
        if let Some(password) = &mysql.password {
            lines.push(format!("    password: {password}"));
        }
    }

    if let Some(redis) = &config.redis {
        lines.push("  data:".to_string());
        lines.push("    redis:".to_string());
        lines.push(format!("      host: {}", redis.host));
        lines.push(format!("      port: {}", redis.port));
        if let Some(password) = &redis.password {
            lines.push(format!("      password: {password}"));
        }
    }

    lines.join("\n")
}

/// Renders the config as flat `application.properties` lines.
pub fn to_spring_properties(config: &SpringServiceConfig) -> String {
    let mut lines = Vec::new();

    if let Some(mysql) = &config.mysql {
        lines.push(format!("spring.datasource.driver-class-name={MYSQL_DRIVER}"));
        lines.push(format!("spring.datasource.url={}", jdbc_url(mysql)));
        if let Some(username) = &mysql.username {
            lines.push(format!("spring.datasource.username={username}"));
        }
        if let Some(password) = &mysql.password {
            lines.push(format!("spring.datasource.password={password}"));
        }
    }

    if let Some(redis) = &config.redis {
        lines.push(format!("spring.data.redis.host={}", redis.host));
        lines.push(format!("spring.data.redis.port={}", redis.port));
        if let Some(password) = &redis.password {
            lines.push(format!("spring.data.redis.password={password}"));
        }
    }

    lines.join("\n")
}

/// Renders the config as `SPRING_*` environment variables.
pub fn to_spring_env(config: &SpringServiceConfig) -> String {
    let mut lines = Vec::new();

    if let Some(mysql) = &config.mysql {
        lines.push(format!("SPRING_DATASOURCE_DRIVER_CLASS_NAME={MYSQL_DRIVER}"));
        lines.push(format!("SPRING_DATASOURCE_URL={}", jdbc_url(mysql)));
        if let Some(username) = &mysql.username {
            lines.push(format!("SPRING_DATASOURCE_USERNAME={username}"));
        }
        if let Some(password) = &mysql.password {
            lines.push(format!("SPRING_DATASOURCE_PASSWORD={password}"));
        }
    }

    if let Some(redis) = &config.redis {
        lines.push(format!("SPRING_DATA_REDIS_HOST={}", redis.host));
        lines.push(format!("SPRING_DATA_REDIS_PORT={}", redis.port));
        if let Some(password) = &redis.password {
            lines.push(format!("SPRING_DATA_REDIS_PASSWORD={password}"));
        }
    }

    lines.join("\n")
}

// `useSSL=false` is always appended, so the URL always carries a query
// string; the timezone parameter comes first when present.
fn jdbc_url(mysql: &MysqlConfig) -> String {
    let mut params = Vec::new();

    if let Some(timezone) = &mysql.timezone {
        params.push(format!("serverTimezone={}", urlencoding::encode(timezone)));
    }
    params.push("useSSL=false".to_string());

    format!(
        "jdbc:mysql://{}:{}/{}?{}",
        mysql.host,
        mysql.port,
        mysql.database.as_deref().unwrap_or(""),
        params.join("&")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mysql_fixture() -> MysqlConfig {
        MysqlConfig {
            host: "localhost".to_string(),
            port: 33306,
            database: Some("user".to_string()),
            username: Some("yukino".to_string()),
            password: Some("secret".to_string()),
            timezone: Some("Asia/Shanghai".to_string()),
        }
    }

    #[test]
    fn test_jdbc_url_with_timezone() {
        assert_eq!(
            jdbc_url(&mysql_fixture()),
            "jdbc:mysql://localhost:33306/user?serverTimezone=Asia%2FShanghai&useSSL=false"
        );
    }

    #[test]
    fn test_jdbc_url_without_timezone_or_database() {
        let mysql = MysqlConfig {
            database: None,
            timezone: None,
            ..mysql_fixture()
        };

        assert_eq!(jdbc_url(&mysql), "jdbc:mysql://localhost:33306/?useSSL=false");
    }

    #[test]
    fn test_yaml_always_has_spring_root() {
        assert_eq!(to_spring_yaml(&SpringServiceConfig::default()), "spring:");
    }

    #[test]
    fn test_flat_outputs_are_empty_without_services() {
        let config = SpringServiceConfig::default();
        assert_eq!(to_spring_properties(&config), "");
        assert_eq!(to_spring_env(&config), "");
    }

    #[test]
    fn test_optional_fields_are_omitted() {
        let config = SpringServiceConfig {
            mysql: Some(MysqlConfig {
                username: None,
                password: None,
                ..mysql_fixture()
            }),
            redis: None,
        };

        let properties = to_spring_properties(&config);
        assert!(properties.contains("spring.datasource.url="));
        assert!(!properties.contains("spring.datasource.username"));
        assert!(!properties.contains("spring.datasource.password"));
    }

    #[test]
    fn test_mysql_section_precedes_redis() {
        let config = SpringServiceConfig {
            mysql: Some(mysql_fixture()),
            redis: Some(RedisConfig {
                host: "localhost".to_string(),
                port: 6379,
                password: Some("hush".to_string()),
            }),
        };

        for output in [
            to_spring_yaml(&config),
            to_spring_properties(&config),
            to_spring_env(&config),
        ] {
            let mysql_at = output.find("atasource").expect("mysql section missing");
            let redis_at = output.find("edis").expect("redis section missing");
            assert!(mysql_at < redis_at);
        }
    }

    #[test]
    fn test_serialized_shape() {
        let config = SpringServiceConfig {
            mysql: Some(mysql_fixture()),
            redis: None,
        };

        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"mysql\""));
        assert!(json.contains("\"port\":33306"));
        assert!(json.contains("\"redis\":null"));
    }
}
