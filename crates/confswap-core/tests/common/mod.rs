#![allow(dead_code)]
use confswap_core::{ConfigProperty, EnvPair};

/// Helper to build a ConfigProperty from string slices.
pub fn prop(key: &str, value: &str) -> ConfigProperty {
    ConfigProperty::new(key, value)
}

/// Helper to build an EnvPair from string slices.
pub fn pair(key: &str, value: &str) -> EnvPair {
    EnvPair::new(key, value)
}

/// Returns a realistic Compose fixture with one MySQL and one Redis
/// service, remapped MySQL host port and quoted environment entries.
pub fn compose_fixture() -> &'static str {
    r#"
    user-mysql:
      image: mysql:latest
      container_name: user-mysql
      volumes:
        - ./data/mysql/mysql_user_data:/var/lib/mysql
        - ./etc/sql/init.sql:/docker-entrypoint-initdb.d/startup.sql
      ports:
        - "33306:3306"
      environment:
        - TZ=Asia/Shanghai
        - MYSQL_ROOT_PASSWORD=J7*jJ9$2mKpL*5n
        - MYSQL_USER=yukino
        - MYSQL_DATABASE=user
        - MYSQL_PASSWORD=J7*jJ9$2mKpL*5n
      restart: unless-stopped

    user-redis:
      image: redis:7.2-alpine
      container_name: user-redis
      ports:
        - "6379:6379"
      environment:
        - TZ=Asia/Shanghai
      volumes:
        - redis_data:/data
        - ./etc/redis/redis.conf:/usr/local/etc/redis/redis.conf:ro
      command: ["redis-server", "/usr/local/etc/redis/redis.conf"]
"#
}
