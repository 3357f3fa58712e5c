//! Line-oriented scanning of Docker Compose service blocks.
//!
//! No general Compose model is built. The scanner walks the document top
//! to bottom, and every `image:` line naming a known service starts an
//! isolated forward scan that collects the block's `environment:` and
//! `ports:` lists until the next `image:` line or end of input.

use indexmap::IndexMap;
use tracing::debug;

use super::spring::{
    DEFAULT_HOST, MYSQL_CONTAINER_PORT, MysqlConfig, REDIS_CONTAINER_PORT, RedisConfig,
    SpringServiceConfig,
};

/// Extracts MySQL/Redis connection settings from Compose YAML text.
///
/// When a document declares several services with the same image kind,
/// the last block scanned wins: each detection builds an isolated config
/// that overwrites the per-kind slot.
pub fn parse_compose_to_service_config(text: &str) -> SpringServiceConfig {
    let lines: Vec<&str> = text.lines().collect();
    let mut config = SpringServiceConfig::default();

    for (index, line) in lines.iter().enumerate() {
        if is_image_line(line, "mysql") {
            config.mysql = Some(mysql_from_block(scan_service_block(&lines, index + 1)));
        }
        if is_image_line(line, "redis") {
            config.redis = Some(redis_from_block(scan_service_block(&lines, index + 1)));
        }
    }

    debug!(
        "compose scan found mysql={} redis={}",
        config.mysql.is_some(),
        config.redis.is_some()
    );

    config
}

/// Raw material collected from one service block.
#[derive(Debug, Default)]
pub(crate) struct ServiceBlock {
    /// Merged `environment:` entries, later lists overriding earlier ones.
    pub env: IndexMap<String, String>,
    /// The first `ports:` list with readable entries.
    pub ports: Vec<PortMapping>,
}

/// One `hostPort:containerPort` entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PortMapping {
    pub host: u16,
    pub container: u16,
}

/// Collects the environment map and port list of the block starting at
/// `start`, stopping at the next `image:` line or end of input.
pub(crate) fn scan_service_block(lines: &[&str], start: usize) -> ServiceBlock {
    let mut block = ServiceBlock::default();

    for (offset, line) in lines.iter().enumerate().skip(start) {
        if is_image_header(line) {
            break;
        }
        if is_environment_header(line) {
            block.env.extend(parse_env_list(lines, offset + 1));
        }
        if is_ports_header(line) && block.ports.is_empty() {
            block.ports = parse_ports_list(lines, offset + 1);
        }
    }

    block
}

/// Reads `- KEY=value` list items following an `environment:` header.
/// Surrounding quotes on values are stripped; items without `=` are
/// skipped; the list ends at the first non-item line.
pub(crate) fn parse_env_list(lines: &[&str], start: usize) -> IndexMap<String, String> {
    let mut env = IndexMap::new();

    for line in lines.iter().skip(start) {
        let Some(entry) = list_item(line) else {
            break;
        };
        let Some(separator) = entry.find('=') else {
            continue;
        };
        let key = entry[..separator].trim();
        let value = entry[separator + 1..].trim();
        env.insert(key.to_string(), strip_item_quotes(value).to_string());
    }

    env
}

/// Reads `- "hostPort:containerPort"` list items following a `ports:`
/// header. Entries where either side is not an integer are skipped.
pub(crate) fn parse_ports_list(lines: &[&str], start: usize) -> Vec<PortMapping> {
    let mut ports = Vec::new();

    for line in lines.iter().skip(start) {
        let Some(entry) = list_item(line) else {
            break;
        };
        let token: String = entry.chars().filter(|c| *c != '"' && *c != '\'').collect();
        let Some((host, container)) = token.split_once(':') else {
            continue;
        };
        if let (Ok(host), Ok(container)) = (host.trim().parse(), container.trim().parse()) {
            ports.push(PortMapping { host, container });
        }
    }

    ports
}

/// Picks the host port mapped to the service's canonical container port,
/// falling back to the first mapping.
pub(crate) fn select_host_port(ports: &[PortMapping], container: u16) -> Option<u16> {
    ports
        .iter()
        .find(|mapping| mapping.container == container)
        .or_else(|| ports.first())
        .map(|mapping| mapping.host)
}

/// True for lines whose `image:` value starts with the given name, e.g.
/// `image: mysql:latest` for `mysql`. Case-insensitive, position-tolerant.
pub(crate) fn is_image_line(line: &str, image: &str) -> bool {
    let lower = line.trim().to_ascii_lowercase();
    match lower.find("image:") {
        Some(position) => lower[position + "image:".len()..]
            .trim_start()
            .starts_with(image),
        None => false,
    }
}

/// True for lines beginning a (new) service image declaration.
pub(crate) fn is_image_header(line: &str) -> bool {
    line.trim().to_ascii_lowercase().starts_with("image:")
}

/// True for lines beginning an `environment:` list.
pub(crate) fn is_environment_header(line: &str) -> bool {
    line.trim().to_ascii_lowercase().starts_with("environment:")
}

/// True for lines beginning a `ports:` list.
pub(crate) fn is_ports_header(line: &str) -> bool {
    line.trim().to_ascii_lowercase().starts_with("ports:")
}

fn list_item(line: &str) -> Option<&str> {
    line.trim().strip_prefix('-').map(str::trim_start)
}

fn strip_item_quotes(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if (first == b'"' && last == b'"') || (first == b'\'' && last == b'\'') {
            return &value[1..value.len() - 1];
        }
    }
    value
}

fn mysql_from_block(block: ServiceBlock) -> MysqlConfig {
    let port =
        select_host_port(&block.ports, MYSQL_CONTAINER_PORT).unwrap_or(MYSQL_CONTAINER_PORT);

    MysqlConfig {
        host: DEFAULT_HOST.to_string(),
        port,
        database: block.env.get("MYSQL_DATABASE").cloned(),
        username: Some(
            block
                .env
                .get("MYSQL_USER")
                .cloned()
                .unwrap_or_else(|| "root".to_string()),
        ),
        password: block
            .env
            .get("MYSQL_PASSWORD")
            .or_else(|| block.env.get("MYSQL_ROOT_PASSWORD"))
            .cloned(),
        timezone: block.env.get("TZ").cloned(),
    }
}

fn redis_from_block(block: ServiceBlock) -> RedisConfig {
    let port =
        select_host_port(&block.ports, REDIS_CONTAINER_PORT).unwrap_or(REDIS_CONTAINER_PORT);

    RedisConfig {
        host: DEFAULT_HOST.to_string(),
        port,
        password: None,
    }
}
