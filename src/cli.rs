use clap::{Parser, Subcommand};
use furqan_portal::config::DEFAULT_AUTH_COOKIE_NAME;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;
use time::Duration;

#[allow(clippy::large_enum_variant)]
pub(crate) enum RunOutcome {
    Serve(SocketAddr, furqan_portal::config::AppConfig),
    Exit(i32),
}

pub(crate) fn run() -> RunOutcome {
    let cli = Cli::parse();
    if let Some(Command::AuthKey) = cli.command {
        let code = run_auth_key();
        return RunOutcome::Exit(code);
    }

    let file = match load_file_config(cli.config.as_deref()) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("error: {err}");
            return RunOutcome::Exit(2);
        }
    };

    let root = match cli.root.clone().or(file.root.clone()) {
        Some(root) => root,
        None => {
            eprintln!("error: --root is required unless using a subcommand");
            return RunOutcome::Exit(2);
        }
    };
    let root = match std::fs::canonicalize(&root) {
        Ok(root) => root,
        Err(err) => {
            eprintln!("error: failed to resolve root directory: {err}");
            return RunOutcome::Exit(2);
        }
    };
    if !root.is_dir() {
        eprintln!("error: root path is not a directory: {}", root.display());
        return RunOutcome::Exit(2);
    }

    let addr = match resolve_addr(&cli, &file) {
        Ok(addr) => addr,
        Err(err) => {
            eprintln!("error: {err}");
            return RunOutcome::Exit(2);
        }
    };

    let auth = match resolve_auth_config(&cli, &file) {
        Ok(auth) => auth,
        Err(err) => {
            eprintln!("error: {err}");
            return RunOutcome::Exit(2);
        }
    };

    let app_name = cli
        .app_name
        .clone()
        .or(file.app_name.clone())
        .unwrap_or_else(|| "Al-Furqan".to_string());

    RunOutcome::Serve(
        addr,
        furqan_portal::config::AppConfig {
            root,
            app_name,
            auth,
        },
    )
}

#[derive(Parser, Debug)]
#[command(
    name = "furqan-portal",
    version,
    about = "Multilingual non-profit association portal"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
    /// Data directory for the document collections.
    #[arg(long)]
    root: Option<PathBuf>,
    #[arg(long)]
    addr: Option<SocketAddr>,
    #[arg(long)]
    app_name: Option<String>,
    /// Optional TOML file supplying the same settings; flags win.
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, env = "FURQAN_AUTH_KEY")]
    auth_key: Option<String>,
    #[arg(long, env = "FURQAN_AUTH_TOKEN_TTL")]
    auth_token_ttl: Option<String>,
    #[arg(long, env = "FURQAN_AUTH_COOKIE_NAME")]
    auth_cookie_name: Option<String>,
    #[arg(long, env = "FURQAN_AUTH_COOKIE_SECURE")]
    auth_cookie_secure: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a fresh random auth signing key.
    AuthKey,
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    root: Option<PathBuf>,
    addr: Option<String>,
    app_name: Option<String>,
    auth: Option<FileAuthConfig>,
}

#[derive(Debug, Default, Deserialize)]
struct FileAuthConfig {
    key: Option<String>,
    token_ttl: Option<String>,
    cookie_name: Option<String>,
    cookie_secure: Option<bool>,
}

fn run_auth_key() -> i32 {
    let secret = match furqan_portal::auth::generate_auth_key() {
        Ok(secret) => secret,
        Err(err) => {
            eprintln!("failed to generate auth key: {err}");
            return 1;
        }
    };
    println!("{secret}");
    0
}

fn load_file_config(path: Option<&std::path::Path>) -> Result<FileConfig, String> {
    let Some(path) = path else {
        return Ok(FileConfig::default());
    };
    let raw = std::fs::read_to_string(path)
        .map_err(|err| format!("failed to read config file {}: {err}", path.display()))?;
    toml::from_str(&raw)
        .map_err(|err| format!("failed to parse config file {}: {err}", path.display()))
}

fn resolve_addr(cli: &Cli, file: &FileConfig) -> Result<SocketAddr, String> {
    if let Some(addr) = cli.addr {
        return Ok(addr);
    }
    if let Some(raw) = file.addr.as_deref() {
        return raw
            .parse()
            .map_err(|_| format!("invalid addr '{raw}' in config file"));
    }
    Ok(SocketAddr::from(([127, 0, 0, 1], 3000)))
}

fn resolve_auth_config(
    cli: &Cli,
    file: &FileConfig,
) -> Result<Option<furqan_portal::config::AuthConfig>, String> {
    let file_auth = file.auth.as_ref();
    let key = cli
        .auth_key
        .clone()
        .or_else(|| file_auth.and_then(|auth| auth.key.clone()));
    let token_ttl = cli
        .auth_token_ttl
        .clone()
        .or_else(|| file_auth.and_then(|auth| auth.token_ttl.clone()));
    let cookie_name = cli
        .auth_cookie_name
        .clone()
        .or_else(|| file_auth.and_then(|auth| auth.cookie_name.clone()));
    let cookie_secure = cli.auth_cookie_secure
        || file_auth
            .and_then(|auth| auth.cookie_secure)
            .unwrap_or(false);

    let has_any = key.is_some() || token_ttl.is_some() || cookie_name.is_some() || cookie_secure;
    if !has_any {
        return Ok(None);
    }

    let key = key
        .as_deref()
        .ok_or("auth is configured but --auth-key is missing")?
        .trim()
        .to_string();
    if key.is_empty() {
        return Err("auth key cannot be empty".to_string());
    }

    if let Some(name) = cookie_name.as_deref()
        && name.trim().is_empty()
    {
        return Err("auth cookie name cannot be empty".to_string());
    }

    let token_ttl = match token_ttl.as_deref() {
        Some(raw) => parse_auth_token_ttl(raw)?,
        None => default_auth_token_ttl(),
    };
    let cookie_name = cookie_name
        .as_deref()
        .map(|name| name.trim().to_string())
        .unwrap_or_else(|| DEFAULT_AUTH_COOKIE_NAME.to_string());

    Ok(Some(furqan_portal::config::AuthConfig {
        key,
        token_ttl,
        cookie_name,
        cookie_secure,
    }))
}

fn default_auth_token_ttl() -> Duration {
    Duration::days(14)
}

fn parse_auth_token_ttl(raw: &str) -> Result<Duration, String> {
    let value = raw.trim();
    if value.is_empty() {
        return Err("auth token ttl cannot be empty".to_string());
    }

    let (amount, unit) = match value.chars().last() {
        Some(ch) if ch.is_ascii_alphabetic() => {
            (&value[..value.len() - 1], ch.to_ascii_lowercase())
        }
        _ => (value, 's'),
    };

    let amount: i64 = amount
        .parse()
        .map_err(|_| format!("invalid auth token ttl '{value}'; expected <number>[s|m|h|d]"))?;

    if amount <= 0 {
        return Err("auth token ttl must be greater than 0".to_string());
    }

    match unit {
        's' => Ok(Duration::seconds(amount)),
        'm' => Ok(Duration::minutes(amount)),
        'h' => Ok(Duration::hours(amount)),
        'd' => Ok(Duration::days(amount)),
        _ => Err(format!(
            "invalid auth token ttl '{value}'; expected <number>[s|m|h|d]"
        )),
    }
}

#[cfg(test)]
#[allow(non_snake_case)]
mod tests {
    use super::*;

    fn base_cli() -> Cli {
        Cli {
            command: None,
            root: Some(PathBuf::from("/")),
            addr: None,
            app_name: None,
            config: None,
            auth_key: None,
            auth_token_ttl: None,
            auth_cookie_name: None,
            auth_cookie_secure: false,
        }
    }

    #[test]
    fn parse_auth_token_ttl__should_parse_seconds_when_unit_missing() {
        // When
        let duration = parse_auth_token_ttl("30").expect("parse ttl");

        // Then
        assert_eq!(duration, Duration::seconds(30));
    }

    #[test]
    fn parse_auth_token_ttl__should_parse_units() {
        // When
        let duration = parse_auth_token_ttl("15m").expect("parse ttl");

        // Then
        assert_eq!(duration, Duration::minutes(15));
    }

    #[test]
    fn parse_auth_token_ttl__should_reject_invalid_values() {
        // Then
        assert!(parse_auth_token_ttl("").is_err());
        assert!(parse_auth_token_ttl("0").is_err());
        assert!(parse_auth_token_ttl("abc").is_err());
    }

    #[test]
    fn resolve_auth_config__should_require_auth_key_when_options_present() {
        // Given
        let mut cli = base_cli();
        cli.auth_token_ttl = Some("1h".to_string());

        // When
        let result = resolve_auth_config(&cli, &FileConfig::default());

        // Then
        assert!(result.is_err());
    }

    #[test]
    fn resolve_auth_config__should_apply_defaults_when_auth_key_present() {
        // Given
        let mut cli = base_cli();
        cli.auth_key = Some("base64-key".to_string());

        // When
        let config = resolve_auth_config(&cli, &FileConfig::default())
            .expect("resolve auth config")
            .expect("auth config");

        // Then
        assert_eq!(config.key, "base64-key");
        assert_eq!(config.token_ttl, default_auth_token_ttl());
        assert_eq!(config.cookie_name, DEFAULT_AUTH_COOKIE_NAME);
        assert!(!config.cookie_secure);
    }

    #[test]
    fn resolve_auth_config__should_prefer_flags_over_file() {
        // Given
        let mut cli = base_cli();
        cli.auth_key = Some("cli-key".to_string());
        let file = FileConfig {
            auth: Some(FileAuthConfig {
                key: Some("file-key".to_string()),
                token_ttl: Some("2h".to_string()),
                cookie_name: Some("file_cookie".to_string()),
                cookie_secure: Some(true),
            }),
            ..FileConfig::default()
        };

        // When
        let config = resolve_auth_config(&cli, &file)
            .expect("resolve auth config")
            .expect("auth config");

        // Then
        assert_eq!(config.key, "cli-key");
        assert_eq!(config.token_ttl, Duration::hours(2));
        assert_eq!(config.cookie_name, "file_cookie");
        assert!(config.cookie_secure);
    }

    #[test]
    fn load_file_config__should_parse_all_sections() {
        // Given
        let mut path = std::env::temp_dir();
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("time")
            .as_nanos();
        path.push(format!("furqan-cli-config-{nanos}.toml"));
        std::fs::write(
            &path,
            "root = \"/data\"\naddr = \"0.0.0.0:8080\"\napp_name = \"Al-Furqan\"\n\n[auth]\nkey = \"k\"\ntoken_ttl = \"7d\"\n",
        )
        .expect("write config");

        // When
        let file = load_file_config(Some(&path)).expect("load");

        // Then
        assert_eq!(file.root.as_deref(), Some(std::path::Path::new("/data")));
        assert_eq!(file.addr.as_deref(), Some("0.0.0.0:8080"));
        assert_eq!(file.auth.as_ref().and_then(|a| a.key.as_deref()), Some("k"));

        std::fs::remove_file(&path).expect("cleanup");
    }
}
