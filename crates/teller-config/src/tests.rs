#[cfg(test)]
mod tests {
    use super::super::*;

    #[test]
    fn test_defaults_cover_the_demo_setup() {
        let config = Config::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3001);
        assert_eq!(config.ledger.opening_balance, dec!(1000));
        assert_eq!(config.dashboard.default_user, "demo");
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = Config::load_from(Path::new("/nonexistent/teller.toml")).unwrap();
        assert_eq!(config.server.port, default_port());
        assert_eq!(config.ledger.opening_balance, default_opening_balance());
    }

    #[test]
    fn test_partial_toml_keeps_defaults_for_missing_keys() {
        let config: Config = toml::from_str("[server]\nport = 8080\n").unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.ledger.opening_balance, dec!(1000));
        assert_eq!(config.dashboard.default_user, "demo");
    }

    #[test]
    fn test_opening_balance_parses_integer_and_float_literals() {
        let config: Config = toml::from_str("[ledger]\nopening_balance = 250\n").unwrap();
        assert_eq!(config.ledger.opening_balance, dec!(250));

        let config: Config = toml::from_str("[ledger]\nopening_balance = 99.95\n").unwrap();
        assert_eq!(config.ledger.opening_balance, dec!(99.95));
    }

    #[test]
    fn test_bind_addr_joins_host_and_port() {
        let server = ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 8080,
        };
        assert_eq!(server.bind_addr(), "0.0.0.0:8080");
    }
}
