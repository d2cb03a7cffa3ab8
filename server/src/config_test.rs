use super::*;

#[test]
fn missing_values_take_defaults() {
    assert_eq!(parse_host(None), Ok(DEFAULT_HOST));
    assert_eq!(parse_port(None), Ok(DEFAULT_PORT));
    assert_eq!(parse_flag("CONTENT_API", None, true), Ok(true));
}

#[test]
fn blank_values_take_defaults() {
    assert_eq!(parse_port(Some("  ")), Ok(DEFAULT_PORT));
    assert_eq!(parse_flag("CONTENT_API", Some(""), false), Ok(false));
}

#[test]
fn parse_host_accepts_ipv4_and_ipv6() {
    assert_eq!(parse_host(Some("127.0.0.1")), Ok(IpAddr::V4(Ipv4Addr::LOCALHOST)));
    assert!(matches!(parse_host(Some("::1")), Ok(IpAddr::V6(_))));
}

#[test]
fn parse_host_rejects_names() {
    assert_eq!(
        parse_host(Some("localhost")),
        Err(ConfigError::Invalid { var: "HOST", value: "localhost".into() })
    );
}

#[test]
fn parse_port_rejects_out_of_range() {
    assert!(parse_port(Some("70000")).is_err());
    assert!(parse_port(Some("http")).is_err());
    assert_eq!(parse_port(Some("8080")), Ok(8080));
}

#[test]
fn parse_flag_reads_common_spellings() {
    assert_eq!(parse_flag("CONTENT_API", Some("FALSE"), true), Ok(false));
    assert_eq!(parse_flag("CONTENT_API", Some("0"), true), Ok(false));
    assert_eq!(parse_flag("CONTENT_API", Some("on"), false), Ok(true));
}

#[test]
fn parse_flag_names_the_variable_on_error() {
    let err = parse_flag("CONTENT_API", Some("maybe"), true).unwrap_err();
    assert_eq!(err.to_string(), "invalid CONTENT_API: 'maybe'");
}

#[test]
fn socket_addr_joins_host_and_port() {
    let config = ServerConfig { host: IpAddr::V4(Ipv4Addr::LOCALHOST), port: 4000, content_api: true };
    assert_eq!(config.socket_addr().to_string(), "127.0.0.1:4000");
}
