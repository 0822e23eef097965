use prisma_config::{AppConfig, ConfigError};

// 环境变量为进程级共享状态，所有场景放在同一个测试中顺序执行。
#[test]
fn load_config_from_env() {
    // Rust 2024 中 set_var 需要显式标注 unsafe（测试进程内可控）。
    unsafe {
        std::env::remove_var("PRISMA_HTTP_ADDR");
        std::env::remove_var("PRISMA_EXPOSE_META");
        std::env::remove_var("PRISMA_MAX_BODY_BYTES");
    }
    let config = AppConfig::from_env().expect("defaults");
    assert_eq!(config.http_addr, "127.0.0.1:8080");
    assert!(config.expose_meta);
    assert_eq!(config.max_body_bytes, 65536);

    unsafe {
        std::env::set_var("PRISMA_HTTP_ADDR", "127.0.0.1:8081");
        std::env::set_var("PRISMA_EXPOSE_META", "off");
        std::env::set_var("PRISMA_MAX_BODY_BYTES", "1024");
    }
    let config = AppConfig::from_env().expect("config");
    assert_eq!(config.http_addr, "127.0.0.1:8081");
    assert!(!config.expose_meta);
    assert_eq!(config.max_body_bytes, 1024);

    unsafe {
        std::env::set_var("PRISMA_EXPOSE_META", "TRUE");
    }
    assert!(AppConfig::from_env().expect("upper case bool").expose_meta);

    for typo in ["yes", "ture", ""] {
        unsafe {
            std::env::set_var("PRISMA_EXPOSE_META", typo);
        }
        let err = AppConfig::from_env().expect_err("invalid bool");
        assert!(matches!(err, ConfigError::Invalid(ref key, ref value)
            if key == "PRISMA_EXPOSE_META" && value == typo));
    }

    unsafe {
        std::env::set_var("PRISMA_EXPOSE_META", "0");
        std::env::set_var("PRISMA_MAX_BODY_BYTES", "lots");
    }
    let err = AppConfig::from_env().expect_err("invalid");
    assert!(matches!(err, ConfigError::Invalid(ref key, ref value)
        if key == "PRISMA_MAX_BODY_BYTES" && value == "lots"));

    unsafe {
        std::env::set_var("PRISMA_MAX_BODY_BYTES", "0");
    }
    assert!(AppConfig::from_env().is_err());
}
