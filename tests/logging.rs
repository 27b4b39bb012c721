use marketquantify::{logging, Config, Error};

#[test]
fn second_logger_install_is_a_setup_error() {
    std::env::remove_var(logging::LOG_ENV);
    logging::init(&Config::default()).unwrap();

    let err = logging::init(&Config::new(true)).unwrap_err();
    assert!(matches!(err, Error::Logging(_)));
    assert!(err.is_logging_setup());
    assert!(err.to_string().starts_with("failed to install logger"), "{err}");
}
