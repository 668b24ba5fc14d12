#![cfg(feature = "qr")]

use epc_qr::{
    config::Configuration,
    encoder::{ErrorCorrection, PngEncoder, QrImageConfig},
    errors::Error,
    qr_code, qr_code_with,
    transfer::Transfer,
    types::{CharacterSet, IdentificationCode, Purpose, Version},
};

fn config() -> Configuration {
    Configuration::new(
        Version::V1,
        CharacterSet::Utf8,
        IdentificationCode::Sct,
        "YOURBIC",
        "YOURNAME",
        "YOURIBAN",
        "EUR",
    )
}

#[test]
fn test_qr_code_reference_image() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let transfer = Transfer::new(
        "123.45",
        Some(Purpose::Gdds),
        Some("Payment for invoice".to_string()),
        None,
        None,
    );

    let png = qr_code(&config(), &transfer).unwrap();
    let img = image::load_from_memory(&png).unwrap();

    assert_eq!(img.width(), QrImageConfig::REFERENCE_SIZE);
    assert_eq!(img.height(), QrImageConfig::REFERENCE_SIZE);
}

#[test]
fn test_qr_code_custom_size() {
    let transfer = Transfer::builder().amount("1.00").build();
    let png = qr_code_with(
        &config(),
        &transfer,
        &PngEncoder,
        QrImageConfig::builder()
            .level(ErrorCorrection::Low)
            .size(100)
            .build(),
    )
    .unwrap();

    let img = image::load_from_memory(&png).unwrap();
    assert_eq!((img.width(), img.height()), (100, 100));
}

#[test]
fn test_qr_code_zero_size() {
    let transfer = Transfer::builder().amount("1.00").build();
    let err = qr_code_with(
        &config(),
        &transfer,
        &PngEncoder,
        QrImageConfig::builder().size(0).build(),
    )
    .unwrap_err();

    assert!(matches!(err, Error::Encode(_)));
}

#[test]
fn test_qr_code_invalid_amount() {
    let transfer = Transfer::builder().amount("0.00").build();
    assert!(matches!(
        qr_code(&config(), &transfer),
        Err(Error::Build(_))
    ));
}
