use configuration::Config;
use core_types::Sector;
use std::io::Write;
use tempfile::NamedTempFile;
use web_server::universe_from_config;

fn universe_file(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn defaults_to_builtin_table() {
    let universe = universe_from_config(&Config::default()).unwrap();
    assert_eq!(universe.len(), 32);
}

#[test]
fn loads_custom_file_with_mixed_case_sectors() {
    let file = universe_file(
        r#"
        [[instruments]]
        symbol = "AAA"
        name = "Alpha"
        sector = "Technology"
        expected_return = 0.10
        risk = 0.20

        [[instruments]]
        symbol = "BBB"
        name = "Beta"
        sector = "ENERGY"
        expected_return = 0.05
        risk = 0.10
        "#,
    );
    let config = Config {
        universe_file: Some(file.path().to_path_buf()),
        ..Config::default()
    };

    let universe = universe_from_config(&config).unwrap();
    assert_eq!(universe.len(), 2);
    assert_eq!(universe.instruments(Sector::Energy)[0].symbol, "BBB");
}

#[test]
fn invalid_file_names_the_path() {
    let file = universe_file(
        r#"
        [[instruments]]
        symbol = "AAA"
        name = "Alpha"
        sector = "technology"
        expected_return = 0.10
        risk = 0.0
        "#,
    );
    let config = Config {
        universe_file: Some(file.path().to_path_buf()),
        ..Config::default()
    };

    let err = universe_from_config(&config).unwrap_err();
    assert!(format!("{err:#}").contains(&file.path().display().to_string()));
}
