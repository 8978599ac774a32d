use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use edgar_statements::{Edgar, EdgarConfig, EdgarUrls};

pub fn fixture_path(relative: impl AsRef<Path>) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(relative)
}

pub fn read_fixture(relative: impl AsRef<Path>) -> String {
    fs::read_to_string(fixture_path(relative)).expect("fixture file should be readable")
}

#[allow(dead_code)]
pub fn edgar() -> Edgar {
    Edgar::new("test_agent", "example@example.com").unwrap()
}

/// Client with every base URL pointed at a mock server.
#[allow(dead_code)]
pub fn edgar_at(base: &str) -> Edgar {
    let config = EdgarConfig {
        user_agent: "test_agent example@example.com".to_string(),
        timeout: Duration::from_secs(5),
        base_urls: EdgarUrls {
            archives: base.to_string(),
            data: base.to_string(),
            files: base.to_string(),
        },
    };
    Edgar::with_config(config).unwrap()
}
