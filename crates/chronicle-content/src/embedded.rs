//! The default scenario set, compiled into the binary.

use chronicle_core::Scenario;

use crate::error::ContentError;
use crate::traits::{parse_scenario, ScenarioSource};

const DOCUMENTS: &[(&str, &str)] = &[
    ("01_lindisfarne.json", include_str!("../scenarios/01_lindisfarne.json")),
    ("02_plague.json", include_str!("../scenarios/02_plague.json")),
    ("03_succession.json", include_str!("../scenarios/03_succession.json")),
    ("04_iconoclasm.json", include_str!("../scenarios/04_iconoclasm.json")),
    ("05_donation.json", include_str!("../scenarios/05_donation.json")),
    ("06_lombards.json", include_str!("../scenarios/06_lombards.json")),
    ("07_conversion.json", include_str!("../scenarios/07_conversion.json")),
    ("08_tours.json", include_str!("../scenarios/08_tours.json")),
    ("09_gregory.json", include_str!("../scenarios/09_gregory.json")),
    ("10_embassy.json", include_str!("../scenarios/10_embassy.json")),
];

/// The ten bundled early-medieval scenarios.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSource;

impl ScenarioSource for EmbeddedSource {
    fn describe(&self) -> String {
        "embedded scenarios".to_string()
    }

    fn load(&self) -> Result<Vec<Scenario>, ContentError> {
        DOCUMENTS
            .iter()
            .map(|(name, json)| parse_scenario(name, json))
            .collect()
    }
}
