//! Prompt construction and fingerprinting.

use sha2::{Digest, Sha256};

use crate::types::CountryPair;

/// Build the culture-shock prompt for a country pair.
///
/// Pure function of the two country names: identical inputs always produce
/// byte-identical prompts. The prompt spells out the required JSON shape and
/// forbids markdown fences (the model does not always comply; see
/// [`crate::sanitize`]).
pub fn build_prompt(pair: &CountryPair) -> String {
    format!(
        r#"You are an expert in cultural differences.
List the cultural shocks a person might experience when traveling from {} to {}.
Return the output strictly in JSON format, with the following structure:

[
  {{
    "shock": "Brief description of the shock",
    "severity": "Low, Medium, or High",
    "tips": "Advice to adapt"
  }},
  ...
]

Only return JSON, no extra text. Do not include markdown code fences.
"#,
        pair.home_country, pair.visiting_country
    )
}

/// Hex-encoded SHA-256 fingerprint of a prompt, for correlating logged
/// responses with the prompt revision that produced them.
pub fn hash_prompt(prompt: &str) -> String {
    let digest = Sha256::digest(prompt.as_bytes());
    digest.iter().map(|byte| format!("{:02x}", byte)).collect()
}
