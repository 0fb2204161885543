use std::sync::mpsc::{self, Receiver};
use std::thread;

use thiserror::Error;

use super::model::CharacterRecord;

// ---------------------------------------------------------------------------
// Character list fetch – one best-effort GET at startup
// ---------------------------------------------------------------------------

/// The fixed character-list endpoint. Plain GET, no query parameters.
pub const CHARACTERS_ENDPOINT: &str = "https://hp-api.onrender.com/api/characters";

/// Why the character list could not be loaded. The message is surfaced to
/// the user verbatim; there is no retry.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport failure or non-success HTTP status.
    #[error("failed to fetch characters: {0}")]
    Http(#[from] ureq::Error),
    /// The response body was not a character list.
    #[error("failed to parse character data: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type FetchResult = Result<Vec<CharacterRecord>, FetchError>;

/// Fetch and parse the full character list. Blocking; run off the UI
/// thread via [`spawn_fetch`].
pub fn fetch_characters(endpoint: &str) -> FetchResult {
    log::info!("fetching characters from {endpoint}");
    let mut response = ureq::get(endpoint).call()?;
    let body = response.body_mut().read_to_string()?;
    let records = parse_characters(&body)?;
    log::info!("fetched {} characters", records.len());
    Ok(records)
}

/// Parse a JSON array of character objects.
pub fn parse_characters(body: &str) -> Result<Vec<CharacterRecord>, serde_json::Error> {
    serde_json::from_str(body)
}

/// Run the fetch on a detached background thread. The result arrives on the
/// returned channel; if the receiver is gone by then the send fails and the
/// result is simply discarded (no cancellation of the in-flight request).
pub fn spawn_fetch(endpoint: &str) -> Receiver<FetchResult> {
    let endpoint = endpoint.to_string();
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let result = fetch_characters(&endpoint);
        if tx.send(result).is_err() {
            log::debug!("fetch result discarded, receiver dropped");
        }
    });
    rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Wand;

    // A trimmed sample of the live API payload: one fully-populated record
    // and one with the API's empty-string "absent" encoding throughout.
    const SAMPLE: &str = r#"[
      {
        "id": "9e3f7ce4-b9a7-4244-b709-dae5c1f1d4a8",
        "name": "Harry Potter",
        "alternate_names": ["The Boy Who Lived"],
        "species": "human",
        "gender": "male",
        "house": "Gryffindor",
        "dateOfBirth": "31-07-1980",
        "yearOfBirth": 1980,
        "wizard": true,
        "ancestry": "half-blood",
        "hogwartsStudent": true,
        "hogwartsStaff": false,
        "wand": { "wood": "holly", "core": "phoenix tail feather", "length": 11 },
        "patronus": "stag",
        "image": "https://ik.imagekit.io/hpapi/harry.jpg"
      },
      {
        "id": "af95bd8a-dfae-45bb-bc69-533860d34129",
        "name": "Peeves",
        "species": "poltergeist",
        "gender": "male",
        "house": "",
        "dateOfBirth": null,
        "yearOfBirth": null,
        "hogwartsStudent": false,
        "hogwartsStaff": false,
        "wand": { "wood": "", "core": "", "length": "" },
        "patronus": "",
        "image": ""
      }
    ]"#;

    #[test]
    fn parses_live_payload_shape() {
        let records = parse_characters(SAMPLE).unwrap();
        assert_eq!(records.len(), 2);

        let harry = &records[0];
        assert_eq!(harry.name, "Harry Potter");
        assert_eq!(harry.house.as_deref(), Some("Gryffindor"));
        assert_eq!(harry.date_of_birth.as_deref(), Some("31-07-1980"));
        assert_eq!(harry.year_of_birth, Some(1980));
        assert!(harry.hogwarts_student);
        assert_eq!(
            harry.wand,
            Some(Wand {
                wood: Some("holly".to_string()),
                core: Some("phoenix tail feather".to_string()),
                length: Some(11.0),
            })
        );
        assert_eq!(harry.patronus.as_deref(), Some("stag"));
    }

    #[test]
    fn empty_strings_normalize_to_none() {
        let records = parse_characters(SAMPLE).unwrap();
        let peeves = &records[1];
        assert_eq!(peeves.house, None);
        assert_eq!(peeves.date_of_birth, None);
        assert_eq!(peeves.year_of_birth, None);
        assert_eq!(peeves.patronus, None);
        assert_eq!(peeves.image, None);
        // wand object present but fully empty: not a known wand
        assert!(!peeves.wand.as_ref().unwrap().is_known());
    }

    #[test]
    fn year_of_birth_accepts_numeric_strings() {
        let records =
            parse_characters(r#"[{ "name": "x", "yearOfBirth": "1926" }]"#).unwrap();
        assert_eq!(records[0].year_of_birth, Some(1926));
    }

    #[test]
    fn non_array_body_is_a_parse_error() {
        assert!(parse_characters(r#"{"error": "down for maintenance"}"#).is_err());
    }
}
