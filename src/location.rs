//! Location search (typeahead)
//!
//! SL API docs: <https://www.trafiklab.se/api/sl-platsuppslag/dokumentation>

use tracing::{debug, instrument};

use crate::client::SlClient;
use crate::envelope::ResponseEnvelope;
use crate::error::SlError;
use crate::models::Location;
use crate::query::QueryPairs;

/// Endpoint for the typeahead api, relative to the base URL
const TYPEAHEAD_ENDPOINT: &str = "typeahead.json";

/// Options for [`SlClient::search_locations`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocationSearchOptions {
    /// API key (required)
    pub key: String,

    /// Search string (required)
    pub search_string: String,

    /// Restrict the search to stations. The wire parameter `stationsonly`
    /// is sent as the negation of this flag, matching the upstream
    /// contract.
    pub stations_only: bool,

    /// Restrict the search to bus stops
    pub bus: bool,

    /// Maximum number of results. Upstream default is 10, max 50.
    pub max_results: u32,
}

impl LocationSearchOptions {
    fn validate(&self) -> Result<(), SlError> {
        if self.key.is_empty() {
            return Err(SlError::MissingApiKey);
        }

        if self.search_string.is_empty() {
            return Err(SlError::MissingSearchString);
        }

        Ok(())
    }

    /// Serialize to wire parameters, consuming the option set so the
    /// `stationsonly` inversion applies exactly once per call.
    fn into_query(self) -> QueryPairs {
        let mut query = QueryPairs::new();
        query.push_true("bus", self.bus);
        query.push_nonempty("key", &self.key);
        query.push_nonzero("maxResults", i64::from(self.max_results));
        query.push_nonempty("searchstring", &self.search_string);
        query.push_inverted_or_omit("stationsonly", self.stations_only);
        query
    }
}

impl SlClient {
    /// Search for stops and stations by name
    ///
    /// # Errors
    ///
    /// Fails without touching the network when the API key or the search
    /// string is empty.
    #[instrument(skip(self, options))]
    pub async fn search_locations(
        &self,
        options: LocationSearchOptions,
    ) -> Result<Vec<Location>, SlError> {
        options.validate()?;

        let envelope: ResponseEnvelope<Vec<Location>> =
            self.get_json(TYPEAHEAD_ENDPOINT, options.into_query()).await?;

        debug!(
            status_code = envelope.status_code,
            execution_time_ms = envelope.execution_time,
            "typeahead response decoded"
        );

        Ok(envelope.into_payload()?.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SlConfig;

    fn valid_options() -> LocationSearchOptions {
        LocationSearchOptions {
            key: "XXXX".to_string(),
            search_string: "Södra".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_missing_key_fails_before_dispatch() {
        let client = SlClient::new(&SlConfig::for_testing()).unwrap();
        let options = LocationSearchOptions {
            key: String::new(),
            ..valid_options()
        };

        let err = client.search_locations(options).await.unwrap_err();
        assert!(matches!(err, SlError::MissingApiKey));
    }

    #[tokio::test]
    async fn test_missing_search_string_fails_before_dispatch() {
        let client = SlClient::new(&SlConfig::for_testing()).unwrap();
        let options = LocationSearchOptions {
            search_string: String::new(),
            ..valid_options()
        };

        let err = client.search_locations(options).await.unwrap_err();
        assert!(matches!(err, SlError::MissingSearchString));
    }

    #[test]
    fn test_query_inverts_stationsonly() {
        let pairs: Vec<_> = valid_options().into_query().iter().map(|(k, v)| (k, v.to_string())).collect();
        assert!(pairs.contains(&("stationsonly", "true".to_string())));

        let options = LocationSearchOptions {
            stations_only: true,
            ..valid_options()
        };
        let query = options.into_query();
        assert!(!query.iter().any(|(name, _)| name == "stationsonly"));
    }

    #[test]
    fn test_query_omits_defaults() {
        let query = valid_options().into_query();
        assert!(!query.iter().any(|(name, _)| name == "bus"));
        assert!(!query.iter().any(|(name, _)| name == "maxResults"));
    }

    #[test]
    fn test_query_serializes_all_set_fields() {
        let options = LocationSearchOptions {
            key: "XXXX".to_string(),
            search_string: "Slussen".to_string(),
            stations_only: false,
            bus: true,
            max_results: 50,
        };

        let pairs: Vec<_> = options
            .into_query()
            .iter()
            .map(|(k, v)| (k, v.to_string()))
            .collect();

        assert_eq!(
            pairs,
            vec![
                ("bus", "true".to_string()),
                ("key", "XXXX".to_string()),
                ("maxResults", "50".to_string()),
                ("searchstring", "Slussen".to_string()),
                ("stationsonly", "true".to_string()),
            ]
        );
    }
}
