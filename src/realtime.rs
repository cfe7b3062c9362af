//! Realtime departure boards
//!
//! SL API docs: <https://www.trafiklab.se/api/sl-realtidsinformation-4>

use tracing::{debug, instrument};

use crate::client::SlClient;
use crate::envelope::ResponseEnvelope;
use crate::error::SlError;
use crate::models::RealtimeBoard;
use crate::query::QueryPairs;

/// Endpoint for the realtime api, relative to the base URL
const REALTIME_ENDPOINT: &str = "realtimedeparturesV4.json";

/// Options for [`SlClient::realtime_departures`]
///
/// The transport flags carry exclude semantics; each is inverted exactly
/// once at serialization because the upstream parameters expect include
/// semantics.
#[allow(clippy::struct_excessive_bools)] // One flag per transport mode
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RealtimeSearchOptions {
    /// API key (required)
    pub key: String,

    /// Site identifier from a location search (required)
    pub site_id: String,

    /// Time window to search departures within, in minutes. Max 60.
    pub time_window: u32,

    /// Exclude buses
    pub bus: bool,

    /// Exclude metros
    pub metro: bool,

    /// Exclude ships
    pub ship: bool,

    /// Exclude trains
    pub train: bool,

    /// Exclude trams
    pub tram: bool,
}

impl RealtimeSearchOptions {
    fn validate(&self) -> Result<(), SlError> {
        if self.key.is_empty() {
            return Err(SlError::MissingApiKey);
        }

        if self.site_id.is_empty() {
            return Err(SlError::MissingSiteId);
        }

        Ok(())
    }

    /// Serialize to wire parameters, consuming the option set so each
    /// exclusion flag inverts exactly once per call.
    ///
    /// The realtime endpoint matches parameter names case-insensitively and
    /// accepts every parameter on every call, so nothing is omitted here.
    fn into_query(self) -> QueryPairs {
        let mut query = QueryPairs::new();
        query.push_inverted("Bus", self.bus);
        query.push("Key", self.key);
        query.push_inverted("Metro", self.metro);
        query.push_inverted("Ship", self.ship);
        query.push("SiteID", self.site_id);
        query.push("TimeWindow", self.time_window.to_string());
        query.push_inverted("Train", self.train);
        query.push_inverted("Tram", self.tram);
        query
    }
}

impl SlClient {
    /// Fetch the realtime departure board for a site
    ///
    /// # Errors
    ///
    /// Fails without touching the network when the API key or the site
    /// identifier is empty.
    #[instrument(skip(self, options))]
    pub async fn realtime_departures(
        &self,
        options: RealtimeSearchOptions,
    ) -> Result<RealtimeBoard, SlError> {
        options.validate()?;

        let envelope: ResponseEnvelope<RealtimeBoard> =
            self.get_json(REALTIME_ENDPOINT, options.into_query()).await?;

        debug!(
            status_code = envelope.status_code,
            execution_time_ms = envelope.execution_time,
            "realtime response decoded"
        );

        Ok(envelope.into_payload()?.unwrap_or_default())
    }
}
