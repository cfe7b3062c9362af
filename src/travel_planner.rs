//! Travel planner: trip search, journey detail, and trip reconstruction
//!
//! SL API docs: <https://www.trafiklab.se/api/sl-reseplanerare-3>

use serde::Deserialize;
use tracing::{debug, instrument};

use crate::client::SlClient;
use crate::envelope::{ApiMessage, planner_error};
use crate::error::SlError;
use crate::models::{Journey, Trip};
use crate::query::QueryPairs;

/// Endpoint for trip search, relative to the base URL
const TRIP_ENDPOINT: &str = "TravelplannerV3/trip.json";

/// Endpoint for journey detail, relative to the base URL
const JOURNEY_DETAIL_ENDPOINT: &str = "TravelplannerV3/journeydetail.json";

/// Endpoint for trip reconstruction, relative to the base URL
const RECONSTRUCTION_ENDPOINT: &str = "TravelplannerV3/reconstruction.json";

/// Options for [`SlClient::plan_trips`]
///
/// Only the API key is required; every other parameter is omitted from the
/// wire when left at its zero value, letting the upstream defaults apply.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TripOptions {
    /// API key (required)
    pub key: String,

    /// Origin station id, e.g. "300109600" or "9600"
    pub origin_id: String,

    /// Origin site id or alias, e.g. "9001" or "TCE"
    pub origin_ext_id: String,

    /// Origin coordinate, latitude
    pub origin_coord_lat: String,

    /// Origin coordinate, longitude
    pub origin_coord_long: String,

    /// Whether a trip may start with a walk, as "1, [min meters], [max meters]"
    pub origin_walk: String,

    /// Destination station id
    pub dest_id: String,

    /// Destination site id or alias
    pub dest_ext_id: String,

    /// Destination coordinate, latitude
    pub dest_coord_lat: String,

    /// Destination coordinate, longitude
    pub dest_coord_long: String,

    /// Whether a trip may end with a walk, same format as `origin_walk`
    pub dest_walk: String,

    /// Station to pass through
    pub via_id: String,

    /// Minutes to spend at the via station
    pub via_wait_time: u32,

    /// Stops to avoid, as "avoidId|avoidStatus" entries separated by ";"
    pub avoid: String,

    /// Station to avoid changing at
    pub avoid_id: String,

    /// Trip date, e.g. "2014-08-23". Upstream defaults to today.
    pub date: String,

    /// Trip time, e.g. "19:06". Upstream defaults to now.
    pub time: String,

    /// Search based on arrival time instead of departure time (0 or 1)
    pub search_for_arrival: u32,

    /// Continuation token from a previous trip page for earlier/later trips
    pub context: String,

    /// Approximate number of trips to return. Upstream default is 5.
    pub num_trips: u32,

    /// Minimum number of trips after the start time. numF and numB together
    /// can not exceed 6.
    pub num_f: String,

    /// Minimum number of trips before the start time
    pub num_b: String,

    /// Response language: "sv" (default), "en" or "de"
    pub lang: String,

    /// Lines to filter on, comma separated; "!" excludes a line
    pub lines: String,

    /// Bit mask of transport products to use
    pub products: u32,

    /// Maximum number of changes (0-11)
    pub max_change: u32,

    /// Maximum change time in minutes
    pub max_change_time: u32,

    /// Minimum change time in minutes
    pub min_change_time: u32,

    /// Minutes added to the estimated change time
    pub add_change_time: u32,

    /// Percentage of the estimated change time the traveler needs (100 =
    /// unchanged, 200 = double)
    pub change_time_percent: u32,

    /// Whether passed stops should be included in the result (0 or 1)
    pub passlist: u32,

    /// Whether detailed polylines should be calculated (0 or 1)
    pub poly: u32,
}

impl TripOptions {
    fn validate(&self) -> Result<(), SlError> {
        if self.key.is_empty() {
            return Err(SlError::MissingApiKey);
        }
        Ok(())
    }

    fn into_query(self) -> QueryPairs {
        let mut query = QueryPairs::new();
        query.push_nonzero("addChangeTime", i64::from(self.add_change_time));
        query.push_nonempty("avoid", &self.avoid);
        query.push_nonempty("avoidID", &self.avoid_id);
        query.push_nonzero("changeTimePercent", i64::from(self.change_time_percent));
        query.push_nonempty("context", &self.context);
        query.push_nonempty("date", &self.date);
        query.push_nonempty("destCoordLat", &self.dest_coord_lat);
        query.push_nonempty("destCoordLong", &self.dest_coord_long);
        query.push_nonempty("destExtId", &self.dest_ext_id);
        query.push_nonempty("destId", &self.dest_id);
        query.push_nonempty("destWalk", &self.dest_walk);
        query.push_nonempty("key", &self.key);
        query.push_nonempty("lang", &self.lang);
        query.push_nonempty("lines", &self.lines);
        query.push_nonzero("maxChange", i64::from(self.max_change));
        query.push_nonzero("maxChangeTime", i64::from(self.max_change_time));
        query.push_nonzero("minChangeTime", i64::from(self.min_change_time));
        query.push_nonempty("numB", &self.num_b);
        query.push_nonempty("numF", &self.num_f);
        query.push_nonzero("numTrips", i64::from(self.num_trips));
        query.push_nonempty("originCoordLat", &self.origin_coord_lat);
        query.push_nonempty("originCoordLong", &self.origin_coord_long);
        query.push_nonempty("originExtId", &self.origin_ext_id);
        query.push_nonempty("originId", &self.origin_id);
        query.push_nonempty("originWalk", &self.origin_walk);
        query.push_nonzero("passlist", i64::from(self.passlist));
        query.push_nonzero("poly", i64::from(self.poly));
        query.push_nonzero("products", i64::from(self.products));
        query.push_nonzero("searchForArrival", i64::from(self.search_for_arrival));
        query.push_nonempty("time", &self.time);
        query.push_nonempty("viaId", &self.via_id);
        query.push_nonzero("viaWaitTime", i64::from(self.via_wait_time));
        query
    }
}

/// Options for [`SlClient::journey_detail`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JourneyDetailOptions {
    /// API key (required)
    pub key: String,

    /// Journey reference from a trip leg
    pub id: String,

    /// Trip date, e.g. "2014-08-23". Upstream defaults to today.
    pub date: String,

    /// Whether detailed polylines should be calculated (0 or 1)
    pub poly: u32,
}

impl JourneyDetailOptions {
    fn validate(&self) -> Result<(), SlError> {
        if self.key.is_empty() {
            return Err(SlError::MissingApiKey);
        }
        Ok(())
    }

    fn into_query(self) -> QueryPairs {
        let mut query = QueryPairs::new();
        query.push_nonempty("date", &self.date);
        query.push_nonempty("id", &self.id);
        query.push_nonempty("key", &self.key);
        query.push_nonzero("poly", i64::from(self.poly));
        query
    }
}

/// Options for [`SlClient::reconstruct_trip`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReconstructionOptions {
    /// API key (required)
    pub key: String,

    /// Reconstruction context from [`Trip::ctx_recon`]
    pub ctx: String,

    /// Trip date, e.g. "2014-08-23". Upstream defaults to today.
    pub date: String,

    /// Whether detailed polylines should be calculated (0 or 1)
    pub poly: u32,
}

impl ReconstructionOptions {
    fn validate(&self) -> Result<(), SlError> {
        if self.key.is_empty() {
            return Err(SlError::MissingApiKey);
        }
        Ok(())
    }

    fn into_query(self) -> QueryPairs {
        let mut query = QueryPairs::new();
        query.push_nonempty("ctx", &self.ctx);
        query.push_nonempty("date", &self.date);
        query.push_nonempty("key", &self.key);
        query.push_nonzero("poly", i64::from(self.poly));
        query
    }
}

/// One page of trip search results
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TripPage {
    /// Trips in departure order
    pub trips: Vec<Trip>,

    /// Continuation token for earlier trips, usable as [`TripOptions::context`]
    pub scroll_back: String,

    /// Continuation token for later trips, usable as [`TripOptions::context`]
    pub scroll_forward: String,
}

/// Envelope for trip search and reconstruction responses
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TripEnvelope {
    #[serde(rename = "errorCode")]
    error_code: String,

    #[serde(rename = "errorText")]
    error_text: String,

    #[serde(rename = "Message")]
    message: ApiMessage,

    #[serde(rename = "Trip")]
    trip: Vec<Trip>,

    #[serde(rename = "scrB")]
    scr_b: String,

    #[serde(rename = "scrF")]
    scr_f: String,
}

/// Envelope for journey detail responses; the error indicators sit inline
/// next to the journey payload upstream.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct JourneyEnvelope {
    #[serde(rename = "errorCode")]
    error_code: String,

    #[serde(rename = "errorText")]
    error_text: String,

    #[serde(rename = "Message")]
    message: ApiMessage,

    #[serde(flatten)]
    journey: Journey,
}

impl SlClient {
    /// Search for trips between two locations
    ///
    /// # Errors
    ///
    /// Fails without touching the network when the API key is empty.
    #[instrument(skip(self, options))]
    pub async fn plan_trips(&self, options: TripOptions) -> Result<TripPage, SlError> {
        options.validate()?;

        let envelope: TripEnvelope = self.get_json(TRIP_ENDPOINT, options.into_query()).await?;
        planner_error(&envelope.error_text, &envelope.error_code, &envelope.message)?;

        debug!(trips = envelope.trip.len(), "trip response decoded");

        Ok(TripPage {
            trips: envelope.trip,
            scroll_back: envelope.scr_b,
            scroll_forward: envelope.scr_f,
        })
    }

    /// Fetch the detailed stop list for a journey reference
    ///
    /// # Errors
    ///
    /// Fails without touching the network when the API key is empty.
    #[instrument(skip(self, options))]
    pub async fn journey_detail(&self, options: JourneyDetailOptions) -> Result<Journey, SlError> {
        options.validate()?;

        let envelope: JourneyEnvelope = self
            .get_json(JOURNEY_DETAIL_ENDPOINT, options.into_query())
            .await?;
        planner_error(&envelope.error_text, &envelope.error_code, &envelope.message)?;

        Ok(envelope.journey)
    }

    /// Rebuild a single trip from a reconstruction context token
    ///
    /// # Errors
    ///
    /// Fails without touching the network when the API key is empty.
    /// A well-formed response with no trips is [`SlError::NoTripFound`]:
    /// the caller asked for exactly one reconstructed trip, so an empty
    /// list is a failure, never a silent empty success.
    #[instrument(skip(self, options))]
    pub async fn reconstruct_trip(&self, options: ReconstructionOptions) -> Result<Trip, SlError> {
        options.validate()?;

        let envelope: TripEnvelope = self
            .get_json(RECONSTRUCTION_ENDPOINT, options.into_query())
            .await?;
        planner_error(&envelope.error_text, &envelope.error_code, &envelope.message)?;

        envelope.trip.into_iter().next().ok_or(SlError::NoTripFound)
    }
}
