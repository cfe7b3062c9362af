//! Client library for the SL (Storstockholms Lokaltrafik) transit API
//!
//! Covers three resource areas of the SL API, all sharing one HTTP client,
//! one configuration, and one error normalization pipeline:
//!
//! - location typeahead search ([`SlClient::search_locations`])
//! - realtime departure boards ([`SlClient::realtime_departures`])
//! - travel planner trip search, journey detail, and trip reconstruction
//!   ([`SlClient::plan_trips`], [`SlClient::journey_detail`],
//!   [`SlClient::reconstruct_trip`])
//!
//! Every operation validates its required fields before touching the
//! network, and upstream error indicators are normalized into [`SlError`]
//! so a call never returns a payload alongside an error.
//!
//! ```ignore
//! use sl_transit::{LocationSearchOptions, SlClient};
//!
//! let client = SlClient::with_defaults()?;
//! let locations = client
//!     .search_locations(LocationSearchOptions {
//!         key: std::env::var("SL_TYPEAHEAD_KEY")?,
//!         search_string: "Slussen".to_string(),
//!         stations_only: true,
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! for location in locations {
//!     println!("{} ({})", location.name, location.site_id);
//! }
//! ```
//!
//! Each resource area uses its own API key, issued per API on
//! [Trafiklab](https://www.trafiklab.se/).

mod client;
mod config;
mod envelope;
mod error;
mod location;
mod models;
mod query;
mod realtime;
mod travel_planner;

pub use client::SlClient;
pub use config::SlConfig;
pub use error::SlError;
pub use location::LocationSearchOptions;
pub use models::{
    Departure, Deviation, Direction, DirectionList, FareItem, FareSetItem, Journey,
    JourneyDetailRef, JourneyName, JourneyStop, Leg, LegList, LegStop, Location, NameList, Product,
    RealtimeBoard, ServiceDay, StopInfo, StopList, StopPointDeviation, TariffResult, Trip,
};
pub use query::QueryPairs;
pub use realtime::RealtimeSearchOptions;
pub use travel_planner::{JourneyDetailOptions, ReconstructionOptions, TripOptions, TripPage};
