//! SL domain models
//!
//! Typed representations of locations, realtime departures, trips, and
//! journeys as returned by the SL API. Pure data: the only behavior here is
//! the serde mapping onto the upstream field names, which mix PascalCase and
//! camelCase per endpoint.
//!
//! Shapes that upstream repeats inline (stops, products, service days) are
//! named once and composed by reference; [`Product`] for instance is shared
//! by trip legs and journey name sections.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

// --- Location search ---

/// A stop or station from the typeahead endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Location {
    /// Display name, including the municipality
    pub name: String,

    /// Site identifier, usable with the realtime endpoint
    pub site_id: String,

    /// Location type, e.g. "Station"
    #[serde(rename = "Type")]
    pub kind: String,

    /// Projected X coordinate, verbatim from upstream
    pub x: String,

    /// Projected Y coordinate, verbatim from upstream
    pub y: String,
}

// --- Realtime departures ---

/// A realtime departure board for one site
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct RealtimeBoard {
    /// Timestamp of the latest upstream data refresh (local Stockholm time)
    pub latest_update: Option<NaiveDateTime>,

    /// Age of the data in seconds
    pub data_age: i64,

    pub buses: Vec<Departure>,
    pub metros: Vec<Departure>,
    pub trains: Vec<Departure>,
    pub trams: Vec<Departure>,
    pub ships: Vec<Departure>,

    /// Deviations attached to the stop itself rather than a departure
    pub stop_point_deviations: Vec<StopPointDeviation>,
}

/// A single departure entry, shared by every transport mode
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Departure {
    pub line_number: String,

    pub destination: String,

    /// Secondary destination, only populated for trains
    pub secondary_destination_name: Option<String>,

    /// Line group, e.g. "tunnelbanans blå linje"
    pub group_of_line: Option<String>,

    /// Transport mode, e.g. "METRO"
    pub transport_mode: String,

    /// Human readable departure, e.g. "Nu" or "5 min"
    pub display_time: String,

    /// Scheduled departure (local Stockholm time)
    pub time_tabled_date_time: Option<NaiveDateTime>,

    /// Expected departure including delay (local Stockholm time)
    pub expected_date_time: Option<NaiveDateTime>,

    pub journey_direction: i32,
    pub journey_number: i64,
    pub stop_area_name: String,
    pub stop_area_number: i64,
    pub stop_point_number: i64,
    pub stop_point_designation: String,

    /// Deviations for this departure, `null` upstream when there are none
    pub deviations: Option<Vec<Deviation>>,
}

/// A service deviation notice
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Deviation {
    pub text: String,

    /// Consequence classification, `null` upstream when unspecified
    pub consequence: Option<String>,

    pub importance_level: i32,
}

/// A deviation scoped to a stop point rather than a single departure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct StopPointDeviation {
    pub deviation: Deviation,
    pub stop_info: StopInfo,
}

/// The stop a [`StopPointDeviation`] applies to
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct StopInfo {
    pub group_of_line: Option<String>,
    pub stop_area_name: String,
    pub stop_area_number: i64,
    pub transport_mode: String,
}

// --- Travel planner ---

/// A planned trip consisting of one or more legs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Trip {
    #[serde(rename = "LegList")]
    pub leg_list: LegList,

    #[serde(rename = "ServiceDays")]
    pub service_days: Vec<ServiceDay>,

    #[serde(rename = "TariffResult")]
    pub tariff_result: TariffResult,

    pub checksum: String,

    /// Reconstruction context, accepted by the reconstruction endpoint
    pub ctx_recon: String,

    /// Total duration in ISO-8601 duration notation, e.g. "PT19M"
    pub duration: String,

    pub idx: i32,
    pub trip_id: String,
}

/// Wrapper around the legs of a trip, mirroring the upstream nesting
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegList {
    #[serde(rename = "Leg")]
    pub leg: Vec<Leg>,
}

/// One leg of a trip
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Leg {
    #[serde(rename = "Origin")]
    pub origin: LegStop,

    #[serde(rename = "Destination")]
    pub destination: LegStop,

    #[serde(rename = "Product")]
    pub product: Product,

    #[serde(rename = "JourneyDetailRef")]
    pub journey_detail_ref: JourneyDetailRef,

    #[serde(rename = "JourneyStatus")]
    pub journey_status: String,

    pub category: String,
    pub direction: String,
    pub idx: String,
    pub name: String,
    pub number: String,
    pub reachable: bool,

    #[serde(rename = "type")]
    pub kind: String,
}

/// Origin or destination of a [`Leg`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LegStop {
    pub id: String,
    pub ext_id: String,
    pub main_mast_id: String,
    pub main_mast_ext_id: String,
    pub has_main_mast: bool,
    pub name: String,
    pub lat: f64,
    pub lon: f64,

    /// Date of arrival/departure at this stop, e.g. "2019-04-06"
    pub date: String,

    /// Time of arrival/departure at this stop, e.g. "19:06:00"
    pub time: String,

    pub track: String,
    pub prognosis_type: String,

    #[serde(rename = "type")]
    pub kind: String,
}

/// Reference handle accepted by the journey detail endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JourneyDetailRef {
    #[serde(rename = "ref")]
    pub reference: String,
}

/// The product (line/operator) serving a leg or journey section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Product {
    pub name: String,
    pub num: String,
    pub line: String,
    pub cat_out: String,
    pub cat_in: String,
    pub cat_code: String,
    pub cat_out_s: String,
    pub cat_out_l: String,
    pub operator_code: String,
    pub operator: String,
    pub admin: String,
}

/// Service calendar entry for a trip or journey
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ServiceDay {
    pub planning_period_begin: String,
    pub planning_period_end: String,
    pub s_days_r: String,
    pub s_days_i: String,
    pub s_days_b: String,
}

/// Tariff information for a trip
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TariffResult {
    pub fare_set_item: Vec<FareSetItem>,
}

/// A named group of fares
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FareSetItem {
    pub fare_item: Vec<FareItem>,
    pub name: String,
    pub desc: String,
}

/// A single fare
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FareItem {
    pub name: String,
    pub desc: String,
    pub cur: String,
    pub price: i64,
}

// --- Journey detail ---

/// The detailed stop-by-stop description of one vehicle journey
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Journey {
    #[serde(rename = "Directions")]
    pub directions: DirectionList,

    #[serde(rename = "Names")]
    pub names: NameList,

    #[serde(rename = "Stops")]
    pub stops: StopList,

    #[serde(rename = "ServiceDays")]
    pub service_days: Vec<ServiceDay>,

    #[serde(rename = "JourneyStatus")]
    pub journey_status: String,

    pub last_pass_route_idx: i32,
    pub last_pass_stop_ref: i32,

    #[serde(rename = "ref")]
    pub reference: String,
}

/// Wrapper around the direction headsigns of a journey
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectionList {
    #[serde(rename = "Direction")]
    pub direction: Vec<Direction>,
}

/// A headsign valid over a stretch of the route
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Direction {
    pub route_idx_from: i32,
    pub route_idx_to: i32,
    pub value: String,
}

/// Wrapper around the name sections of a journey
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NameList {
    #[serde(rename = "Name")]
    pub name: Vec<JourneyName>,
}

/// The product name valid over a stretch of the route
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JourneyName {
    #[serde(rename = "Product")]
    pub product: Product,

    pub category: String,
    pub name: String,
    pub number: String,
    pub route_idx_from: i32,
    pub route_idx_to: i32,
}

/// Wrapper around the stops of a journey
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StopList {
    #[serde(rename = "Stop")]
    pub stop: Vec<JourneyStop>,
}

/// One stop along a journey
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JourneyStop {
    pub id: String,
    pub ext_id: String,
    pub main_mast_id: String,
    pub main_mast_ext_id: String,
    pub has_main_mast: bool,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub route_idx: i32,
    pub dep_date: String,
    pub dep_time: String,
    pub dep_track: String,
    pub dep_prognosis_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_location() {
        let json = r#"{
            "Name": "Södra station (Stockholm)",
            "SiteId": "9530",
            "Type": "Station",
            "X": "18061405",
            "Y": "59313389"
        }"#;

        let location: Location = serde_json::from_str(json).unwrap();
        assert_eq!(location.name, "Södra station (Stockholm)");
        assert_eq!(location.site_id, "9530");
        assert_eq!(location.kind, "Station");
        assert_eq!(location.x, "18061405");
        assert_eq!(location.y, "59313389");
    }

    #[test]
    fn test_parse_departure() {
        let json = r#"{
            "GroupOfLine": "tunnelbanans blå linje",
            "DisplayTime": "Nu",
            "TransportMode": "METRO",
            "LineNumber": "11",
            "Destination": "Akalla",
            "JourneyDirection": 1,
            "StopAreaName": "T-Centralen",
            "StopAreaNumber": 1051,
            "StopPointNumber": 3051,
            "StopPointDesignation": "5",
            "TimeTabledDateTime": "2017-12-18T20:10:45",
            "ExpectedDateTime": "2017-12-18T20:11:03",
            "JourneyNumber": 30531,
            "Deviations": null
        }"#;

        let departure: Departure = serde_json::from_str(json).unwrap();
        assert_eq!(departure.group_of_line.as_deref(), Some("tunnelbanans blå linje"));
        assert_eq!(departure.display_time, "Nu");
        assert_eq!(departure.transport_mode, "METRO");
        assert_eq!(departure.journey_number, 30531);
        assert!(departure.deviations.is_none());
        assert_eq!(
            departure
                .expected_date_time
                .unwrap()
                .format("%Y-%m-%dT%H:%M:%S")
                .to_string(),
            "2017-12-18T20:11:03"
        );
    }

    #[test]
    fn test_parse_departure_with_deviations() {
        let json = r#"{
            "LineNumber": "43",
            "Destination": "Vårberg",
            "Deviations": [
                {"Consequence": "INFORMATION", "ImportanceLevel": 5, "Text": "Resa förbi Gamla stan"}
            ]
        }"#;

        let departure: Departure = serde_json::from_str(json).unwrap();
        let deviations = departure.deviations.unwrap();
        assert_eq!(deviations.len(), 1);
        assert_eq!(deviations[0].importance_level, 5);
        assert_eq!(deviations[0].consequence.as_deref(), Some("INFORMATION"));
    }

    #[test]
    fn test_parse_trip_leg() {
        let json = r#"{
            "Origin": {
                "name": "Centralen (Klarabergsviad.)",
                "type": "ST",
                "id": "A=1@O=Centralen@X=18057604@Y=59331507@",
                "extId": "400101002",
                "lat": 59.331507,
                "lon": 18.057604,
                "time": "16:47:00",
                "date": "2019-04-06"
            },
            "Destination": {
                "name": "Slussen",
                "type": "ST",
                "extId": "400102011",
                "lat": 59.320719,
                "lon": 18.072841,
                "time": "16:55:00",
                "date": "2019-04-06"
            },
            "JourneyDetailRef": {"ref": "1|5577|2|74|6042019"},
            "JourneyStatus": "P",
            "Product": {
                "name": "buss 3",
                "num": "21553",
                "line": "3",
                "catOut": "BUS",
                "catIn": "BUS",
                "catCode": "3",
                "catOutS": "BUS",
                "catOutL": "buss",
                "operatorCode": "SL",
                "operator": "Storstockholms Lokaltrafik",
                "admin": "100100"
            },
            "category": "BUS",
            "direction": "Södermalmstorg",
            "idx": "0",
            "name": "buss 3",
            "number": "21553",
            "reachable": true,
            "type": "JNY"
        }"#;

        let leg: Leg = serde_json::from_str(json).unwrap();
        assert_eq!(leg.origin.name, "Centralen (Klarabergsviad.)");
        assert_eq!(leg.destination.ext_id, "400102011");
        assert_eq!(leg.product.cat_out_l, "buss");
        assert_eq!(leg.journey_detail_ref.reference, "1|5577|2|74|6042019");
        assert!(leg.reachable);
        assert_eq!(leg.kind, "JNY");
    }

    #[test]
    fn test_parse_trip_defaults_missing_fields() {
        let trip: Trip = serde_json::from_str(r#"{"ctxRecon": "T$A=1@O=X@"}"#).unwrap();
        assert_eq!(trip.ctx_recon, "T$A=1@O=X@");
        assert!(trip.leg_list.leg.is_empty());
        assert!(trip.checksum.is_empty());
    }

    #[test]
    fn test_parse_journey() {
        let json = r#"{
            "Directions": {"Direction": [{"routeIdxFrom": 0, "routeIdxTo": 10, "value": "Akalla"}]},
            "JourneyStatus": "P",
            "Stops": {"Stop": [{
                "id": "A=1@O=T-Centralen@",
                "extId": "400101051",
                "name": "T-Centralen",
                "lat": 59.331134,
                "lon": 18.061529,
                "routeIdx": 4,
                "depTime": "20:10:45",
                "depDate": "2017-12-18"
            }]},
            "ref": "1|5577|2|74|6042019"
        }"#;

        let journey: Journey = serde_json::from_str(json).unwrap();
        assert_eq!(journey.directions.direction[0].value, "Akalla");
        assert_eq!(journey.stops.stop[0].name, "T-Centralen");
        assert_eq!(journey.stops.stop[0].route_idx, 4);
        assert_eq!(journey.reference, "1|5577|2|74|6042019");
    }
}
