use model::{
    AirportData, AirportId, AirportType, BasicInfo, Codes, Coordinates, ExampleData,
    References, Region, ScheduledService,
};
use search::{AirportDatabase, AirportFilter, SearchError, SearchService};

struct Fixture {
    id: u32,
    name: &'static str,
    airport_type: AirportType,
    iata_code: Option<&'static str>,
    ident: &'static str,
    position: (f64, f64),
    country: &'static str,
    continent: Option<&'static str>,
    scheduled: bool,
}

fn airports() -> Vec<Fixture> {
    vec![
        Fixture {
            id: 1,
            name: "Beijing Capital International Airport",
            airport_type: AirportType::LargeAirport,
            iata_code: Some("PEK"),
            ident: "ZBAA",
            position: (40.0799, 116.6031),
            country: "CN",
            continent: Some("AS"),
            scheduled: true,
        },
        Fixture {
            id: 2,
            name: "Beijing Daxing International Airport",
            airport_type: AirportType::LargeAirport,
            iata_code: Some("PKX"),
            ident: "ZBAD",
            position: (39.509945, 116.41092),
            country: "CN",
            continent: Some("AS"),
            scheduled: true,
        },
        Fixture {
            id: 3,
            name: "Beijing Badaling Heliport",
            airport_type: AirportType::Heliport,
            iata_code: Some("  "),
            ident: "CN-0033",
            position: (40.3611, 116.0052),
            country: "CN",
            continent: Some("AS"),
            scheduled: false,
        },
        Fixture {
            id: 4,
            name: "London Heathrow Airport",
            airport_type: AirportType::LargeAirport,
            iata_code: Some("LHR"),
            ident: "EGLL",
            position: (51.4706, -0.461941),
            country: "GB",
            continent: Some("EU"),
            scheduled: true,
        },
        Fixture {
            id: 5,
            name: "Unnamed Outback Strip",
            airport_type: AirportType::SmallAirport,
            iata_code: None,
            ident: "YXXX",
            position: (-25.0, 133.0),
            country: "AU",
            continent: None,
            scheduled: false,
        },
    ]
}

fn data(fixtures: &[Fixture]) -> AirportData {
    let mut data = AirportData::default();
    for airport in fixtures {
        let id = AirportId::new(airport.id);
        data.basic_info.push(BasicInfo {
            id,
            name: airport.name.to_owned(),
            airport_type: airport.airport_type,
            ident: Some(airport.ident.to_owned()),
            iata_code: airport.iata_code.map(str::to_owned),
        });
        data.codes.push(Codes {
            id,
            gps_code: None,
            iata_code: airport.iata_code.map(str::to_owned),
            local_code: None,
            ident: airport.ident.to_owned(),
        });
        data.coordinates.push(Coordinates {
            id,
            latitude_deg: airport.position.0,
            longitude_deg: airport.position.1,
            elevation_ft: None,
        });
        data.region.push(Region {
            id,
            continent: airport.continent.map(str::to_owned),
            iso_country: airport.country.to_owned(),
            iso_region: format!("{}-00", airport.country),
            municipality: None,
        });
        data.references.push(References {
            id,
            home_link: None,
            wikipedia_link: None,
            keywords: None,
            scheduled_service: if airport.scheduled {
                ScheduledService::Yes
            } else {
                ScheduledService::No
            },
        });
    }
    data
}

fn database() -> AirportDatabase {
    AirportDatabase::from_data(data(&airports()))
}

fn ids(result: &[&BasicInfo]) -> Vec<u32> {
    result.iter().map(|info| info.id.raw()).collect()
}

#[test]
fn single_row_example() {
    let database = AirportDatabase::from_data(AirportData::example_data());
    let search = SearchService::new(&database);
    let row = BasicInfo::example_data();

    assert_eq!(search.find_by_iata_code("pek"), Some(&row));
    assert_eq!(search.find_by_icao_code("ZBAA"), Some(&row));
    assert_eq!(search.find_by_country("cn"), vec![&row]);
    assert_eq!(
        search.find_airports_in_radius(40.0799, 116.6031, 10.0).unwrap(),
        vec![&row]
    );
    let filter = AirportFilter::new()
        .with_type(AirportType::LargeAirport)
        .with_country("CN")
        .with_continent("AS")
        .with_iata_code(true)
        .with_scheduled_service(true);
    assert_eq!(search.search_airports(&filter), vec![&row]);
    assert!(search
        .search_airports(&AirportFilter::new().with_country("XX"))
        .is_empty());
}

#[test]
fn code_lookups_ignore_case() {
    let database = database();
    let search = SearchService::new(&database);
    for code in ["PEK", "PKX", "LHR", "XXX"] {
        assert_eq!(
            search.find_by_iata_code(code),
            search.find_by_iata_code(&code.to_lowercase())
        );
    }
    assert_eq!(search.find_by_icao_code("egll").map(|info| info.id.raw()), Some(4));
    assert_eq!(search.find_by_iata_code("LHR").map(|info| info.id.raw()), Some(4));
}

#[test]
fn unknown_codes_are_not_found() {
    let database = database();
    let search = SearchService::new(&database);
    assert!(search.find_by_iata_code("JFK").is_none());
    assert!(search.find_by_icao_code("KJFK").is_none());
    assert!(search.find_by_iata_code("").is_none());
    assert!(search.find_by_country("XX").is_empty());
}

#[test]
fn empty_ident_never_matches_icao_lookup() {
    let mut data = data(&airports());
    data.codes[0].ident.clear();
    let database = AirportDatabase::from_data(data);
    let search = SearchService::new(&database);
    assert!(search.find_by_icao_code("").is_none());
    assert!(search.find_by_icao_code("ZBAA").is_none());
    assert_eq!(search.find_by_icao_code("zbad").map(|info| info.id.raw()), Some(2));
}

#[test]
fn duplicate_codes_resolve_to_first_in_table_order() {
    let mut fixtures = airports();
    fixtures[3].iata_code = Some("PEK");
    let database = AirportDatabase::from_data(data(&fixtures));
    let search = SearchService::new(&database);
    assert_eq!(search.find_by_iata_code("PEK").map(|info| info.id.raw()), Some(1));
}

#[test]
fn country_lookup_keeps_basic_info_order() {
    let mut data = data(&airports());
    data.region.reverse();
    let database = AirportDatabase::from_data(data);
    let search = SearchService::new(&database);
    assert_eq!(ids(&search.find_by_country("cn")), [1, 2, 3]);
}

#[test]
fn join_misses_are_no_match() {
    let mut data = data(&airports());
    // airport 2 lost its codes, region, references and coordinates rows
    data.codes.retain(|row| row.id.raw() != 2);
    data.region.retain(|row| row.id.raw() != 2);
    data.references.retain(|row| row.id.raw() != 2);
    data.coordinates.retain(|row| row.id.raw() != 2);
    let database = AirportDatabase::from_data(data);
    let search = SearchService::new(&database);

    assert!(search.find_by_iata_code("PKX").is_none());
    assert_eq!(ids(&search.find_by_country("CN")), [1, 3]);
    assert_eq!(
        ids(&search.search_airports(&AirportFilter::new().with_iata_code(false))),
        [3, 5]
    );
    assert_eq!(
        ids(&search.search_airports(&AirportFilter::new().with_scheduled_service(true))),
        [1, 4]
    );
    let nearby = search.find_airports_in_radius(39.9, 116.4, 100.0).unwrap();
    assert_eq!(ids(&nearby), [1, 3]);

    let record = search.airport(AirportId::new(2)).unwrap();
    assert!(!record.is_complete());
    assert!(record.codes.is_none());
}

#[test]
fn code_without_basic_info_is_not_found() {
    let mut data = data(&airports());
    data.basic_info.retain(|row| row.id.raw() != 4);
    let database = AirportDatabase::from_data(data);
    let search = SearchService::new(&database);
    assert!(search.find_by_iata_code("LHR").is_none());
    assert!(search.airport(AirportId::new(4)).is_none());
}

#[test]
fn empty_filter_returns_everything_in_order() {
    let database = database();
    let search = SearchService::new(&database);
    let all = search.search_airports(&AirportFilter::default());
    assert_eq!(all.len(), database.basic_info.len());
    assert_eq!(ids(&all), [1, 2, 3, 4, 5]);
}

#[test]
fn filter_predicates_are_combined() {
    let database = database();
    let search = SearchService::new(&database);

    let large = AirportFilter::new().with_type(AirportType::LargeAirport);
    assert_eq!(ids(&search.search_airports(&large)), [1, 2, 4]);

    let large_in_cn = large.clone().with_country("cn");
    assert_eq!(ids(&search.search_airports(&large_in_cn)), [1, 2]);

    let europe = AirportFilter::new().with_continent("eu");
    assert_eq!(ids(&search.search_airports(&europe)), [4]);

    let heliports_with_service = AirportFilter::new()
        .with_type(AirportType::Heliport)
        .with_scheduled_service(true);
    assert!(search.search_airports(&heliports_with_service).is_empty());
}

#[test]
fn missing_continent_never_matches() {
    let database = database();
    let search = SearchService::new(&database);
    let filter = AirportFilter::new().with_country("AU").with_continent("OC");
    assert!(search.search_airports(&filter).is_empty());
    let filter = AirportFilter::new().with_country("AU");
    assert_eq!(ids(&search.search_airports(&filter)), [5]);
}

#[test]
fn blank_iata_code_counts_as_missing() {
    let database = database();
    let search = SearchService::new(&database);
    let with = AirportFilter::new().with_iata_code(true);
    let without = AirportFilter::new().with_iata_code(false);
    assert_eq!(ids(&search.search_airports(&with)), [1, 2, 4]);
    assert_eq!(ids(&search.search_airports(&without)), [3, 5]);
}

#[test]
fn radius_query_validates_input() {
    let database = database();
    let search = SearchService::new(&database);
    assert_eq!(
        search.find_airports_in_radius(200.0, 200.0, -1.0),
        Err(SearchError::InvalidLatitude(200.0))
    );
    assert_eq!(
        search.find_airports_in_radius(0.0, 180.5, 10.0),
        Err(SearchError::InvalidLongitude(180.5))
    );
    assert_eq!(
        search.find_airports_in_radius(0.0, 0.0, 0.0),
        Err(SearchError::InvalidRadius(0.0))
    );
    assert!(search.find_airports_in_radius(f64::NAN, 0.0, 1.0).is_err());
    assert!(search.find_airports_in_radius(0.0, 0.0, f64::NAN).is_err());
    assert!(search.find_airports_in_radius(90.0, -180.0, 1.0).is_ok());
}

#[test]
fn radius_results_grow_with_radius() {
    let database = database();
    let search = SearchService::new(&database);
    let center = (40.0799, 116.6031);
    let mut previous: Vec<u32> = Vec::new();
    for radius in [1.0, 50.0, 100.0, 1000.0, 10_000.0, 20_100.0] {
        let result = ids(&search.find_airports_in_radius(center.0, center.1, radius).unwrap());
        assert!(previous.iter().all(|id| result.contains(id)), "{radius}");
        previous = result;
    }
    assert_eq!(previous, [1, 2, 3, 4, 5]);
}

#[test]
fn radius_boundary_is_inclusive() {
    let database = database();
    let search = SearchService::new(&database);
    let distance = utility::geo::haversine_distance(40.0799, 116.6031, 39.509945, 116.41092);
    let result = search.find_airports_in_radius(40.0799, 116.6031, distance).unwrap();
    assert_eq!(ids(&result), [1, 2, 3]);
    let result = search
        .find_airports_in_radius(40.0799, 116.6031, distance - 1e-6)
        .unwrap();
    assert_eq!(ids(&result), [1, 3]);
}

#[test]
fn non_finite_positions_never_match() {
    let mut data = data(&airports());
    for row in data.coordinates.iter_mut() {
        match row.id.raw() {
            1 => row.latitude_deg = f64::NAN,
            2 => row.longitude_deg = f64::INFINITY,
            _ => {}
        }
    }
    let database = AirportDatabase::from_data(data);
    let search = SearchService::new(&database);

    let result = search.find_airports_in_radius(40.0, 116.5, 25_000.0).unwrap();
    assert_eq!(ids(&result), [3, 4, 5]);
    let result = search
        .find_airports_in_radius_with_distance(40.0, 116.5, 25_000.0)
        .unwrap();
    assert!(result.iter().all(|entry| entry.distance_km.is_finite()));
    assert!(result.iter().all(|entry| entry.content.id.raw() > 2));
}

#[test]
fn radius_with_distance_is_sorted_nearest_first() {
    let database = database();
    let search = SearchService::new(&database);
    let result = search
        .find_airports_in_radius_with_distance(39.6, 116.4, 100.0)
        .unwrap();
    let ids: Vec<u32> = result.iter().map(|hit| hit.content.id.raw()).collect();
    assert_eq!(ids, [2, 1, 3]);
    assert!(result.windows(2).all(|w| w[0].distance_km <= w[1].distance_km));
    assert!(search
        .find_airports_in_radius_with_distance(0.0, 0.0, -5.0)
        .is_err());
}

#[test]
fn joined_record_serializes_all_shards() {
    let database = AirportDatabase::from_data(AirportData::example_data());
    let search = SearchService::new(&database);
    let record = search.airport(AirportId::new(1)).unwrap();
    assert!(record.is_complete());
    let json = serde_json::to_value(record).unwrap();
    assert_eq!(json["name"], "Beijing Capital International Airport");
    assert_eq!(json["codes"]["ident"], "ZBAA");
    assert_eq!(json["region"]["iso_country"], "CN");
    assert_eq!(json["references"]["scheduled_service"], "yes");
}

#[test]
fn database_is_shareable_between_threads() {
    let database = database();
    std::thread::scope(|scope| {
        let handles: Vec<_> = ["PEK", "PKX", "LHR"]
            .into_iter()
            .map(|code| {
                let database = &database;
                scope.spawn(move || {
                    SearchService::new(database)
                        .find_by_iata_code(code)
                        .map(|info| info.id.raw())
                })
            })
            .collect();
        let found: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(found, [Some(1), Some(2), Some(4)]);
    });
}
