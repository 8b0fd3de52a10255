//! Builds the shards from the OurAirports `airports.csv` export.

use std::{
    fs::{self, File},
    io::{BufWriter, Read},
    path::Path,
};

use model::{
    AirportData, AirportId, AirportType, BasicInfo, Codes, Coordinates, References,
    Region, ScheduledService, UnknownAirportType,
};
use serde::{Deserialize, Serialize};
use utility::serde::{empty_string_as_none, lenient_number};

use crate::{cleaning::clean_and_validate, LoadError, LoaderConfig, Result, ShardKind};

/// One line of `airports.csv`. Columns not needed for the shards are ignored.
#[derive(Debug, Clone, Deserialize)]
struct CsvAirport {
    #[serde(default, deserialize_with = "lenient_number")]
    id: Option<u32>,
    #[serde(default)]
    ident: String,
    #[serde(rename = "type", default)]
    airport_type: String,
    #[serde(default)]
    name: String,
    #[serde(default, deserialize_with = "lenient_number")]
    latitude_deg: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    longitude_deg: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    elevation_ft: Option<f64>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    continent: Option<String>,
    #[serde(default)]
    iso_country: String,
    #[serde(default)]
    iso_region: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    municipality: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    scheduled_service: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    gps_code: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    iata_code: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    local_code: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    home_link: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    wikipedia_link: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    keywords: Option<String>,
}

impl CsvAirport {
    /// Appends this airport to the shards. `Err` carries the reason the whole
    /// record was skipped.
    fn split_into(self, data: &mut AirportData) -> std::result::Result<(), String> {
        let id = AirportId::new(self.id.ok_or("missing or malformed id")?);
        let name = clean_and_validate(&self.name)?;
        let airport_type: AirportType =
            self.airport_type.parse().map_err(|why: UnknownAirportType| why.to_string())?;
        let ident = (!self.ident.is_empty()).then(|| self.ident.clone());

        data.basic_info.push(BasicInfo {
            id,
            name,
            airport_type,
            ident,
            iata_code: self.iata_code.clone(),
        });
        data.codes.push(Codes {
            id,
            gps_code: self.gps_code,
            iata_code: self.iata_code,
            local_code: self.local_code,
            ident: self.ident,
        });
        // a coordinate is either complete or not recorded at all
        match (self.latitude_deg, self.longitude_deg) {
            (Some(latitude_deg), Some(longitude_deg)) => data.coordinates.push(Coordinates {
                id,
                latitude_deg,
                longitude_deg,
                elevation_ft: self.elevation_ft,
            }),
            _ => log::warn!("airport {}: incomplete coordinates, not recorded", id),
        }
        data.region.push(Region {
            id,
            continent: self.continent,
            iso_country: self.iso_country,
            iso_region: self.iso_region,
            municipality: self.municipality,
        });
        data.references.push(References {
            id,
            home_link: self.home_link,
            wikipedia_link: self.wikipedia_link,
            keywords: self.keywords,
            scheduled_service: match self.scheduled_service.as_deref() {
                Some("yes") => ScheduledService::Yes,
                _ => ScheduledService::No,
            },
        });
        Ok(())
    }
}

/// Splits an `airports.csv` document into the five shards, keeping the input
/// order. Records which can not be used are skipped with a warning.
pub fn split_airports<R: Read>(reader: R) -> Result<AirportData> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut data = AirportData::default();
    let mut skipped = 0usize;
    for (index, row) in csv_reader.deserialize::<CsvAirport>().enumerate() {
        let result = row
            .map_err(|why| why.to_string())
            .and_then(|record| record.split_into(&mut data));
        if let Err(reason) = result {
            log::warn!("skipping airport record {}: {}", index, reason);
            skipped += 1;
        }
    }
    log::info!(
        "processed {} airport records, skipped {}",
        data.basic_info.len(),
        skipped
    );
    Ok(data)
}

fn write_shard<T: Serialize>(dir: &Path, kind: ShardKind, rows: &[T]) -> Result<()> {
    let path = dir.join(kind.file_name());
    let writer = BufWriter::new(File::create(&path)?);
    serde_json::to_writer_pretty(writer, rows)?;
    log::debug!("wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}

/// Writes every shard as pretty printed JSON into `dir`, creating it if
/// needed.
pub fn write_shards(data: &AirportData, dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)?;
    write_shard(dir, ShardKind::References, &data.references)?;
    write_shard(dir, ShardKind::Codes, &data.codes)?;
    write_shard(dir, ShardKind::Coordinates, &data.coordinates)?;
    write_shard(dir, ShardKind::Region, &data.region)?;
    write_shard(dir, ShardKind::BasicInfo, &data.basic_info)?;
    Ok(())
}

/// Downloads `airports.csv` from `config.csv_url` and writes the shards into
/// `config.data_dir`.
pub async fn fetch_airports_data(config: &LoaderConfig) -> Result<AirportData> {
    log::info!("downloading airport data from {}", config.csv_url);
    let response = reqwest::get(&config.csv_url).await?;
    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::HttpStatus {
            url: config.csv_url.clone(),
            status,
        });
    }
    let body = response.bytes().await?;
    log::info!("download completed ({} bytes), splitting into shards", body.len());

    let data_dir = config.data_dir.clone();
    let data = tokio::task::spawn_blocking(move || -> Result<AirportData> {
        let data = split_airports(body.as_ref())?;
        write_shards(&data, &data_dir)?;
        Ok(data)
    })
    .await??;
    log::info!(
        "wrote {} airports to {}",
        data.basic_info.len(),
        config.data_dir.display()
    );
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "\
\"id\",\"ident\",\"type\",\"name\",\"latitude_deg\",\"longitude_deg\",\"elevation_ft\",\"continent\",\"iso_country\",\"iso_region\",\"municipality\",\"scheduled_service\",\"gps_code\",\"iata_code\",\"local_code\",\"home_link\",\"wikipedia_link\",\"keywords\"
27232,\"ZBAA\",\"large_airport\",\"Beijing Capital International Airport\",40.0799,116.6031,116,\"AS\",\"CN\",\"CN-11\",\"Beijing\",\"yes\",\"ZBAA\",\"PEK\",\"\",\"http://en.bcia.com.cn/\",\"https://en.wikipedia.org/wiki/Beijing_Capital_International_Airport\",\"BJS\"
6523,\"00A\",\"heliport\",\"Total RF Heliport\",40.070985,-74.933689,11,\"NA\",\"US\",\"US-PA\",\"Bensalem\",\"no\",\"K00A\",\"\",\"00A\",\"\",\"\",\"\"
1,\"XX1\",\"small_airport\",\"AB\",1.0,1.0,,\"EU\",\"DE\",\"DE-SH\",\"\",\"\",\"\",\"\",\"\",\"\",\"\",\"\"
2,\"XX2\",\"spaceport\",\"Moon Base Alpha\",1.0,1.0,,\"EU\",\"DE\",\"DE-SH\",\"\",\"\",\"\",\"\",\"\",\"\",\"\",\"\"
abc,\"XX3\",\"small_airport\",\"Broken Id Field\",1.0,1.0,,\"EU\",\"DE\",\"DE-SH\",\"\",\"\",\"\",\"\",\"\",\"\",\"\",\"\"
35,\"OC01\",\"closed\",\"Nowhere Field\",,151.2,,\"OC\",\"AU\",\"AU-NSW\",\"\",\"\",\"\",\"\",\"\",\"\",\"\",\"\"
";

    #[test]
    fn splits_records_into_shards() {
        let data = split_airports(CSV.as_bytes()).unwrap();
        let ids: Vec<u32> = data.basic_info.iter().map(|row| row.id.raw()).collect();
        assert_eq!(ids, [27232, 6523, 35]);
        assert_eq!(data.codes.len(), 3);
        assert_eq!(data.region.len(), 3);
        assert_eq!(data.references.len(), 3);

        let pek = &data.codes[0];
        assert_eq!(pek.iata_code.as_deref(), Some("PEK"));
        assert_eq!(pek.local_code, None);
        assert_eq!(data.references[0].scheduled_service, ScheduledService::Yes);
        assert_eq!(data.references[1].scheduled_service, ScheduledService::No);
        assert_eq!(data.references[2].scheduled_service, ScheduledService::No);
        assert_eq!(data.basic_info[1].airport_type, AirportType::Heliport);
        assert_eq!(data.region[2].municipality, None);
    }

    #[test]
    fn incomplete_coordinates_are_not_recorded() {
        let data = split_airports(CSV.as_bytes()).unwrap();
        let ids: Vec<u32> = data.coordinates.iter().map(|row| row.id.raw()).collect();
        assert_eq!(ids, [27232, 6523]);
        assert_eq!(data.coordinates[0].elevation_ft, Some(116.0));
    }

    #[test]
    fn writes_shards_that_load_again() {
        let dir = tempfile::tempdir().unwrap();
        let data = split_airports(CSV.as_bytes()).unwrap();
        write_shards(&data, dir.path()).unwrap();
        for kind in ShardKind::ALL {
            assert!(dir.path().join(kind.file_name()).is_file(), "{kind}");
        }
        let loaded = crate::FileSystemSource::new(dir.path())
            .load_blocking()
            .unwrap();
        assert_eq!(loaded.basic_info, data.basic_info);
        assert_eq!(loaded.coordinates, data.coordinates);
        assert_eq!(loaded.references, data.references);
    }
}
