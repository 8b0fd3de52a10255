use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utility::serde::default_if_empty;

use crate::{AirportId, AirportRow, ExampleData};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ScheduledService {
    Yes,
    #[default]
    No,
}

impl ScheduledService {
    pub fn is_scheduled(&self) -> bool {
        matches!(self, ScheduledService::Yes)
    }
}

/// Links and keywords of an airport.
/// Shard: `references.json`.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct References {
    pub id: AirportId,
    #[serde(default)]
    pub home_link: Option<String>,
    #[serde(default)]
    pub wikipedia_link: Option<String>,
    #[serde(default)]
    pub keywords: Option<String>,
    /// Whether the airport has scheduled airline service.
    /// if absent or null: `ScheduledService::No`
    #[serde(default, deserialize_with = "default_if_empty")]
    pub scheduled_service: ScheduledService,
}

impl AirportRow for References {
    fn airport_id(&self) -> AirportId {
        self.id
    }
}

impl ExampleData for References {
    fn example_data() -> Self {
        References {
            id: AirportId::new(1),
            home_link: Some("http://en.bcia.com.cn/".to_owned()),
            wikipedia_link: Some(
                "https://en.wikipedia.org/wiki/Beijing_Capital_International_Airport"
                    .to_owned(),
            ),
            keywords: Some("BJS".to_owned()),
            scheduled_service: ScheduledService::Yes,
        }
    }
}
