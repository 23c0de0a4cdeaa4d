use std::collections::BTreeMap;

use geo_types::Point;
use serde::{Deserialize, Serialize};

use crate::{parse_point, EventId, LatLng};

use super::Binding;

/// One result row of the event details query. Every variable is optional,
/// the endpoint leaves out whatever the knowledge graph does not know.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventLocation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event: Option<Binding>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_id: Option<Binding>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_label: Option<Binding>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_description: Option<Binding>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<Binding>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<Binding>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Binding>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_id: Option<Binding>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_label: Option<Binding>,
    /// Raw `Point(lon lat)` geometry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinate: Option<Binding>,
    /// Image of the location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Binding>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_article: Option<Binding>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_image: Option<Binding>,
    /// Variables the query projected that are not known above.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Binding>,
}

impl EventLocation {
    /// Look a result variable up by the name used in the query.
    pub fn get(&self, variable: &str) -> Option<&Binding> {
        match variable {
            "event" => self.event.as_ref(),
            "eventId" => self.event_id.as_ref(),
            "eventLabel" => self.event_label.as_ref(),
            "eventDescription" => self.event_description.as_ref(),
            "startDate" => self.start_date.as_ref(),
            "endDate" => self.end_date.as_ref(),
            "location" => self.location.as_ref(),
            "locationId" => self.location_id.as_ref(),
            "locationLabel" => self.location_label.as_ref(),
            "coordinate" => self.coordinate.as_ref(),
            "image" => self.image.as_ref(),
            "eventArticle" => self.event_article.as_ref(),
            "eventImage" => self.event_image.as_ref(),
            other => self.extra.get(other),
        }
    }

    pub fn id(&self) -> Option<EventId> {
        self.event_id.as_ref().map(|b| EventId::from(b.value.as_str()))
    }

    pub fn label(&self) -> Option<&str> {
        self.event_label.as_ref().map(|b| b.value.as_str())
    }

    pub fn article(&self) -> Option<&str> {
        self.event_article.as_ref().map(|b| b.value.as_str())
    }

    /// Coordinate of the event location, `None` when it is missing or not a
    /// well formed point.
    pub fn lat_lng(&self) -> Option<LatLng> {
        self.coordinate
            .as_ref()
            .and_then(|b| parse_point(&b.value).ok())
    }

    pub fn point(&self) -> Option<Point<f64>> {
        self.lat_lng().map(crate::lat_lng_to_point)
    }
}
