//! Static port catalog and port-to-port selection.
//!
//! # Responsibility
//! - Provide the immutable list of named ports offered by the port picker.
//! - Resolve an origin/destination selection into the straight line to draw.
//!
//! # Invariants
//! - Port ids are unique and follow the UN/LOCODE shape (`SGSIN`, `NLRTM`).
//! - The catalog never changes after construction.
//! - A connecting line exists only when two distinct ports resolve.

use crate::geo::{haversine_nautical_miles, LatLng};
use crate::units::Distance;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

static PORT_ID_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Z]{2}[A-Z2-9]{3}$").expect("port id pattern must compile")
});

/// One selectable port.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Port {
    pub id: String,
    pub name: String,
    pub country: String,
    pub coordinates: LatLng,
}

impl Port {
    fn builtin(id: &str, name: &str, country: &str, lat: f64, lng: f64) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            country: country.to_string(),
            coordinates: LatLng::new(lat, lng),
        }
    }

    /// Picker option text, e.g. `Rotterdam, Netherlands`.
    pub fn option_label(&self) -> String {
        format!("{}, {}", self.name, self.country)
    }
}

/// Port catalog construction errors.
#[derive(Debug, Clone, PartialEq)]
pub enum PortCatalogError {
    InvalidId(String),
    DuplicateId(String),
    EmptyName(String),
    InvalidCoordinates { id: String, reason: String },
}

impl Display for PortCatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidId(id) => write!(f, "port id `{id}` is not a UN/LOCODE"),
            Self::DuplicateId(id) => write!(f, "duplicate port id: {id}"),
            Self::EmptyName(id) => write!(f, "port `{id}` must have a name"),
            Self::InvalidCoordinates { id, reason } => {
                write!(f, "port `{id}` has invalid coordinates: {reason}")
            }
        }
    }
}

impl Error for PortCatalogError {}

/// Immutable, ordered port lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct PortCatalog {
    ports: Vec<Port>,
}

impl PortCatalog {
    /// The five ports shipped with the picker.
    pub fn builtin() -> Self {
        Self {
            ports: vec![
                Port::builtin("SGSIN", "Singapore", "Singapore", 1.290270, 103.851959),
                Port::builtin("NLRTM", "Rotterdam", "Netherlands", 51.922500, 4.477733),
                Port::builtin("CNSHA", "Shanghai", "China", 31.230416, 121.473701),
                Port::builtin("USNYC", "New York", "United States", 40.712776, -74.005974),
                Port::builtin("AEDXB", "Dubai", "UAE", 25.204849, 55.270783),
            ],
        }
    }

    /// Builds a catalog from caller-provided ports, keeping their order.
    ///
    /// # Errors
    /// - `InvalidId` when an id does not match the UN/LOCODE shape.
    /// - `DuplicateId` when two ports share an id.
    /// - `EmptyName` when a port name is blank.
    /// - `InvalidCoordinates` when a coordinate fails validation.
    pub fn from_ports(ports: Vec<Port>) -> Result<Self, PortCatalogError> {
        let mut seen = BTreeSet::new();
        for port in &ports {
            if !PORT_ID_PATTERN.is_match(&port.id) {
                return Err(PortCatalogError::InvalidId(port.id.clone()));
            }
            if !seen.insert(port.id.as_str()) {
                return Err(PortCatalogError::DuplicateId(port.id.clone()));
            }
            if port.name.trim().is_empty() {
                return Err(PortCatalogError::EmptyName(port.id.clone()));
            }
            port.coordinates
                .validate()
                .map_err(|err| PortCatalogError::InvalidCoordinates {
                    id: port.id.clone(),
                    reason: err.to_string(),
                })?;
        }
        Ok(Self { ports })
    }

    pub fn get(&self, id: &str) -> Option<&Port> {
        self.ports.iter().find(|port| port.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Port> {
        self.ports.iter()
    }

    pub fn len(&self) -> usize {
        self.ports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ports.is_empty()
    }
}

/// Which side of the port-to-port line a selection fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PortRole {
    Origin,
    Destination,
}

impl PortRole {
    /// Picker label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Origin => "Origin Port",
            Self::Destination => "Destination Port",
        }
    }
}

/// Origin/destination picker state. An empty string means "Select a port".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortSelection {
    pub origin: String,
    pub destination: String,
}

impl PortSelection {
    pub fn new(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
        }
    }

    /// Sets the selected id for `role`; an empty id clears that side.
    pub fn select(&mut self, role: PortRole, id: impl Into<String>) {
        let id = id.into();
        match role {
            PortRole::Origin => self.origin = id,
            PortRole::Destination => self.destination = id,
        }
    }

    /// Catalog ports whose id is selected, in catalog order.
    ///
    /// Picking the same port for both roles yields one entry.
    pub fn selected_ports<'c>(&self, catalog: &'c PortCatalog) -> Vec<&'c Port> {
        catalog
            .iter()
            .filter(|port| port.id == self.origin || port.id == self.destination)
            .collect()
    }

    /// Resolved pair to draw as the dashed connecting line.
    pub fn route<'c>(&self, catalog: &'c PortCatalog) -> Option<PortRoute<'c>> {
        match self.selected_ports(catalog).as_slice() {
            [first, second] => Some(PortRoute {
                first: *first,
                second: *second,
            }),
            _ => None,
        }
    }

    /// The two endpoint coordinates of the connecting line.
    pub fn connecting_line(&self, catalog: &PortCatalog) -> Option<[LatLng; 2]> {
        self.route(catalog).map(|route| route.endpoints())
    }
}

/// Straight line between two distinct catalog ports.
///
/// Endpoints are in catalog order, not selection order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PortRoute<'c> {
    pub first: &'c Port,
    pub second: &'c Port,
}

impl PortRoute<'_> {
    pub fn endpoints(&self) -> [LatLng; 2] {
        [self.first.coordinates, self.second.coordinates]
    }

    /// Great-circle length of the straight line.
    pub fn direct_distance(&self) -> Distance {
        Distance::from_nautical_miles(haversine_nautical_miles(
            self.first.coordinates,
            self.second.coordinates,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::PORT_ID_PATTERN;

    #[test]
    fn port_id_pattern_matches_locode_shape() {
        assert!(PORT_ID_PATTERN.is_match("SGSIN"));
        assert!(PORT_ID_PATTERN.is_match("USNYC"));
        assert!(!PORT_ID_PATTERN.is_match("sgsin"));
        assert!(!PORT_ID_PATTERN.is_match("SGSIN1"));
        assert!(!PORT_ID_PATTERN.is_match("SG1IN"));
    }
}
