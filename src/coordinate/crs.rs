//! Coordinate reference systems used for ROIs

use std::fmt;

/// EPSG code of geographic WGS 84
pub const WGS84_EPSG: u32 = 4326;
/// Base of the northern WGS 84 / UTM EPSG family (326zz)
pub const UTM_NORTH_BASE: u32 = 32600;
/// Base of the southern WGS 84 / UTM EPSG family (327zz)
pub const UTM_SOUTH_BASE: u32 = 32700;

/// Coordinate system of an ROI or of the projection picked for it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateSystem {
    /// Geographic longitude/latitude; ROI files are read in this system
    WGS84,
    /// WGS 84 / UTM zone (1..=60) and hemisphere, `true` for north
    UTM(u8, bool),
}

impl CoordinateSystem {
    /// EPSG code; UTM zones are always zero-padded (32601, not 3261)
    pub fn epsg_code(&self) -> u32 {
        match *self {
            CoordinateSystem::WGS84 => WGS84_EPSG,
            CoordinateSystem::UTM(zone, true) => UTM_NORTH_BASE + u32::from(zone),
            CoordinateSystem::UTM(zone, false) => UTM_SOUTH_BASE + u32::from(zone),
        }
    }

    /// Human readable name, e.g. `UTM Zone 05S (EPSG:32705)`
    pub fn description(&self) -> String {
        match *self {
            CoordinateSystem::WGS84 => format!("WGS 84 (EPSG:{})", WGS84_EPSG),
            CoordinateSystem::UTM(zone, north) => format!(
                "UTM Zone {:02}{} (EPSG:{})",
                zone,
                if north { 'N' } else { 'S' },
                self.epsg_code()
            ),
        }
    }
}

impl fmt::Display for CoordinateSystem {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}
