//! Time-zone queries and shifts, delegated to the chrono-tz IANA
//! registry.

use crate::Instant;
use chrono::TimeZone;
use chrono_tz::{OffsetComponents, Tz};

/// A named time zone backed by the IANA database. Exposes the three
/// queries the shift operations need: the standard UTC offset, the
/// daylight-saving delta, and whether an instant sits inside the
/// daylight-saving window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Zone {
    tz: Tz,
}

/// Error type for zone lookup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ZoneError {
    /// The id is not present in the IANA database.
    #[error("Unknown time zone id: {0}")]
    UnknownId(String),
}

impl Zone {
    /// Coordinated Universal Time.
    pub const UTC: Self = Self { tz: Tz::UTC };

    /// Looks up a zone by IANA id (e.g. `"Asia/Taipei"`).
    ///
    /// # Errors
    /// Returns `ZoneError::UnknownId` if the id is not in the database.
    pub fn try_named(id: &str) -> Result<Self, ZoneError> {
        id.parse::<Tz>()
            .map(|tz| Self { tz })
            .map_err(|_| ZoneError::UnknownId(id.to_owned()))
    }

    /// Looks up a zone by IANA id, falling back to UTC when the id is
    /// unknown.
    pub fn named(id: &str) -> Self {
        Self::try_named(id).unwrap_or_else(|_| {
            log::warn!("unknown time zone id {id:?}, falling back to UTC");
            Self::UTC
        })
    }

    /// The IANA id of this zone.
    pub fn id(self) -> &'static str {
        self.tz.name()
    }

    pub(crate) const fn tz(self) -> Tz {
        self.tz
    }

    /// Standard (non-daylight) UTC offset in milliseconds at `at`.
    pub fn raw_offset(self, at: Instant) -> i64 {
        self.tz
            .offset_from_utc_datetime(&at.naive_utc())
            .base_utc_offset()
            .num_milliseconds()
    }

    /// Daylight-saving delta in milliseconds at `at`; zero outside the
    /// daylight-saving window.
    pub fn dst_savings(self, at: Instant) -> i64 {
        self.tz
            .offset_from_utc_datetime(&at.naive_utc())
            .dst_offset()
            .num_milliseconds()
    }

    /// Whether `at` falls within this zone's daylight-saving window.
    pub fn in_daylight_time(self, at: Instant) -> bool {
        self.dst_savings(at) != 0
    }
}

impl Instant {
    /// Shifts this instant by `zone`'s standard UTC offset; when the
    /// shifted instant falls in daylight-saving time the savings are
    /// added on top. The daylight test runs against the shifted
    /// instant, so results within an hour of a transition can land an
    /// hour off.
    pub fn to_zone(self, zone: Zone) -> Instant {
        let shifted = self.plus_millis(zone.raw_offset(self));
        if zone.in_daylight_time(shifted) {
            shifted.plus_millis(zone.dst_savings(shifted))
        } else {
            shifted
        }
    }

    /// Composes two single-zone shifts: out of `from`, then out of
    /// `to`.
    pub fn to_zone_via(self, from: Zone, to: Zone) -> Instant {
        self.to_zone(from).to_zone(to)
    }

    /// Inverse of [`Instant::to_zone`]: shifts a zone-local reading
    /// back to UTC. Round-trips exactly for zones without
    /// daylight-saving time; zones with it can be an hour off near a
    /// transition.
    pub fn to_gmt(self, zone: Zone) -> Instant {
        let shifted = self.plus_millis(-zone.raw_offset(self));
        if zone.in_daylight_time(shifted) {
            shifted.plus_millis(-zone.dst_savings(shifted))
        } else {
            shifted
        }
    }

    /// [`Instant::to_gmt`] with the zone looked up by id; unknown ids
    /// fall back to UTC.
    pub fn to_gmt_named(self, id: &str) -> Instant {
        self.to_gmt(Zone::named(id))
    }

    /// Alias of [`Instant::to_zone`].
    pub fn to_local(self, zone: Zone) -> Instant {
        self.to_zone(zone)
    }
}
