//! Where a user is: IRC-bridged or not, timezone, country, location.

/// Location and bridge metadata for a user.
#[derive(Debug, Clone, PartialEq)]
pub struct UserPresence {
    /// True if this user connected through the IRC bridge rather than the
    /// game client.
    pub is_irc: bool,
    /// UTC offset in hours, biased by 24 on the wire (see codec).
    pub timezone: i8,
    /// Index into the client's country flag table.
    pub country_index: u8,
    /// Permission bitfield, packed with `mode` on builds from b20130815.
    pub permissions: super::misc::Permissions,
    /// Geolocated longitude.
    pub longitude: f32,
    /// Geolocated latitude.
    pub latitude: f32,
    /// City name as reported by geolocation.
    pub city: String,
}
