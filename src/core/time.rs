use time::{format_description::well_known::Rfc3339, OffsetDateTime, PrimitiveDateTime, UtcOffset};

pub(crate) fn primitive_now_utc() -> PrimitiveDateTime {
    to_primitive_utc(OffsetDateTime::now_utc())
}

pub(crate) fn to_primitive_utc(value: OffsetDateTime) -> PrimitiveDateTime {
    let utc = value.to_offset(UtcOffset::UTC);
    PrimitiveDateTime::new(utc.date(), utc.time())
}

pub(crate) fn format_primitive(value: PrimitiveDateTime) -> String {
    value.assume_utc().format(&Rfc3339).unwrap_or_else(|_| value.assume_utc().to_string())
}

/// Parses an RFC3339 timestamp and normalises it to naive UTC, the form every
/// timestamp column is stored in.
pub(crate) fn parse_rfc3339_utc(value: &str) -> Result<PrimitiveDateTime, time::error::Parse> {
    OffsetDateTime::parse(value.trim(), &Rfc3339).map(to_primitive_utc)
}
