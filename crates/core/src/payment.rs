//! Payment records.
//!
//! Amounts are integer minor units. IDs and timestamps keep the backend's
//! exact text, and optional fields remember whether they were absent or
//! `null`, so that decoding and re-encoding a payment never rewrites it.

use std::fmt;
use std::str::FromStr;

use cashflow_shared::types::Cents;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::rust::double_option;
use thiserror::Error;
use uuid::Uuid;

/// Whether money was received or sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Money received.
    Inbound,
    /// Money sent.
    Outbound,
}

impl Direction {
    /// Returns the wire name of this direction.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Inbound => "inbound",
            Self::Outbound => "outbound",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown direction or status.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind}: {value}")]
pub struct ParseEnumError {
    kind: &'static str,
    value: String,
}

impl FromStr for Direction {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "inbound" => Ok(Self::Inbound),
            "outbound" => Ok(Self::Outbound),
            _ => Err(ParseEnumError {
                kind: "direction",
                value: s.to_string(),
            }),
        }
    }
}

/// Payment statuses the backend knows about.
///
/// Used for filtering. `Payment::status` stays a plain string so that a
/// status added on the backend still decodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    /// Settled.
    Completed,
    /// Awaiting settlement.
    Pending,
    /// Rejected or errored.
    Failed,
    /// Returned to the payer.
    Refunded,
}

impl PaymentStatus {
    /// Returns the wire name of this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Pending => "pending",
            Self::Failed => "failed",
            Self::Refunded => "refunded",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "completed" => Ok(Self::Completed),
            "pending" => Ok(Self::Pending),
            "failed" => Ok(Self::Failed),
            "refunded" => Ok(Self::Refunded),
            _ => Err(ParseEnumError {
                kind: "payment status",
                value: s.to_string(),
            }),
        }
    }
}

/// A timestamp exactly as the backend sent it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(String);

impl Timestamp {
    /// Wraps raw timestamp text.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the raw text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parses the text as RFC 3339, or as a naive ISO-8601 date-time taken to
    /// be UTC.
    pub fn parse(&self) -> Result<DateTime<Utc>, chrono::ParseError> {
        match DateTime::parse_from_rfc3339(&self.0) {
            Ok(dt) => Ok(dt.with_timezone(&Utc)),
            Err(_) => NaiveDateTime::parse_from_str(&self.0, "%Y-%m-%dT%H:%M:%S%.f")
                .map(|naive| naive.and_utc()),
        }
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A payment ID exactly as the backend sent it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentId(String);

impl PaymentId {
    /// Wraps raw ID text.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the raw text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parses the text as a UUID.
    pub fn uuid(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.0)
    }
}

impl From<Uuid> for PaymentId {
    fn from(id: Uuid) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for PaymentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single payment.
///
/// Optional fields are `None` when the key was absent and `Some(None)` when
/// it was `null`. Use the accessors for the plain value.
#[allow(clippy::option_option)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    /// Payment ID.
    pub id: PaymentId,
    /// Amount in minor units.
    pub amount_cents: Cents,
    /// Currency code (e.g. "USD").
    pub currency: String,
    /// Inbound or outbound.
    pub direction: Direction,
    /// Other party, if known.
    #[serde(default, skip_serializing_if = "Option::is_none", with = "double_option")]
    pub counterparty: Option<Option<String>>,
    /// Free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none", with = "double_option")]
    pub description: Option<Option<String>>,
    /// Status string, e.g. "completed".
    pub status: String,
    /// Creation time.
    pub created_at: Timestamp,
    /// Last update time.
    #[serde(default, skip_serializing_if = "Option::is_none", with = "double_option")]
    pub updated_at: Option<Option<Timestamp>>,
    /// ID in the upstream payments provider.
    #[serde(default, skip_serializing_if = "Option::is_none", with = "double_option")]
    pub external_id: Option<Option<String>>,
}

impl Payment {
    /// Returns the amount with outflows negative.
    #[must_use]
    pub fn signed_amount_cents(&self) -> Cents {
        match self.direction {
            Direction::Inbound => self.amount_cents,
            Direction::Outbound => -self.amount_cents,
        }
    }

    /// Other party, if known.
    #[must_use]
    pub fn counterparty(&self) -> Option<&str> {
        self.counterparty.as_ref().and_then(Option::as_deref)
    }

    /// Free-text description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_ref().and_then(Option::as_deref)
    }

    /// Last update time, if any.
    #[must_use]
    pub fn updated_at(&self) -> Option<&Timestamp> {
        self.updated_at.as_ref().and_then(Option::as_ref)
    }

    /// Upstream provider ID, if any.
    #[must_use]
    pub fn external_id(&self) -> Option<&str> {
        self.external_id.as_ref().and_then(Option::as_deref)
    }
}

/// Summary returned after the backend regenerates its test payments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegenerateResponse {
    /// Human-readable outcome.
    pub message: String,
    /// Number of payments generated.
    pub count: u32,
    /// Sum of inbound amounts.
    pub total_inflow_cents: Cents,
    /// Sum of outbound amounts.
    pub total_outflow_cents: Cents,
    /// Inflow minus outflow.
    pub net_cents: Cents,
}
