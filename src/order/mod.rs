//! Publish-date ordering for content collections
//!
//! Posts are listed newest first. Records are moved through the sort
//! untouched; only their position changes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use thiserror::Error;

use crate::helpers::{parse_publish_date, PublishDateError};

/// Anything carrying a `DD/MM/YYYY` publish date
pub trait PublishDated {
    fn publish_date(&self) -> &str;
}

impl<T: PublishDated + ?Sized> PublishDated for &T {
    fn publish_date(&self) -> &str {
        (**self).publish_date()
    }
}

/// Ordering errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrderError {
    #[error("record #{index} has malformed publishDate '{value}': {reason}")]
    MalformedDate {
        /// Position of the record in the input sequence
        index: usize,
        value: String,
        #[source]
        reason: PublishDateError,
    },
}

/// What to do with a record whose publish date cannot be parsed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedDatePolicy {
    /// Fail on the first malformed date
    #[default]
    Strict,
    /// Keep going; malformed records go last in their input order
    Lenient,
}

/// Order records by publish date, newest first.
///
/// Records sharing a date keep their input order. Fails on the first record
/// whose date is malformed, leaving nothing reordered.
pub fn order<T: PublishDated>(records: Vec<T>) -> Result<Vec<T>, OrderError> {
    let mut keyed = records
        .into_iter()
        .enumerate()
        .map(|(index, record)| match parse_publish_date(record.publish_date()) {
            Ok(date) => Ok((date, record)),
            Err(reason) => Err(OrderError::MalformedDate {
                index,
                value: record.publish_date().to_string(),
                reason,
            }),
        })
        .collect::<Result<Vec<_>, _>>()?;

    // sort_by_key is stable
    keyed.sort_by_key(|(date, _)| Reverse(*date));

    Ok(keyed.into_iter().map(|(_, record)| record).collect())
}

/// Order records by publish date, newest first, without failing.
///
/// Well-formed records are ordered exactly as [`order`] does. Records with a
/// malformed date follow all of them, in input order.
pub fn order_lenient<T: PublishDated>(records: Vec<T>) -> Vec<T> {
    let mut keyed: Vec<(Option<NaiveDate>, T)> = records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            let date = match parse_publish_date(record.publish_date()) {
                Ok(date) => Some(date),
                Err(e) => {
                    tracing::warn!(
                        "Record #{} has malformed publishDate {:?}, placing it last: {}",
                        index,
                        record.publish_date(),
                        e
                    );
                    None
                }
            };
            (date, record)
        })
        .collect();

    // None < Some(_), so Reverse puts malformed dates after every real one
    keyed.sort_by_key(|(date, _)| Reverse(*date));

    keyed.into_iter().map(|(_, record)| record).collect()
}

/// Order records using the given malformed-date policy
pub fn order_with<T: PublishDated>(
    records: Vec<T>,
    policy: MalformedDatePolicy,
) -> Result<Vec<T>, OrderError> {
    match policy {
        MalformedDatePolicy::Strict => order(records),
        MalformedDatePolicy::Lenient => Ok(order_lenient(records)),
    }
}
