//! Canonical honor list and read-only accessors.
//!
//! New results are added by editing `HONORS`; there is no runtime write path.
//! Source order groups records by event series and is not a display contract.

use crate::model::honor::HonorRecord;
use log::debug;
use std::cmp::Ordering;

static HONORS: [HonorRecord; 11] = [
    // TPCTF
    HonorRecord::from_static("tpctf_2025", "TPCTF 2025", "2025-03-08", "6th Place", false),
    // NKCTF
    HonorRecord::from_static("nkctf_2024", "NKCTF 2024", "2024-03-23", "Organizer", false),
    HonorRecord::from_static("nkctf_2023", "NKCTF 2023", "2023-03-24", "Organizer", true),
    // DASCTF
    HonorRecord::from_static(
        "dasctf_2024_last",
        "DASCTF 2024最后一战",
        "2024-12-21",
        "4th Place",
        false,
    ),
    HonorRecord::from_static(
        "dasctf_2024_oct",
        "DASCTF 2024金秋十月",
        "2024-10-19",
        "3rd Place",
        false,
    ),
    HonorRecord::from_static(
        "dasctf_2024_summer",
        "DASCTF 2024暑期挑战赛",
        "2024-07-20",
        "3rd Place",
        false,
    ),
    HonorRecord::from_static(
        "dasctf_hdctf_2024",
        "DASCTF X HDCTF 2024",
        "2024-06-02",
        "4th Place",
        false,
    ),
    HonorRecord::from_static(
        "dasctf_gfctf_2024",
        "DASCTF X GFCTF 2024",
        "2024-04-20",
        "3rd Place",
        false,
    ),
    // 强网杯
    HonorRecord::from_static(
        "qiangwangbei_s8_qual",
        "强网杯 S8 Qual",
        "2024-11-02",
        "8th Place",
        true,
    ),
    HonorRecord::from_static(
        "qiangwangbei_s8_final",
        "强网杯 S8 Final",
        "2024-12-05",
        "9th Place",
        true,
    ),
    // D^3CTF
    HonorRecord::from_static("d3ctf_2024", "D^3CTF 2024", "2024-04-07", "4th Place", false),
];

/// Direction for date-ordered views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateOrder {
    NewestFirst,
    OldestFirst,
}

/// Returns every honor record in source order.
///
/// Repeated calls return the same slice.
pub fn all_honors() -> &'static [HonorRecord] {
    &HONORS
}

/// Looks up one record by exact id.
///
/// No trimming or case folding is applied; callers pass ids verbatim.
pub fn find_honor(id: &str) -> Option<&'static HonorRecord> {
    HONORS.iter().find(|record| record.id == id)
}

/// Returns milestone records in source order.
pub fn milestones() -> impl Iterator<Item = &'static HonorRecord> {
    HONORS.iter().filter(|record| record.is_milestone)
}

/// Returns the canonical records ordered by calendar date.
pub fn sorted_by_date(order: DateOrder) -> Vec<&'static HonorRecord> {
    sort_by_date(&HONORS, order)
}

/// Returns `records` ordered by calendar date.
///
/// The sort is stable, so records sharing a date keep their input order in
/// both directions. Records whose date does not parse go after every valid
/// date, in input order.
pub fn sort_by_date(records: &[HonorRecord], order: DateOrder) -> Vec<&HonorRecord> {
    let mut keyed = records
        .iter()
        .map(|record| {
            let date = match record.calendar_date() {
                Ok(date) => Some(date),
                Err(err) => {
                    debug!("event=honor_date_unparsed module=store status=skip reason={err}");
                    None
                }
            };
            (date, record)
        })
        .collect::<Vec<_>>();

    keyed.sort_by(|(left, _), (right, _)| match (left, right) {
        (Some(l), Some(r)) => match order {
            DateOrder::NewestFirst => r.cmp(l),
            DateOrder::OldestFirst => l.cmp(r),
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });

    keyed.into_iter().map(|(_, record)| record).collect()
}
