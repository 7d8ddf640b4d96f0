/// Directional aggregation into 8 compass sectors.
///
/// Each reading is assigned to a 45° sector centred on its compass point
/// (N covers 337.5°–22.5°). Counts are turned into occurrence percentages
/// and ranked for the summary message.

use crate::model::{RankedDirection, Sector, SectorPercent, WindError};

pub const SECTOR_COUNT: usize = 8;

/// Width of one sector in degrees.
pub const SECTOR_WIDTH_DEG: f64 = 360.0 / SECTOR_COUNT as f64;

/// Compass order, clockwise from north. This is the canonical table.
pub const CLOCKWISE_SECTORS: [Sector; SECTOR_COUNT] = [
    Sector::N,
    Sector::NE,
    Sector::E,
    Sector::SE,
    Sector::S,
    Sector::SW,
    Sector::W,
    Sector::NW,
];

/// Counter-clockwise order from north. One earlier version of the windrose
/// summary used this table while indexing sectors clockwise, which labels
/// an easterly wind as W. Kept only so the mismatch stays testable.
pub const COUNTER_CLOCKWISE_SECTORS: [Sector; SECTOR_COUNT] = [
    Sector::N,
    Sector::NW,
    Sector::W,
    Sector::SW,
    Sector::S,
    Sector::SE,
    Sector::E,
    Sector::NE,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SectorOrder {
    #[default]
    Clockwise,
    CounterClockwise,
}

/// Immutable sector-name table injected into the aggregator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectorTable {
    order: SectorOrder,
    sectors: [Sector; SECTOR_COUNT],
}

impl Default for SectorTable {
    fn default() -> Self {
        Self::from_order(SectorOrder::Clockwise)
    }
}

impl SectorTable {
    pub fn from_order(order: SectorOrder) -> Self {
        let sectors = match order {
            SectorOrder::Clockwise => CLOCKWISE_SECTORS,
            SectorOrder::CounterClockwise => COUNTER_CLOCKWISE_SECTORS,
        };
        Self { order, sectors }
    }

    pub fn order(&self) -> SectorOrder {
        self.order
    }

    pub fn sectors(&self) -> &[Sector; SECTOR_COUNT] {
        &self.sectors
    }

    /// Sector for a direction in degrees. Values outside [0, 360) wrap.
    pub fn sector_of(&self, direction_deg: f64) -> Sector {
        let shifted = (direction_deg + SECTOR_WIDTH_DEG / 2.0).rem_euclid(360.0);
        // rem_euclid can round up to exactly 360.0 for tiny negative inputs
        let index = (shifted / SECTOR_WIDTH_DEG).floor() as usize % SECTOR_COUNT;
        self.sectors[index]
    }
}

/// Occurrence count per sector, in table order.
pub fn sector_counts(directions: &[f64], table: &SectorTable) -> [(Sector, usize); SECTOR_COUNT] {
    let mut counts = table.sectors.map(|s| (s, 0usize));

    for direction in directions {
        let sector = table.sector_of(*direction);
        if let Some(entry) = counts.iter_mut().find(|(s, _)| *s == sector) {
            entry.1 += 1;
        }
    }

    counts
}

/// Percentage of readings per sector, in table order.
///
/// # Errors
/// `WindError::NoUsableData` when `directions` is empty.
pub fn sector_percentages(directions: &[f64], table: &SectorTable) -> Result<Vec<SectorPercent>, WindError> {
    let counts = sector_counts(directions, table);
    let total: usize = counts.iter().map(|(_, c)| c).sum();

    if total == 0 {
        return Err(WindError::NoUsableData(
            "no wind direction readings to aggregate".to_string(),
        ));
    }

    Ok(counts
        .iter()
        .map(|(sector, count)| SectorPercent {
            sector: *sector,
            percent: *count as f64 / total as f64 * 100.0,
        })
        .collect())
}

/// Sorts sectors by descending percentage. Equal percentages keep their
/// table order.
pub fn rank_directions(percentages: &[SectorPercent]) -> Vec<RankedDirection> {
    let mut ranked = percentages.to_vec();
    // sort_by is stable
    ranked.sort_by(|a, b| b.percent.total_cmp(&a.percent));
    ranked
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn percent_of(percentages: &[SectorPercent], sector: Sector) -> f64 {
        percentages.iter().find(|p| p.sector == sector).unwrap().percent
    }

    #[test]
    fn test_one_reading_per_sector_boundary_side() {
        let table = SectorTable::default();
        assert_eq!(table.sector_of(0.0), Sector::N);
        assert_eq!(table.sector_of(22.4), Sector::N);
        assert_eq!(table.sector_of(22.5), Sector::NE);
        assert_eq!(table.sector_of(337.5), Sector::N);
        assert_eq!(table.sector_of(337.4), Sector::NW);
        assert_eq!(table.sector_of(180.0), Sector::S);
        assert_eq!(table.sector_of(359.9), Sector::N);
    }

    #[test]
    fn test_out_of_range_directions_wrap() {
        let table = SectorTable::default();
        assert_eq!(table.sector_of(370.0), Sector::N);
        assert_eq!(table.sector_of(-90.0), Sector::W);
        assert_eq!(table.sector_of(-1e-12), Sector::N);
    }

    #[test]
    fn test_four_quadrant_scenario() {
        let table = SectorTable::default();
        let percentages = sector_percentages(&[5.0, 50.0, 95.0, 140.0], &table).unwrap();

        let expected = [
            (Sector::N, 25.0),
            (Sector::NE, 25.0),
            (Sector::E, 25.0),
            (Sector::SE, 25.0),
            (Sector::S, 0.0),
            (Sector::SW, 0.0),
            (Sector::W, 0.0),
            (Sector::NW, 0.0),
        ];
        for (sector, percent) in expected {
            assert_eq!(percent_of(&percentages, sector), percent, "{sector}");
        }
    }

    #[test]
    fn test_percentages_keep_table_order() {
        let table = SectorTable::default();
        let percentages = sector_percentages(&[200.0], &table).unwrap();
        let order: Vec<Sector> = percentages.iter().map(|p| p.sector).collect();
        assert_eq!(order, CLOCKWISE_SECTORS.to_vec());
    }

    #[test]
    fn test_percentages_sum_to_one_hundred() {
        let table = SectorTable::default();
        let directions: Vec<f64> = (0..997).map(|i| (i as f64 * 37.3) % 360.0).collect();
        let percentages = sector_percentages(&directions, &table).unwrap();

        let sum: f64 = percentages.iter().map(|p| p.percent).sum();
        assert!((sum - 100.0).abs() < 1e-6, "sum was {sum}");
    }

    #[test]
    fn test_empty_directions_are_an_error() {
        let err = sector_percentages(&[], &SectorTable::default()).unwrap_err();
        assert!(matches!(err, WindError::NoUsableData(_)));
    }

    #[test]
    fn test_ranking_is_descending() {
        let table = SectorTable::default();
        let directions = [0.0, 0.0, 0.0, 90.0, 90.0, 180.0, 270.0, 270.0, 270.0, 270.0];
        let ranked = rank_directions(&sector_percentages(&directions, &table).unwrap());

        assert!(ranked.windows(2).all(|w| w[0].percent >= w[1].percent));
        assert_eq!(ranked[0].sector, Sector::W);
        assert_eq!(ranked[1].sector, Sector::N);
    }

    #[test]
    fn test_ranking_ties_keep_table_order() {
        let table = SectorTable::default();
        let ranked = rank_directions(&sector_percentages(&[5.0, 50.0, 95.0, 140.0], &table).unwrap());

        let order: Vec<Sector> = ranked.iter().map(|r| r.sector).collect();
        assert_eq!(
            order,
            vec![Sector::N, Sector::NE, Sector::E, Sector::SE, Sector::S, Sector::SW, Sector::W, Sector::NW]
        );
    }

    #[test]
    fn test_counter_clockwise_table_mislabels_east() {
        // Same clockwise index, different table: 90° lands on W.
        let table = SectorTable::from_order(SectorOrder::CounterClockwise);
        assert_eq!(table.sector_of(90.0), Sector::W);
        assert_eq!(SectorTable::default().sector_of(90.0), Sector::E);
    }
}
