//! Ranking utilities.

use std::collections::BTreeMap;

use dynalpha_primitives::{InstrumentScore, SectorRanking};

/// Number of instruments kept per sector by default.
pub const DEFAULT_TOP_N: usize = 2;

/// Select the `top_n` highest-scoring instruments in each sector.
///
/// Sectors are returned in lexicographic order. Within a sector, scores are
/// sorted descending with a stable sort, so ties keep their input order.
/// A sector with fewer than `top_n` members yields a shorter ranking, and
/// `top_n == 0` yields no rankings at all.
#[must_use]
pub fn rank_sectors(scores: &[InstrumentScore], top_n: usize) -> Vec<SectorRanking> {
    if top_n == 0 {
        return Vec::new();
    }

    let mut by_sector: BTreeMap<&str, Vec<InstrumentScore>> = BTreeMap::new();
    for score in scores {
        by_sector.entry(score.sector.as_str()).or_default().push(score.clone());
    }

    by_sector
        .into_iter()
        .filter_map(|(sector, mut members)| {
            members.sort_by(|a, b| b.mean_dam_score.total_cmp(&a.mean_dam_score));
            members.truncate(top_n);
            SectorRanking::new(sector, members)
        })
        .collect()
}
