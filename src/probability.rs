use std::fmt::Display;

use rayon::iter::{IntoParallelIterator, ParallelIterator};

use crate::parcheesi::{FaceSource, RandomFaces, Throwing};

/// How often each sum of two dice came up.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SumTable {
    counts: [u64; 13],
    total: u64,
}

impl SumTable {
    /// Below this many rolls the simulation stays on the calling thread.
    pub const PARALLEL_THRESHOLD: u64 = 10_000;

    /// Every one of the 36 outcomes counted once.
    pub fn analytic() -> Self {
        let mut table = SumTable::default();
        for a in 1..=6 {
            for b in 1..=6 {
                table.record(a + b);
            }
        }
        table
    }

    pub fn simulate(rolls: u64, faces: &mut impl FaceSource) -> Self {
        let mut table = SumTable::default();
        for _ in 0..rolls {
            table.record(Throwing::pair(faces).sum());
        }
        table
    }

    /// Spreads the rolls over the rayon pool, one thread-local rng per worker.
    pub fn simulate_parallel(rolls: u64) -> Self {
        (0..rolls)
            .into_par_iter()
            .map_init(RandomFaces::new, |faces, _| Throwing::pair(faces).sum())
            .fold(SumTable::default, |mut table, sum| {
                table.record(sum);
                table
            })
            .reduce(SumTable::default, SumTable::merge)
    }

    /// Unseeded simulation, parallel once the roll count is large enough.
    pub fn simulate_random(rolls: u64) -> Self {
        if rolls >= Self::PARALLEL_THRESHOLD {
            Self::simulate_parallel(rolls)
        } else {
            Self::simulate(rolls, &mut RandomFaces::new())
        }
    }

    pub fn record(&mut self, sum: u32) {
        match self.counts.get_mut(sum as usize) {
            Some(count) => {
                *count += 1;
                self.total += 1;
            }
            None => tracing::warn!(sum, "sum out of range for two dice"),
        }
    }

    pub fn merge(mut self, other: SumTable) -> SumTable {
        for (count, extra) in self.counts.iter_mut().zip(other.counts) {
            *count += extra;
        }
        self.total += other.total;
        self
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn times(&self, sum: u32) -> u64 {
        self.counts.get(sum as usize).copied().unwrap_or(0)
    }

    /// Share of `sum` in percent, `None` for an empty table.
    pub fn percentage(&self, sum: u32) -> Option<f64> {
        (self.total > 0).then(|| self.times(sum) as f64 / self.total as f64 * 100.0)
    }

    /// Sums that came up at least once, ascending, with their count and percentage.
    pub fn rows(&self) -> impl Iterator<Item = (u32, u64, f64)> + '_ {
        (0..self.counts.len() as u32).filter_map(|sum| {
            let times = self.times(sum);
            let percentage = self.percentage(sum)?;
            (times > 0).then_some((sum, times, percentage))
        })
    }
}

impl Display for SumTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Number \t Times \t %")?;
        for (sum, times, percentage) in self.rows() {
            writeln!(f, "{} \t {}\t {:.2}", sum, times, percentage)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::parcheesi::ScriptedFaces;

    #[test]
    fn test_analytic() {
        let table = SumTable::analytic();
        assert_eq!(table.total(), 36);
        assert_eq!(table.times(7), 6);
        assert_eq!(table.times(2), 1);
        assert_eq!(table.times(12), 1);
        assert_eq!(table.rows().count(), 11);

        let text = table.to_string();
        assert!(text.starts_with("Number \t Times \t %\n2 \t 1\t 2.78\n"));
        assert!(text.contains("\n7 \t 6\t 16.67\n"));
        assert!(text.ends_with("\n12 \t 1\t 2.78\n"));
    }

    #[test]
    fn test_zero_rolls() {
        let table = SumTable::simulate(0, &mut ScriptedFaces::new(&[1]));
        assert_eq!(table.total(), 0);
        assert_eq!(table.percentage(7), None);
        assert_eq!(table.to_string(), "Number \t Times \t %\n");
        assert_eq!(SumTable::simulate_random(0), table);
        assert_eq!(SumTable::simulate_parallel(0), table);
    }

    #[test]
    fn test_simulate_scripted() {
        let table = SumTable::simulate(4, &mut ScriptedFaces::new(&[3, 4, 6, 6]));
        assert_eq!(table.total(), 4);
        assert_eq!(table.times(7), 2);
        assert_eq!(table.times(12), 2);
        assert_eq!(table.to_string(), "Number \t Times \t %\n7 \t 2\t 50.00\n12 \t 2\t 50.00\n");
    }

    #[test]
    fn test_seeded_simulation_repeats() {
        let a = SumTable::simulate(500, &mut RandomFaces::from_rng(StdRng::seed_from_u64(3)));
        let b = SumTable::simulate(500, &mut RandomFaces::from_rng(StdRng::seed_from_u64(3)));
        assert_eq!(a, b);
    }

    #[test]
    fn test_parallel_counts_every_roll() {
        let table = SumTable::simulate_parallel(20_000);
        assert_eq!(table.total(), 20_000);
        assert_eq!(table.times(0) + table.times(1), 0);
        assert_eq!((2..=12).map(|sum| table.times(sum)).sum::<u64>(), 20_000);
        // 7 is expected 1/6 of the time; allow a wide margin
        let seven = table.percentage(7).unwrap();
        assert!(seven > 14.0 && seven < 19.5, "sum 7 came up {seven:.2}%");
    }

    #[test]
    fn test_merge() {
        let merged = SumTable::analytic().merge(SumTable::analytic());
        assert_eq!(merged.total(), 72);
        assert_eq!(merged.times(7), 12);
        assert_eq!(merged.percentage(7), SumTable::analytic().percentage(7));
    }
}
