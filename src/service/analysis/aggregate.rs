//! Folding per-window verdicts into the final report

use crate::model::{
    AggregateReport, Category, CategoryFinding, CategoryStatus, Verdict, VerdictVector,
};

/// Fold window verdict vectors into per-category confirmation counts.
///
/// Each YES increments the category's counter; MAYBE and NO do not. A
/// category is CONFIRMED when at least one window confirmed it. The fold is
/// commutative and associative over windows, so a parallel split would only
/// need to synchronize here.
pub fn aggregate_verdicts(
    vectors: &[VerdictVector],
    expected_order: &[Category],
) -> AggregateReport {
    let mut confirmations = vec![0usize; expected_order.len()];

    for vector in vectors {
        debug_assert_eq!(vector.len(), expected_order.len());
        for (count, verdict) in confirmations.iter_mut().zip(vector) {
            if *verdict == Verdict::Yes {
                *count += 1;
            }
        }
    }

    let findings = expected_order
        .iter()
        .zip(confirmations)
        .map(|(&category, confirmations)| CategoryFinding {
            category,
            confirmations,
            status: if confirmations > 0 {
                CategoryStatus::Confirmed
            } else {
                CategoryStatus::NotFound
            },
        })
        .collect();

    AggregateReport {
        total_chunks: vectors.len(),
        findings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Verdict::{Maybe, No, Yes};

    fn vector_with(category: Category, verdict: Verdict) -> VerdictVector {
        Category::ALL
            .iter()
            .map(|&c| if c == category { verdict } else { No })
            .collect()
    }

    #[test]
    fn zero_windows_reports_everything_not_found() {
        let report = aggregate_verdicts(&[], &Category::ALL);

        assert_eq!(report.total_chunks, 0);
        assert_eq!(report.findings.len(), Category::ALL.len());
        for finding in &report.findings {
            assert_eq!(finding.confirmations, 0);
            assert_eq!(finding.status, CategoryStatus::NotFound);
        }
    }

    #[test]
    fn yes_increments_and_confirms() {
        let vectors = vec![
            vector_with(Category::Violence, Yes),
            vector_with(Category::Violence, No),
        ];
        let report = aggregate_verdicts(&vectors, &Category::ALL);

        assert_eq!(report.total_chunks, 2);
        let violence = &report.findings[0];
        assert_eq!(violence.category, Category::Violence);
        assert_eq!(violence.confirmations, 1);
        assert_eq!(violence.status, CategoryStatus::Confirmed);
    }

    #[test]
    fn maybe_does_not_confirm() {
        let vectors = vec![vector_with(Category::Gore, Maybe)];
        let report = aggregate_verdicts(&vectors, &Category::ALL);

        for finding in &report.findings {
            assert_eq!(finding.confirmations, 0);
            assert_eq!(finding.status, CategoryStatus::NotFound);
        }
    }

    #[test]
    fn confirmations_never_exceed_window_count() {
        let vectors: Vec<VerdictVector> = (0..5)
            .map(|_| Category::ALL.iter().map(|_| Yes).collect())
            .collect();
        let report = aggregate_verdicts(&vectors, &Category::ALL);

        for finding in &report.findings {
            assert!(finding.confirmations <= report.total_chunks);
            assert_eq!(finding.confirmations, 5);
            assert_eq!(finding.status, CategoryStatus::Confirmed);
        }
    }

    #[test]
    fn findings_preserve_report_order() {
        let report = aggregate_verdicts(&[], &Category::ALL);
        let order: Vec<Category> = report.findings.iter().map(|f| f.category).collect();
        assert_eq!(order, Category::ALL);
    }
}
