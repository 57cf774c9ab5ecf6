/// One data row of the summary table: a 1-based row number, the indicator
/// label, and the answer extracted for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub number: usize,
    pub indicator: String,
    pub answer: String,
}

/// The full set of indicator/answer pairs, in table order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryTable {
    rows: Vec<SummaryRow>,
}

impl SummaryTable {
    /// Pair indicators with answers by shared index, numbering rows from 1.
    ///
    /// If the sequences differ in length, pairing stops at the shorter one
    /// and the unmatched trailing entries produce no rows.
    pub fn from_pairs(indicators: &[&str], answers: &[&str]) -> Self {
        let rows = indicators
            .iter()
            .zip(answers.iter())
            .enumerate()
            .map(|(i, (indicator, answer))| SummaryRow {
                number: i + 1,
                indicator: indicator.to_string(),
                answer: answer.to_string(),
            })
            .collect();

        Self { rows }
    }

    pub fn rows(&self) -> &[SummaryRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
