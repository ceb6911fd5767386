//! ASCII rendering of a region's round results.

use crate::region::RoundResults;

/// Indent width for round `x`: `(2^x - 1) * 2` spaces.
///
/// The same formula shifted by one round gives the gap between seeds, so
/// each round's entries sit centered between the pair that fed them.
fn spacing(x: u32) -> usize {
    (2_usize.pow(x) - 1) * 2
}

/// Render every recorded round as one line each, round 0 first.
///
/// Each seed prints as a 2-character right-aligned number followed by the
/// round's gap, and entries are inserted at the front of the line, so a
/// round's sequence reads right to left. That mirrors how the columns
/// transcribe onto a paper bracket sheet.
pub fn render(results: &RoundResults) -> String {
    let mut out = String::new();
    let mut round = 0;
    while let Some(seeds) = results.round(round) {
        let gap = " ".repeat(spacing(round + 1));
        let mut line = String::new();
        for &seed in seeds {
            line.insert_str(0, &format!("{seed:>2}{gap}"));
        }
        out.push_str(&" ".repeat(spacing(round)));
        out.push_str(&line);
        out.push('\n');
        round += 1;
    }
    out
}
