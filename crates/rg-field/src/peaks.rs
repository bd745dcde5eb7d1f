//! Population-peak detection.
//!
//! The raster is divided into `n × n` square areas with `n = ⌊log₂ res⌋`.
//! An area is dense when its mean exceeds the raster's global mean.  Dense
//! areas that touch (8-connectivity) form one region, and each region's peak
//! is the center of the area in the middle of its bounding box.
//!
//! ```text
//! res = 512  →  n = 9 areas per side, 56 cells each (last 8 cells unused)
//! ```

/// Detect population peaks in a row-major `resolution × resolution` raster.
///
/// `values[j * resolution + i]` is the cell at column `i`, row `j`.  Returns
/// peak centers in raster cell units (`[i, j]`, fractional), ordered by the
/// scan position of each region's first area.
pub fn detect_peaks(values: &[f32], resolution: usize) -> Vec<[f32; 2]> {
    if resolution < 2 || values.len() != resolution * resolution {
        return Vec::new();
    }

    let n = resolution.ilog2() as usize;
    let area = resolution / n;

    let global_mean = values.iter().map(|&v| v as f64).sum::<f64>() / values.len() as f64;

    // ── Flag dense areas ──────────────────────────────────────────────────
    let mut dense = vec![false; n * n];
    for aj in 0..n {
        for ai in 0..n {
            let mut sum = 0.0f64;
            for j in aj * area..(aj + 1) * area {
                let row = &values[j * resolution..(j + 1) * resolution];
                sum += row[ai * area..(ai + 1) * area].iter().map(|&v| v as f64).sum::<f64>();
            }
            dense[aj * n + ai] = sum / (area * area) as f64 > global_mean;
        }
    }

    // ── Group 8-connected dense areas ─────────────────────────────────────
    let mut seen = vec![false; n * n];
    let mut peaks = Vec::new();
    let mut stack = Vec::new();

    for start in 0..n * n {
        if !dense[start] || seen[start] {
            continue;
        }
        seen[start] = true;
        stack.push(start);

        let (mut min_i, mut max_i) = (usize::MAX, 0);
        let (mut min_j, mut max_j) = (usize::MAX, 0);

        while let Some(idx) = stack.pop() {
            let (ai, aj) = (idx % n, idx / n);
            min_i = min_i.min(ai);
            max_i = max_i.max(ai);
            min_j = min_j.min(aj);
            max_j = max_j.max(aj);

            for nj in aj.saturating_sub(1)..=(aj + 1).min(n - 1) {
                for ni in ai.saturating_sub(1)..=(ai + 1).min(n - 1) {
                    let nidx = nj * n + ni;
                    if dense[nidx] && !seen[nidx] {
                        seen[nidx] = true;
                        stack.push(nidx);
                    }
                }
            }
        }

        let ci = (min_i + max_i) / 2;
        let cj = (min_j + max_j) / 2;
        let half = area as f32 / 2.0;
        peaks.push([(ci * area) as f32 + half, (cj * area) as f32 + half]);
    }

    peaks
}
