use crate::models::{AnalysisReport, ComparisonSummary, NGram, PlotSurface};
use crate::types::{Frequency, NGramSize};
use crate::Error;
use std::io::Write;

fn size_label(size: NGramSize) -> String {
    match size {
        1 => "words".to_string(),
        2 => "bigrams".to_string(),
        3 => "trigrams".to_string(),
        n => format!("{}-grams", n),
    }
}

/// Formats items as a bracketed, single-quoted list: `['cat', 'sat']`.
fn quoted_list<I, T>(items: I) -> String
where
    I: IntoIterator<Item = T>,
    T: std::fmt::Display,
{
    let quoted: Vec<String> = items
        .into_iter()
        .map(|item| format!("'{}'", item))
        .collect();

    format!("[{}]", quoted.join(", "))
}

/// Writes `"Top-<k> <label>:"` followed by one `"<ngram>: <count>"` line per entry.
pub fn write_top_entries<W: Write>(
    out: &mut W,
    size: NGramSize,
    top_k: usize,
    entries: &[(&NGram, Frequency)],
) -> Result<(), Error> {
    writeln!(out, "Top-{} {}:", top_k, size_label(size))?;
    for (ngram, count) in entries {
        writeln!(out, "{}: {}", ngram, count)?;
    }

    Ok(())
}

/// Writes the top bigrams and top trigrams, separated by a blank line.
///
/// Sizes missing from the report are skipped.
pub fn write_ngram_report<W: Write>(
    out: &mut W,
    report: &AnalysisReport,
    top_k: usize,
) -> Result<(), Error> {
    let mut first = true;
    for size in [2, 3] {
        if report.table(size).is_none() {
            continue;
        }

        if !first {
            writeln!(out)?;
        }
        first = false;

        write_top_entries(out, size, top_k, &report.most_common(size, top_k))?;
    }

    Ok(())
}

/// Writes the top single words.
pub fn write_word_report<W: Write>(
    out: &mut W,
    report: &AnalysisReport,
    top_k: usize,
) -> Result<(), Error> {
    write_top_entries(out, 1, top_k, &report.most_common(1, top_k))
}

/// Writes the top words, the top bigrams and whether they overlap.
pub fn write_comparison_report<W: Write>(
    out: &mut W,
    summary: &ComparisonSummary,
) -> Result<(), Error> {
    writeln!(out, "Top words: {}", quoted_list(&summary.top_words))?;
    writeln!(out, "Top bigrams: {}", quoted_list(&summary.top_bigrams))?;

    writeln!(out)?;
    writeln!(out, "Comparison summary:")?;
    if summary.matches.is_empty() {
        writeln!(
            out,
            "No bigrams overlap with top single words - phrases differ in meaning."
        )?;
    } else {
        writeln!(
            out,
            "Frequent bigrams containing top words: {}",
            quoted_list(&summary.matches)
        )?;
        writeln!(
            out,
            "These show recurring \"phrases\" built around key terms."
        )?;
    }

    Ok(())
}

/// Renders the top single words as a bar chart.
pub fn plot_top_words<S: PlotSurface + ?Sized>(
    surface: &mut S,
    report: &AnalysisReport,
    top_k: usize,
) -> Result<(), Error> {
    let (labels, counts): (Vec<String>, Vec<Frequency>) = report.top_words(top_k).into_iter().unzip();
    let title = format!("Top-{} words ({})", top_k, report.language().name());

    surface.render_bar_chart(&title, &labels, &counts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_NGRAM_SIZES;
    use crate::models::{analyze_text, OverlapMatchMode, TextBarChart};

    const SAMPLE: &str = "the cat sat on the mat the cat ran";

    fn render<F>(write: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> Result<(), Error>,
    {
        let mut out = Vec::new();
        write(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_ngram_report() {
        let report = analyze_text(SAMPLE, "en", DEFAULT_NGRAM_SIZES).unwrap();
        let output = render(|out| write_ngram_report(out, &report, 5));

        assert_eq!(
            output,
            "Top-5 bigrams:\n\
             cat sat: 1\n\
             sat mat: 1\n\
             mat cat: 1\n\
             cat ran: 1\n\
             \n\
             Top-5 trigrams:\n\
             cat sat mat: 1\n\
             sat mat cat: 1\n\
             mat cat ran: 1\n"
        );
    }

    #[test]
    fn test_word_report() {
        let report = analyze_text(SAMPLE, "en", DEFAULT_NGRAM_SIZES).unwrap();
        let output = render(|out| write_word_report(out, &report, 2));

        assert_eq!(output, "Top-2 words:\ncat: 2\nsat: 1\n");
    }

    #[test]
    fn test_comparison_report_with_matches() {
        let report = analyze_text(SAMPLE, "en", DEFAULT_NGRAM_SIZES).unwrap();
        let summary = report.compare_top_words_with_bigrams(2, OverlapMatchMode::Token);
        let output = render(|out| write_comparison_report(out, &summary));

        assert_eq!(
            output,
            "Top words: ['cat', 'sat']\n\
             Top bigrams: ['cat sat', 'sat mat']\n\
             \n\
             Comparison summary:\n\
             Frequent bigrams containing top words: ['cat sat', 'sat mat']\n\
             These show recurring \"phrases\" built around key terms.\n"
        );
    }

    #[test]
    fn test_comparison_report_without_matches() {
        let summary = ComparisonSummary {
            top_words: vec!["cat".to_string()],
            top_bigrams: vec![NGram::from(vec!["dog", "house"])],
            matches: Vec::new(),
        };
        let output = render(|out| write_comparison_report(out, &summary));

        assert!(output.ends_with(
            "Comparison summary:\nNo bigrams overlap with top single words - phrases differ in meaning.\n"
        ));
    }

    #[test]
    fn test_plot_top_words() {
        let report = analyze_text(SAMPLE, "en", DEFAULT_NGRAM_SIZES).unwrap();
        let mut chart = TextBarChart::new(Vec::new()).with_width(2);
        plot_top_words(&mut chart, &report, 2).unwrap();

        let output = String::from_utf8(chart.into_inner()).unwrap();
        assert_eq!(output, "Top-2 words (English)\ncat | ## 2\nsat | # 1\n");
    }

    #[test]
    fn test_quoted_list() {
        assert_eq!(quoted_list(Vec::<String>::new()), "[]");
        assert_eq!(quoted_list(["война", "мир"]), "['война', 'мир']");
    }

    #[test]
    fn test_larger_window_labels() {
        assert_eq!(size_label(4), "4-grams");
    }
}
