use crate::constants::DEFAULT_BAR_CHART_WIDTH;
use crate::types::Frequency;
use crate::Error;
use std::io::Write;

/// A surface able to render a labelled bar chart.
pub trait PlotSurface {
    fn render_bar_chart(
        &mut self,
        title: &str,
        labels: &[String],
        counts: &[Frequency],
    ) -> Result<(), Error>;
}

/// Renders horizontal bar charts as plain text.
///
/// ```text
/// Top-5 words (English)
/// cat | ######################################## 2
/// sat | #################### 1
/// ```
pub struct TextBarChart<W: Write> {
    writer: W,
    width: usize,
    bar_char: char,
}

impl<W: Write> TextBarChart<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            width: DEFAULT_BAR_CHART_WIDTH,
            bar_char: '#',
        }
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn with_bar_char(mut self, bar_char: char) -> Self {
        self.bar_char = bar_char;
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn bar_length(&self, count: Frequency, max_count: Frequency) -> usize {
        if max_count == 0 {
            return 0;
        }

        // Rounded, but never hide a non-zero count
        let length = (count * self.width + max_count / 2) / max_count;
        if count > 0 {
            length.max(1)
        } else {
            length
        }
    }
}

impl<W: Write> PlotSurface for TextBarChart<W> {
    fn render_bar_chart(
        &mut self,
        title: &str,
        labels: &[String],
        counts: &[Frequency],
    ) -> Result<(), Error> {
        if labels.len() != counts.len() {
            return Err(Error::UnexpectedError(format!(
                "Bar chart has {} labels but {} counts",
                labels.len(),
                counts.len()
            )));
        }

        let label_width = labels
            .iter()
            .map(|label| label.chars().count())
            .max()
            .unwrap_or(0);
        let max_count = counts.iter().copied().max().unwrap_or(0);

        writeln!(self.writer, "{}", title)?;
        for (label, &count) in labels.iter().zip(counts) {
            let padding = label_width - label.chars().count();
            let bar: String = std::iter::repeat(self.bar_char)
                .take(self.bar_length(count, max_count))
                .collect();

            writeln!(
                self.writer,
                "{}{} | {} {}",
                label,
                " ".repeat(padding),
                bar,
                count
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(words: &[&str]) -> Vec<String> {
        words.iter().map(|word| word.to_string()).collect()
    }

    #[test]
    fn test_renders_scaled_bars() {
        let mut chart = TextBarChart::new(Vec::new()).with_width(4);
        chart
            .render_bar_chart("Top words", &labels(&["cat", "ox"]), &[2, 1])
            .unwrap();

        let output = String::from_utf8(chart.into_inner()).unwrap();
        assert_eq!(output, "Top words\ncat | #### 2\nox  | ## 1\n");
    }

    #[test]
    fn test_pads_cyrillic_labels_by_characters() {
        let mut chart = TextBarChart::new(Vec::new()).with_width(2).with_bar_char('=');
        chart
            .render_bar_chart("Слова", &labels(&["мир", "война"]), &[1, 1])
            .unwrap();

        let output = String::from_utf8(chart.into_inner()).unwrap();
        assert_eq!(output, "Слова\nмир   | == 1\nвойна | == 1\n");
    }

    #[test]
    fn test_small_counts_remain_visible() {
        let mut chart = TextBarChart::new(Vec::new()).with_width(10);
        chart
            .render_bar_chart("t", &labels(&["a", "b"]), &[100, 1])
            .unwrap();

        let output = String::from_utf8(chart.into_inner()).unwrap();
        assert!(output.contains("b | # 1"));
    }

    #[test]
    fn test_mismatched_lengths_are_rejected() {
        let mut chart = TextBarChart::new(Vec::new());
        let result = chart.render_bar_chart("t", &labels(&["a"]), &[]);

        assert!(matches!(result, Err(Error::UnexpectedError(_))));
    }

    #[test]
    fn test_empty_chart_prints_title_only() {
        let mut chart = TextBarChart::new(Vec::new());
        chart.render_bar_chart("Nothing", &[], &[]).unwrap();

        assert_eq!(String::from_utf8(chart.into_inner()).unwrap(), "Nothing\n");
    }
}
