use clap::{Parser, ValueEnum};
use log::{error, info};
use std::io::{self, Write};
use std::path::PathBuf;
use word_analyzer::{
    plot_top_words, write_comparison_report, write_ngram_report, write_word_report,
    AnalyzerConfig, Error, NGramSize, OverlapMatchMode, TextAnalyzer, TextBarChart, DEFAULT_TOP_K,
};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Report {
    /// Top bigrams and trigrams
    Ngrams,
    /// Top single words
    Words,
    /// Top words cross-referenced with top bigrams
    Compare,
}

impl Report {
    fn ngram_sizes(self) -> &'static [NGramSize] {
        match self {
            Report::Ngrams => &[2, 3],
            Report::Words => &[1],
            Report::Compare => &[1, 2],
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Overlap {
    /// A top word must equal one of the bigram's tokens
    Token,
    /// A top word may appear anywhere inside the joined bigram
    Substring,
}

impl From<Overlap> for OverlapMatchMode {
    fn from(overlap: Overlap) -> Self {
        match overlap {
            Overlap::Token => OverlapMatchMode::Token,
            Overlap::Substring => OverlapMatchMode::Substring,
        }
    }
}

/// Reports the most frequent words, bigrams and trigrams of a text file.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// UTF-8 text file to analyze
    file: PathBuf,

    /// Language of the text: `en` or `ru`
    lang: String,

    /// Which report to print
    #[arg(long, value_enum, default_value_t = Report::Ngrams)]
    report: Report,

    /// Number of entries per table
    #[arg(long, default_value_t = DEFAULT_TOP_K)]
    top_k: usize,

    /// Draw a bar chart of the top words (words report)
    #[arg(long)]
    plot: bool,

    /// Match mode used by the compare report
    #[arg(long, value_enum, default_value_t = Overlap::Token)]
    overlap: Overlap,

    /// Join words hyphenated across line breaks
    #[arg(long)]
    merge_hyphenated_lines: bool,
}

impl Cli {
    fn config(&self) -> AnalyzerConfig {
        AnalyzerConfig {
            top_k: self.top_k,
            overlap_match_mode: self.overlap.into(),
            merge_hyphenated_line_breaks: self.merge_hyphenated_lines,
        }
    }
}

fn run(cli: &Cli) -> Result<(), Error> {
    let config = cli.config();
    let analyzer = TextAnalyzer::from_language_code(&cli.lang, config)?;
    let report = analyzer.analyze_file(&cli.file, cli.report.ngram_sizes())?;

    info!(
        "Counted {} normalized tokens in '{}'",
        report.token_count(),
        cli.file.display()
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.report {
        Report::Ngrams => write_ngram_report(&mut out, &report, config.top_k)?,
        Report::Words => {
            write_word_report(&mut out, &report, config.top_k)?;
            if cli.plot {
                writeln!(out)?;
                let mut chart = TextBarChart::new(&mut out);
                plot_top_words(&mut chart, &report, config.top_k)?;
            }
        }
        Report::Compare => {
            let summary =
                report.compare_top_words_with_bigrams(config.top_k, config.overlap_match_mode);
            write_comparison_report(&mut out, &summary)?;
        }
    }

    out.flush()?;

    Ok(())
}

fn main() {
    // Initialize the logger
    #[cfg(feature = "logger-support")]
    env_logger::init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        error!("Error analyzing text: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
