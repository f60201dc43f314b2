use word_analyzer::{analyze_text, DEFAULT_NGRAM_SIZES};

fn main() {
    env_logger::init();

    let text = "Dogs and cats. The dog and the cat! Dogs, dogs and more dogs.";

    let report = analyze_text(text, "en", DEFAULT_NGRAM_SIZES).unwrap();

    println!("Top words for the given text \"{}\"", text);
    for (word, frequency) in report.top_words(5) {
        println!("{}: {}", word, frequency);
    }

    println!("\nTop bigrams:");
    for (bigram, frequency) in report.top_bigrams(5) {
        println!("{}: {}", bigram, frequency);
    }
}
