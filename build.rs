#[path = "shared/lib.rs"]
mod shared;
use shared::constants::{
    COMPRESSED_ENGLISH_NOUNS_FILE_NAME, COMPRESSED_ENGLISH_NOUN_EXCEPTIONS_FILE_NAME,
    COMPRESSED_STOP_WORDS_FILE_NAME, ENGLISH_NOUNS_CSV_FILE_PATH,
    ENGLISH_NOUN_EXCEPTIONS_CSV_FILE_PATH, STOP_WORDS_CSV_FILE_PATH,
};

use flate2::write::GzEncoder;
use flate2::Compression;
use std::env;
use std::fs::File;
use std::io::{self};
use std::path::{Path, PathBuf};

fn compress_file(input_path: &Path, output_path: &Path) -> io::Result<()> {
    // Ensure that Cargo re-runs the build script if the input file changes
    println!("cargo:rerun-if-changed={}", input_path.display());

    let mut input_file = File::open(input_path)?;
    let output_file = File::create(output_path)?;

    let mut encoder = GzEncoder::new(output_file, Compression::default());
    io::copy(&mut input_file, &mut encoder)?;
    encoder.finish()?;

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let out_dir = PathBuf::from(env::var("OUT_DIR")?);

    compress_file(
        &STOP_WORDS_CSV_FILE_PATH,
        &out_dir.join(COMPRESSED_STOP_WORDS_FILE_NAME),
    )?;

    compress_file(
        &ENGLISH_NOUN_EXCEPTIONS_CSV_FILE_PATH,
        &out_dir.join(COMPRESSED_ENGLISH_NOUN_EXCEPTIONS_FILE_NAME),
    )?;

    compress_file(
        &ENGLISH_NOUNS_CSV_FILE_PATH,
        &out_dir.join(COMPRESSED_ENGLISH_NOUNS_FILE_NAME),
    )?;

    Ok(())
}
