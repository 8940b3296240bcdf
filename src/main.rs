use log::{error, info};
use statement_transactions::args::Args;
use statement_transactions::engine::StatementProcessor;
use statement_transactions::pdf::PdfTextSource;
use statement_transactions::skiplog::SkipLog;
use std::fs;
use std::path::Path;
use std::process;

const CSV_FILE_NAME: &str = "transactions.csv";
const SKIPPED_FILES_NAME: &str = "skipped_files.txt";
const SKIPPED_LINES_NAME: &str = "skipped_lines.txt";
const SKIPPED_FILES_BANNER: &str = "-- SKIPPED FILES --";
const SKIPPED_LINES_BANNER: &str = "-- SKIPPED LINES --";

fn main() {
    env_logger::init();
    let args = Args::parse();

    let output_dir = Path::new(&args.output_dir);
    if let Err(err) = fs::create_dir_all(output_dir) {
        error!(
            "failed to create output directory {}: {}",
            output_dir.display(),
            err
        );
        process::exit(1);
    }

    let mut processor = StatementProcessor::new();

    // The skipped-files log only lives for the gathering phase.
    {
        let mut skipped_files =
            match SkipLog::create(&output_dir.join(SKIPPED_FILES_NAME), SKIPPED_FILES_BANNER) {
                Ok(log) => log,
                Err(err) => {
                    error!("failed to open the skipped files log: {}", err);
                    process::exit(1);
                }
            };
        if let Err(err) =
            processor.gather_statement_files(Path::new(&args.input_dir), &mut skipped_files)
        {
            error!("failed to gather statement files: {}", err);
            process::exit(1);
        }
    }

    let mut skipped_lines =
        match SkipLog::create(&output_dir.join(SKIPPED_LINES_NAME), SKIPPED_LINES_BANNER) {
            Ok(log) => log,
            Err(err) => {
                error!("failed to open the skipped lines log: {}", err);
                process::exit(1);
            }
        };
    if let Err(err) = processor.process_statements(&PdfTextSource, &mut skipped_lines) {
        error!("failed to process statements: {}", err);
        process::exit(1);
    }
    drop(skipped_lines);

    processor.sort_transactions();

    let csv_path = output_dir.join(CSV_FILE_NAME);
    if let Err(err) = processor.write_csv(&csv_path) {
        error!("failed to write the report: {}", err);
        process::exit(1);
    }
    info!(
        "wrote {} transactions to {}",
        processor.transactions().len(),
        csv_path.display()
    );
}
