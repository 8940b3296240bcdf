use clap::{App, Arg};

pub struct Args {
    pub input_dir: String,
    pub output_dir: String,
}

impl Args {
    pub fn parse() -> Self {
        let matches = App::new("statement-transactions")
            .version("0.1.0")
            .about("convert bank statement PDFs into a sorted transaction CSV")
            .arg(
                Arg::with_name("input_dir")
                    .takes_value(true)
                    .required(true)
                    .help("directory holding the statement PDF files"),
            )
            .arg(
                Arg::with_name("output_dir")
                    .long("output-dir")
                    .takes_value(true)
                    .default_value("output")
                    .help("directory the CSV report and skip logs are written to"),
            )
            .get_matches();

        Self {
            input_dir: matches.value_of("input_dir").unwrap_or_default().to_string(),
            output_dir: matches
                .value_of("output_dir")
                .unwrap_or_default()
                .to_string(),
        }
    }
}
