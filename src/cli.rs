//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "medline-bitext",
    about = "Parallel corpus generation from bilingual MEDLINE abstracts."
)]
/// Build command and parameters.
///
/// ```sh
/// medline-bitext 0.1.0
/// Parallel corpus generation from bilingual MEDLINE abstracts.
///
/// USAGE:
///     medline-bitext [OPTIONS] <src> <dst> [names]...
///
/// ARGS:
///     <src>         folder holding identifier lists (eng_fre.txt, ...)
///     <dst>         corpus destination, one folder per list
///     <names>...    list names, without extension. Default is every ???_???*.txt file in src
/// ```
pub struct MedlineBitext {
    #[structopt(parse(from_os_str), help = "folder holding identifier lists")]
    pub src: PathBuf,
    #[structopt(
        parse(from_os_str),
        help = "corpus destination, one folder per list"
    )]
    pub dst: PathBuf,
    #[structopt(help = "list names, without extension (eng_fre). Default is every list in src.")]
    pub names: Vec<String>,
    #[structopt(
        parse(from_os_str),
        long = "lid-path",
        help = "Path to lid.176.bin",
        default_value = "lid.176.bin"
    )]
    pub lid_path: PathBuf,
    #[structopt(
        long = "threshold",
        default_value = "0.0",
        help = "minimum identification confidence, below it the language is unknown"
    )]
    pub threshold: f32,
    #[structopt(
        long = "lang-table",
        parse(from_os_str),
        help = "JSON file mapping file language tags to identifier codes"
    )]
    pub lang_table: Option<PathBuf>,
    #[structopt(long = "email", help = "contact e-mail sent to E-utilities")]
    pub email: Option<String>,
    #[structopt(long = "api-key", help = "E-utilities API key")]
    pub api_key: Option<String>,
    #[structopt(long = "tool", default_value = "medline-bitext", help = "tool name sent to E-utilities")]
    pub tool: String,
    #[structopt(
        long = "eutils-url",
        default_value = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/",
        help = "E-utilities base url"
    )]
    pub eutils_url: String,
    #[structopt(
        short = "s",
        long = "batch-size",
        default_value = "100",
        help = "number of identifiers per request"
    )]
    pub batch_size: usize,
    #[structopt(long = "timeout", default_value = "60", help = "request timeout (seconds)")]
    pub timeout: u64,
    #[structopt(
        long = "report",
        parse(from_os_str),
        help = "write run statistics as JSON to this file"
    )]
    pub report: Option<PathBuf>,
}
