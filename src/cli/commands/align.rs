use crate::cli::output::{render_json, render_text, warning, AlignmentReport, TextLayout};
use clap::Args;
use gotoh_bio::formats::read_pair;
use gotoh_bio::{AffineScoring, GotohAligner, SequenceRecord};
use gotoh_core::{load_config, Config, GotohError, GotohResult};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{debug, info, warn};

#[derive(Args, Debug, Default)]
pub struct AlignArgs {
    /// FASTA file holding exactly two sequences (prompted for when omitted)
    #[arg(value_name = "FASTA")]
    pub input: Option<PathBuf>,

    /// Configuration file (TOML)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Score for identical symbols
    #[arg(long = "match", value_name = "SCORE", allow_negative_numbers = true)]
    pub match_score: Option<f64>,

    /// Score for differing symbols
    #[arg(long, value_name = "SCORE", allow_negative_numbers = true)]
    pub mismatch: Option<f64>,

    /// Score added when a gap is opened (usually negative)
    #[arg(long, value_name = "SCORE", allow_negative_numbers = true)]
    pub gap_open: Option<f64>,

    /// Score added for each gap extension (usually negative)
    #[arg(long, value_name = "SCORE", allow_negative_numbers = true)]
    pub gap_extend: Option<f64>,

    /// Character printed for gap columns
    #[arg(long)]
    pub gap_char: Option<char>,

    /// Output format
    #[arg(long, value_parser = ["text", "json"])]
    pub format: Option<String>,

    /// Wrap text output into blocks of this many columns (0 = no wrapping)
    #[arg(long)]
    pub line_width: Option<usize>,

    /// Print a match line between the aligned rows
    #[arg(long = "match-line")]
    pub match_line: bool,

    /// Dump the M, Ga and Gb matrices before the alignment
    #[arg(long)]
    pub show_matrices: bool,

    /// Longest sequence accepted (0 = unlimited)
    #[arg(long)]
    pub max_length: Option<usize>,
}

impl AlignArgs {
    /// Defaults, then the config file, then command line flags.
    pub fn resolve_config(&self) -> GotohResult<Config> {
        let mut config = match &self.config {
            Some(path) => {
                info!(path = %path.display(), "loading configuration");
                load_config(path)?
            }
            None => Config::default(),
        };

        let scoring = &mut config.scoring;
        if let Some(v) = self.match_score {
            scoring.match_score = v;
        }
        if let Some(v) = self.mismatch {
            scoring.mismatch = v;
        }
        if let Some(v) = self.gap_open {
            scoring.gap_open = v;
        }
        if let Some(v) = self.gap_extend {
            scoring.gap_extend = v;
        }

        let output = &mut config.output;
        if let Some(c) = self.gap_char {
            output.gap_char = c;
        }
        if let Some(format) = &self.format {
            output.format = format.clone();
        }
        if let Some(width) = self.line_width {
            output.line_width = width;
        }
        if self.match_line {
            output.show_match_line = true;
        }

        if let Some(max) = self.max_length {
            config.limits.max_sequence_length = max;
        }

        config.validate()?;
        Ok(config)
    }
}

pub fn run(args: AlignArgs) -> anyhow::Result<()> {
    let config = args.resolve_config()?;

    let path = match &args.input {
        Some(path) => path.clone(),
        None => {
            let stdin = io::stdin();
            prompt_for_path(&mut stdin.lock(), &mut io::stdout())?
        }
    };

    let (a, b) = read_pair(&path)?;
    check_lengths(&[&a, &b], config.limits.max_sequence_length)?;
    for record in [&a, &b] {
        if record.is_empty() {
            warning(&format!("sequence '{}' is empty", record.id));
        }
    }

    let scoring = config.scoring;
    if scoring.gap_open > 0.0 || scoring.gap_extend > 0.0 {
        warn!(
            gap_open = scoring.gap_open,
            gap_extend = scoring.gap_extend,
            "positive gap scores reward gaps; penalties are normally negative"
        );
    }

    let aligner = GotohAligner::new(AffineScoring::from(scoring));
    debug!(scoring = ?aligner.scoring(), "aligner ready");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = if args.show_matrices {
        let (sym_a, sym_b) = (a.symbols(), b.symbols());
        let matrices = aligner.matrices(&sym_a, &sym_b);
        matrices.write_tables(&mut out)?;
        writeln!(out)?;
        aligner.align_with_matrices(&matrices, &sym_a, &sym_b)
    } else {
        aligner.align_records(&a, &b)
    };

    info!(
        columns = result.len(),
        score = result.score,
        identity = result.identity(),
        "alignment complete"
    );

    match config.output.format.as_str() {
        "json" => {
            let report = AlignmentReport::new(&a.id, &b.id, &result, config.output.gap_char);
            writeln!(out, "{}", render_json(&report)?)?;
        }
        _ => {
            let layout = TextLayout {
                gap_char: config.output.gap_char,
                line_width: config.output.line_width,
                show_match_line: config.output.show_match_line,
            };
            write!(out, "{}", render_text(&a.id, &b.id, &result, layout))?;
        }
    }

    Ok(())
}

/// Ask for the FASTA path on `output` and read one line from `input`.
pub fn prompt_for_path<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> GotohResult<PathBuf> {
    writeln!(output, "enter the name of the fasta file you wish to use")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let name = line.trim();
    if name.is_empty() {
        return Err(GotohError::InvalidInput("no FASTA file name given".to_string()));
    }
    Ok(PathBuf::from(name))
}

/// Refuse inputs longer than `max` residues (0 = no limit).
pub fn check_lengths(records: &[&SequenceRecord], max: usize) -> GotohResult<()> {
    if max == 0 {
        return Ok(());
    }
    for record in records {
        if record.len() > max {
            return Err(GotohError::InvalidInput(format!(
                "sequence '{}' has {} residues, above the limit of {}",
                record.id,
                record.len(),
                max
            )));
        }
    }
    Ok(())
}
