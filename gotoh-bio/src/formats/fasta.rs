use crate::sequence::SequenceRecord;
use flate2::read::GzDecoder;
use gotoh_core::error::{GotohError, GotohResult};
use nom::{
    bytes::complete::{tag, take_till},
    character::complete::{line_ending, not_line_ending, space1},
    combinator::opt,
    sequence::preceded,
    IResult,
};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, info};

/// Parse a FASTA header line into `(id, description)`
fn parse_header(input: &[u8]) -> IResult<&[u8], (&[u8], Option<&[u8]>)> {
    let (input, _) = tag(&b">"[..])(input)?;
    let (input, id) = take_till(|c: u8| c.is_ascii_whitespace())(input)?;
    let (input, description) = opt(preceded(space1, not_line_ending))(input)?;
    let (input, _) = opt(line_ending)(input)?;
    Ok((input, (id, description)))
}

/// Parse sequence lines until the next header or EOF
fn parse_sequence(input: &[u8]) -> IResult<&[u8], Vec<u8>> {
    let mut sequence = Vec::new();
    let mut remaining = input;

    while !remaining.is_empty() && remaining[0] != b'>' {
        let (rest, line) =
            take_till::<_, _, nom::error::Error<_>>(|c: u8| c == b'\n')(remaining)?;
        let (rest, _) = opt(tag::<_, _, nom::error::Error<_>>(&b"\n"[..]))(rest)?;

        // Drops '\r' from CRLF files along with any stray blanks.
        sequence.extend(line.iter().copied().filter(|c| !c.is_ascii_whitespace()));
        remaining = rest;
    }

    Ok((remaining, sequence))
}

/// Raw pieces of one FASTA record, before text decoding
struct RawRecord<'a> {
    id: &'a [u8],
    description: Option<&'a [u8]>,
    sequence: Vec<u8>,
}

/// Parse a single FASTA record
fn parse_record(input: &[u8]) -> IResult<&[u8], RawRecord<'_>> {
    let (input, (id, description)) = parse_header(input)?;
    let (input, sequence) = parse_sequence(input)?;

    Ok((
        input,
        RawRecord {
            id,
            description,
            sequence,
        },
    ))
}

impl RawRecord<'_> {
    /// Decode as UTF-8; symbols are characters, not bytes.
    fn decode(self, line: usize) -> GotohResult<SequenceRecord> {
        let id = String::from_utf8_lossy(self.id).into_owned();
        let sequence = String::from_utf8(self.sequence).map_err(|e| {
            GotohError::Parse(format!(
                "sequence '{}' starting on line {} is not valid UTF-8: {}",
                id, line, e
            ))
        })?;

        let mut record = SequenceRecord::new(id, sequence);
        if let Some(desc) = self.description {
            let desc = String::from_utf8_lossy(desc).trim().to_string();
            if !desc.is_empty() {
                record = record.with_description(desc);
            }
        }
        Ok(record)
    }
}

fn line_number(data: &[u8], remaining: &[u8]) -> usize {
    let consumed = data.len() - remaining.len();
    data[..consumed].iter().filter(|&&c| c == b'\n').count() + 1
}

/// Parse FASTA from bytes.
///
/// Records are returned in file order. Sequence text must be UTF-8 and
/// whitespace inside it is dropped. A record with no sequence lines is
/// kept as an empty sequence; anything other than whitespace before the first
/// header is an error.
pub fn parse_fasta_from_bytes(data: &[u8]) -> GotohResult<Vec<SequenceRecord>> {
    let mut records = Vec::new();
    let mut remaining = data;

    loop {
        while let Some((first, rest)) = remaining.split_first() {
            if !first.is_ascii_whitespace() {
                break;
            }
            remaining = rest;
        }

        if remaining.is_empty() {
            break;
        }

        if remaining[0] != b'>' {
            return Err(GotohError::Parse(format!(
                "expected '>' at the start of a FASTA record on line {}",
                line_number(data, remaining)
            )));
        }

        let line = line_number(data, remaining);
        let (rest, raw) = parse_record(remaining).map_err(|e| {
            GotohError::Parse(format!(
                "Failed to parse FASTA record on line {}: {:?}",
                line, e
            ))
        })?;
        let record = raw.decode(line)?;

        debug!(id = %record.id, length = record.len(), "parsed FASTA record");
        records.push(record);
        remaining = rest;
    }

    Ok(records)
}

/// Parse FASTA from any reader
pub fn parse_fasta_reader<R: Read>(mut reader: R) -> GotohResult<Vec<SequenceRecord>> {
    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer)?;
    parse_fasta_from_bytes(&buffer)
}

/// Parse a FASTA file into records (supports .gz compression)
pub fn parse_fasta<P: AsRef<Path>>(path: P) -> GotohResult<Vec<SequenceRecord>> {
    let path = path.as_ref();
    let file = File::open(path)?;

    let records = if path.extension().and_then(|s| s.to_str()) == Some("gz") {
        parse_fasta_reader(GzDecoder::new(BufReader::new(file)))?
    } else {
        parse_fasta_reader(BufReader::new(file))?
    };

    info!(path = %path.display(), records = records.len(), "loaded FASTA file");
    Ok(records)
}

/// Take the two records of a pairwise input, in file order.
pub fn into_pair(records: Vec<SequenceRecord>) -> GotohResult<(SequenceRecord, SequenceRecord)> {
    let count = records.len();
    let mut iter = records.into_iter();
    match (iter.next(), iter.next(), iter.next()) {
        (Some(a), Some(b), None) => Ok((a, b)),
        _ => Err(GotohError::InvalidInput(format!(
            "expected exactly two sequences, found {}",
            count
        ))),
    }
}

/// Read a FASTA file that must hold exactly two records.
pub fn read_pair<P: AsRef<Path>>(path: P) -> GotohResult<(SequenceRecord, SequenceRecord)> {
    into_pair(parse_fasta(path)?)
}
