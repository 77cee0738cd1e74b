//! Raw LZMA1 streams with the fixed filter settings of the by square format.
//!
//! The stream carries no container header; both sides must agree on the
//! parameters below. The encoder terminates the stream with an end marker.

use liblzma::stream::{Action, Filters, LzmaOptions, MatchFinder, Mode, Status, Stream};

use crate::error::{Error, Result};

pub const LITERAL_CONTEXT_BITS: u32 = 3;
pub const LITERAL_POSITION_BITS: u32 = 0;
pub const POSITION_BITS: u32 = 2;
pub const DICTIONARY_SIZE: u32 = 32 * 1024;

const PRESET: u32 = 6;
const CHUNK_SIZE: usize = 256;

fn filters() -> core::result::Result<Filters, liblzma::stream::Error> {
    let mut options = LzmaOptions::new_preset(PRESET)?;
    options
        .literal_context_bits(LITERAL_CONTEXT_BITS)
        .literal_position_bits(LITERAL_POSITION_BITS)
        .position_bits(POSITION_BITS)
        .dict_size(DICTIONARY_SIZE)
        .mode(Mode::Fast)
        .match_finder(MatchFinder::HashChain4);
    let mut filters = Filters::new();
    filters.lzma1(&options);
    Ok(filters)
}

fn decoder() -> Result<Stream> {
    filters()
        .and_then(|filters| Stream::new_raw_decoder(&filters))
        .map_err(Error::Decompression)
}

/// Feeds all of `input` through `stream`, collecting its output until the
/// stream ends. `limit` caps the output length.
#[allow(clippy::cast_possible_truncation)]
fn drive(
    stream: &mut Stream,
    input: &[u8],
    output: &mut Vec<u8>,
    limit: Option<usize>,
) -> core::result::Result<(), DriveError> {
    loop {
        if output.len() == output.capacity() {
            output.reserve(CHUNK_SIZE);
        }
        let before = (stream.total_in(), stream.total_out());
        let consumed = (stream.total_in() as usize).min(input.len());
        let status = stream
            .process_vec(&input[consumed..], output, Action::Finish)
            .map_err(DriveError::Stream)?;
        if matches!(status, Status::StreamEnd) {
            return Ok(());
        }
        if limit.is_some_and(|limit| output.len() > limit) {
            return Err(DriveError::Limit);
        }
        if (stream.total_in(), stream.total_out()) == before {
            return Err(DriveError::Stalled);
        }
    }
}

enum DriveError {
    Stream(liblzma::stream::Error),
    Limit,
    Stalled,
}

/// Compresses `data` into a raw LZMA1 stream.
///
/// # Errors
///
/// Returns [`Error::Compression`] if the encoder reports an error.
pub fn compress(data: &[u8]) -> Result<Vec<u8>> {
    let mut stream = Stream::new_raw_encoder(&filters()?)?;
    let mut output = Vec::with_capacity(data.len() + CHUNK_SIZE);
    match drive(&mut stream, data, &mut output, None) {
        Ok(()) => {}
        Err(DriveError::Stream(e)) => return Err(Error::Compression(e)),
        Err(DriveError::Limit | DriveError::Stalled) => {
            return Err(Error::Compression(liblzma::stream::Error::Program))
        }
    }
    log::trace!("compressed {} bytes into {}", data.len(), output.len());
    Ok(output)
}

/// Decompresses a raw LZMA1 stream that must expand to exactly
/// `expected_length` bytes.
///
/// # Errors
///
/// Returns [`Error::Decompression`] if the decoder can't be set up or
/// rejects the data,
/// [`Error::UnexpectedEnd`] if the stream is cut short, and
/// [`Error::LengthMismatch`] if the output length differs from
/// `expected_length`.
pub fn decompress(data: &[u8], expected_length: usize) -> Result<Vec<u8>> {
    let mut stream = decoder()?;
    let mut output = Vec::with_capacity(expected_length + 1);
    match drive(&mut stream, data, &mut output, Some(expected_length)) {
        Ok(()) => {}
        Err(DriveError::Stream(e)) => return Err(Error::Decompression(e)),
        Err(DriveError::Stalled) => return Err(Error::UnexpectedEnd),
        Err(DriveError::Limit) => {}
    }
    if output.len() != expected_length {
        return Err(Error::LengthMismatch {
            expected: expected_length,
            actual: output.len(),
        });
    }
    log::trace!("decompressed {} bytes into {}", data.len(), output.len());
    Ok(output)
}
