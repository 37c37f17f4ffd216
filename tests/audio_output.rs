use retrocast::audio::decode::{Decoder, PcmDecoder};
use retrocast::audio::output::{AudioOutput, CpalOutput, OutputFormat};
use retrocast::error::Error;

#[test]
fn test_open_rejects_zero_rate_format() {
    let err = CpalOutput::open(OutputFormat {
        sample_rate: 0,
        channels: 1,
    })
    .unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
}

#[test]
fn test_open_rejects_zero_channel_format() {
    let err = CpalOutput::open(OutputFormat {
        sample_rate: 24000,
        channels: 0,
    })
    .unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
}

#[test]
#[ignore] // Requires an audio output device
fn test_open_write_and_close() {
    let format = OutputFormat {
        sample_rate: 24000,
        channels: 1,
    };

    let mut output = CpalOutput::open(format).unwrap();

    // 100ms of silence
    let decoder = PcmDecoder::new(24000, 1).unwrap();
    let buffer = decoder.decode(&vec![0u8; 2400 * 2]).unwrap();

    output.write(&buffer).unwrap();
    assert!(output.queued_frames() <= 2400);

    output.discard();
    assert_eq!(output.queued_frames(), 0);

    output.close().unwrap();
}

#[test]
#[ignore] // Requires an audio output device
fn test_write_rejects_mismatched_buffer() {
    let mut output = CpalOutput::open(OutputFormat {
        sample_rate: 24000,
        channels: 1,
    })
    .unwrap();

    let decoder = PcmDecoder::new(48000, 1).unwrap();
    let buffer = decoder.decode(&[0u8; 4]).unwrap();

    let err = output.write(&buffer).unwrap_err();
    assert!(matches!(err, Error::Output(_)));
}
