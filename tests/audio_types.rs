use retrocast::audio::decode::{Decoder, PcmDecoder};
use std::time::Duration;

#[test]
fn test_buffer_accessors() {
    let decoder = PcmDecoder::new(24000, 2).unwrap();
    let buffer = decoder.decode(&[0u8; 24]).unwrap();

    assert_eq!(buffer.sample_rate(), 24000);
    assert_eq!(buffer.channel_count(), 2);
    assert_eq!(buffer.frame_count(), 6);
}

#[test]
fn test_duration_follows_sample_rate() {
    let decoder = PcmDecoder::new(24000, 1).unwrap();

    // One second of silence at 24 kHz mono
    let buffer = decoder.decode(&vec![0u8; 24000 * 2]).unwrap();
    assert_eq!(buffer.duration(), Duration::from_secs(1));

    let half = decoder.decode(&vec![0u8; 24000]).unwrap();
    assert_eq!(half.duration(), Duration::from_millis(500));
}

#[test]
fn test_interleaved_restores_frame_order() {
    let decoder = PcmDecoder::new(48000, 2).unwrap();
    let data = vec![
        0x01, 0x00, // L0
        0x02, 0x00, // R0
        0x03, 0x00, // L1
        0x04, 0x00, // R1
    ];

    let buffer = decoder.decode(&data).unwrap();
    let interleaved = buffer.interleaved();

    assert_eq!(
        interleaved,
        vec![
            1.0 / 32768.0,
            2.0 / 32768.0,
            3.0 / 32768.0,
            4.0 / 32768.0,
        ]
    );
}

#[test]
fn test_empty_buffer_has_zero_duration() {
    let decoder = PcmDecoder::new(24000, 1).unwrap();
    let buffer = decoder.decode(&[]).unwrap();
    assert_eq!(buffer.duration(), Duration::ZERO);
    assert!(buffer.interleaved().is_empty());
}
