//! Tests for the Hamming codec

use super::*;
use crate::bits::parse_bits;
use proptest::collection::vec;
use proptest::prelude::*;

fn checked(received: &[bool], parity: Parity) -> CheckReport {
    match check(received, parity) {
        CheckOutcome::Checked(report) => report,
        CheckOutcome::Invalid { message } => panic!("unexpected invalid result: {}", message),
    }
}

/// Structured data words of every length up to `max_len`
fn sample_words(max_len: usize) -> Vec<Vec<bool>> {
    let mut words = Vec::new();
    for len in 1..=max_len {
        words.push(vec![false; len]);
        words.push(vec![true; len]);
        words.push((0..len).map(|i| i % 2 == 0).collect());
    }
    words
}

fn assert_round_trip(data: &[bool], parity: Parity) {
    let encoded = encode(data, parity).unwrap();
    let report = checked(encoded.bits(), parity);
    assert_eq!(report.syndrome(), 0, "data {:?} {}", data, parity);
    match parity {
        Parity::Even => {
            assert_eq!(report.classification(), Classification::NoError);
            assert_eq!(report.overall(), OverallParity::Ok);
        }
        Parity::Odd => {
            assert_eq!(report.classification(), Classification::NoErrorOrUndetectable);
            assert_eq!(report.overall(), OverallParity::NotApplicable);
        }
    }
    assert_eq!(report.corrected(), encoded.bits());
    assert_eq!(report.data_bits(), data);
}

fn assert_single_flips_corrected(data: &[bool], parity: Parity) {
    let encoded = encode(data, parity).unwrap();
    let total = encoded.total_bits();
    for flipped in 0..encoded.bits().len() {
        let mut received = encoded.bits().to_vec();
        received[flipped] = !received[flipped];
        let report = checked(&received, parity);

        assert_eq!(report.corrected(), encoded.bits());
        assert_eq!(report.data_bits(), data);
        assert!(report.classification().is_corrected());
        if flipped < total {
            assert_eq!(report.syndrome(), flipped + 1);
        } else {
            assert_eq!(report.classification(), Classification::OverallParityBit);
            assert_eq!(report.syndrome(), 0);
        }
        if parity == Parity::Odd {
            assert_eq!(report.classification(), Classification::SingleBitCorrected);
        }
    }
}

fn assert_double_flips_detected(data: &[bool]) {
    let encoded = encode(data, Parity::Even).unwrap();
    let len = encoded.bits().len();
    for i in 0..len {
        for j in i + 1..len {
            let mut received = encoded.bits().to_vec();
            received[i] = !received[i];
            received[j] = !received[j];
            let report = checked(&received, Parity::Even);
            assert_eq!(report.classification(), Classification::DoubleBit);
            assert_eq!(report.overall(), OverallParity::Ok);
            assert_eq!(report.corrected(), &received[..]);
        }
    }
}

fn parity_strategy() -> impl Strategy<Value = Parity> {
    prop_oneof![Just(Parity::Even), Just(Parity::Odd)]
}

proptest! {
    #[test]
    fn prop_round_trip_reports_no_error(data in vec(any::<bool>(), 1..=26), parity in parity_strategy()) {
        assert_round_trip(&data, parity);
    }

    #[test]
    fn prop_single_bit_errors_are_corrected(data in vec(any::<bool>(), 1..=16), parity in parity_strategy()) {
        assert_single_flips_corrected(&data, parity);
    }

    #[test]
    fn prop_double_bit_errors_are_detected(data in vec(any::<bool>(), 1..=8)) {
        assert_double_flips_detected(&data);
    }
}

#[test]
fn test_parity_from_str() {
    assert_eq!("even".parse::<Parity>().unwrap(), Parity::Even);
    assert_eq!(" Odd ".parse::<Parity>().unwrap(), Parity::Odd);
    assert!(matches!(
        "none".parse::<Parity>(),
        Err(HammingError::UnknownParity { .. })
    ));
    assert_eq!(Parity::Odd.to_string(), "odd");
}

#[test]
fn test_encode_even_seven_four() {
    let encoded = encode(&parse_bits("1011").unwrap(), Parity::Even).unwrap();
    assert_eq!(encoded.codeword(), "01100110");
    assert_eq!(encoded.parity_count(), 3);
    assert_eq!(encoded.total_bits(), 7);
    assert!(encoded.has_overall_parity());
}

#[test]
fn test_encode_odd_has_no_overall_bit() {
    let encoded = encode(&parse_bits("1011").unwrap(), Parity::Odd).unwrap();
    assert_eq!(encoded.codeword(), "1011011");
    assert!(!encoded.has_overall_parity());
}

#[test]
fn test_encode_single_data_bit() {
    let encoded = encode(&[true], Parity::Even).unwrap();
    assert_eq!(encoded.codeword(), "1111");
    assert_eq!(
        checked(encoded.bits(), Parity::Even).classification(),
        Classification::NoError
    );
}

#[test]
fn test_encode_rejects_empty_data() {
    assert_eq!(encode(&[], Parity::Even), Err(HammingError::EmptyData));
}

#[test]
fn test_round_trip_reports_no_error() {
    for data in sample_words(26) {
        for parity in [Parity::Even, Parity::Odd] {
            assert_round_trip(&data, parity);
        }
    }
}

#[test]
fn test_every_single_bit_error_is_corrected() {
    for data in sample_words(12) {
        for parity in [Parity::Even, Parity::Odd] {
            assert_single_flips_corrected(&data, parity);
        }
    }
}

#[test]
fn test_double_errors_are_detected_with_even_parity() {
    for data in sample_words(8) {
        assert_double_flips_detected(&data);
    }
}

#[test]
fn test_overall_parity_bit_error() {
    let mut received = parse_bits("01100110").unwrap();
    received[7] = true;
    let report = checked(&received, Parity::Even);
    assert_eq!(report.classification(), Classification::OverallParityBit);
    assert_eq!(report.overall(), OverallParity::Mismatch);
    assert_eq!(report.corrected_codeword(), "01100110");
    assert_eq!(report.overall().to_string(), "Mismatch");
}

#[test]
fn test_single_error_message_and_syndrome_bits() {
    let report = checked(&parse_bits("01101110").unwrap(), Parity::Even);
    assert_eq!(report.syndrome(), 5);
    assert_eq!(report.syndrome_bits(), "101");
    assert_eq!(report.classification().to_string(), "Correctable single-bit error.");
    assert_eq!(report.corrected_codeword(), "01100110");
}

#[test]
fn test_too_short_is_invalid() {
    for len in 0..MIN_CODEWORD_BITS {
        let received = vec![false; len];
        assert_eq!(
            check(&received, Parity::Even),
            CheckOutcome::Invalid {
                message: "Too short to be a Hamming code".to_string()
            }
        );
    }
}

#[test]
fn test_even_parity_without_room_for_overall_bit() {
    // Four bits before the last position is not a codeword length
    let report = checked(&[false; 5], Parity::Even);
    assert_eq!(report.overall(), OverallParity::NotApplicable);
    assert_eq!(report.overall().to_string(), "N/A");
    assert_eq!(
        report.classification().to_string(),
        "No error (or undetectable even-bit error)."
    );
}

#[test]
fn test_syndrome_outside_codeword_is_not_applied() {
    let received = parse_bits("00110").unwrap();
    let report = checked(&received, Parity::Even);
    assert_eq!(report.syndrome(), 7);
    assert_eq!(report.classification(), Classification::SingleBitCorrected);
    assert_eq!(report.corrected(), &received[..]);
}
