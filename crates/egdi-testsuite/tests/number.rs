use egdi_pdu::color::ColorRef;
use egdi_pdu::number::{EncodedU16, EncodedU32};
use egdi_pdu::DecodeError;
use rstest::rstest;

#[rstest]
#[case(0x0000, &[0x00])]
#[case(0x007F, &[0x7F])]
#[case(0x0080, &[0x80, 0x80])]
#[case(0x1234, &[0x92, 0x34])]
#[case(0x7FFF, &[0xFF, 0xFF])]
fn encoded_u16_roundtrip(#[case] value: u16, #[case] expected: &'static [u8]) {
    let mut encoded = [0u8; 2];
    let encoded_size = egdi_pdu::encode(&EncodedU16::new(value).unwrap(), &mut encoded).unwrap();

    assert_eq!(encoded_size, expected.len());
    assert_eq!(&encoded[..encoded_size], expected);

    let decoded = egdi_pdu::decode::<EncodedU16>(expected).unwrap();
    assert_eq!(decoded.value(), value);
}

#[rstest]
#[case(0x0000_0000, &[0x00])]
#[case(0x0000_003F, &[0x3F])]
#[case(0x0000_0040, &[0x40, 0x40])]
#[case(0x0000_3FFF, &[0x7F, 0xFF])]
#[case(0x0000_4000, &[0x80, 0x40, 0x00])]
#[case(0x0001_4000, &[0x81, 0x40, 0x00])]
#[case(0x003F_FFFF, &[0xBF, 0xFF, 0xFF])]
#[case(0x0040_0000, &[0xC0, 0x40, 0x00, 0x00])]
#[case(0x3FFF_FFFF, &[0xFF, 0xFF, 0xFF, 0xFF])]
fn encoded_u32_roundtrip(#[case] value: u32, #[case] expected: &'static [u8]) {
    let mut encoded = [0u8; 4];
    let encoded_size = egdi_pdu::encode(&EncodedU32::new(value).unwrap(), &mut encoded).unwrap();

    assert_eq!(encoded_size, expected.len());
    assert_eq!(&encoded[..encoded_size], expected);

    let decoded = egdi_pdu::decode::<EncodedU32>(expected).unwrap();
    assert_eq!(decoded.value(), value);
}

#[test]
fn encoded_u16_rejects_out_of_range_values() {
    assert!(EncodedU16::new(0x8000).is_err());
}

#[test]
fn encoded_u32_rejects_out_of_range_values() {
    assert!(EncodedU32::new(0x4000_0000).is_err());
}

#[test]
fn encoded_u16_with_missing_second_byte_is_truncated() {
    let err = egdi_pdu::decode::<EncodedU16>(&[0x80]).unwrap_err();
    assert!(matches!(err, DecodeError::Truncated { .. }));
}

#[test]
fn color_ref_ignores_the_top_byte() {
    let color = egdi_pdu::decode::<ColorRef>(&[0x44, 0x33, 0x22, 0xFF]).unwrap();
    assert_eq!(color.value(), 0x0022_3344);
}
