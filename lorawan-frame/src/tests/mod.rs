use super::*;

mod parsing;

#[test]
fn mhdr_fields() {
    let mhdr = Mhdr::from(0x80);
    assert_eq!(mhdr.mtype(), MType::ConfirmedDataUp);
    assert_eq!(mhdr.major(), Major::LoRaWanR1);
    assert_eq!(mhdr.rfu(), 0);
    assert_eq!(mhdr.direction(), Some(Direction::Uplink));

    let mhdr = Mhdr::from(0xe1);
    assert_eq!(mhdr.mtype(), MType::Proprietary);
    assert_eq!(mhdr.major(), Major::Unknown);
    assert_eq!(mhdr.direction(), None);
}

#[test]
fn identifiers_display_msb_first() {
    let dev_addr = DevAddr::from_wire([0x01, 0x02, 0x03, 0x26]);
    assert_eq!(format!("{dev_addr}"), "26030201");
    assert_eq!(dev_addr.nwk_id(), 0x13);

    let eui = Eui64::from_wire([0x08, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01]);
    assert_eq!(format!("{eui}"), "0102030405060708");

    let net_id = NetId::from_wire([0x13, 0x00, 0x00]);
    assert_eq!(format!("{net_id}"), "000013");
}

#[test]
fn fctrl_flags() {
    let fctrl = FCtrl::from_bits_retain(0xa3);
    assert!(fctrl.contains(FCtrl::ADR));
    assert!(!fctrl.contains(FCtrl::ADR_ACK_REQ));
    assert!(fctrl.contains(FCtrl::ACK));
    assert!(!fctrl.contains(FCtrl::F_PENDING));
    assert_eq!(fctrl.fopts_len(), 3);
}

#[test]
fn reject_short_packets() {
    assert!(Packet::new(&[0u8; 0][..]).is_err());
    assert!(Packet::new(&[0x40u8, 0x00, 0x00, 0x00][..]).is_err());
}

#[test]
fn reject_unknown_major() {
    let packet = hex::decode("41010203040001000102030405060708090a").unwrap();
    assert!(Packet::new(&packet[..]).is_err());
}

#[test]
fn error_display() {
    assert_eq!(format!("{}", Error), "malformed LoRaWAN packet");
}
