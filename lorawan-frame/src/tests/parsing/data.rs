use crate::*;

#[test]
fn parse_unconfirmed_data_up() {
    let packet: [u8; 18] = [
        0x40, 0x01, 0x02, 0x03, 0x04, 0x00, 0x01, 0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06,
        0x07, 0x08, 0x09, 0x0a,
    ];

    let packet = Packet::new(&packet[..]).unwrap();
    assert_eq!(packet.mhdr().mtype(), MType::UnconfirmedDataUp);
    assert_eq!(packet.mic(), [0x07, 0x08, 0x09, 0x0a]);
    assert_eq!(packet.mac_payload().len(), 13);

    let Packet::Data(data) = packet else {
        panic!("not a data packet");
    };

    assert_eq!(data.direction(), Direction::Uplink);
    assert!(!data.is_confirmed());

    let fhdr = data.fhdr();
    assert_eq!(fhdr.dev_addr(), DevAddr::from_wire([0x01, 0x02, 0x03, 0x04]));
    assert_eq!(fhdr.dev_addr().as_u32(), 0x04030201);
    assert_eq!(fhdr.fctrl(), FCtrl::empty());
    assert_eq!(fhdr.fcnt(), 1);
    assert!(fhdr.fopts().is_empty());
    assert_eq!(fhdr.len(), 7);

    assert_eq!(data.fport(), Some(1));
    assert_eq!(data.frm_payload(), Some(&[0x02, 0x03, 0x04, 0x05, 0x06][..]));
}

#[test]
fn parse_confirmed_data_down_with_fopts() {
    // ACK set, FOptsLen 3: LinkCheckAns (margin 10, 2 gateways).
    let packet = hex::decode("a0785634122302000205020a0b0c0d0e0f").unwrap();

    let data = DataPacket::new(&packet[..]).unwrap();
    assert_eq!(data.direction(), Direction::Downlink);
    assert!(data.is_confirmed());

    let fhdr = data.fhdr();
    assert_eq!(fhdr.dev_addr().as_u32(), 0x12345678);
    assert!(fhdr.fctrl().contains(FCtrl::ACK));
    assert_eq!(fhdr.fctrl().fopts_len(), 3);
    assert_eq!(fhdr.fcnt(), 2);
    assert_eq!(fhdr.fopts(), &[0x02, 0x05, 0x02]);

    assert_eq!(data.fport(), Some(0x0a));
    assert_eq!(data.frm_payload(), Some(&[0x0b][..]));
    assert_eq!(data.mic(), [0x0c, 0x0d, 0x0e, 0x0f]);
}

#[test]
fn parse_data_without_fport() {
    let packet = hex::decode("8001020304800a00aabbccdd").unwrap();

    let data = DataPacket::new(&packet[..]).unwrap();
    assert!(data.fhdr().fctrl().contains(FCtrl::ADR));
    assert_eq!(data.fhdr().fcnt(), 10);
    assert_eq!(data.fport(), None);
    assert_eq!(data.frm_payload(), None);
    assert_eq!(data.mic(), [0xaa, 0xbb, 0xcc, 0xdd]);
}

#[test]
fn parse_data_with_empty_frm_payload() {
    let packet = hex::decode("400102030400010001aabbccdd").unwrap();

    let data = DataPacket::new(&packet[..]).unwrap();
    assert_eq!(data.fport(), Some(1));
    assert_eq!(data.frm_payload(), Some(&[][..]));
}

#[test]
fn reject_fopts_overrun() {
    // FOptsLen 15, but only 2 octets follow the FHDR.
    let packet = hex::decode("40010203040f01000102aabbccdd").unwrap();
    assert!(DataPacket::new(&packet[..]).is_err());
    assert!(Packet::new(&packet[..]).is_err());
}

#[test]
fn reject_truncated_data() {
    let packet = hex::decode("4001020304000100aabbcc").unwrap();
    assert!(DataPacket::new(&packet[..]).is_err());
}

#[test]
fn reject_non_data_mtype() {
    let packet = hex::decode("00010203040001000102030405060708090a").unwrap();
    assert!(DataPacket::new(&packet[..]).is_err());
}
