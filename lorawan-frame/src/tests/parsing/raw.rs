use crate::*;

#[test]
fn parse_proprietary() {
    let packet = hex::decode("e0cafeaabbccdd").unwrap();

    let Packet::Proprietary(p) = Packet::new(&packet[..]).unwrap() else {
        panic!("not a proprietary message");
    };

    assert_eq!(p.mhdr().direction(), None);
    assert_eq!(p.payload(), &[0xca, 0xfe]);
    assert_eq!(p.mic(), [0xaa, 0xbb, 0xcc, 0xdd]);
}

#[test]
fn parse_rejoin_request() {
    let packet = hex::decode("c000aabbccdd").unwrap();

    let packet = Packet::new(&packet[..]).unwrap();
    assert!(matches!(packet, Packet::RejoinRequest(_)));
    assert_eq!(packet.mac_payload(), &[0x00]);
}

#[test]
fn parse_empty_proprietary() {
    let packet = hex::decode("e0aabbccdd").unwrap();

    let packet = Packet::new(&packet[..]).unwrap();
    assert!(packet.mac_payload().is_empty());
}
