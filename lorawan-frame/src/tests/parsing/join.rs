use crate::*;

#[test]
fn parse_join_request() {
    let packet = hex::decode("00080706050403020111223344556677883412aabbccdd").unwrap();

    let packet = Packet::new(&packet[..]).unwrap();
    assert_eq!(packet.mhdr().mtype(), MType::JoinRequest);
    assert_eq!(packet.mhdr().direction(), Some(Direction::Uplink));

    let Packet::JoinRequest(jr) = packet else {
        panic!("not a join request");
    };

    assert_eq!(format!("{}", jr.app_eui()), "0102030405060708");
    assert_eq!(format!("{}", jr.dev_eui()), "8877665544332211");
    assert_eq!(jr.dev_nonce(), 0x1234);
    assert_eq!(jr.mic(), [0xaa, 0xbb, 0xcc, 0xdd]);
}

#[test]
fn reject_join_request_with_wrong_length() {
    let packet = hex::decode("0008070605040302011122334455667788aabbccdd").unwrap();
    assert!(JoinRequest::new(&packet[..]).is_err());
    assert!(Packet::new(&packet[..]).is_err());
}

#[test]
fn parse_join_accept() {
    let packet = hex::decode("20010203130000040302012300aabbccdd").unwrap();

    let Packet::JoinAccept(ja) = Packet::new(&packet[..]).unwrap() else {
        panic!("not a join accept");
    };

    assert_eq!(ja.mhdr().direction(), Some(Direction::Downlink));
    assert_eq!(ja.app_nonce(), 0x030201);
    assert_eq!(format!("{}", ja.net_id()), "000013");
    assert_eq!(format!("{}", ja.dev_addr()), "01020304");
    assert_eq!(ja.dl_settings().rx1_dr_offset(), 2);
    assert_eq!(ja.dl_settings().rx2_data_rate(), 3);
    assert_eq!(ja.rx_delay(), 1);
    assert_eq!(ja.cf_list(), None);
    assert_eq!(ja.mic(), [0xaa, 0xbb, 0xcc, 0xdd]);
}

#[test]
fn parse_join_accept_with_cf_list() {
    let packet = hex::decode(
        "20010203130000040302010005\
         184f84e85684b85e84886684586e8400\
         aabbccdd",
    )
    .unwrap();

    let ja = JoinAccept::new(&packet[..]).unwrap();
    assert_eq!(ja.rx_delay(), 5);
    assert_eq!(
        ja.cf_list(),
        Some(
            &[
                0x18, 0x4f, 0x84, 0xe8, 0x56, 0x84, 0xb8, 0x5e, 0x84, 0x88, 0x66, 0x84, 0x58, 0x6e,
                0x84, 0x00
            ][..]
        )
    );
}

#[test]
fn reject_join_accept_with_wrong_length() {
    let packet = hex::decode("200102031300000403020123aabbccdd").unwrap();
    assert!(JoinAccept::new(&packet[..]).is_err());
}
