use crate::*;

#[test]
fn iterate_uplink_fopts() {
    // LinkCheckReq, LinkADRAns (status 0x07), DevStatusAns (battery 255, margin 10).
    let packet = hex::decode("400102030406010002030706ff0aaabbccdd").unwrap();

    let data = DataPacket::new(&packet[..]).unwrap();
    let fhdr = data.fhdr();
    assert_eq!(fhdr.fctrl().fopts_len(), 6);

    let commands: std::vec::Vec<_> = fhdr.mac_commands(data.direction()).collect();
    assert_eq!(commands.len(), 3);

    assert_eq!(commands[0].cid(), Cid::LinkCheck);
    assert_eq!(commands[0].name(), "LinkCheckReq");
    assert!(commands[0].payload().is_empty());

    assert_eq!(commands[1].cid(), Cid::LinkAdr);
    assert_eq!(commands[1].name(), "LinkADRAns");
    assert_eq!(commands[1].payload(), &[0x07]);

    assert_eq!(commands[2].cid(), Cid::DevStatus);
    assert_eq!(commands[2].name(), "DevStatusAns");
    assert_eq!(commands[2].payload(), &[0xff, 0x0a]);

    assert_eq!(data.fport(), None);
}

#[test]
fn iterate_downlink_fopts() {
    let fopts = [0x02, 0x14, 0x03, 0x06];
    let mut commands = MacCommandsIterator::new(&fopts, Direction::Downlink);

    let link_check = commands.next().unwrap();
    assert_eq!(link_check.name(), "LinkCheckAns");
    assert_eq!(link_check.payload(), &[0x14, 0x03]);

    let dev_status = commands.next().unwrap();
    assert_eq!(dev_status.name(), "DevStatusReq");
    assert!(dev_status.payload().is_empty());

    assert!(commands.next().is_none());
    assert!(commands.remaining().is_empty());
}

#[test]
fn stop_at_unknown_command() {
    let fopts = [0x02, 0x80, 0x01];
    let mut commands = MacCommandsIterator::new(&fopts, Direction::Uplink);

    assert_eq!(commands.next().unwrap().cid(), Cid::LinkCheck);
    assert!(commands.next().is_none());
    assert_eq!(commands.remaining(), &[0x80, 0x01]);
}

#[test]
fn stop_at_truncated_command() {
    // LinkADRReq needs 4 octets of payload.
    let fopts = [0x03, 0x50, 0xff];
    let mut commands = MacCommandsIterator::new(&fopts, Direction::Downlink);

    assert!(commands.next().is_none());
    assert_eq!(commands.offset(), 0);
}

#[test]
fn request_direction() {
    assert!(Cid::LinkCheck.is_request(Direction::Uplink));
    assert!(Cid::DeviceTime.is_request(Direction::Uplink));
    assert!(Cid::LinkAdr.is_request(Direction::Downlink));
    assert!(!Cid::LinkAdr.is_request(Direction::Uplink));
    assert_eq!(Cid::NewChannel.payload_len(Direction::Downlink), Some(5));
    assert_eq!(Cid::Unknown.payload_len(Direction::Uplink), None);
}
